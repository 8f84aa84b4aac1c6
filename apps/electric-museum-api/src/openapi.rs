//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Electric Museum API",
        version = "0.1.0",
        description = "Catalog and user registration backend for the Electric Museum storefront",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    )
)]
struct ApiInfo;

/// Combined OpenAPI documentation for all APIs.
///
/// Domain routes are mounted at the root, so their documents are merged
/// rather than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ApiInfo::openapi()
            .merge_from(domain_products::ApiDoc::openapi())
            .merge_from(domain_users::ApiDoc::openapi())
    }
}
