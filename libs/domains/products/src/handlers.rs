//! HTTP handlers for the product catalog

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, put},
};
use axum_helpers::{
    AppError, LenientQuery, ObjectIdPath,
    errors::responses::{BadRequestObjectIdResponse, BadRequestResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{ImageUpdateResult, NewPicture, Product, ProductCount};
use crate::query::{PageParams, ProductFilterParams};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the catalog endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        count_products,
        list_products_page,
        get_product,
        update_picture,
        list_brands,
        list_categories,
    ),
    components(
        schemas(Product, ProductCount, NewPicture, ImageUpdateResult),
        responses(BadRequestResponse, BadRequestObjectIdResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Catalog listing, search and filtering")
    )
)]
pub struct ApiDoc;

pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products))
        .route("/productsCount", get(count_products))
        .route("/productsLimit", get(list_products_page))
        .route("/product/{productId}", get(get_product))
        .route("/newPicture/{id}", put(update_picture))
        .route("/brands", get(list_brands))
        .route("/categories", get(list_categories))
        .with_state(shared_service)
}

/// List every product
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    Ok(Json(service.list_all().await?))
}

/// Count products matching the filters
#[utoipa::path(
    get,
    path = "/productsCount",
    tag = "Products",
    params(ProductFilterParams),
    responses(
        (status = 200, description = "Number of matching products", body = ProductCount),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn count_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    LenientQuery(filter): LenientQuery<ProductFilterParams>,
) -> ProductResult<Json<ProductCount>> {
    let count = service.count(&filter.to_query()).await?;
    Ok(Json(ProductCount { count }))
}

/// One page of matching products
#[utoipa::path(
    get,
    path = "/productsLimit",
    tag = "Products",
    params(PageParams, ProductFilterParams),
    responses(
        (status = 200, description = "Requested page, empty past the end", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products_page<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    LenientQuery(paging): LenientQuery<PageParams>,
    LenientQuery(filter): LenientQuery<ProductFilterParams>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service
        .list_page(&filter.to_query(), &paging.sort_spec(), paging.page_request())
        .await?;
    Ok(Json(products))
}

/// Fetch one product; `null` when it does not exist
#[utoipa::path(
    get,
    path = "/product/{productId}",
    tag = "Products",
    params(("productId" = String, Path, description = "Product ObjectId (24 hex characters)")),
    responses(
        (status = 200, description = "The product, or null", body = Product),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> ProductResult<Json<Option<Product>>> {
    Ok(Json(service.get_product(id).await?))
}

/// Set a product's image, creating the document if needed
#[utoipa::path(
    put,
    path = "/newPicture/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ObjectId (24 hex characters)")),
    request_body = NewPicture,
    responses(
        (status = 200, description = "Update outcome", body = ImageUpdateResult),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_picture<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    body: Result<Json<NewPicture>, JsonRejection>,
) -> Result<Json<ImageUpdateResult>, AppError> {
    let Json(body) = body?;
    let result = service.update_image(id, body.new_picture).await?;
    Ok(Json(result))
}

/// Distinct brand names
#[utoipa::path(
    get,
    path = "/brands",
    tag = "Products",
    responses(
        (status = 200, description = "Unique BrandName values", body = Vec<String>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_brands<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Option<String>>>> {
    Ok(Json(service.brands().await?))
}

/// Distinct categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Products",
    responses(
        (status = 200, description = "Unique Category values", body = Vec<String>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Option<String>>>> {
    Ok(Json(service.categories().await?))
}
