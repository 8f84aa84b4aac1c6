//! Query-string extractor that tolerates repeated keys.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Like [`Query`], but a repeated key keeps its first value instead of
/// rejecting the whole request.
///
/// Values reach `T` as JSON strings, so `T` should declare its fields as
/// `String` / `Option<String>` and parse them itself. Rejections render as
/// an [`AppError`] JSON body.
///
/// ```ignore
/// async fn count(LenientQuery(filter): LenientQuery<ProductFilterParams>) { .. }
///
/// // GET /productsCount?minPrice=2&minPrice=3  => minPrice = "2"
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)?;

        let mut fields = Map::new();
        for (key, value) in pairs {
            fields.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(fields))
            .map(LenientQuery)
            .map_err(|e| AppError::BadRequest(format!("Invalid query string: {}", e)))
    }
}
