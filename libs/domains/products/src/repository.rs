use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{DistinctField, ImageUpdateResult, Product};
use crate::query::{PageRequest, ProductQuery, SortSpec};

/// Data access for the `products` collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, in store order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>>;

    /// One page of matching products, sorted by `sort` then `_id`
    async fn list(
        &self,
        query: &ProductQuery,
        sort: &SortSpec,
        page: PageRequest,
    ) -> ProductResult<Vec<Product>>;

    /// Exact number of matching products
    async fn count(&self, query: &ProductQuery) -> ProductResult<u64>;

    /// Unique string values of `field`; `None` stands for null or missing.
    ///
    /// Values stored with another BSON type (e.g. a numeric `Category`) are
    /// skipped with a warning.
    async fn distinct(&self, field: DistinctField) -> ProductResult<Vec<Option<String>>>;

    /// Set `ProductImage`, creating the document if `id` does not exist
    async fn upsert_image(&self, id: ObjectId, image: String) -> ProductResult<ImageUpdateResult>;
}
