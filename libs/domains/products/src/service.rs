//! Product Service - catalog queries and image updates

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{DistinctField, ImageUpdateResult, Product};
use crate::query::{PageRequest, ProductQuery, SortSpec};
use crate::repository::ProductRepository;

/// Whether `/brands` and `/categories` report products lacking the field as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistinctPolicy {
    #[default]
    ExcludeMissing,
    IncludeMissing,
}

impl DistinctPolicy {
    pub fn from_include_missing(include: bool) -> Self {
        if include {
            Self::IncludeMissing
        } else {
            Self::ExcludeMissing
        }
    }
}

pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    distinct_policy: DistinctPolicy,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            distinct_policy: DistinctPolicy::default(),
        }
    }

    pub fn with_distinct_policy(mut self, policy: DistinctPolicy) -> Self {
        self.distinct_policy = policy;
        self
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_page(
        &self,
        query: &ProductQuery,
        sort: &SortSpec,
        page: PageRequest,
    ) -> ProductResult<Vec<Product>> {
        self.repository.list(query, sort, page).await
    }

    #[instrument(skip(self))]
    pub async fn count(&self, query: &ProductQuery) -> ProductResult<u64> {
        self.repository.count(query).await
    }

    pub async fn brands(&self) -> ProductResult<Vec<Option<String>>> {
        self.distinct_values(DistinctField::Brand).await
    }

    pub async fn categories(&self) -> ProductResult<Vec<Option<String>>> {
        self.distinct_values(DistinctField::Category).await
    }

    #[instrument(skip(self))]
    async fn distinct_values(&self, field: DistinctField) -> ProductResult<Vec<Option<String>>> {
        let values = self.repository.distinct(field).await?;

        Ok(match self.distinct_policy {
            DistinctPolicy::IncludeMissing => values,
            DistinctPolicy::ExcludeMissing => values.into_iter().filter(Option::is_some).collect(),
        })
    }

    #[instrument(skip(self, image))]
    pub async fn update_image(
        &self,
        id: ObjectId,
        image: String,
    ) -> ProductResult<ImageUpdateResult> {
        self.repository.upsert_image(id, image).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::repository::MockProductRepository;
    use mockall::predicate::*;

    fn mixed_brands() -> Vec<Option<String>> {
        vec![Some("Sony".into()), None, Some("LG".into())]
    }

    #[tokio::test]
    async fn test_brands_exclude_missing_by_default() {
        let mut mock = MockProductRepository::new();
        mock.expect_distinct()
            .with(eq(DistinctField::Brand))
            .times(1)
            .returning(|_| Ok(mixed_brands()));

        let service = ProductService::new(mock);
        let brands = service.brands().await.unwrap();

        assert_eq!(brands, vec![Some("Sony".into()), Some("LG".into())]);
    }

    #[tokio::test]
    async fn test_categories_include_missing_when_configured() {
        let mut mock = MockProductRepository::new();
        mock.expect_distinct()
            .with(eq(DistinctField::Category))
            .times(1)
            .returning(|_| Ok(mixed_brands()));

        let service = ProductService::new(mock).with_distinct_policy(DistinctPolicy::IncludeMissing);
        let categories = service.categories().await.unwrap();

        assert_eq!(categories.len(), 3);
        assert!(categories.contains(&None));
    }

    #[tokio::test]
    async fn test_count_propagates_store_failure() {
        let mut mock = MockProductRepository::new();
        mock.expect_count()
            .returning(|_| Err(ProductError::Database("connection reset".into())));

        let service = ProductService::new(mock);
        let err = service.count(&ProductQuery::new()).await.unwrap_err();

        assert!(matches!(err, ProductError::Database(_)));
    }

    #[tokio::test]
    async fn test_get_product_absent_is_none() {
        let id = ObjectId::new();
        let mut mock = MockProductRepository::new();
        mock.expect_get_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(mock);
        assert!(service.get_product(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_page_passes_request_through() {
        let mut mock = MockProductRepository::new();
        mock.expect_list()
            .withf(|query, sort, page| {
                query.clauses().len() == 1 && sort.field == "Price" && page.skip() == 18
            })
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let service = ProductService::new(mock);
        let query = ProductQuery::new().brand("Sony");
        let page = PageRequest { page: 2, size: 9 };

        let products = service
            .list_page(&query, &SortSpec::default(), page)
            .await
            .unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_distinct_policy_from_flag() {
        assert_eq!(
            DistinctPolicy::from_include_missing(true),
            DistinctPolicy::IncludeMissing
        );
        assert_eq!(
            DistinctPolicy::from_include_missing(false),
            DistinctPolicy::ExcludeMissing
        );
    }
}
