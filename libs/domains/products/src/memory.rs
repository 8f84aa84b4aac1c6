//! In-memory ProductRepository for development and tests.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{DistinctField, ImageUpdateResult, Product};
use crate::query::{PageRequest, ProductQuery, SortOrder, SortSpec};
use crate::repository::ProductRepository;

#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ObjectId, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products.into_iter().map(|p| (p.id, p)).collect();
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    pub async fn insert(&self, product: Product) {
        self.products.write().await.insert(product.id, product);
    }
}

/// Missing values sort first, as in MongoDB.
fn compare_field(a: &Product, b: &Product, field: &str) -> Ordering {
    if let (None, None) = (a.number_field(field), b.number_field(field)) {
        return a.text_field(field).cmp(&b.text_field(field));
    }
    a.number_field(field)
        .partial_cmp(&b.number_field(field))
        .unwrap_or(Ordering::Equal)
}

fn sort_products(products: &mut [Product], sort: &SortSpec) {
    products.sort_by(|a, b| {
        let by_field = match sort.field.as_str() {
            "_id" => a.id.cmp(&b.id),
            field => compare_field(a, b, field),
        };
        let by_field = match sort.order {
            SortOrder::Asc => by_field,
            SortOrder::Desc => by_field.reverse(),
        };
        by_field.then_with(|| a.id.cmp(&b.id))
    });
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by_key(|p| p.id);
        Ok(all)
    }

    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list(
        &self,
        query: &ProductQuery,
        sort: &SortSpec,
        page: PageRequest,
    ) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut matching: Vec<Product> = products
            .values()
            .filter(|p| query.matches(p))
            .cloned()
            .collect();
        sort_products(&mut matching, sort);

        let skip = usize::try_from(page.skip()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.size).unwrap_or(usize::MAX);
        Ok(matching.into_iter().skip(skip).take(take).collect())
    }

    async fn count(&self, query: &ProductQuery) -> ProductResult<u64> {
        let products = self.products.read().await;
        Ok(products.values().filter(|p| query.matches(p)).count() as u64)
    }

    async fn distinct(&self, field: DistinctField) -> ProductResult<Vec<Option<String>>> {
        let products = self.products.read().await;

        let mut values: Vec<Option<String>> = products
            .values()
            .map(|p| p.text_field(field.as_field()).map(str::to_string))
            .collect();
        values.sort();
        values.dedup();

        Ok(values)
    }

    async fn upsert_image(&self, id: ObjectId, image: String) -> ProductResult<ImageUpdateResult> {
        let mut products = self.products.write().await;

        let result = match products.get_mut(&id) {
            Some(product) => {
                let modified = product.product_image.as_deref() != Some(image.as_str());
                product.product_image = Some(image);
                ImageUpdateResult {
                    acknowledged: true,
                    matched_count: 1,
                    modified_count: u64::from(modified),
                    upserted_count: 0,
                    upserted_id: None,
                }
            }
            None => {
                products.insert(
                    id,
                    Product {
                        product_image: Some(image),
                        ..Product::with_id(id)
                    },
                );
                ImageUpdateResult {
                    acknowledged: true,
                    matched_count: 0,
                    modified_count: 0,
                    upserted_count: 1,
                    upserted_id: Some(id.to_hex()),
                }
            }
        };

        tracing::info!(product_id = %id, upserted = result.upserted_count, "Product image updated");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(price: Option<f64>) -> Product {
        Product {
            price,
            ..Product::with_id(ObjectId::new())
        }
    }

    #[tokio::test]
    async fn test_list_sorts_missing_first_and_breaks_ties_by_id() {
        let a = priced(Some(5.0));
        let b = priced(Some(5.0));
        let c = priced(None);
        let repo = InMemoryProductRepository::with_products([a.clone(), b.clone(), c.clone()]);

        let page = repo
            .list(&ProductQuery::new(), &SortSpec::default(), PageRequest::default())
            .await
            .unwrap();

        let ids: Vec<ObjectId> = page.iter().map(|p| p.id).collect();
        let (first, second) = if a.id < b.id { (a.id, b.id) } else { (b.id, a.id) };
        assert_eq!(ids, vec![c.id, first, second]);
    }

    #[tokio::test]
    async fn test_upsert_image_updates_existing() {
        let product = priced(Some(1.0));
        let repo = InMemoryProductRepository::with_products([product.clone()]);

        let result = repo
            .upsert_image(product.id, "https://img/1.png".into())
            .await
            .unwrap();
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.modified_count, 1);

        let again = repo
            .upsert_image(product.id, "https://img/1.png".into())
            .await
            .unwrap();
        assert_eq!(again.modified_count, 0);
    }

    #[tokio::test]
    async fn test_upsert_image_creates_missing() {
        let repo = InMemoryProductRepository::new();
        let id = ObjectId::new();

        let result = repo.upsert_image(id, "https://img/2.png".into()).await.unwrap();
        assert_eq!(result.upserted_count, 1);
        assert_eq!(result.upserted_id, Some(id.to_hex()));

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.product_image.as_deref(), Some("https://img/2.png"));
        assert!(stored.price.is_none());
    }

    #[tokio::test]
    async fn test_distinct_keeps_missing_as_none() {
        let mut sony = priced(None);
        sony.brand_name = Some("Sony".into());
        let mut sony2 = priced(None);
        sony2.brand_name = Some("Sony".into());
        let unbranded = priced(None);

        let repo = InMemoryProductRepository::with_products([sony, sony2, unbranded]);
        let brands = repo.distinct(DistinctField::Brand).await.unwrap();

        assert_eq!(brands, vec![None, Some("Sony".to_string())]);
    }
}
