//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, Document, doc, oid::ObjectId},
    options::{FindOptions, IndexOptions, UpdateOptions},
};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{DistinctField, ImageUpdateResult, Product, fields};
use crate::query::{Clause, PageRequest, ProductQuery, SortSpec};
use crate::repository::ProductRepository;

pub const COLLECTION: &str = "products";

pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Indexes backing the brand/category filters and price sort.
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = [
            (fields::BRAND_NAME, "idx_brand"),
            (fields::CATEGORY, "idx_category"),
            (fields::PRICE, "idx_price"),
        ]
        .into_iter()
        .map(|(field, name)| {
            let mut keys = Document::new();
            keys.insert(field, 1);
            IndexModel::builder()
                .keys(keys)
                .options(IndexOptions::builder().name(name.to_string()).build())
                .build()
        });

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Translate the query IR into a filter document.
    pub(crate) fn build_filter(query: &ProductQuery) -> Document {
        let mut filter = doc! {};

        for clause in query.clauses() {
            match clause {
                Clause::Equals { field, value } => {
                    filter.insert(*field, value.as_str());
                }
                Clause::ContainsAnyIgnoreCase { fields, term } => {
                    let pattern = regex::escape(term);
                    let branches: Vec<Document> = fields
                        .iter()
                        .map(|field| {
                            let mut branch = Document::new();
                            branch.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
                            branch
                        })
                        .collect();
                    filter.insert("$or", branches);
                }
                Clause::Range { field, min, max } => {
                    let mut bounds = doc! {};
                    if let Some(min) = min {
                        bounds.insert("$gte", *min);
                    }
                    if let Some(max) = max {
                        bounds.insert("$lte", *max);
                    }
                    filter.insert(*field, bounds);
                }
            }
        }

        filter
    }

    /// Sort document with `_id` ascending as tie-break.
    pub(crate) fn build_sort(sort: &SortSpec) -> Document {
        let mut spec = Document::new();
        spec.insert(sort.field.as_str(), sort.order.direction());
        if sort.field != fields::ID {
            spec.insert(fields::ID, 1);
        }
        spec
    }

    /// Read one `$group` result. Outer `None` means the group is skipped.
    fn distinct_value(field: DistinctField, group: &Document) -> Option<Option<String>> {
        match group.get("_id") {
            Some(Bson::String(value)) => Some(Some(value.clone())),
            Some(Bson::Null) | None => Some(None),
            Some(other) => {
                tracing::warn!(
                    field = field.as_field(),
                    value = %other,
                    "Skipping non-string distinct value"
                );
                None
            }
        }
    }

    fn image_update_result(
        matched_count: u64,
        modified_count: u64,
        upserted_id: Option<Bson>,
    ) -> ImageUpdateResult {
        let upserted_id = upserted_id.map(|id| match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        });

        ImageUpdateResult {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id,
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        let products: Vec<Product> = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        query: &ProductQuery,
        sort: &SortSpec,
        page: PageRequest,
    ) -> ProductResult<Vec<Product>> {
        let options = FindOptions::builder()
            .sort(Self::build_sort(sort))
            .skip(page.skip().min(i64::MAX as u64))
            .limit(i64::try_from(page.size).unwrap_or(i64::MAX))
            .build();

        let cursor = self
            .collection
            .find(Self::build_filter(query))
            .with_options(options)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &ProductQuery) -> ProductResult<u64> {
        let count = self
            .collection
            .count_documents(Self::build_filter(query))
            .await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn distinct(&self, field: DistinctField) -> ProductResult<Vec<Option<String>>> {
        let pipeline = [doc! { "$group": { "_id": format!("${}", field.as_field()) } }];

        let groups: Vec<Document> = self.collection.aggregate(pipeline).await?.try_collect().await?;

        let values = groups
            .iter()
            .filter_map(|group| Self::distinct_value(field, group))
            .collect();

        Ok(values)
    }

    #[instrument(skip(self))]
    async fn upsert_image(&self, id: ObjectId, image: String) -> ProductResult<ImageUpdateResult> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "ProductImage": image } })
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await?;

        tracing::info!(
            product_id = %id,
            matched = result.matched_count,
            upserted = result.upserted_id.is_some(),
            "Product image updated"
        );
        Ok(Self::image_update_result(
            result.matched_count,
            result.modified_count,
            result.upserted_id,
        ))
    }
}
