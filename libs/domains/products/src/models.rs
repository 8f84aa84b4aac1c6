use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored field names. The catalog uses PascalCase keys.
pub mod fields {
    pub const ID: &str = "_id";
    pub const PRODUCT_NAME: &str = "ProductName";
    pub const BRAND_NAME: &str = "BrandName";
    pub const CATEGORY: &str = "Category";
    pub const PRICE: &str = "Price";
    pub const PRODUCT_IMAGE: &str = "ProductImage";
}

/// Product document from the `products` collection.
///
/// Every attribute except `_id` may be missing in stored documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// ObjectId, rendered as a 24-character hex string
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String, example = "65a1b2c3d4e5f60718293a4b")]
    pub id: ObjectId,

    #[serde(
        rename = "ProductName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product_name: Option<String>,

    #[serde(rename = "BrandName", default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,

    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Integer-stored prices are read as doubles
    #[serde(rename = "Price", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(
        rename = "ProductImage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product_image: Option<String>,
}

impl Product {
    /// A product with only an id, as created by an image upsert on a missing document.
    pub fn with_id(id: ObjectId) -> Self {
        Self {
            id,
            product_name: None,
            brand_name: None,
            category: None,
            price: None,
            product_image: None,
        }
    }

    /// Text value of a stored field, used by in-memory evaluation.
    pub fn text_field(&self, field: &str) -> Option<&str> {
        match field {
            fields::PRODUCT_NAME => self.product_name.as_deref(),
            fields::BRAND_NAME => self.brand_name.as_deref(),
            fields::CATEGORY => self.category.as_deref(),
            fields::PRODUCT_IMAGE => self.product_image.as_deref(),
            _ => None,
        }
    }

    /// Numeric value of a stored field, used by in-memory evaluation.
    pub fn number_field(&self, field: &str) -> Option<f64> {
        match field {
            fields::PRICE => self.price,
            _ => None,
        }
    }
}

/// Body of `PUT /newPicture/{id}`
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPicture {
    /// Image URL to store in `ProductImage`
    #[schema(example = "https://i.ibb.co/product.png")]
    pub new_picture: String,
}

/// Outcome of an image upsert, mirroring the store's update result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    /// Hex id of the created document, `null` when an existing one was updated
    pub upserted_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductCount {
    pub count: u64,
}

/// Product attributes with a distinct-values endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistinctField {
    Brand,
    Category,
}

impl DistinctField {
    pub fn as_field(&self) -> &'static str {
        match self {
            DistinctField::Brand => fields::BRAND_NAME,
            DistinctField::Category => fields::CATEGORY,
        }
    }
}
