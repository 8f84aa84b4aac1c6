//! Typed query IR for product listing and counting.
//!
//! Request parameters are folded into a [`ProductQuery`]: a conjunction of
//! [`Clause`]s that each repository translates into its own form.

use serde::Deserialize;
use strum::{Display, EnumString};
use utoipa::IntoParams;

use crate::models::{Product, fields};

/// Fields searched by the free-text term.
pub const TEXT_SEARCH_FIELDS: [&str; 3] =
    [fields::PRODUCT_NAME, fields::BRAND_NAME, fields::CATEGORY];

pub const DEFAULT_PAGE_SIZE: u64 = 9;

#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Exact, case-sensitive equality
    Equals { field: &'static str, value: String },
    /// Case-insensitive literal substring in at least one of `fields`
    ContainsAnyIgnoreCase {
        fields: Vec<&'static str>,
        term: String,
    },
    /// Inclusive numeric bounds; at least one is set
    Range {
        field: &'static str,
        min: Option<f64>,
        max: Option<f64>,
    },
}

impl Clause {
    /// Clauses sharing a key replace each other in [`ProductQuery`].
    fn key(&self) -> &'static str {
        match self {
            Clause::Equals { field, .. } | Clause::Range { field, .. } => *field,
            Clause::ContainsAnyIgnoreCase { .. } => "$or",
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Clause::Equals { field, value } => product.text_field(field) == Some(value.as_str()),
            Clause::ContainsAnyIgnoreCase { fields, term } => {
                let needle = term.to_lowercase();
                fields.iter().any(|field| {
                    product
                        .text_field(field)
                        .is_some_and(|v| v.to_lowercase().contains(&needle))
                })
            }
            Clause::Range { field, min, max } => match product.number_field(field) {
                Some(value) => {
                    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
                }
                None => false,
            },
        }
    }
}

/// Conjunction of clauses; empty matches every product.
///
/// ```ignore
/// let query = ProductQuery::new()
///     .text_search("radio")
///     .brand("Sony")
///     .price_range(Some(10.0), Some(50.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    clauses: Vec<Clause>,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.clauses.iter().all(|clause| clause.matches(product))
    }

    fn with(mut self, clause: Clause) -> Self {
        self.clauses.retain(|c| c.key() != clause.key());
        self.clauses.push(clause);
        self
    }

    /// Substring search over name, brand and category. Empty terms are ignored.
    pub fn text_search(self, term: impl Into<String>) -> Self {
        let term = term.into();
        if term.is_empty() {
            return self;
        }
        self.with(Clause::ContainsAnyIgnoreCase {
            fields: TEXT_SEARCH_FIELDS.to_vec(),
            term,
        })
    }

    pub fn brand(self, brand: impl Into<String>) -> Self {
        self.equals(fields::BRAND_NAME, brand.into())
    }

    pub fn category(self, category: impl Into<String>) -> Self {
        self.equals(fields::CATEGORY, category.into())
    }

    fn equals(self, field: &'static str, value: String) -> Self {
        if value.is_empty() {
            return self;
        }
        self.with(Clause::Equals { field, value })
    }

    /// Inclusive price bounds. No clause is added when both are `None`.
    pub fn price_range(self, min: Option<f64>, max: Option<f64>) -> Self {
        if min.is_none() && max.is_none() {
            return self;
        }
        self.with(Clause::Range {
            field: fields::PRICE,
            min,
            max,
        })
    }
}

/// Parse a price bound; anything that is not a finite number counts as absent.
///
/// The whole value must parse: `10abc` is absent, not 10.
pub fn parse_price(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Filter parameters shared by `/productsCount` and `/productsLimit`.
///
/// Values stay raw strings so malformed numbers never reject the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductFilterParams {
    /// Case-insensitive substring of ProductName, BrandName or Category
    pub filter_text: Option<String>,
    /// Exact BrandName
    pub brand: Option<String>,
    /// Exact Category
    pub category: Option<String>,
    /// Inclusive lower Price bound; ignored unless numeric
    pub min_price: Option<String>,
    /// Inclusive upper Price bound; ignored unless numeric
    pub max_price: Option<String>,
}

impl ProductFilterParams {
    pub fn to_query(&self) -> ProductQuery {
        let mut query = ProductQuery::new();

        if let Some(ref term) = self.filter_text {
            query = query.text_search(term.as_str());
        }
        if let Some(ref brand) = self.brand {
            query = query.brand(brand.as_str());
        }
        if let Some(ref category) = self.category {
            query = query.category(category.as_str());
        }

        query.price_range(
            parse_price(self.min_price.as_deref()),
            parse_price(self.max_price.as_deref()),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
pub enum SortOrder {
    #[default]
    #[strum(serialize = "asc")]
    Asc,
    #[strum(serialize = "desc")]
    Desc,
}

impl SortOrder {
    /// `desc` on exact match, ascending for anything else.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    pub fn direction(&self) -> i32 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

impl SortSpec {
    /// Empty or operator-like (`$`-prefixed) field names fall back to `Price`.
    pub fn new(field: Option<&str>, order: SortOrder) -> Self {
        let field = match field.map(str::trim) {
            Some(f) if !f.is_empty() && !f.starts_with('$') => f.to_string(),
            _ => fields::PRICE.to_string(),
        };
        Self { field, order }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(None, SortOrder::Asc)
    }
}

/// Zero-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageRequest {
    /// Unparseable values use the defaults (page 0, size 9); size 0 also means 9.
    pub fn parse_lenient(page: Option<&str>, size: Option<&str>) -> Self {
        let page = page.and_then(|p| p.trim().parse().ok()).unwrap_or(0);
        let size = size
            .and_then(|s| s.trim().parse().ok())
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { page, size }
    }

    pub fn skip(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paging and sort parameters of `/productsLimit`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index (default 0)
    pub page: Option<String>,
    /// Page size (default 9)
    pub size: Option<String>,
    /// Field to sort by (default Price)
    pub sort_by: Option<String>,
    /// `desc` for descending; anything else sorts ascending
    pub sort_order: Option<String>,
}

impl PageParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::parse_lenient(self.page.as_deref(), self.size.as_deref())
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(
            self.sort_by.as_deref(),
            SortOrder::parse_lenient(self.sort_order.as_deref()),
        )
    }
}
