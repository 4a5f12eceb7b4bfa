//! Product domain entity
//!
//! A catalog product with its price and the categories it belongs to.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryRef};

/// Unique identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted product with its categories loaded
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub img_url: Option<String>,
    pub date: DateTime<Utc>,
    pub categories: Vec<Category>,
}

/// A product as it is about to be written.
///
/// Saving a draft without an id inserts a new row; saving one with an id
/// replaces every column and the category set of that row.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub img_url: Option<String>,
    pub date: DateTime<Utc>,
    pub categories: Vec<CategoryRef>,
}

/// Handle to a product whose existence has been checked but whose
/// columns were not loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductRef(ProductId);

impl ProductRef {
    pub fn new(id: ProductId) -> Self {
        Self(id)
    }

    pub fn id(&self) -> ProductId {
        self.0
    }
}
