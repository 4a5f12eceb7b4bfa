//! Category domain entity
//!
//! Categories group products. A product references any number of
//! categories; a category never owns its products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub i64);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted category
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A category as it is about to be written.
///
/// `id: None` inserts a new row, `Some` overwrites the existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDraft {
    pub id: Option<CategoryId>,
    pub name: String,
}

/// Handle to a category whose existence has been checked but whose
/// columns were not loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryRef(CategoryId);

impl CategoryRef {
    pub fn new(id: CategoryId) -> Self {
        Self(id)
    }

    pub fn id(&self) -> CategoryId {
        self.0
    }
}
