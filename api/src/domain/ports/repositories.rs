//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., the SQL adapter).
//!
//! Failure signals are part of the contract: a missing row is
//! `DomainError::NotFound`, a row still referenced by dependent data is
//! `DomainError::IntegrityViolation`.

use async_trait::async_trait;

use crate::domain::entities::{
    Category, CategoryDraft, CategoryId, CategoryRef, Page, PageRequest, Product, ProductDraft,
    ProductId, ProductRef,
};
use crate::error::DomainError;

/// Repository for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by ID, categories included
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError>;

    /// Fetch one page, ordered by the request's sort (by id when unsorted)
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Product>, DomainError>;

    /// Insert when the draft has no id, otherwise overwrite the existing row
    async fn save(&self, draft: &ProductDraft) -> Result<Product, DomainError>;

    /// Delete a product
    async fn delete_by_id(&self, id: ProductId) -> Result<(), DomainError>;

    /// Check that a product exists without loading it
    async fn get_reference(&self, id: ProductId) -> Result<ProductRef, DomainError>;

    /// Total number of products
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository for Category entities
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find a category by ID
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, DomainError>;

    /// Fetch one page, ordered by the request's sort (by id when unsorted)
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Category>, DomainError>;

    /// Insert when the draft has no id, otherwise overwrite the existing row
    async fn save(&self, draft: &CategoryDraft) -> Result<Category, DomainError>;

    /// Delete a category
    async fn delete_by_id(&self, id: CategoryId) -> Result<(), DomainError>;

    /// Check that a category exists without loading it
    async fn get_reference(&self, id: CategoryId) -> Result<CategoryRef, DomainError>;

    /// Total number of categories
    async fn count(&self) -> Result<u64, DomainError>;
}
