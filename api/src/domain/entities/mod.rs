//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod category;
pub mod page;
pub mod product;

pub use category::{Category, CategoryDraft, CategoryId, CategoryRef};
pub use page::{Page, PageRequest, SortDirection, SortOrder, DEFAULT_PAGE_SIZE};
pub use product::{Product, ProductDraft, ProductId, ProductRef};
