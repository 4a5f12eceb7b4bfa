//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod categories;
pub mod pagination;
pub mod products;

pub use categories::{
    create_category, delete_category, get_category, list_categories, update_category,
};
pub use products::{create_product, delete_product, get_product, list_products, update_product};
