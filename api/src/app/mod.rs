//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and repository ports, and
//! are the only place persistence errors become `AppError`.

pub mod category_service;
pub mod dto;
pub mod product_service;

pub use category_service::{CategoryService, CategoryUseCases};
pub use dto::{CategoryDto, ProductDto};
pub use product_service::{ProductService, ProductUseCases};

#[cfg(test)]
pub use category_service::MockCategoryUseCases;
#[cfg(test)]
pub use product_service::MockProductUseCases;
