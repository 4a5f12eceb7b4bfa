//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The same code runs
//! against PostgreSQL in production and in-memory SQLite in tests.

pub mod category_repo;
pub mod product_repo;
pub mod schema;
pub mod seed;


pub use category_repo::SqlCategoryRepository;
pub use product_repo::SqlProductRepository;
pub use schema::create_schema;
pub use seed::seed_catalog;
