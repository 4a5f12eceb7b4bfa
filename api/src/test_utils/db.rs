//! In-memory SQLite databases for repository and end-to-end tests

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::adapters::{create_schema, seed_catalog};

/// Fresh schema, no rows
pub async fn empty_test_db() -> DatabaseConnection {
    // A single connection keeps every query on the same in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory SQLite");
    create_schema(&db).await.expect("Failed to create schema");
    db
}

/// Fresh schema loaded with the reference catalog: 3 categories, 25
/// products, product 5 referenced by an order item
pub async fn seeded_test_db() -> DatabaseConnection {
    let db = empty_test_db().await;
    seed_catalog(&db).await.expect("Failed to seed catalog");
    db
}
