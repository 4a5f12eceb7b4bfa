//! Schema creation
//!
//! Tables are generated from the SeaORM entity definitions, so the same
//! code provisions PostgreSQL in production and SQLite in tests.

use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Schema};

use crate::entity::{categories, order_items, product_categories, products};
use crate::error::DomainError;

/// Create every catalog table that does not exist yet.
///
/// Referenced tables are created before the tables that point at them.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    create_table(db, categories::Entity).await?;
    create_table(db, products::Entity).await?;
    create_table(db, product_categories::Entity).await?;
    create_table(db, order_items::Entity).await?;

    tracing::info!("Catalog schema ready");
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DomainError>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt)).await?;
    tracing::debug!(table = entity.table_name(), "Table ensured");

    Ok(())
}
