//! Apply table mappings to the database. Idempotent: tables are created only if absent.

use crate::error::AppError;
use crate::model::USERS;
use crate::sql::{create_table, TableDef};
use sqlx::SqlitePool;

/// Every table the service owns, in creation order.
pub const TABLES: &[TableDef] = &[USERS];

/// CREATE TABLE IF NOT EXISTS for each mapping.
pub async fn apply_migrations(pool: &SqlitePool, tables: &[TableDef]) -> Result<(), AppError> {
    for table in tables {
        sqlx::query(&create_table(table)).execute(pool).await?;
        tracing::debug!(table = table.name, "table ensured");
    }
    Ok(())
}
