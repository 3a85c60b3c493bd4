//! The `User` entity, its request shape, and its table mapping.

use crate::sql::{ColumnDef, TableDef};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

const ID: ColumnDef = ColumnDef::id("id");
const NAME: ColumnDef = ColumnDef::text("name");
const EMAIL: ColumnDef = ColumnDef::text("email");

/// Storage mapping for [`User`]. Column order is select order; `id` is store-assigned.
pub const USERS: TableDef = TableDef {
    name: "users",
    columns: &[ID, NAME, EMAIL],
};

/// A stored user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@x.com")]
    pub email: String,
}

/// Body of create and replace requests. Any `id` in the body is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@x.com")]
    pub email: String,
}

impl<'r> FromRow<'r, SqliteRow> for User {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(User {
            id: row.try_get(ID.name)?,
            name: row.try_get(NAME.name)?,
            email: row.try_get(EMAIL.name)?,
        })
    }
}
