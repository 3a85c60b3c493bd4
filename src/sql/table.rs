//! Explicit table mapping: which table an entity lives in and how its fields map to columns.

/// SQLite storage class for a mapped column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Text,
}

impl SqlType {
    pub fn as_sql(self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Text => "TEXT",
        }
    }
}

/// One mapped column. `primary_key` columns are assigned by the store and never written by the application.
#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
    pub primary_key: bool,
    pub autoincrement: bool,
}

impl ColumnDef {
    /// Auto-assigned integer primary key.
    pub const fn id(name: &'static str) -> Self {
        ColumnDef {
            name,
            sql_type: SqlType::Integer,
            nullable: false,
            primary_key: true,
            autoincrement: true,
        }
    }

    /// Required text column.
    pub const fn text(name: &'static str) -> Self {
        ColumnDef {
            name,
            sql_type: SqlType::Text,
            nullable: false,
            primary_key: false,
            autoincrement: false,
        }
    }
}

/// Table name plus its columns in select order.
#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    /// The single-column primary key. Every mapped table has exactly one.
    pub fn primary_key(&self) -> &'static str {
        self.columns
            .iter()
            .find(|c| c.primary_key)
            .map(|c| c.name)
            .unwrap_or("id")
    }

    /// Columns the application writes on insert and update, in bind order.
    pub fn writable_columns(&self) -> impl Iterator<Item = &'static ColumnDef> {
        self.columns.iter().filter(|c| !c.primary_key)
    }
}
