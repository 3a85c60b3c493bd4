pub mod builder;
pub mod table;

pub use builder::*;
pub use table::{ColumnDef, SqlType, TableDef};
