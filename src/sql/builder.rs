//! Builds parameterized CREATE, INSERT, SELECT, UPDATE, DELETE from a table mapping.
//! Placeholders are positional `?`; callers bind writable columns in mapping order, then the id.

use crate::sql::table::TableDef;

/// Quote identifier for SQLite (safe: only from mappings).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(table: &TableDef) -> String {
    table
        .columns
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// CREATE TABLE IF NOT EXISTS with one definition per mapped column.
pub fn create_table(table: &TableDef) -> String {
    let col_defs: Vec<String> = table
        .columns
        .iter()
        .map(|c| {
            let mut def = format!("{} {}", quoted(c.name), c.sql_type.as_sql());
            if c.primary_key {
                def.push_str(" PRIMARY KEY");
                if c.autoincrement {
                    def.push_str(" AUTOINCREMENT");
                }
            } else if !c.nullable {
                def.push_str(" NOT NULL");
            }
            def
        })
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quoted(table.name),
        col_defs.join(",\n  ")
    )
}

/// SELECT every row ordered by primary key.
pub fn select_all(table: &TableDef) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(table),
        quoted(table.name),
        quoted(table.primary_key())
    )
}

/// SELECT by primary key. Caller binds the id as the sole param.
pub fn select_by_id(table: &TableDef) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        column_list(table),
        quoted(table.name),
        quoted(table.primary_key())
    )
}

/// INSERT writable columns, returning the stored row (id included).
pub fn insert(table: &TableDef) -> String {
    let cols: Vec<String> = table.writable_columns().map(|c| quoted(c.name)).collect();
    let placeholders = vec!["?"; cols.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        cols.join(", "),
        placeholders,
        column_list(table)
    )
}

/// UPDATE every writable column by primary key, returning the stored row. Id is the last param.
pub fn update(table: &TableDef) -> String {
    let sets: Vec<String> = table
        .writable_columns()
        .map(|c| format!("{} = ?", quoted(c.name)))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ? RETURNING {}",
        quoted(table.name),
        sets.join(", "),
        quoted(table.primary_key()),
        column_list(table)
    )
}

/// DELETE by primary key. Caller checks rows affected.
pub fn delete(table: &TableDef) -> String {
    format!(
        "DELETE FROM {} WHERE {} = ?",
        quoted(table.name),
        quoted(table.primary_key())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::table::ColumnDef;

    const WIDGETS: TableDef = TableDef {
        name: "widgets",
        columns: &[ColumnDef::id("id"), ColumnDef::text("label"), ColumnDef::text("colour")],
    };

    #[test]
    fn create_table_marks_pk_and_required_columns() {
        let sql = create_table(&WIDGETS);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"widgets\""));
        assert!(sql.contains("\"id\" INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(sql.contains("\"label\" TEXT NOT NULL"));
        assert!(sql.contains("\"colour\" TEXT NOT NULL"));
    }

    #[test]
    fn insert_skips_primary_key() {
        assert_eq!(
            insert(&WIDGETS),
            "INSERT INTO \"widgets\" (\"label\", \"colour\") VALUES (?, ?) RETURNING \"id\", \"label\", \"colour\""
        );
    }

    #[test]
    fn update_binds_id_last() {
        assert_eq!(
            update(&WIDGETS),
            "UPDATE \"widgets\" SET \"label\" = ?, \"colour\" = ? WHERE \"id\" = ? RETURNING \"id\", \"label\", \"colour\""
        );
    }

    #[test]
    fn select_and_delete_key_on_primary_key() {
        assert_eq!(
            select_all(&WIDGETS),
            "SELECT \"id\", \"label\", \"colour\" FROM \"widgets\" ORDER BY \"id\""
        );
        assert_eq!(
            select_by_id(&WIDGETS),
            "SELECT \"id\", \"label\", \"colour\" FROM \"widgets\" WHERE \"id\" = ?"
        );
        assert_eq!(delete(&WIDGETS), "DELETE FROM \"widgets\" WHERE \"id\" = ?");
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quoted("we\"ird"), "\"we\"\"ird\"");
    }
}
