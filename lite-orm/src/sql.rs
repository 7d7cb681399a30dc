//! This module generates the SQL statements creating the tables described by [`TableInfo`]s.

use crate::table::{ColumnInfo, IndexGroupInfo, TableInfo};

/// Quotes an identifier, doubling the quotes it contains.
pub fn quote_identifier(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// Returns the `CREATE TABLE` statement of a table.
///
/// The primary key is an auto-incremented integer; each non-empty unique group becomes a
/// table constraint with its conflict resolution.
pub fn create_table(table: &TableInfo) -> String {
    let mut definitions = vec![format!(
        "{} INTEGER PRIMARY KEY AUTOINCREMENT",
        quote_identifier(table.primary_key_column_name())
    )];
    // the primary key is always the first column
    definitions.extend(table.columns().skip(1).map(column_definition));
    definitions.extend(
        table
            .unique_groups()
            .values()
            .filter(|group| !group.columns().is_empty())
            .map(|group| {
                format!(
                    "UNIQUE ({}) ON CONFLICT {}",
                    column_list(group.columns()),
                    group.on_conflict()
                )
            }),
    );

    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote_identifier(table.table_name()),
        definitions.join(", ")
    )
}

/// Returns the `CREATE INDEX` statements of the non-empty index groups of a table, ordered by group number.
///
/// Unnamed groups are named `index_<table>_<number>`.
pub fn create_indices(table: &TableInfo) -> Vec<String> {
    table
        .index_groups()
        .values()
        .filter(|group| !group.columns().is_empty())
        .map(|group| {
            format!(
                "CREATE {}INDEX IF NOT EXISTS {} ON {} ({})",
                if group.is_unique() { "UNIQUE " } else { "" },
                quote_identifier(&index_name(table, group)),
                quote_identifier(table.table_name()),
                column_list(group.columns())
            )
        })
        .collect()
}

/// Returns the name of the index created for a group: its declared name, or `index_<table>_<number>`.
pub fn index_name(table: &TableInfo, group: &IndexGroupInfo) -> String {
    match group.name() {
        Some(name) => name.to_string(),
        None => format!("index_{}_{}", table.table_name(), group.number()),
    }
}

fn column_definition(column: &ColumnInfo) -> String {
    let mut definition = format!("{} {}", quote_identifier(column.name), column.sqlite_type);
    if column.not_null {
        definition.push_str(" NOT NULL");
    }
    definition
}

fn column_list(columns: &[ColumnInfo]) -> String {
    columns
        .iter()
        .map(|column| quote_identifier(column.name))
        .collect::<Vec<_>>()
        .join(", ")
}
