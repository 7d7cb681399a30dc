use crate::table::TableDef;

/// A type mapped to a database table.
///
/// Usually implemented with `#[derive(Model)]`.
pub trait Model: 'static {
    /// Returns the static declaration of the table.
    fn table_def() -> &'static TableDef;
}
