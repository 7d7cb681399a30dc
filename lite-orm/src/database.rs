//! This module exposes the database configuration and the registration of its tables.

mod config;
mod schema;

use thiserror::Error;

pub use self::config::{DatabaseConfig, DatabaseConfigBuilder};
pub use self::schema::DatabaseSchema;

/// A database, declared on a marker type.
///
/// ```rust
/// use lite_orm::prelude::Database;
///
/// pub struct AppDatabase;
///
/// impl Database for AppDatabase {
///     const NAME: &'static str = "app.db";
///     const VERSION: u32 = 1;
/// }
/// ```
pub trait Database: 'static {
    /// The name of the database file.
    const NAME: &'static str;
    /// The schema version of the database.
    const VERSION: u32;
}

/// An enum representing the errors in a database configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The same model has been added twice.
    #[error("Model {0} has been added more than once")]
    DuplicateModel(&'static str),
    /// Two index groups resolve to the same index name.
    #[error("Index `{index}` is declared by both {first} and {second}")]
    DuplicateIndexName {
        index: String,
        first: &'static str,
        second: &'static str,
    },
    /// Two models are mapped to the same table; names are compared ignoring ASCII case.
    #[error("Table `{table}` is mapped by both {first} and {second}")]
    DuplicateTableName {
        table: &'static str,
        first: &'static str,
        second: &'static str,
    },
    /// The model belongs to another database.
    #[error("Model {model} belongs to {declared}, not to {database}")]
    ModelFromOtherDatabase {
        model: &'static str,
        declared: &'static str,
        database: &'static str,
    },
}
