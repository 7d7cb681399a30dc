#![crate_name = "lite_orm"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # lite-orm
//!
//! Table metadata for a SQLite object-relational mapper.
//!
//! Every mapped model exposes a static [`TableDef`](crate::table::TableDef), either written by hand
//! or generated by `#[derive(Model)]`. When the models are registered into a
//! [`DatabaseConfig`](crate::database::DatabaseConfig), each declaration is validated and turned
//! into a [`TableInfo`](crate::table::TableInfo), which describes the table name, its columns,
//! the primary key and the unique and index groups.
//!
//! Registration is fail-fast: any misconfiguration is returned as a [`LiteOrmError`] and is
//! expected to abort the application startup.
//!
//! ## Example
//!
//! ```rust,ignore
//! use lite_orm::prelude::*;
//!
//! struct AppDatabase;
//!
//! impl Database for AppDatabase {
//!     const NAME: &'static str = "app.db";
//!     const VERSION: u32 = 1;
//! }
//!
//! #[derive(Model)]
//! #[table(name = "users", database = AppDatabase)]
//! struct User {
//!     #[primary_key]
//!     id: Option<i64>,
//!     #[column(not_null)]
//!     name: String,
//! }
//!
//! let schema = DatabaseConfig::builder::<AppDatabase>()
//!     .add_model::<User>()
//!     .build()?;
//! ```

#![doc(html_playground_url = "https://play.rust-lang.org")]

// makes the crate accessible as `lite_orm` in macros
extern crate self as lite_orm;

use thiserror::Error;

pub mod database;
pub mod prelude;
pub mod serializer;
pub mod sql;
pub mod table;
#[cfg(test)]
mod tests;
pub mod types;

pub use lite_orm_macros::Model;

/// LiteOrm Error type
#[derive(Debug, Error)]
pub enum LiteOrmError {
    #[error("Configuration error: {0}")]
    Config(#[from] self::database::ConfigError),
    #[error("Serializer error: {0}")]
    Serializer(#[from] self::serializer::SerializerError),
    #[error("Table error: {0}")]
    Table(#[from] self::table::TableError),
}

/// LiteOrm Result type
pub type LiteOrmResult<T> = Result<T, LiteOrmError>;
