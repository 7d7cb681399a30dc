//! Example lite-orm database: a small library catalogue.

use std::time::SystemTime;

use lite_orm::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

/// The catalogue database.
pub struct LibraryDatabase;

impl Database for LibraryDatabase {
    const NAME: &'static str = "library.db";
    const VERSION: u32 = 2;
}

#[derive(Debug, Clone, Model)]
#[table(name = "authors", database = LibraryDatabase, caching_enabled, cache_size = 100)]
pub struct Author {
    #[primary_key]
    pub id: Option<i64>,
    #[column(not_null)]
    pub name: String,
    #[column(name = "born")]
    pub birth_year: Option<i32>,
}

#[derive(Debug, Clone, Model)]
#[table(
    name = "books",
    database = LibraryDatabase,
    unique_group(number = 1, on_conflict = Replace),
    index_group(number = 1, name = "books_by_author"),
    index_group(number = 2, unique)
)]
pub struct Book {
    #[primary_key(name = "book_id")]
    pub id: Option<i64>,
    #[column(not_null)]
    #[unique(groups(1))]
    pub title: String,
    #[column(name = "author_id", not_null)]
    #[unique(groups(1))]
    #[index(groups(1))]
    pub author: Author,
    #[column(not_null)]
    #[index(groups(2))]
    pub isbn: Uuid,
    #[column]
    pub price: Option<Decimal>,
    #[column]
    #[index(groups(1))]
    pub published_at: Option<SystemTime>,
    #[column]
    pub cover: Option<Vec<u8>>,
    /// Not persisted.
    pub selected: bool,
}

#[derive(Debug, Clone, Model)]
#[table(database = LibraryDatabase)]
pub struct Loan {
    #[primary_key]
    pub id: Option<i64>,
    #[column(not_null)]
    pub book: Book,
    #[column(name = "borrower", not_null = true)]
    pub borrower_name: String,
    #[column(not_null = false)]
    pub returned: bool,
}

/// Registers the catalogue models and builds the database schema.
pub fn load_schema() -> LiteOrmResult<DatabaseSchema> {
    DatabaseConfig::builder::<LibraryDatabase>()
        .add_model::<Author>()
        .add_model::<Book>()
        .add_model::<Loan>()
        .build()
}
