#![crate_name = "lite_orm_macros"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Macros and derive for lite-orm
//!
//! This crate provides procedural macros to automatically implement traits
//! required by `lite-orm`.
//!
//! ## Provided Derive Macros
//!
//! - `Model`: Automatically implements the `Model` trait for structs.
//!

#![doc(html_playground_url = "https://play.rust-lang.org")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod model;
mod parse;
mod utils;

/// Automatically implements the `Model` trait for a struct.
///
/// The macro generates a `static` `TableDef` out of the `#[table]` attribute of the struct
/// and the `#[primary_key]`, `#[column]`, `#[unique]` and `#[index]` attributes of its fields.
/// Fields without `#[primary_key]` or `#[column]` are not persisted.
///
/// # Attributes
///
/// - `#[table(...)]` on the struct:
///   - `database = Path` (required): the `Database` the table belongs to.
///   - `name = "..."`: the table name; defaults to the struct name.
///   - `caching_enabled` or `caching_enabled = bool`: defaults to `false`.
///   - `cache_size = usize`: defaults to `DEFAULT_CACHE_SIZE`.
///   - `unique_group(number = u32, on_conflict = Rollback|Abort|Fail|Ignore|Replace)`:
///     declares a unique group; `on_conflict` defaults to `Fail`.
///   - `index_group(number = u32, name = "...", unique)`: declares an index group.
/// - `#[primary_key]` or `#[primary_key(name = "...")]`: the primary key field; the column
///   name defaults to `id`.
/// - `#[column]` or `#[column(name = "...", not_null)]`: a persisted field; the column name
///   defaults to the field name.
/// - `#[unique(groups(1, 2))]`: the unique groups the column belongs to.
/// - `#[index(groups(1))]`: the index groups the column belongs to.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Model)]
/// #[table(
///     name = "users",
///     database = AppDatabase,
///     unique_group(number = 1, on_conflict = Replace),
///     index_group(number = 1, name = "users_by_email")
/// )]
/// struct User {
///     #[primary_key]
///     id: Option<i64>,
///     #[column(name = "user_name", not_null)]
///     #[unique(groups(1))]
///     name: String,
///     #[column]
///     #[unique(groups(1))]
///     #[index(groups(1))]
///     email: Option<String>,
///     cached_avatar: Vec<u8>,
/// }
/// ```
///
/// # Errors
///
/// The macro will fail to expand if:
///
/// - The macro is applied to a non-struct item, a tuple struct or a generic struct.
/// - The `#[table]` attribute is missing or has no `database`.
/// - A field is both `#[primary_key]` and `#[column]`.
/// - `#[unique]` or `#[index]` is applied to a field which is not a `#[column]`.
/// - An attribute contains an unknown key.
///
/// The primary key count and type and the group references are checked when the model is
/// registered into a database, not by the macro.
#[proc_macro_derive(Model, attributes(table, primary_key, column, unique, index))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    self::model::model(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
