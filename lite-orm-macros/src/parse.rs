//! Attribute parsing for the Model derive macro.
//!
//! ```text
//! TableAttrs                     #[table(...)]
//! ├── name: Option<LitStr>
//! ├── database: Path             (required)
//! ├── caching_enabled: bool
//! ├── cache_size: Option<LitInt>
//! ├── unique_groups: Vec<UniqueGroupAttr>
//! └── index_groups: Vec<IndexGroupAttr>
//!
//! FieldAttrs                     per field
//! ├── kind: Option<FieldKindAttr>
//! │   ├── PrimaryKey { name }    #[primary_key(...)]
//! │   └── Column { name, not_null }   #[column(...)]
//! ├── unique_groups: Vec<LitInt> #[unique(groups(...))]
//! └── index_groups: Vec<LitInt>  #[index(groups(...))]
//! ```

use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::{Attribute, Ident, LitBool, LitInt, LitStr, Meta, Path, Token};

/// Conflict actions accepted by `on_conflict`.
const CONFLICT_ACTIONS: &[&str] = &["Rollback", "Abort", "Fail", "Ignore", "Replace"];

/// The parsed `#[table(...)]` attribute.
pub struct TableAttrs {
    pub name: Option<LitStr>,
    pub database: Path,
    pub caching_enabled: bool,
    pub cache_size: Option<LitInt>,
    pub unique_groups: Vec<UniqueGroupAttr>,
    pub index_groups: Vec<IndexGroupAttr>,
}

/// `unique_group(number = 1, on_conflict = Replace)`
pub struct UniqueGroupAttr {
    pub number: LitInt,
    pub on_conflict: Option<Ident>,
}

/// `index_group(number = 1, name = "...", unique)`
pub struct IndexGroupAttr {
    pub number: LitInt,
    pub name: Option<LitStr>,
    pub unique: bool,
}

/// The parsed attributes of a field.
#[derive(Default)]
pub struct FieldAttrs {
    pub kind: Option<FieldKindAttr>,
    pub unique_groups: Vec<LitInt>,
    pub index_groups: Vec<LitInt>,
    /// The `#[unique]` or `#[index]` attribute, to report misplaced group memberships.
    pub groups_attr: Option<Path>,
}

pub enum FieldKindAttr {
    PrimaryKey {
        name: Option<LitStr>,
    },
    Column {
        name: Option<LitStr>,
        not_null: bool,
    },
}

impl TableAttrs {
    /// Parses the `#[table(...)]` attribute among the struct attributes.
    pub fn parse(ident: &Ident, attrs: &[Attribute]) -> syn::Result<Self> {
        let attr = attrs
            .iter()
            .find(|attr| attr.path().is_ident("table"))
            .ok_or_else(|| {
                syn::Error::new(
                    ident.span(),
                    format!("missing #[table(database = ...)] attribute on {ident}"),
                )
            })?;

        let mut name = None;
        let mut database = None;
        let mut caching_enabled = false;
        let mut cache_size = None;
        let mut unique_groups = Vec::new();
        let mut index_groups = Vec::new();

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                name = Some(meta.value()?.parse::<LitStr>()?);
            } else if meta.path.is_ident("database") {
                database = Some(meta.value()?.parse::<Path>()?);
            } else if meta.path.is_ident("caching_enabled") {
                caching_enabled = parse_flag(&meta)?;
            } else if meta.path.is_ident("cache_size") {
                cache_size = Some(meta.value()?.parse::<LitInt>()?);
            } else if meta.path.is_ident("unique_group") {
                unique_groups.push(parse_unique_group(&meta)?);
            } else if meta.path.is_ident("index_group") {
                index_groups.push(parse_index_group(&meta)?);
            } else {
                return Err(meta.error("unsupported table attribute"));
            }
            Ok(())
        })?;

        let database = database
            .ok_or_else(|| syn::Error::new_spanned(attr, "missing `database` in #[table]"))?;

        Ok(Self {
            name,
            database,
            caching_enabled,
            cache_size,
            unique_groups,
            index_groups,
        })
    }
}

impl FieldAttrs {
    /// Parses the lite-orm attributes of a field, ignoring the others.
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut field = Self::default();

        for attr in attrs {
            if attr.path().is_ident("primary_key") {
                let mut name = None;
                if !matches!(attr.meta, Meta::Path(_)) {
                    attr.parse_nested_meta(|meta| {
                        if meta.path.is_ident("name") {
                            name = Some(meta.value()?.parse::<LitStr>()?);
                            Ok(())
                        } else {
                            Err(meta.error("unsupported primary_key attribute"))
                        }
                    })?;
                }
                field.set_kind(attr, FieldKindAttr::PrimaryKey { name })?;
            } else if attr.path().is_ident("column") {
                let mut name = None;
                let mut not_null = false;
                if !matches!(attr.meta, Meta::Path(_)) {
                    attr.parse_nested_meta(|meta| {
                        if meta.path.is_ident("name") {
                            name = Some(meta.value()?.parse::<LitStr>()?);
                        } else if meta.path.is_ident("not_null") {
                            not_null = parse_flag(&meta)?;
                        } else {
                            return Err(meta.error("unsupported column attribute"));
                        }
                        Ok(())
                    })?;
                }
                field.set_kind(attr, FieldKindAttr::Column { name, not_null })?;
            } else if attr.path().is_ident("unique") {
                field.unique_groups.extend(parse_groups(attr)?);
                field.groups_attr.get_or_insert_with(|| attr.path().clone());
            } else if attr.path().is_ident("index") {
                field.index_groups.extend(parse_groups(attr)?);
                field.groups_attr.get_or_insert_with(|| attr.path().clone());
            }
        }

        Ok(field)
    }

    fn set_kind(&mut self, attr: &Attribute, kind: FieldKindAttr) -> syn::Result<()> {
        if self.kind.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "a field can be either a single #[primary_key] or a single #[column]",
            ));
        }
        self.kind = Some(kind);
        Ok(())
    }
}

/// Parses `key` or `key = bool`.
fn parse_flag(meta: &ParseNestedMeta) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        Ok(meta.value()?.parse::<LitBool>()?.value)
    } else {
        Ok(true)
    }
}

fn parse_unique_group(meta: &ParseNestedMeta) -> syn::Result<UniqueGroupAttr> {
    let mut number = None;
    let mut on_conflict = None;

    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("number") {
            number = Some(inner.value()?.parse::<LitInt>()?);
        } else if inner.path.is_ident("on_conflict") {
            let action = inner.value()?.parse::<Ident>()?;
            if !CONFLICT_ACTIONS.iter().any(|known| action == known) {
                return Err(syn::Error::new(
                    action.span(),
                    format!("on_conflict must be one of {}", CONFLICT_ACTIONS.join(", ")),
                ));
            }
            on_conflict = Some(action);
        } else {
            return Err(inner.error("unsupported unique_group attribute"));
        }
        Ok(())
    })?;

    Ok(UniqueGroupAttr {
        number: number.ok_or_else(|| meta.error("missing `number` in unique_group"))?,
        on_conflict,
    })
}

fn parse_index_group(meta: &ParseNestedMeta) -> syn::Result<IndexGroupAttr> {
    let mut number = None;
    let mut name = None;
    let mut unique = false;

    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("number") {
            number = Some(inner.value()?.parse::<LitInt>()?);
        } else if inner.path.is_ident("name") {
            name = Some(inner.value()?.parse::<LitStr>()?);
        } else if inner.path.is_ident("unique") {
            unique = parse_flag(&inner)?;
        } else {
            return Err(inner.error("unsupported index_group attribute"));
        }
        Ok(())
    })?;

    Ok(IndexGroupAttr {
        number: number.ok_or_else(|| meta.error("missing `number` in index_group"))?,
        name,
        unique,
    })
}

/// Parses `#[unique(groups(1, 2))]` and `#[index(groups(1, 2))]`.
fn parse_groups(attr: &Attribute) -> syn::Result<Vec<LitInt>> {
    let mut groups = Vec::new();
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("groups") {
            let content;
            syn::parenthesized!(content in meta.input);
            let numbers = Punctuated::<LitInt, Token![,]>::parse_terminated(&content)?;
            groups.extend(numbers);
            Ok(())
        } else {
            Err(meta.error("expected `groups(...)`"))
        }
    })?;

    Ok(groups)
}
