use proc_macro2::TokenStream as TokenStream2;
use syn::{DataStruct, DeriveInput, Field, Fields, LitStr};

use crate::parse::{FieldAttrs, FieldKindAttr, IndexGroupAttr, TableAttrs, UniqueGroupAttr};
use crate::utils;

/// Generate implementation of `Model` trait.
pub fn model(
    DeriveInput {
        ident,
        attrs,
        data,
        generics,
        ..
    }: DeriveInput,
) -> syn::Result<TokenStream2> {
    let syn::Data::Struct(struct_data) = data else {
        return Err(syn::Error::new(
            ident.span(),
            format!("Cannot derive Model for {ident}; it can only be derived for structs"),
        ));
    };
    if !matches!(struct_data.fields, Fields::Named(_)) {
        return Err(syn::Error::new(
            ident.span(),
            format!("Cannot derive Model for {ident}; fields must be named"),
        ));
    }
    if !generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &generics,
            format!("Cannot derive Model for {ident}; generic models are not supported"),
        ));
    }

    let table = TableAttrs::parse(&ident, &attrs)?;
    let table_def = impl_table_def(&ident, &table, &struct_data)?;

    Ok(quote::quote! {
        impl ::lite_orm::prelude::Model for #ident {
            fn table_def() -> &'static ::lite_orm::prelude::TableDef {
                static TABLE_DEF: ::lite_orm::prelude::TableDef = #table_def;
                &TABLE_DEF
            }
        }
    })
}

/// Generate the `TableDef` initializer.
fn impl_table_def(
    ident: &syn::Ident,
    table: &TableAttrs,
    struct_data: &DataStruct,
) -> syn::Result<TokenStream2> {
    let name = optional_str(table.name.as_ref());
    let database = &table.database;
    let caching_enabled = table.caching_enabled;
    let cache_size = match &table.cache_size {
        Some(size) => quote::quote! { #size },
        None => quote::quote! { ::lite_orm::prelude::DEFAULT_CACHE_SIZE },
    };
    let unique_groups = table.unique_groups.iter().map(impl_unique_group_def);
    let index_groups = table.index_groups.iter().map(impl_index_group_def);
    let fields = struct_data
        .fields
        .iter()
        .filter_map(|field| impl_field_def(field).transpose())
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote::quote! {
        ::lite_orm::prelude::TableDef {
            model: ::lite_orm::prelude::TypeRef::of::<#ident>(),
            name: #name,
            database: ::lite_orm::prelude::TypeRef::of::<#database>(),
            caching_enabled: #caching_enabled,
            cache_size: #cache_size,
            unique_groups: &[#(#unique_groups),*],
            index_groups: &[#(#index_groups),*],
            fields: &[#(#fields),*],
        }
    })
}

fn impl_unique_group_def(group: &UniqueGroupAttr) -> TokenStream2 {
    let number = &group.number;
    let on_conflict = match &group.on_conflict {
        Some(action) => quote::quote! { ::lite_orm::prelude::ConflictAction::#action },
        None => quote::quote! { ::lite_orm::prelude::ConflictAction::Fail },
    };

    quote::quote! {
        ::lite_orm::prelude::UniqueGroupDef {
            number: #number,
            on_conflict: #on_conflict,
        }
    }
}

fn impl_index_group_def(group: &IndexGroupAttr) -> TokenStream2 {
    let number = &group.number;
    let name = optional_str(group.name.as_ref());
    let unique = group.unique;

    quote::quote! {
        ::lite_orm::prelude::IndexGroupDef {
            number: #number,
            name: #name,
            unique: #unique,
        }
    }
}

/// Generate the `FieldDef` of a field; `None` if the field is not persisted.
fn impl_field_def(field: &Field) -> syn::Result<Option<TokenStream2>> {
    let attrs = FieldAttrs::parse(&field.attrs)?;
    let Some(kind) = &attrs.kind else {
        if let Some(path) = &attrs.groups_attr {
            return Err(syn::Error::new_spanned(
                path,
                "#[unique] and #[index] can only be applied to a #[column] field",
            ));
        }
        return Ok(None);
    };

    let Some(field_ident) = &field.ident else {
        return Err(syn::Error::new_spanned(field, "fields must be named"));
    };
    let field_name = field_ident.to_string();
    let (ty, optional) = match utils::option_inner_type(&field.ty) {
        Some(inner) => (inner, true),
        None => (&field.ty, false),
    };

    let kind = match kind {
        FieldKindAttr::PrimaryKey { name } => {
            if let Some(path) = &attrs.groups_attr {
                return Err(syn::Error::new_spanned(
                    path,
                    "#[unique] and #[index] can only be applied to a #[column] field",
                ));
            }
            let name = match name {
                Some(name) => quote::quote! { #name },
                None => quote::quote! { ::lite_orm::prelude::DEFAULT_PRIMARY_KEY_NAME },
            };
            quote::quote! {
                ::lite_orm::prelude::FieldKind::PrimaryKey(::lite_orm::prelude::PrimaryKeyDef {
                    name: #name,
                })
            }
        }
        FieldKindAttr::Column { name, not_null } => {
            let name = optional_str(name.as_ref());
            let unique_groups = &attrs.unique_groups;
            let index_groups = &attrs.index_groups;
            quote::quote! {
                ::lite_orm::prelude::FieldKind::Column(::lite_orm::prelude::ColumnDef {
                    name: #name,
                    not_null: #not_null,
                    unique_groups: &[#(#unique_groups),*],
                    index_groups: &[#(#index_groups),*],
                })
            }
        }
    };

    Ok(Some(quote::quote! {
        ::lite_orm::prelude::FieldDef {
            name: #field_name,
            ty: ::lite_orm::prelude::TypeRef::of::<#ty>(),
            optional: #optional,
            kind: #kind,
        }
    }))
}

fn optional_str(value: Option<&LitStr>) -> TokenStream2 {
    match value {
        Some(value) => quote::quote! { ::core::option::Option::Some(#value) },
        None => quote::quote! { ::core::option::Option::None },
    }
}
