use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::table::{
    ColumnDef, ColumnInfo, FieldDef, FieldKind, IndexGroupInfo, TableDef, TableError,
    TableResult, UniqueGroupInfo,
};
use crate::types::{SqliteType, TypeRef, TypeResolver};

/// Describes how a model is stored: table name, columns, primary key, unique and index groups.
///
/// A [`TableInfo`] can only be built from a valid [`TableDef`], and is immutable afterwards.
#[derive(Debug, Clone)]
pub struct TableInfo {
    database: TypeRef,
    model: TypeRef,
    table_name: &'static str,
    primary_key_field: &'static FieldDef,
    primary_key_column_name: &'static str,
    /// Persisted fields with their column, primary key first.
    columns: Vec<(&'static FieldDef, ColumnInfo)>,
    unique_groups: BTreeMap<u32, UniqueGroupInfo>,
    index_groups: BTreeMap<u32, IndexGroupInfo>,
    caching_enabled: bool,
    cache_size: usize,
}

impl TableInfo {
    /// Builds the [`TableInfo`] of a table declaration.
    ///
    /// The declaration is valid when:
    ///
    /// - exactly one field is the primary key, and it is an `i64` (optionally in an `Option`);
    /// - each group number is declared at most once;
    /// - each group referenced by a column is declared by the table;
    /// - each column type can be resolved by the [`TypeResolver`];
    /// - no two columns share the same name.
    pub fn new(def: &'static TableDef, resolver: &TypeResolver<'_>) -> TableResult<Self> {
        let model_name = def.model.simple_name();
        let table_name = def
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or(model_name);
        log::debug!("building table info for {model_name} (table `{table_name}`)");

        let unique_groups = Self::create_unique_groups(def, model_name)?;
        let index_groups = Self::create_index_groups(def, model_name)?;
        let (primary_key_field, primary_key_column_name) =
            Self::find_primary_key_field(def, model_name)?;

        let mut info = Self {
            database: def.database,
            model: def.model,
            table_name,
            primary_key_field,
            primary_key_column_name,
            columns: Vec::with_capacity(def.fields.len()),
            unique_groups,
            index_groups,
            caching_enabled: def.caching_enabled,
            cache_size: def.cache_size,
        };
        info.columns.push((
            primary_key_field,
            ColumnInfo::new(primary_key_column_name, SqliteType::Integer, true),
        ));

        for field in def.fields {
            let FieldKind::Column(column_def) = &field.kind else {
                continue;
            };
            let column = info.create_column_info(field, column_def, resolver, model_name)?;
            info.add_column_to_unique_groups(column_def, column, model_name)?;
            info.add_column_to_index_groups(column_def, column, model_name)?;
            info.columns.push((field, column));
        }

        Ok(info)
    }

    /// Returns the [`crate::database::Database`] type the table belongs to.
    pub fn database(&self) -> TypeRef {
        self.database
    }

    /// Returns the model type mapped to the table.
    pub fn model(&self) -> TypeRef {
        self.model
    }

    /// Returns the name of the table.
    pub fn table_name(&self) -> &'static str {
        self.table_name
    }

    /// Returns the name of the primary key column.
    pub fn primary_key_column_name(&self) -> &'static str {
        self.primary_key_column_name
    }

    /// Returns the primary key field.
    pub fn primary_key_field(&self) -> &'static FieldDef {
        self.primary_key_field
    }

    /// Returns the persisted fields, primary key first, then columns in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldDef> + '_ {
        self.columns.iter().map(|(field, _)| *field)
    }

    /// Returns the [`ColumnInfo`] of the field with the given name.
    pub fn column_info(&self, field_name: &str) -> Option<&ColumnInfo> {
        self.columns
            .iter()
            .find(|(field, _)| field.name == field_name)
            .map(|(_, column)| column)
    }

    /// Returns the columns in the same order as [`TableInfo::fields`].
    pub fn columns(&self) -> impl Iterator<Item = &ColumnInfo> {
        self.columns.iter().map(|(_, column)| column)
    }

    /// Returns the unique groups, ordered by group number.
    pub fn unique_groups(&self) -> &BTreeMap<u32, UniqueGroupInfo> {
        &self.unique_groups
    }

    /// Returns the index groups, ordered by group number.
    pub fn index_groups(&self) -> &BTreeMap<u32, IndexGroupInfo> {
        &self.index_groups
    }

    /// Returns whether loaded records should be cached.
    pub fn is_caching_enabled(&self) -> bool {
        self.caching_enabled
    }

    /// Returns the maximum number of cached records.
    pub fn cache_size(&self) -> usize {
        self.cache_size
    }

    fn create_unique_groups(
        def: &TableDef,
        model_name: &'static str,
    ) -> TableResult<BTreeMap<u32, UniqueGroupInfo>> {
        let mut groups = BTreeMap::new();
        for group in def.unique_groups {
            match groups.entry(group.number) {
                Entry::Vacant(entry) => {
                    entry.insert(UniqueGroupInfo::from(group));
                }
                Entry::Occupied(_) => {
                    return Err(TableError::DuplicateUniqueGroup {
                        model: model_name,
                        group: group.number,
                    });
                }
            }
        }

        Ok(groups)
    }

    fn create_index_groups(
        def: &TableDef,
        model_name: &'static str,
    ) -> TableResult<BTreeMap<u32, IndexGroupInfo>> {
        let mut groups = BTreeMap::new();
        for group in def.index_groups {
            match groups.entry(group.number) {
                Entry::Vacant(entry) => {
                    entry.insert(IndexGroupInfo::from(group));
                }
                Entry::Occupied(_) => {
                    return Err(TableError::DuplicateIndexGroup {
                        model: model_name,
                        group: group.number,
                    });
                }
            }
        }

        Ok(groups)
    }

    /// Finds the only primary key field, returning it with its column name.
    fn find_primary_key_field(
        def: &'static TableDef,
        model_name: &'static str,
    ) -> TableResult<(&'static FieldDef, &'static str)> {
        let mut primary_key = None;
        for field in def.fields {
            let Some(pk) = field.primary_key() else {
                continue;
            };
            if !field.ty.is::<i64>() {
                return Err(TableError::InvalidPrimaryKeyType {
                    model: model_name,
                    field: field.name,
                    found: field.ty.name(),
                });
            }
            if primary_key.is_some() {
                return Err(TableError::MultiplePrimaryKeys(model_name));
            }
            primary_key = Some((field, pk.name));
        }

        primary_key.ok_or(TableError::MissingPrimaryKey(model_name))
    }

    fn create_column_info(
        &self,
        field: &'static FieldDef,
        column_def: &ColumnDef,
        resolver: &TypeResolver<'_>,
        model_name: &'static str,
    ) -> TableResult<ColumnInfo> {
        let name = column_def
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or(field.name);
        if self.columns.iter().any(|(_, column)| column.name == name) {
            return Err(TableError::DuplicateColumnName {
                model: model_name,
                column: name,
            });
        }

        let sqlite_type =
            resolver
                .resolve(field.ty)
                .ok_or(TableError::UnsupportedColumnType {
                    model: model_name,
                    field: field.name,
                    ty: field.ty.name(),
                })?;
        if column_def.not_null && field.optional {
            log::warn!(
                "{model_name}.{} is an `Option` but column `{name}` is NOT NULL; `None` can't be stored",
                field.name
            );
        }
        log::trace!(
            "{model_name}.{}: column `{name}` {sqlite_type}{}",
            field.name,
            if column_def.not_null { " NOT NULL" } else { "" }
        );

        Ok(ColumnInfo::new(name, sqlite_type, column_def.not_null))
    }

    fn add_column_to_unique_groups(
        &mut self,
        column_def: &ColumnDef,
        column: ColumnInfo,
        model_name: &'static str,
    ) -> TableResult<()> {
        for number in column_def.unique_groups {
            let group = self.unique_groups.get_mut(number).ok_or(
                TableError::UnknownUniqueGroup {
                    model: model_name,
                    group: *number,
                },
            )?;
            group.add_column(column);
        }

        Ok(())
    }

    fn add_column_to_index_groups(
        &mut self,
        column_def: &ColumnDef,
        column: ColumnInfo,
        model_name: &'static str,
    ) -> TableResult<()> {
        for number in column_def.index_groups {
            let group =
                self.index_groups
                    .get_mut(number)
                    .ok_or(TableError::UnknownIndexGroup {
                        model: model_name,
                        group: *number,
                    })?;
            group.add_column(column);
        }

        Ok(())
    }
}
