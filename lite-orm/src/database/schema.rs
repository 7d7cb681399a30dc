use crate::database::{ConfigError, DatabaseConfig};
use crate::serializer::SerializerRegistry;
use crate::sql;
use crate::table::{Model, TableInfo};
use crate::types::{TypeRef, TypeResolver};
use crate::{LiteOrmError, LiteOrmResult};

/// The registered tables of a database.
///
/// Built once at startup by [`crate::database::DatabaseConfigBuilder::build`].
#[derive(Debug)]
pub struct DatabaseSchema {
    config: DatabaseConfig,
    tables: Vec<TableInfo>,
}

impl DatabaseSchema {
    /// Validates the configuration and builds the [`TableInfo`] of each model.
    pub(crate) fn load(config: DatabaseConfig) -> LiteOrmResult<Self> {
        let database_name = config.database().simple_name();
        log::debug!(
            "loading schema of {database_name} ({} v{}) with {} models",
            config.name(),
            config.version(),
            config.models().len()
        );

        let mut models: Vec<TypeRef> = Vec::with_capacity(config.models().len());
        for def in config.models() {
            if def.database != config.database() {
                return Err(LiteOrmError::Config(ConfigError::ModelFromOtherDatabase {
                    model: def.model.simple_name(),
                    declared: def.database.simple_name(),
                    database: database_name,
                }));
            }
            if models.contains(&def.model) {
                return Err(LiteOrmError::Config(ConfigError::DuplicateModel(
                    def.model.simple_name(),
                )));
            }
            models.push(def.model);
        }

        let resolver = TypeResolver::new(config.serializers(), models);
        let mut tables: Vec<TableInfo> = Vec::with_capacity(config.models().len());
        for def in config.models().iter().copied() {
            let info = TableInfo::new(def, &resolver)?;
            if let Some(other) = tables
                .iter()
                .find(|table| table.table_name().eq_ignore_ascii_case(info.table_name()))
            {
                return Err(LiteOrmError::Config(ConfigError::DuplicateTableName {
                    table: info.table_name(),
                    first: other.model().simple_name(),
                    second: info.model().simple_name(),
                }));
            }
            log::debug!(
                "registered table `{}` for {}",
                info.table_name(),
                info.model().simple_name()
            );
            tables.push(info);
        }
        Self::check_index_names(&tables)?;

        Ok(Self { config, tables })
    }

    /// Index names share one namespace in a SQLite database, ignoring ASCII case.
    fn check_index_names(tables: &[TableInfo]) -> LiteOrmResult<()> {
        let mut names: Vec<(String, &'static str)> = Vec::new();
        for table in tables {
            let model = table.model().simple_name();
            for group in table
                .index_groups()
                .values()
                .filter(|group| !group.columns().is_empty())
            {
                let name = sql::index_name(table, group);
                if let Some((_, first)) = names
                    .iter()
                    .find(|(other, _)| other.eq_ignore_ascii_case(&name))
                {
                    return Err(LiteOrmError::Config(ConfigError::DuplicateIndexName {
                        index: name,
                        first: *first,
                        second: model,
                    }));
                }
                names.push((name, model));
            }
        }

        Ok(())
    }

    /// Returns the name of the database.
    pub fn name(&self) -> &'static str {
        self.config.name()
    }

    /// Returns the schema version of the database.
    pub fn version(&self) -> u32 {
        self.config.version()
    }

    /// Returns the [`crate::database::Database`] type.
    pub fn database(&self) -> TypeRef {
        self.config.database()
    }

    /// Returns the registered tables, in registration order.
    pub fn tables(&self) -> &[TableInfo] {
        &self.tables
    }

    /// Returns the [`TableInfo`] of the model `M`.
    pub fn table_info<M>(&self) -> Option<&TableInfo>
    where
        M: Model,
    {
        let model = TypeRef::of::<M>();
        self.tables.iter().find(|table| table.model() == model)
    }

    /// Returns the [`TableInfo`] of the table with the given name.
    pub fn table_info_by_name(&self, table_name: &str) -> Option<&TableInfo> {
        self.tables
            .iter()
            .find(|table| table.table_name() == table_name)
    }

    /// Returns the type serializers of the database.
    pub fn serializers(&self) -> &SerializerRegistry {
        self.config.serializers()
    }

    /// Returns the statements creating all the tables, followed by the statements creating their indices.
    pub fn create_statements(&self) -> Vec<String> {
        let tables = self.tables.iter().map(sql::create_table);
        let indices = self.tables.iter().flat_map(sql::create_indices);

        tables.chain(indices).collect()
    }
}
