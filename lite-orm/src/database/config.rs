use crate::LiteOrmResult;
use crate::database::{Database, DatabaseSchema};
use crate::serializer::{SerializerRegistry, TypeSerializer};
use crate::table::{Model, TableDef};
use crate::types::TypeRef;

/// The configuration of a database: its name, version, models and type serializers.
#[derive(Debug)]
pub struct DatabaseConfig {
    database: TypeRef,
    name: &'static str,
    version: u32,
    models: Vec<&'static TableDef>,
    serializers: SerializerRegistry,
}

impl DatabaseConfig {
    /// Starts the configuration of the database `D`.
    ///
    /// The builder starts with the built-in serializers of [`SerializerRegistry::with_defaults`].
    pub fn builder<D>() -> DatabaseConfigBuilder
    where
        D: Database,
    {
        DatabaseConfigBuilder {
            config: DatabaseConfig {
                database: TypeRef::of::<D>(),
                name: D::NAME,
                version: D::VERSION,
                models: Vec::new(),
                serializers: SerializerRegistry::with_defaults(),
            },
        }
    }

    /// Returns the [`Database`] type.
    pub fn database(&self) -> TypeRef {
        self.database
    }

    /// Returns the name of the database.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the schema version of the database.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the declarations of the added models, in insertion order.
    pub fn models(&self) -> &[&'static TableDef] {
        &self.models
    }

    /// Returns the type serializers of the database.
    pub fn serializers(&self) -> &SerializerRegistry {
        &self.serializers
    }
}

/// Builder for a [`DatabaseConfig`].
///
/// Misconfigurations are reported by [`DatabaseConfigBuilder::build`].
#[derive(Debug)]
pub struct DatabaseConfigBuilder {
    config: DatabaseConfig,
}

impl DatabaseConfigBuilder {
    /// Adds a model to the database.
    pub fn add_model<M>(mut self) -> Self
    where
        M: Model,
    {
        self.config.models.push(M::table_def());
        self
    }

    /// Adds a type serializer, replacing the one registered for the same type, if any.
    pub fn add_type_serializer<S>(mut self, serializer: S) -> Self
    where
        S: TypeSerializer,
    {
        self.config.serializers.register(serializer);
        self
    }

    /// Returns the configuration, without registering the models.
    pub fn config(self) -> DatabaseConfig {
        self.config
    }

    /// Registers all the models and builds the [`DatabaseSchema`].
    pub fn build(self) -> LiteOrmResult<DatabaseSchema> {
        DatabaseSchema::load(self.config)
    }
}
