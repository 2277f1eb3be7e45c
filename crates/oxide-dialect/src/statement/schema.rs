//! CREATE SCHEMA and DROP SCHEMA.

use crate::dialect::{DialectDescriptor, DialectKind};
use crate::identifier::{escape_name, ObjectKind};
use crate::settings::GenerationSettings;
use crate::validation::ValidationErrors;

use super::{AffectedObject, Sql, SqlStatement};

const fn supports_schemas(dialect: &DialectDescriptor) -> bool {
    matches!(
        dialect.kind(),
        DialectKind::H2 | DialectKind::Hsql | DialectKind::Mssql | DialectKind::Postgres
    )
}

/// Creates a schema in the current catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateSchema {
    /// Catalog name. No dialect accepts one; it is only validated.
    pub catalog_name: Option<String>,
    /// Schema to create.
    pub schema_name: String,
}

impl CreateSchema {
    /// Creates the statement for `schema_name`.
    pub fn new(schema_name: impl Into<String>) -> Self {
        Self {
            catalog_name: None,
            schema_name: schema_name.into(),
        }
    }

    /// Sets the catalog name.
    #[must_use]
    pub fn catalog(mut self, catalog_name: impl Into<String>) -> Self {
        self.catalog_name = Some(catalog_name.into());
        self
    }
}

impl SqlStatement for CreateSchema {
    fn name(&self) -> &'static str {
        "createSchema"
    }

    fn supports(&self, dialect: &DialectDescriptor) -> bool {
        supports_schemas(dialect)
    }

    fn validate(&self, dialect: &DialectDescriptor) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check_disallowed_field("catalogName", self.catalog_name.as_deref(), dialect.kind());
        errors.check_required_field("schemaName", Some(&self.schema_name));
        errors
    }

    fn generate_sql(&self, dialect: &DialectDescriptor, settings: GenerationSettings) -> Vec<Sql> {
        let sql = format!(
            "CREATE SCHEMA {}",
            escape_name(&self.schema_name, ObjectKind::Schema, dialect, settings)
        );
        vec![Sql::new(
            sql,
            vec![AffectedObject::Schema {
                catalog: self.catalog_name.clone(),
                name: self.schema_name.clone(),
            }],
        )]
    }
}

/// Drops a schema.
///
/// SQL Server cannot name the catalog in `DROP SCHEMA`, so when a catalog is
/// given the statement switches to it inside `sp_executesql`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropSchema {
    /// Catalog holding the schema. Only SQL Server accepts one.
    pub catalog_name: Option<String>,
    /// Schema to drop.
    pub schema_name: String,
}

impl DropSchema {
    /// Creates the statement for `schema_name`.
    pub fn new(schema_name: impl Into<String>) -> Self {
        Self {
            catalog_name: None,
            schema_name: schema_name.into(),
        }
    }

    /// Sets the catalog name.
    #[must_use]
    pub fn catalog(mut self, catalog_name: impl Into<String>) -> Self {
        self.catalog_name = Some(catalog_name.into());
        self
    }
}

impl SqlStatement for DropSchema {
    fn name(&self) -> &'static str {
        "dropSchema"
    }

    fn supports(&self, dialect: &DialectDescriptor) -> bool {
        supports_schemas(dialect)
    }

    fn validate(&self, dialect: &DialectDescriptor) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if dialect.kind() != DialectKind::Mssql {
            errors.check_disallowed_field(
                "catalogName",
                self.catalog_name.as_deref(),
                dialect.kind(),
            );
        }
        errors.check_required_field("schemaName", Some(&self.schema_name));
        errors
    }

    fn generate_sql(&self, dialect: &DialectDescriptor, settings: GenerationSettings) -> Vec<Sql> {
        let mut sql = format!(
            "DROP SCHEMA {}",
            escape_name(&self.schema_name, ObjectKind::Schema, dialect, settings)
        );
        if let (DialectKind::Mssql, Some(catalog)) = (dialect.kind(), &self.catalog_name) {
            let batch = format!(
                "USE {}; {sql}",
                escape_name(catalog, ObjectKind::Catalog, dialect, settings)
            );
            sql = format!("EXEC sp_executesql N'{}'", dialect.escape_string(&batch));
        }
        vec![Sql::new(
            sql,
            vec![AffectedObject::Schema {
                catalog: self.catalog_name.clone(),
                name: self.schema_name.clone(),
            }],
        )]
    }
}
