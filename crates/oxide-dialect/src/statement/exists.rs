//! Queries returning a single boolean that tells whether a catalog or a
//! schema exists.

use crate::dialect::{DialectDescriptor, DialectKind};
use crate::identifier::{correct_name, escape_name, ObjectKind};
use crate::qualified::{escape_table_name, escape_view_name};
use crate::settings::GenerationSettings;
use crate::validation::ValidationErrors;

use super::{Sql, SqlStatement};

/// Checks whether a catalog (database) exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogExists {
    /// Catalog to look for.
    pub catalog_name: String,
}

impl CatalogExists {
    /// Creates the query for `catalog_name`.
    pub fn new(catalog_name: impl Into<String>) -> Self {
        Self {
            catalog_name: catalog_name.into(),
        }
    }
}

impl SqlStatement for CatalogExists {
    fn name(&self) -> &'static str {
        "catalogExists"
    }

    fn supports(&self, dialect: &DialectDescriptor) -> bool {
        matches!(dialect.kind(), DialectKind::Mssql | DialectKind::Postgres)
    }

    fn validate(&self, _dialect: &DialectDescriptor) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check_required_field("catalogName", Some(&self.catalog_name));
        errors
    }

    fn generate_sql(&self, dialect: &DialectDescriptor, settings: GenerationSettings) -> Vec<Sql> {
        let literal = dialect.escape_string(&correct_name(
            &self.catalog_name,
            ObjectKind::Catalog,
            dialect,
            settings,
        ));
        let sql = if dialect.kind() == DialectKind::Mssql {
            format!("SELECT CAST(CASE WHEN DB_ID(N'{literal}') IS NOT NULL THEN 1 ELSE 0 END AS bit)")
        } else {
            format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = '{literal}')",
                escape_table_name(None, Some("pg_catalog"), "pg_database", dialect, settings),
                escape_name("datname", ObjectKind::Column, dialect, settings)
            )
        };
        vec![Sql::new(sql, Vec::new())]
    }
}

/// Checks whether a schema exists, optionally in a given catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaExists {
    /// Catalog to search in; the default catalog when absent.
    pub catalog_name: Option<String>,
    /// Schema to look for.
    pub schema_name: String,
}

impl SchemaExists {
    /// Creates the query for `schema_name`.
    pub fn new(schema_name: impl Into<String>) -> Self {
        Self {
            catalog_name: None,
            schema_name: schema_name.into(),
        }
    }

    /// Sets the catalog to search in.
    #[must_use]
    pub fn catalog(mut self, catalog_name: impl Into<String>) -> Self {
        self.catalog_name = Some(catalog_name.into());
        self
    }
}

impl SqlStatement for SchemaExists {
    fn name(&self) -> &'static str {
        "schemaExists"
    }

    fn supports(&self, dialect: &DialectDescriptor) -> bool {
        matches!(
            dialect.kind(),
            DialectKind::H2 | DialectKind::Hsql | DialectKind::Mssql | DialectKind::Postgres
        )
    }

    fn validate(&self, _dialect: &DialectDescriptor) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check_required_field("schemaName", Some(&self.schema_name));
        errors
    }

    fn generate_sql(&self, dialect: &DialectDescriptor, settings: GenerationSettings) -> Vec<Sql> {
        let catalog = self.catalog_name.as_deref();
        let literal = dialect.escape_string(&correct_name(
            &self.schema_name,
            ObjectKind::Schema,
            dialect,
            settings,
        ));
        let sql = match dialect.kind() {
            DialectKind::H2 | DialectKind::Hsql => {
                let mut sql = format!(
                    "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = '{literal}')",
                    escape_view_name(catalog, Some("INFORMATION_SCHEMA"), "SCHEMATA", dialect, settings),
                    escape_name("SCHEMA_NAME", ObjectKind::Column, dialect, settings)
                );
                // HSQLDB has no FROM-less SELECT.
                if dialect.kind() == DialectKind::Hsql {
                    sql.push_str(" FROM ");
                    sql.push_str(&escape_view_name(
                        catalog,
                        Some("INFORMATION_SCHEMA"),
                        "SYSTEM_USERS",
                        dialect,
                        settings,
                    ));
                }
                sql
            }
            DialectKind::Mssql => format!(
                "SELECT CAST(CASE WHEN EXISTS (SELECT 1 FROM {} WHERE {} = N'{literal}') \
                 THEN 1 ELSE 0 END AS bit)",
                escape_view_name(catalog, Some("sys"), "schemas", dialect, settings),
                escape_name("name", ObjectKind::Column, dialect, settings)
            ),
            DialectKind::Postgres | DialectKind::Generic => format!(
                "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = '{literal}')",
                escape_table_name(catalog, Some("pg_catalog"), "pg_namespace", dialect, settings),
                escape_name("nspname", ObjectKind::Column, dialect, settings)
            ),
        };
        vec![Sql::new(sql, Vec::new())]
    }
}
