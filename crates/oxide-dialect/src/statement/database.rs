//! CREATE DATABASE and DROP DATABASE.

use crate::dialect::{DialectDescriptor, DialectKind};
use crate::identifier::{escape_name, ObjectKind};
use crate::settings::GenerationSettings;
use crate::validation::ValidationErrors;

use super::{AffectedObject, Sql, SqlStatement};

const fn supports_databases(dialect: &DialectDescriptor) -> bool {
    matches!(dialect.kind(), DialectKind::Mssql | DialectKind::Postgres)
}

fn database_sql(
    verb: &str,
    name: &str,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> Vec<Sql> {
    let sql = format!(
        "{verb} DATABASE {}",
        escape_name(name, ObjectKind::Catalog, dialect, settings)
    );
    vec![Sql::new(
        sql,
        vec![AffectedObject::Catalog {
            name: name.to_string(),
        }],
    )]
}

/// Creates a database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDatabase {
    /// Database to create.
    pub database_name: String,
}

impl CreateDatabase {
    /// Creates the statement for `database_name`.
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
        }
    }
}

impl SqlStatement for CreateDatabase {
    fn name(&self) -> &'static str {
        "createDatabase"
    }

    fn supports(&self, dialect: &DialectDescriptor) -> bool {
        supports_databases(dialect)
    }

    fn validate(&self, _dialect: &DialectDescriptor) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check_required_field("databaseName", Some(&self.database_name));
        errors
    }

    fn generate_sql(&self, dialect: &DialectDescriptor, settings: GenerationSettings) -> Vec<Sql> {
        database_sql("CREATE", &self.database_name, dialect, settings)
    }
}

/// Drops a database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropDatabase {
    /// Database to drop.
    pub database_name: String,
}

impl DropDatabase {
    /// Creates the statement for `database_name`.
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
        }
    }
}

impl SqlStatement for DropDatabase {
    fn name(&self) -> &'static str {
        "dropDatabase"
    }

    fn supports(&self, dialect: &DialectDescriptor) -> bool {
        supports_databases(dialect)
    }

    fn validate(&self, _dialect: &DialectDescriptor) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check_required_field("databaseName", Some(&self.database_name));
        errors
    }

    fn generate_sql(&self, dialect: &DialectDescriptor, settings: GenerationSettings) -> Vec<Sql> {
        database_sql("DROP", &self.database_name, dialect, settings)
    }
}
