//! DDL and introspection statements.
//!
//! Each statement type knows which dialects it supports, how to validate its
//! fields, and how to render itself as SQL. [`generate`] runs those three
//! steps in order.

mod database;
mod exists;
mod identity;
mod schema;

pub use database::{CreateDatabase, DropDatabase};
pub use exists::{CatalogExists, SchemaExists};
pub use identity::{IdentityInsert, SetIdentityInsert};
pub use schema::{CreateSchema, DropSchema};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::dialect::DialectDescriptor;
use crate::error::{GenerateError, Result};
use crate::settings::GenerationSettings;
use crate::validation::ValidationErrors;

/// The statement terminator used when none is specified.
pub const DEFAULT_END_DELIMITER: &str = ";";

/// Identifies a table by its (optional) catalog and schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TableRef {
    /// Catalog name, if given.
    pub catalog: Option<String>,
    /// Schema name, if given.
    pub schema: Option<String>,
    /// Table name.
    pub table: String,
}

impl TableRef {
    /// Creates a reference to a table.
    pub fn new(catalog: Option<&str>, schema: Option<&str>, table: impl Into<String>) -> Self {
        Self {
            catalog: catalog.map(str::to_string),
            schema: schema.map(str::to_string),
            table: table.into(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref catalog) = self.catalog {
            write!(f, "{catalog}.")?;
        }
        if let Some(ref schema) = self.schema {
            write!(f, "{schema}.")?;
        }
        f.write_str(&self.table)
    }
}

/// A database object touched by a generated statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AffectedObject {
    /// A catalog (database).
    Catalog {
        /// Catalog name.
        name: String,
    },
    /// A schema.
    Schema {
        /// Catalog name, if given.
        catalog: Option<String>,
        /// Schema name.
        name: String,
    },
    /// A table.
    Table(TableRef),
}

/// A generated SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sql {
    text: String,
    end_delimiter: &'static str,
    affected: Vec<AffectedObject>,
}

impl Sql {
    /// Creates a statement terminated by [`DEFAULT_END_DELIMITER`].
    pub fn new(text: impl Into<String>, affected: Vec<AffectedObject>) -> Self {
        Self {
            text: text.into(),
            end_delimiter: DEFAULT_END_DELIMITER,
            affected,
        }
    }

    /// Returns the SQL text without its terminator.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the statement terminator.
    #[must_use]
    pub const fn end_delimiter(&self) -> &'static str {
        self.end_delimiter
    }

    /// Returns the objects this statement touches.
    #[must_use]
    pub fn affected(&self) -> &[AffectedObject] {
        &self.affected
    }
}

impl fmt::Display for Sql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A statement that can be rendered as SQL for some dialects.
pub trait SqlStatement {
    /// Returns a short name for log and error messages.
    fn name(&self) -> &'static str;

    /// Returns whether this statement can be generated for `dialect`.
    fn supports(&self, dialect: &DialectDescriptor) -> bool;

    /// Checks the statement's fields for `dialect`.
    fn validate(&self, dialect: &DialectDescriptor) -> ValidationErrors;

    /// Renders the statement. Assumes [`SqlStatement::supports`] and
    /// [`SqlStatement::validate`] passed.
    fn generate_sql(&self, dialect: &DialectDescriptor, settings: GenerationSettings) -> Vec<Sql>;
}

/// Checks support, validates and renders `statement`.
///
/// # Errors
///
/// Returns [`GenerateError::UnsupportedDialect`] if the dialect cannot express
/// the statement and [`GenerateError::Validation`] if a field is invalid.
pub fn generate<S: SqlStatement + ?Sized>(
    statement: &S,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> Result<Vec<Sql>> {
    if !statement.supports(dialect) {
        return Err(GenerateError::UnsupportedDialect {
            statement: statement.name(),
            dialect: dialect.kind(),
        });
    }
    let errors = statement.validate(dialect);
    if !errors.is_empty() {
        return Err(GenerateError::Validation(errors));
    }
    let sql = statement.generate_sql(dialect, settings);
    for s in &sql {
        debug!(statement = statement.name(), dialect = %dialect.kind(), sql = %s, "Generated SQL");
    }
    Ok(sql)
}
