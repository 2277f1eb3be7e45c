//! Insert-or-update ("upsert") planning.
//!
//! [`plan_upsert`] validates an [`UpsertRequest`], classifies its columns and
//! hands them to the generator registered for the dialect. Every generator
//! produces a single statement plus the ordered list of columns whose values
//! must be bound to its `?` placeholders.
//!
//! | Dialect    | Statement shape                                        |
//! |------------|--------------------------------------------------------|
//! | H2         | `MERGE INTO .. KEY (..) VALUES (..)`                    |
//! | HSQLDB     | `MERGE INTO .. USING (VALUES (1)) ON .. WHEN ..`        |
//! | PostgreSQL | `INSERT INTO .. VALUES (..) ON CONFLICT (..) DO UPDATE` |
//! | any        | `UPDATE .. SET .. WHERE ..` when only updating          |

mod h2;
mod hsql;
mod postgres;
mod request;
mod update;

pub use h2::MergeKey;
pub use hsql::MergeUsingValues;
pub use postgres::InsertOnConflict;
pub use request::{ColumnSpec, UpsertRequest};
pub use update::prepare_update_sql;

use tracing::debug;

use crate::dialect::DialectDescriptor;
use crate::error::{GenerateError, Result};
use crate::identifier::{escape_name, ObjectKind};
use crate::qualified::escape_table_name;
use crate::settings::GenerationSettings;
use crate::statement::{TableRef, DEFAULT_END_DELIMITER};
use crate::value::{SqlValue, ValueExpr};

/// Priority of the built-in generators.
pub const DEFAULT_PRIORITY: i32 = 1;

/// A column of a request together with its role in the statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnValue<'a> {
    column: &'a ColumnSpec,
    primary_key: bool,
}

impl<'a> ColumnValue<'a> {
    /// Returns the underlying column.
    #[must_use]
    pub const fn column(&self) -> &'a ColumnSpec {
        self.column
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.column.name
    }

    /// Returns whether the column is part of the primary key.
    #[must_use]
    pub const fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    /// Returns whether the column may be overwritten on an existing row.
    #[must_use]
    pub const fn allow_update(&self) -> bool {
        self.column.allow_update
    }

    /// Returns whether the column belongs in the update branch.
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        !self.primary_key && self.column.allow_update
    }

    /// Returns whether the value is passed as a bind parameter.
    #[must_use]
    pub const fn is_bind_value(&self) -> bool {
        self.column.is_bind_value()
    }
}

/// Classifies the request's columns, keeping their order.
#[must_use]
pub fn classify_columns(request: &UpsertRequest) -> Vec<ColumnValue<'_>> {
    let key = request.primary_key_column_names();
    request
        .columns
        .iter()
        .map(|column| ColumnValue {
            column,
            primary_key: key.contains(&column.name.as_str()),
        })
        .collect()
}

/// A planned statement with the columns bound to its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSql {
    sql: String,
    bind_columns: Vec<ColumnSpec>,
    affected_table: TableRef,
    end_delimiter: &'static str,
}

impl PreparedSql {
    /// Creates a prepared statement terminated by [`DEFAULT_END_DELIMITER`].
    pub fn new(sql: impl Into<String>, bind_columns: Vec<ColumnSpec>, affected_table: TableRef) -> Self {
        Self {
            sql: sql.into(),
            bind_columns,
            affected_table,
            end_delimiter: DEFAULT_END_DELIMITER,
        }
    }

    /// Returns the SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the columns bound to the placeholders, in placeholder order.
    /// A column used in several clauses appears once per clause.
    #[must_use]
    pub fn bind_columns(&self) -> &[ColumnSpec] {
        &self.bind_columns
    }

    /// Returns the names of the bound columns, in placeholder order.
    #[must_use]
    pub fn bind_column_names(&self) -> Vec<&str> {
        self.bind_columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns the table the statement writes to.
    #[must_use]
    pub const fn affected_table(&self) -> &TableRef {
        &self.affected_table
    }

    /// Returns the statement terminator.
    #[must_use]
    pub const fn end_delimiter(&self) -> &'static str {
        self.end_delimiter
    }

    /// Returns the parameter values, in placeholder order.
    #[must_use]
    pub fn bind_values(&self) -> Vec<SqlValue> {
        self.bind_columns
            .iter()
            .filter_map(|c| match &c.value {
                ValueExpr::Bind(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    /// Splits the statement into its SQL text and parameter values.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        let params = self.bind_values();
        (self.sql, params)
    }
}

/// Generates the insert-or-update statement for one dialect.
pub trait InsertOrUpdateGenerator {
    /// Returns a short name for log messages.
    fn name(&self) -> &'static str;

    /// Returns whether this generator handles `dialect`.
    fn supports(&self, dialect: &DialectDescriptor) -> bool;

    /// Returns the priority among generators supporting the same dialect.
    /// Higher wins.
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    /// Renders the insert-or-update statement for classified columns.
    fn prepare_insert_or_update_sql(
        &self,
        dialect: &DialectDescriptor,
        settings: GenerationSettings,
        request: &UpsertRequest,
        columns: &[ColumnValue<'_>],
    ) -> PreparedSql;

    /// Classifies the request's columns and renders either the update-only
    /// statement or this generator's insert-or-update statement.
    fn prepare_sql(
        &self,
        dialect: &DialectDescriptor,
        settings: GenerationSettings,
        request: &UpsertRequest,
    ) -> PreparedSql {
        let columns = classify_columns(request);
        if request.only_update {
            prepare_update_sql(dialect, settings, request, &columns)
        } else {
            self.prepare_insert_or_update_sql(dialect, settings, request, &columns)
        }
    }
}

static GENERATORS: &[&(dyn InsertOrUpdateGenerator + Sync)] =
    &[&MergeKey, &MergeUsingValues, &InsertOnConflict];

/// Returns the highest-priority generator supporting `dialect`.
#[must_use]
pub fn generator_for(
    dialect: &DialectDescriptor,
) -> Option<&'static (dyn InsertOrUpdateGenerator + Sync)> {
    GENERATORS
        .iter()
        .copied()
        .filter(|generator| generator.supports(dialect))
        .max_by_key(|generator| generator.priority())
}

/// Validates `request` and plans its statement for `dialect`.
///
/// Update-only requests work on every dialect. Other requests need a
/// generator registered for the dialect.
///
/// # Errors
///
/// Returns [`GenerateError::Validation`] if the request is invalid and
/// [`GenerateError::UnsupportedDialect`] if no generator handles the dialect.
pub fn plan_upsert(
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
    request: &UpsertRequest,
) -> Result<PreparedSql> {
    let mut errors = request.validate();
    if request.only_update
        && errors.is_empty()
        && !classify_columns(request).iter().any(ColumnValue::is_updated)
    {
        errors.add("columns", "onlyUpdate needs at least one updatable column");
    }
    if !errors.is_empty() {
        return Err(GenerateError::Validation(errors));
    }

    let prepared = if request.only_update {
        let columns = classify_columns(request);
        prepare_update_sql(dialect, settings, request, &columns)
    } else {
        let generator = generator_for(dialect).ok_or_else(|| GenerateError::UnsupportedDialect {
            statement: "insertOrUpdate",
            dialect: dialect.kind(),
        })?;
        debug!(generator = generator.name(), dialect = %dialect.kind(), "Selected upsert generator");
        generator.prepare_sql(dialect, settings, request)
    };

    debug!(
        table = %prepared.affected_table(),
        sql = %prepared.sql(),
        binds = prepared.bind_columns().len(),
        "Planned upsert"
    );
    Ok(prepared)
}

// Rendering helpers shared by the generators.

fn table_name(
    request: &UpsertRequest,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> String {
    escape_table_name(
        request.catalog_name.as_deref(),
        request.schema_name.as_deref(),
        &request.table_name,
        dialect,
        settings,
    )
}

fn column_name(
    column: &ColumnValue<'_>,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> String {
    escape_name(column.name(), ObjectKind::Column, dialect, settings)
}

/// Renders a column's value: `?` for bound values, the function text or
/// literal otherwise.
#[must_use]
pub fn column_value_to_sql(column: &ColumnValue<'_>, dialect: &DialectDescriptor) -> String {
    column.column().value.to_sql(dialect)
}

fn name_list<'c, 'a: 'c>(
    columns: impl IntoIterator<Item = &'c ColumnValue<'a>>,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> String {
    columns
        .into_iter()
        .map(|c| column_name(c, dialect, settings))
        .collect::<Vec<_>>()
        .join(", ")
}

fn value_list<'c, 'a: 'c>(
    columns: impl IntoIterator<Item = &'c ColumnValue<'a>>,
    dialect: &DialectDescriptor,
) -> String {
    columns
        .into_iter()
        .map(|c| column_value_to_sql(c, dialect))
        .collect::<Vec<_>>()
        .join(", ")
}

fn assignments<'c, 'a: 'c>(
    columns: impl IntoIterator<Item = &'c ColumnValue<'a>>,
    separator: &str,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> String {
    columns
        .into_iter()
        .map(|c| {
            format!(
                "{} = {}",
                column_name(c, dialect, settings),
                column_value_to_sql(c, dialect)
            )
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Collects the bound columns in placeholder order.
fn bind_columns<'c, 'a: 'c>(
    columns: impl IntoIterator<Item = &'c ColumnValue<'a>>,
) -> Vec<ColumnSpec> {
    columns
        .into_iter()
        .filter(|c| c.is_bind_value())
        .map(|c| c.column().clone())
        .collect()
}

fn key_columns<'c, 'a>(columns: &'c [ColumnValue<'a>]) -> Vec<&'c ColumnValue<'a>> {
    columns.iter().filter(|c| c.is_primary_key()).collect()
}

fn update_columns<'c, 'a>(columns: &'c [ColumnValue<'a>]) -> Vec<&'c ColumnValue<'a>> {
    columns.iter().filter(|c| c.is_updated()).collect()
}
