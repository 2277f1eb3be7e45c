//! Upsert request types.

use serde::{Deserialize, Serialize};

use crate::statement::TableRef;
use crate::validation::ValidationErrors;
use crate::value::{ToSqlValue, ValueExpr};

const fn default_true() -> bool {
    true
}

/// One column of an upsert and the value it receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Column name.
    pub name: String,
    /// Value expression.
    pub value: ValueExpr,
    /// Whether an existing row may have this column overwritten.
    #[serde(default = "default_true")]
    pub allow_update: bool,
}

impl ColumnSpec {
    /// Creates a column with an arbitrary value expression.
    pub fn new(name: impl Into<String>, value: ValueExpr) -> Self {
        Self {
            name: name.into(),
            value,
            allow_update: true,
        }
    }

    /// Creates a column whose value is passed as a bind parameter.
    pub fn bind(name: impl Into<String>, value: impl ToSqlValue) -> Self {
        Self::new(name, ValueExpr::bind(value))
    }

    /// Creates a column set to a database function such as `NOW()`.
    pub fn function(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self::new(name, ValueExpr::function(expression))
    }

    /// Keeps the column out of the update branch.
    #[must_use]
    pub const fn insert_only(mut self) -> Self {
        self.allow_update = false;
        self
    }

    /// Returns whether the value is passed as a bind parameter.
    #[must_use]
    pub const fn is_bind_value(&self) -> bool {
        self.value.is_bind_value()
    }
}

/// A request to insert a row or update it when its key already exists.
///
/// The primary key is a comma-delimited list of column names; surrounding
/// whitespace is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpsertRequest {
    /// Catalog holding the table.
    pub catalog_name: Option<String>,
    /// Schema holding the table.
    pub schema_name: Option<String>,
    /// Target table.
    pub table_name: String,
    /// Comma-delimited primary key column names.
    pub primary_key: String,
    /// Only update existing rows, never insert.
    pub only_update: bool,
    /// Columns in statement order.
    pub columns: Vec<ColumnSpec>,
}

impl UpsertRequest {
    /// Creates a request for `table_name` keyed by `primary_key`.
    pub fn new(table_name: impl Into<String>, primary_key: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            primary_key: primary_key.into(),
            ..Self::default()
        }
    }

    /// Sets the catalog name.
    #[must_use]
    pub fn catalog(mut self, catalog_name: impl Into<String>) -> Self {
        self.catalog_name = Some(catalog_name.into());
        self
    }

    /// Sets the schema name.
    #[must_use]
    pub fn schema(mut self, schema_name: impl Into<String>) -> Self {
        self.schema_name = Some(schema_name.into());
        self
    }

    /// Sets the update-only flag.
    #[must_use]
    pub const fn only_update(mut self, only_update: bool) -> Self {
        self.only_update = only_update;
        self
    }

    /// Appends a column.
    #[must_use]
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    /// Returns the primary key column names in declaration order, without
    /// duplicates or empty entries.
    #[must_use]
    pub fn primary_key_column_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.primary_key.split(',').map(str::trim) {
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Returns the target table.
    #[must_use]
    pub fn table_ref(&self) -> TableRef {
        TableRef::new(
            self.catalog_name.as_deref(),
            self.schema_name.as_deref(),
            self.table_name.as_str(),
        )
    }

    /// Checks that the request describes a usable statement.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check_required_field("tableName", Some(&self.table_name));

        let key = self.primary_key_column_names();
        if key.is_empty() {
            errors.add("primaryKey", "primaryKey is required");
        }
        for name in key {
            if !self.columns.iter().any(|c| c.name == name) {
                errors.add(
                    "primaryKey",
                    format!("primary key column {name} has no value"),
                );
            }
        }

        if self.columns.is_empty() {
            errors.add("columns", "at least one column is required");
        }
        let mut seen: Vec<&str> = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let name = column.name.as_str();
            if name.trim().is_empty() {
                errors.add("columns", "column name must not be blank");
            } else if seen.contains(&name) {
                errors.add("columns", format!("column {name} is listed more than once"));
            } else {
                seen.push(name);
            }
        }
        errors
    }
}
