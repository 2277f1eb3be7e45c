//! SQL values and column value expressions.
//!
//! Values are bound as parameters wherever possible. Only database
//! functions and explicit literals are written into the SQL text, and
//! literals are escaped for the target dialect.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::dialect::{DialectDescriptor, DialectKind};

/// A SQL value that can be used as a parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Returns the literal SQL form of this value in `dialect`.
    #[must_use]
    pub fn to_sql_literal(&self, dialect: &DialectDescriptor) -> String {
        let kind = dialect.kind();
        match self {
            Self::Null => String::from("NULL"),
            Self::Bool(b) => match (kind, b) {
                (DialectKind::Mssql, true) => String::from("1"),
                (DialectKind::Mssql, false) => String::from("0"),
                (_, true) => String::from("TRUE"),
                (_, false) => String::from("FALSE"),
            },
            Self::Int(n) => format!("{n}"),
            // SQL has no literal for NaN or infinity.
            Self::Float(f) if !f.is_finite() => String::from("NULL"),
            Self::Float(f) => format!("{f}"),
            Self::Text(s) => {
                let escaped = dialect.escape_string(s);
                if kind == DialectKind::Mssql {
                    format!("N'{escaped}'")
                } else {
                    format!("'{escaped}'")
                }
            }
            Self::Blob(b) => {
                let hex = b.iter().fold(String::with_capacity(b.len() * 2), |mut out, byte| {
                    let _ = write!(out, "{byte:02X}");
                    out
                });
                match kind {
                    DialectKind::Postgres => format!("'\\x{hex}'"),
                    DialectKind::Mssql => format!("0x{hex}"),
                    _ => format!("X'{hex}'"),
                }
            }
        }
    }

    /// Returns the parameter placeholder.
    #[must_use]
    pub const fn placeholder() -> &'static str {
        "?"
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

impl ToSqlValue for i64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

impl ToSqlValue for i32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for u32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(i64::from(self))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        self.map_or(SqlValue::Null, ToSqlValue::to_sql_value)
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self)
    }
}

/// The value a column receives in a generated statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueExpr {
    /// A value passed as a bind parameter (`?`).
    Bind(SqlValue),
    /// A database function call such as `CURRENT_TIMESTAMP`, written verbatim.
    Function(String),
    /// A value inlined as a literal; `None` renders `NULL`.
    Literal(Option<SqlValue>),
}

impl ValueExpr {
    /// Creates a bound value.
    pub fn bind(value: impl ToSqlValue) -> Self {
        Self::Bind(value.to_sql_value())
    }

    /// Creates a database function marker.
    pub fn function(expression: impl Into<String>) -> Self {
        Self::Function(expression.into())
    }

    /// Returns whether this value is passed as a bind parameter.
    #[must_use]
    pub const fn is_bind_value(&self) -> bool {
        matches!(self, Self::Bind(_))
    }

    /// Returns the SQL text for this value: a placeholder for bound values,
    /// the expression for functions, and the dialect literal otherwise.
    #[must_use]
    pub fn to_sql(&self, dialect: &DialectDescriptor) -> String {
        match self {
            Self::Bind(_) => String::from(SqlValue::placeholder()),
            Self::Function(expression) => expression.clone(),
            Self::Literal(Some(value)) => value.to_sql_literal(dialect),
            Self::Literal(None) => String::from("NULL"),
        }
    }
}
