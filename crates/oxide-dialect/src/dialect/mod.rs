//! SQL dialect descriptors.
//!
//! A [`DialectDescriptor`] captures everything the identifier policy and the
//! statement generators need to know about a database product: how
//! identifiers are quoted, what case unquoted identifiers fold to, which
//! catalog and schema are the defaults, and whether those defaults are
//! written out in qualified names.
//!
//! Descriptors are plain values. They are built once per migration run (or
//! per test) from a [`DialectKind`] and then adjusted with the `with_*`
//! builder methods.

mod keywords;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The database products with dedicated SQL generation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// H2 database engine.
    H2,
    /// HyperSQL (HSQLDB).
    #[serde(alias = "hsqldb")]
    Hsql,
    /// PostgreSQL.
    #[serde(alias = "postgresql")]
    Postgres,
    /// Microsoft SQL Server.
    #[serde(alias = "sqlserver")]
    Mssql,
    /// ANSI SQL without product-specific behavior.
    Generic,
}

impl DialectKind {
    /// All known dialect kinds.
    pub const ALL: [Self; 5] = [Self::H2, Self::Hsql, Self::Postgres, Self::Mssql, Self::Generic];

    /// Returns the short product name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::H2 => "h2",
            Self::Hsql => "hsqldb",
            Self::Postgres => "postgresql",
            Self::Mssql => "mssql",
            Self::Generic => "generic",
        }
    }

    /// Returns the descriptor with this product's built-in defaults.
    #[must_use]
    pub fn descriptor(self) -> DialectDescriptor {
        DialectDescriptor::new(self)
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a dialect name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect: {0}")]
pub struct UnknownDialect(pub String);

impl FromStr for DialectKind {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h2" => Ok(Self::H2),
            "hsql" | "hsqldb" => Ok(Self::Hsql),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mssql" | "sqlserver" => Ok(Self::Mssql),
            "generic" | "ansi" => Ok(Self::Generic),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

/// Policy deciding which identifiers get wrapped in quote characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotingStrategy {
    /// Quote only identifiers that would otherwise be misread.
    #[default]
    Legacy,
    /// Quote every identifier and never fold its case.
    QuoteAllObjects,
}

/// Describes one database product's identifier and naming rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectDescriptor {
    kind: DialectKind,
    quoting_strategy: QuotingStrategy,
    unquoted_objects_are_uppercased: Option<bool>,
    default_catalog_name: Option<String>,
    default_schema_name: Option<String>,
    output_default_catalog: bool,
    output_default_schema: bool,
    supports_omitted_inner_schema_name: bool,
    quote_start: char,
    quote_end: char,
    quote_end_replacement: &'static str,
}

impl DialectDescriptor {
    /// Creates a descriptor with the built-in defaults of `kind`.
    #[must_use]
    pub fn new(kind: DialectKind) -> Self {
        let base = Self {
            kind,
            quoting_strategy: QuotingStrategy::Legacy,
            unquoted_objects_are_uppercased: Some(true),
            default_catalog_name: None,
            default_schema_name: None,
            output_default_catalog: true,
            output_default_schema: true,
            supports_omitted_inner_schema_name: false,
            quote_start: '"',
            quote_end: '"',
            quote_end_replacement: "\"\"",
        };
        match kind {
            DialectKind::H2 => Self {
                default_schema_name: Some("PUBLIC".to_string()),
                ..base
            },
            DialectKind::Hsql => Self {
                default_catalog_name: Some("PUBLIC".to_string()),
                default_schema_name: Some("PUBLIC".to_string()),
                ..base
            },
            DialectKind::Postgres => Self {
                unquoted_objects_are_uppercased: Some(false),
                default_schema_name: Some("public".to_string()),
                ..base
            },
            // SQL Server compares identifiers according to the collation, so
            // the folding direction is unknown.
            DialectKind::Mssql => Self {
                unquoted_objects_are_uppercased: None,
                default_schema_name: Some("dbo".to_string()),
                supports_omitted_inner_schema_name: true,
                quote_start: '[',
                quote_end: ']',
                quote_end_replacement: "]]",
                ..base
            },
            DialectKind::Generic => base,
        }
    }

    /// Sets the quoting strategy.
    #[must_use]
    pub const fn with_quoting_strategy(mut self, strategy: QuotingStrategy) -> Self {
        self.quoting_strategy = strategy;
        self
    }

    /// Sets the case unquoted identifiers fold to (`None` when unknown).
    #[must_use]
    pub const fn with_unquoted_objects_are_uppercased(mut self, uppercased: Option<bool>) -> Self {
        self.unquoted_objects_are_uppercased = uppercased;
        self
    }

    /// Sets the default catalog, usually the database the connection points at.
    #[must_use]
    pub fn with_default_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.default_catalog_name = Some(catalog.into());
        self
    }

    /// Sets the default schema.
    #[must_use]
    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema_name = Some(schema.into());
        self
    }

    /// Controls whether the default catalog is written in qualified names.
    #[must_use]
    pub const fn with_output_default_catalog(mut self, output: bool) -> Self {
        self.output_default_catalog = output;
        self
    }

    /// Controls whether the default schema is written in qualified names.
    #[must_use]
    pub const fn with_output_default_schema(mut self, output: bool) -> Self {
        self.output_default_schema = output;
        self
    }

    /// Returns the product this descriptor belongs to.
    #[must_use]
    pub const fn kind(&self) -> DialectKind {
        self.kind
    }

    /// Returns the quoting strategy.
    #[must_use]
    pub const fn quoting_strategy(&self) -> QuotingStrategy {
        self.quoting_strategy
    }

    /// Returns `Some(true)` if unquoted identifiers fold to upper case,
    /// `Some(false)` for lower case and `None` when unknown.
    #[must_use]
    pub const fn unquoted_objects_are_uppercased(&self) -> Option<bool> {
        self.unquoted_objects_are_uppercased
    }

    /// Returns the default catalog name.
    #[must_use]
    pub fn default_catalog_name(&self) -> Option<&str> {
        self.default_catalog_name.as_deref()
    }

    /// Returns the default schema name.
    #[must_use]
    pub fn default_schema_name(&self) -> Option<&str> {
        self.default_schema_name.as_deref()
    }

    /// Returns whether the default catalog is written in qualified names.
    #[must_use]
    pub const fn output_default_catalog(&self) -> bool {
        self.output_default_catalog
    }

    /// Returns whether the default schema is written in qualified names.
    #[must_use]
    pub const fn output_default_schema(&self) -> bool {
        self.output_default_schema
    }

    /// Returns whether `catalog.` followed by an empty schema segment
    /// (`cat..object`) is understood as "default schema of that catalog".
    #[must_use]
    pub const fn supports_omitted_inner_schema_name(&self) -> bool {
        self.supports_omitted_inner_schema_name
    }

    /// Returns whether `catalog` refers to the default catalog.
    ///
    /// An absent catalog always means the default one.
    #[must_use]
    pub fn is_default_catalog(&self, catalog: Option<&str>) -> bool {
        catalog.is_none_or(|name| {
            self.default_catalog_name
                .as_deref()
                .is_some_and(|default| default.eq_ignore_ascii_case(name))
        })
    }

    /// Returns whether `schema` in `catalog` refers to the default schema.
    #[must_use]
    pub fn is_default_schema(&self, catalog: Option<&str>, schema: Option<&str>) -> bool {
        if !self.is_default_catalog(catalog) {
            return false;
        }
        schema.is_none_or(|name| {
            self.default_schema_name
                .as_deref()
                .is_some_and(|default| default.eq_ignore_ascii_case(name))
        })
    }

    /// Returns whether `word` is reserved in this dialect.
    #[must_use]
    pub fn is_reserved_word(&self, word: &str) -> bool {
        keywords::is_reserved(self.kind, word)
    }

    /// Wraps `name` in this dialect's quote characters, escaping any
    /// embedded closing quote.
    #[must_use]
    pub fn quote_object(&self, name: &str) -> String {
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(self.quote_start);
        for c in name.chars() {
            if c == self.quote_end {
                quoted.push_str(self.quote_end_replacement);
            } else {
                quoted.push(c);
            }
        }
        quoted.push(self.quote_end);
        quoted
    }

    /// Escapes a value for use inside a single-quoted string literal.
    #[must_use]
    pub fn escape_string(&self, value: &str) -> String {
        value.replace('\'', "''")
    }
}

impl Default for DialectDescriptor {
    fn default() -> Self {
        Self::new(DialectKind::Generic)
    }
}
