//! Identifier policy: quoting, case folding and escaping of object names.
//!
//! Every function takes the dialect and the generation settings explicitly,
//! so the result only depends on its arguments.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dialect::{DialectDescriptor, QuotingStrategy};
use crate::settings::GenerationSettings;

static LEGAL_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap_or_else(|e| panic!("invalid pattern: {e}"))
});

/// The kind of database object a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// A catalog (database).
    Catalog,
    /// A schema.
    Schema,
    /// A table.
    Table,
    /// A view.
    View,
    /// A column.
    Column,
    /// An index. Never catalog or schema qualified.
    Index,
    /// Anything else (sequences, constraints, ...).
    Other,
}

impl ObjectKind {
    /// Returns whether this kind is a catalog or a schema.
    #[must_use]
    pub const fn is_catalog_or_schema(self) -> bool {
        matches!(self, Self::Catalog | Self::Schema)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Catalog => "catalog",
            Self::Schema => "schema",
            Self::Table => "table",
            Self::View => "view",
            Self::Column => "column",
            Self::Index => "index",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

impl FromStr for ObjectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "catalog" | "database" => Ok(Self::Catalog),
            "schema" => Ok(Self::Schema),
            "table" => Ok(Self::Table),
            "view" => Ok(Self::View),
            "column" => Ok(Self::Column),
            "index" => Ok(Self::Index),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown object kind: {s}")),
        }
    }
}

/// Returns whether `name` cannot be written as a plain unquoted identifier.
#[must_use]
pub fn is_illegal_identifier(name: &str) -> bool {
    !LEGAL_IDENTIFIER.is_match(name)
}

fn fold_case(name: &str, uppercased: bool) -> String {
    if uppercased {
        name.to_uppercase()
    } else {
        name.to_lowercase()
    }
}

/// Returns whether `name` must be quoted to survive the dialect's parser.
#[must_use]
pub fn must_quote(
    name: &str,
    kind: ObjectKind,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> bool {
    if dialect.quoting_strategy() == QuotingStrategy::QuoteAllObjects
        || is_illegal_identifier(name)
        || dialect.is_reserved_word(name)
    {
        return true;
    }
    // Preserving catalog/schema case needs quotes whenever the dialect would
    // fold the name into something else.
    dialect
        .unquoted_objects_are_uppercased()
        .is_some_and(|uppercased| {
            kind.is_catalog_or_schema()
                && settings.preserve_schema_case
                && name != fold_case(name, uppercased)
        })
}

/// Folds `name` to the case the dialect stores unquoted identifiers in.
///
/// The name is returned unchanged when the folding direction is unknown,
/// when every object is quoted, or when the name is a catalog or schema and
/// schema case is preserved.
#[must_use]
pub fn correct_name(
    name: &str,
    kind: ObjectKind,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> String {
    let Some(uppercased) = dialect.unquoted_objects_are_uppercased() else {
        return name.to_string();
    };
    if dialect.quoting_strategy() == QuotingStrategy::QuoteAllObjects
        || (kind.is_catalog_or_schema() && settings.preserve_schema_case)
    {
        return name.to_string();
    }
    fold_case(name, uppercased)
}

/// Returns `name` as it must appear in SQL text.
///
/// Names that need quoting are case-corrected first, then quoted.
#[must_use]
pub fn escape_name(
    name: &str,
    kind: ObjectKind,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> String {
    if must_quote(name, kind, dialect, settings) {
        dialect.quote_object(&correct_name(name, kind, dialect, settings))
    } else {
        name.to_string()
    }
}

/// Like [`escape_name`], passing an absent name through as absent.
#[must_use]
pub fn escape_optional_name(
    name: Option<&str>,
    kind: ObjectKind,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> Option<String> {
    name.map(|n| escape_name(n, kind, dialect, settings))
}
