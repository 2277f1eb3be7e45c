//! Configuration file and its merge with command-line options.
//!
//! Values are resolved in this order, later wins: the dialect's built-in
//! defaults, the JSON config file, then flags and environment variables.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use oxide_dialect::{DialectDescriptor, DialectKind, GenerationSettings, QuotingStrategy};

use crate::cli::GlobalArgs;
use crate::error::{Result, SqlgenError};

/// Case the database folds unquoted identifiers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnquotedCase {
    /// Folded to upper case.
    Upper,
    /// Folded to lower case.
    Lower,
    /// Depends on the server; names are never folded.
    Unknown,
}

impl UnquotedCase {
    /// Returns the descriptor's `unquoted_objects_are_uppercased` value.
    #[must_use]
    pub const fn uppercased(self) -> Option<bool> {
        match self {
            Self::Upper => Some(true),
            Self::Lower => Some(false),
            Self::Unknown => None,
        }
    }
}

/// Contents of a JSON config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SqlgenConfig {
    /// Target dialect.
    pub dialect: Option<DialectKind>,
    /// Quoting strategy.
    pub quoting_strategy: Option<QuotingStrategy>,
    /// Overrides the dialect's case folding.
    pub unquoted_case: Option<UnquotedCase>,
    /// Default catalog of the connection.
    pub default_catalog: Option<String>,
    /// Default schema of the connection.
    pub default_schema: Option<String>,
    /// Whether the default catalog is written in qualified names.
    pub output_default_catalog: Option<bool>,
    /// Whether the default schema is written in qualified names.
    pub output_default_schema: Option<bool>,
    /// Generation toggles.
    pub settings: GenerationSettings,
}

impl SqlgenConfig {
    /// Reads a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Applies command-line options on top of this config.
    #[must_use]
    pub fn with_overrides(mut self, args: &GlobalArgs) -> Self {
        if args.dialect.is_some() {
            self.dialect = args.dialect;
        }
        if args.unquoted_case.is_some() {
            self.unquoted_case = args.unquoted_case;
        }
        if args.quote_all {
            self.quoting_strategy = Some(QuotingStrategy::QuoteAllObjects);
        }
        if let Some(ref catalog) = args.default_catalog {
            self.default_catalog = Some(catalog.clone());
        }
        if let Some(ref schema) = args.default_schema {
            self.default_schema = Some(schema.clone());
        }
        if args.output_default_catalog.is_some() {
            self.output_default_catalog = args.output_default_catalog;
        }
        if args.output_default_schema.is_some() {
            self.output_default_schema = args.output_default_schema;
        }
        if args.preserve_schema_case {
            self.settings.preserve_schema_case = true;
        }
        if args.include_catalog {
            self.settings.include_catalog_in_specification = true;
        }
        self
    }

    /// Builds the dialect descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`SqlgenError::InvalidArgument`] if no dialect was chosen.
    pub fn descriptor(&self) -> Result<DialectDescriptor> {
        let kind = self.dialect.ok_or_else(|| {
            SqlgenError::InvalidArgument(String::from(
                "no dialect given; pass --dialect or set \"dialect\" in the config file",
            ))
        })?;
        let mut dialect = kind.descriptor();
        if let Some(strategy) = self.quoting_strategy {
            dialect = dialect.with_quoting_strategy(strategy);
        }
        if let Some(case) = self.unquoted_case {
            dialect = dialect.with_unquoted_objects_are_uppercased(case.uppercased());
        }
        if let Some(ref catalog) = self.default_catalog {
            dialect = dialect.with_default_catalog(catalog.as_str());
        }
        if let Some(ref schema) = self.default_schema {
            dialect = dialect.with_default_schema(schema.as_str());
        }
        if let Some(output) = self.output_default_catalog {
            dialect = dialect.with_output_default_catalog(output);
        }
        if let Some(output) = self.output_default_schema {
            dialect = dialect.with_output_default_schema(output);
        }
        Ok(dialect)
    }
}

/// Loads the config file named by `args`, if any, and applies `args` on top.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or parsed.
pub fn resolve(args: &GlobalArgs) -> Result<SqlgenConfig> {
    let base = match args.config {
        Some(ref path) => SqlgenConfig::load(path)?,
        None => SqlgenConfig::default(),
    };
    Ok(base.with_overrides(args))
}
