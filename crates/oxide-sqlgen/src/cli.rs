//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

use oxide_dialect::{DialectKind, ObjectKind};

use crate::config::UnquotedCase;

/// Dialect-aware SQL generation for migrations.
#[derive(Debug, Parser)]
#[command(name = "oxide-sqlgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand. They override the config file.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Target dialect (h2, hsqldb, postgresql, mssql, generic).
    #[arg(short, long, global = true, env = "OXIDE_SQLGEN_DIALECT")]
    pub dialect: Option<DialectKind>,

    /// Default catalog of the connection.
    #[arg(long, global = true, env = "OXIDE_SQLGEN_DEFAULT_CATALOG")]
    pub default_catalog: Option<String>,

    /// Default schema of the connection.
    #[arg(long, global = true, env = "OXIDE_SQLGEN_DEFAULT_SCHEMA")]
    pub default_schema: Option<String>,

    /// Write the default catalog in qualified names.
    #[arg(long, global = true, env = "OXIDE_SQLGEN_OUTPUT_DEFAULT_CATALOG")]
    pub output_default_catalog: Option<bool>,

    /// Write the default schema in qualified names.
    #[arg(long, global = true, env = "OXIDE_SQLGEN_OUTPUT_DEFAULT_SCHEMA")]
    pub output_default_schema: Option<bool>,

    /// Case unquoted identifiers fold to.
    #[arg(long, global = true, value_enum, env = "OXIDE_SQLGEN_UNQUOTED_CASE")]
    pub unquoted_case: Option<UnquotedCase>,

    /// Quote every identifier.
    #[arg(long, global = true, env = "OXIDE_SQLGEN_QUOTE_ALL")]
    pub quote_all: bool,

    /// Keep the case of catalog and schema names.
    #[arg(long, global = true, env = "OXIDE_SQLGEN_PRESERVE_SCHEMA_CASE")]
    pub preserve_schema_case: bool,

    /// Write the default catalog into qualified names.
    #[arg(long, global = true, env = "OXIDE_SQLGEN_INCLUDE_CATALOG")]
    pub include_catalog: bool,

    /// JSON config file.
    #[arg(short, long, global = true, env = "OXIDE_SQLGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Plan an insert-or-update from a JSON request.
    Upsert {
        /// JSON file with the upsert request.
        #[arg(short, long)]
        request: PathBuf,
    },

    /// Escape an object name, qualifying it when needed.
    Escape {
        /// Object kind (catalog, schema, table, view, column, index, other).
        #[arg(short, long, default_value = "table")]
        kind: ObjectKind,

        /// Catalog of the object.
        #[arg(long)]
        catalog: Option<String>,

        /// Schema of the object.
        #[arg(long)]
        schema: Option<String>,

        /// Object name.
        name: String,
    },

    /// CREATE SCHEMA.
    CreateSchema {
        /// Schema name.
        name: String,

        /// Catalog name.
        #[arg(long)]
        catalog: Option<String>,
    },

    /// DROP SCHEMA.
    DropSchema {
        /// Schema name.
        name: String,

        /// Catalog name (SQL Server only).
        #[arg(long)]
        catalog: Option<String>,
    },

    /// CREATE DATABASE.
    CreateDatabase {
        /// Database name.
        name: String,
    },

    /// DROP DATABASE.
    DropDatabase {
        /// Database name.
        name: String,
    },

    /// Query whether a schema exists.
    SchemaExists {
        /// Schema name.
        name: String,

        /// Catalog to search in.
        #[arg(long)]
        catalog: Option<String>,
    },

    /// Query whether a catalog exists.
    CatalogExists {
        /// Catalog name.
        name: String,
    },

    /// SET IDENTITY_INSERT (SQL Server).
    #[command(group(ArgGroup::new("state").required(true).args(["on", "off"])))]
    IdentityInsert {
        /// Table name.
        #[arg(long)]
        table: String,

        /// Schema of the table.
        #[arg(long)]
        schema: Option<String>,

        /// Catalog of the table.
        #[arg(long)]
        catalog: Option<String>,

        /// Allow explicit identity values.
        #[arg(long)]
        on: bool,

        /// Generate identity values again.
        #[arg(long)]
        off: bool,
    },
}
