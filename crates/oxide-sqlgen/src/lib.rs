//! Command-line SQL generation for dialect-aware migrations.
//!
//! `oxide-sqlgen` turns a dialect (plus its naming options) and a command
//! into SQL text:
//!
//! - **Upserts** from a JSON request, followed by the column bound to each
//!   placeholder
//! - **Names** escaped and qualified the way the dialect needs them
//! - **DDL and introspection** for schemas, databases and identity inserts
//!
//! # CLI Usage
//!
//! ```bash
//! # Plan an upsert for PostgreSQL
//! oxide-sqlgen --dialect postgresql upsert --request users.json
//!
//! # Escape a table name for SQL Server, showing the catalog
//! oxide-sqlgen --dialect mssql --default-catalog app --include-catalog escape Orders
//!
//! # Read dialect options from a config file
//! oxide-sqlgen --config sqlgen.json schema-exists sales
//! ```

pub mod cli;
pub mod config;
pub mod error;

use std::fmt::Write as _;
use std::fs;

use tracing::info;

use oxide_dialect::{
    escape_qualified_name, generate, plan_upsert, CatalogExists, CreateDatabase, CreateSchema,
    DialectDescriptor, DropDatabase, DropSchema, GenerationSettings, IdentityInsert,
    PreparedSql, SchemaExists, SetIdentityInsert, Sql, SqlStatement, UpsertRequest,
};

use crate::cli::{Cli, Commands};
pub use crate::config::SqlgenConfig;
pub use crate::error::{Result, SqlgenError};

/// Renders statements one per line, each followed by its end delimiter.
#[must_use]
pub fn render_statements(statements: &[Sql]) -> String {
    let mut out = String::new();
    for sql in statements {
        let _ = writeln!(out, "{}{}", sql.text(), sql.end_delimiter());
    }
    out
}

/// Renders a planned upsert followed by one `-- bind` line per placeholder.
#[must_use]
pub fn render_prepared(prepared: &PreparedSql) -> String {
    let mut out = format!("{}{}\n", prepared.sql(), prepared.end_delimiter());
    for (i, name) in prepared.bind_column_names().iter().enumerate() {
        let _ = writeln!(out, "-- bind {}: {name}", i + 1);
    }
    out
}

fn statement_output(
    statement: &dyn SqlStatement,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> Result<String> {
    let sql = generate(statement, dialect, settings)?;
    Ok(render_statements(&sql))
}

/// Runs the parsed command and returns what it prints.
///
/// # Errors
///
/// Returns an error if the configuration is incomplete, a file cannot be
/// read, or the SQL cannot be generated for the dialect.
pub fn run(cli: &Cli) -> Result<String> {
    let config = config::resolve(&cli.global)?;
    let dialect = config.descriptor()?;
    let settings = config.settings;
    info!(dialect = %dialect.kind(), "Generating SQL");

    match cli.command {
        Commands::Upsert { ref request } => {
            let contents = fs::read_to_string(request)?;
            let request: UpsertRequest = serde_json::from_str(&contents)?;
            let prepared = plan_upsert(&dialect, settings, &request)?;
            Ok(render_prepared(&prepared))
        }

        Commands::Escape {
            kind,
            ref catalog,
            ref schema,
            ref name,
        } => {
            let escaped = escape_qualified_name(
                catalog.as_deref(),
                schema.as_deref(),
                name,
                kind,
                &dialect,
                settings,
            );
            Ok(format!("{escaped}\n"))
        }

        Commands::CreateSchema {
            ref name,
            ref catalog,
        } => {
            let mut statement = CreateSchema::new(name.as_str());
            statement.catalog_name.clone_from(catalog);
            statement_output(&statement, &dialect, settings)
        }

        Commands::DropSchema {
            ref name,
            ref catalog,
        } => {
            let mut statement = DropSchema::new(name.as_str());
            statement.catalog_name.clone_from(catalog);
            statement_output(&statement, &dialect, settings)
        }

        Commands::CreateDatabase { ref name } => {
            statement_output(&CreateDatabase::new(name.as_str()), &dialect, settings)
        }

        Commands::DropDatabase { ref name } => {
            statement_output(&DropDatabase::new(name.as_str()), &dialect, settings)
        }

        Commands::SchemaExists {
            ref name,
            ref catalog,
        } => {
            let mut statement = SchemaExists::new(name.as_str());
            statement.catalog_name.clone_from(catalog);
            statement_output(&statement, &dialect, settings)
        }

        Commands::CatalogExists { ref name } => {
            statement_output(&CatalogExists::new(name.as_str()), &dialect, settings)
        }

        Commands::IdentityInsert {
            ref table,
            ref schema,
            ref catalog,
            on,
            off: _,
        } => {
            let value = if on {
                IdentityInsert::On
            } else {
                IdentityInsert::Off
            };
            let mut statement = SetIdentityInsert::new(table.as_str(), value);
            statement.schema_name.clone_from(schema);
            statement.catalog_name.clone_from(catalog);
            statement_output(&statement, &dialect, settings)
        }
    }
}
