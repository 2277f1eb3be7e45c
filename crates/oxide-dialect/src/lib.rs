//! # oxide-dialect
//!
//! Dialect-aware SQL generation for schema migrations.
//!
//! This crate provides:
//! - Identifier policy: quoting, case folding and escaping of object names
//! - Qualified names that show or hide the default catalog and schema
//! - Upsert planning with one native statement per dialect
//! - DDL and introspection statements (schemas, databases, identity inserts)
//!
//! Every operation takes the [`DialectDescriptor`] and the
//! [`GenerationSettings`] explicitly and is free of global state.
//!
//! ## Identifiers
//!
//! ```rust
//! use oxide_dialect::{escape_name, escape_table_name, DialectKind, GenerationSettings, ObjectKind};
//!
//! let h2 = DialectKind::H2.descriptor();
//! let settings = GenerationSettings::new();
//!
//! assert_eq!(escape_name("Tbl 1", ObjectKind::Table, &h2, settings), "\"TBL 1\"");
//! assert_eq!(escape_table_name(None, None, "Tbl1", &h2, settings), "PUBLIC.Tbl1");
//!
//! let hidden = h2.with_output_default_schema(false);
//! assert_eq!(escape_table_name(None, Some("PUBLIC"), "Tbl1", &hidden, settings), "Tbl1");
//! ```
//!
//! ## Upserts
//!
//! Values are bound as parameters; the planner reports which column feeds
//! each `?`.
//!
//! ```rust
//! use oxide_dialect::{plan_upsert, ColumnSpec, DialectKind, GenerationSettings, UpsertRequest};
//!
//! let pg = DialectKind::Postgres.descriptor().with_output_default_schema(false);
//! let request = UpsertRequest::new("users", "id")
//!     .column(ColumnSpec::bind("id", 1))
//!     .column(ColumnSpec::bind("name", "Alice"));
//!
//! let prepared = plan_upsert(&pg, GenerationSettings::new(), &request).unwrap();
//! assert_eq!(
//!     prepared.sql(),
//!     "INSERT INTO users (id, name) VALUES (?, ?) ON CONFLICT (id) DO UPDATE SET name = ?"
//! );
//! assert_eq!(prepared.bind_column_names(), vec!["id", "name", "name"]);
//! ```

pub mod dialect;
pub mod error;
pub mod identifier;
pub mod qualified;
pub mod settings;
pub mod statement;
pub mod upsert;
pub mod validation;
pub mod value;

pub use dialect::{DialectDescriptor, DialectKind, QuotingStrategy, UnknownDialect};
pub use error::{GenerateError, Result};
pub use identifier::{
    correct_name, escape_name, escape_optional_name, is_illegal_identifier, must_quote, ObjectKind,
};
pub use qualified::{escape_qualified_name, escape_table_name, escape_view_name};
pub use settings::GenerationSettings;
pub use statement::{
    generate, AffectedObject, CatalogExists, CreateDatabase, CreateSchema, DropDatabase,
    DropSchema, IdentityInsert, SchemaExists, SetIdentityInsert, Sql, SqlStatement, TableRef,
};
pub use upsert::{
    generator_for, plan_upsert, ColumnSpec, InsertOrUpdateGenerator, PreparedSql, UpsertRequest,
};
pub use validation::ValidationErrors;
pub use value::{SqlValue, ToSqlValue, ValueExpr};
