//! `SET IDENTITY_INSERT` for SQL Server.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dialect::{DialectDescriptor, DialectKind};
use crate::qualified::escape_table_name;
use crate::settings::GenerationSettings;
use crate::validation::ValidationErrors;

use super::{AffectedObject, Sql, SqlStatement, TableRef};

/// Whether explicit values may be inserted into an identity column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdentityInsert {
    /// Explicit identity values are accepted.
    On,
    /// Identity values are generated by the server.
    #[default]
    Off,
}

impl fmt::Display for IdentityInsert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("ON"),
            Self::Off => f.write_str("OFF"),
        }
    }
}

impl FromStr for IdentityInsert {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("on") {
            Ok(Self::On)
        } else if s.eq_ignore_ascii_case("off") {
            Ok(Self::Off)
        } else {
            Err(format!("expected ON or OFF, got {s}"))
        }
    }
}

/// Toggles identity inserts on a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetIdentityInsert {
    /// Catalog holding the table.
    pub catalog_name: Option<String>,
    /// Schema holding the table.
    pub schema_name: Option<String>,
    /// Target table.
    pub table_name: String,
    /// New setting.
    pub value: IdentityInsert,
}

impl SetIdentityInsert {
    /// Creates the statement for `table_name`.
    pub fn new(table_name: impl Into<String>, value: IdentityInsert) -> Self {
        Self {
            catalog_name: None,
            schema_name: None,
            table_name: table_name.into(),
            value,
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
}

impl SqlStatement for SetIdentityInsert {
    fn name(&self) -> &'static str {
        "setIdentityInsert"
    }

    fn supports(&self, dialect: &DialectDescriptor) -> bool {
        dialect.kind() == DialectKind::Mssql
    }

    fn validate(&self, _dialect: &DialectDescriptor) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check_required_field("tableName", Some(&self.table_name));
        errors
    }

    fn generate_sql(&self, dialect: &DialectDescriptor, settings: GenerationSettings) -> Vec<Sql> {
        let table = TableRef::new(
            self.catalog_name.as_deref(),
            self.schema_name.as_deref(),
            self.table_name.as_str(),
        );
        let sql = format!(
            "SET IDENTITY_INSERT {} {}",
            escape_table_name(
                table.catalog.as_deref(),
                table.schema.as_deref(),
                &table.table,
                dialect,
                settings
            ),
            self.value
        );
        vec![Sql::new(sql, vec![AffectedObject::Table(table)])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::generate;

    #[test]
    fn test_identity_insert_on() {
        let mssql = DialectKind::Mssql.descriptor();
        let sql = generate(
            &SetIdentityInsert::new("orders", IdentityInsert::On),
            &mssql,
            GenerationSettings::new(),
        )
        .unwrap();
        assert_eq!(sql[0].text(), "SET IDENTITY_INSERT dbo.orders ON");
        assert_eq!(
            sql[0].affected(),
            &[AffectedObject::Table(TableRef::new(None, None, "orders"))]
        );
    }

    #[test]
    fn test_identity_insert_off_in_other_schema() {
        let mssql = DialectKind::Mssql
            .descriptor()
            .with_output_default_schema(false);
        let sql = generate(
            &SetIdentityInsert::new("order lines", IdentityInsert::Off).schema("sales"),
            &mssql,
            GenerationSettings::new(),
        )
        .unwrap();
        assert_eq!(sql[0].text(), "SET IDENTITY_INSERT sales.[order lines] OFF");
    }

    #[test]
    fn test_identity_insert_only_on_mssql() {
        let statement = SetIdentityInsert::new("orders", IdentityInsert::On);
        for kind in [DialectKind::H2, DialectKind::Hsql, DialectKind::Postgres] {
            assert!(!statement.supports(&kind.descriptor()));
        }
    }

    #[test]
    fn test_identity_insert_requires_table() {
        let errors = SetIdentityInsert::new("", IdentityInsert::On)
            .validate(&DialectKind::Mssql.descriptor());
        assert!(errors.has_error("tableName"));
    }

    #[test]
    fn test_parse_identity_insert() {
        assert_eq!("on".parse::<IdentityInsert>(), Ok(IdentityInsert::On));
        assert_eq!("OFF".parse::<IdentityInsert>(), Ok(IdentityInsert::Off));
        assert!("maybe".parse::<IdentityInsert>().is_err());
    }
}
