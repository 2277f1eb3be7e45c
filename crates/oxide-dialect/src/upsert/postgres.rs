//! PostgreSQL `INSERT .. ON CONFLICT (..) DO UPDATE`.

use crate::dialect::{DialectDescriptor, DialectKind};
use crate::settings::GenerationSettings;

use super::{
    assignments, bind_columns, key_columns, name_list, table_name, update_columns, value_list,
    ColumnValue, InsertOrUpdateGenerator, PreparedSql, UpsertRequest,
};

/// Upserts with `INSERT .. ON CONFLICT`. The key columns must be covered by
/// a unique index or constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertOnConflict;

impl InsertOrUpdateGenerator for InsertOnConflict {
    fn name(&self) -> &'static str {
        "insertOnConflict"
    }

    fn supports(&self, dialect: &DialectDescriptor) -> bool {
        dialect.kind() == DialectKind::Postgres
    }

    fn prepare_insert_or_update_sql(
        &self,
        dialect: &DialectDescriptor,
        settings: GenerationSettings,
        request: &UpsertRequest,
        columns: &[ColumnValue<'_>],
    ) -> PreparedSql {
        let set = update_columns(columns);
        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT ({})",
            table_name(request, dialect, settings),
            name_list(columns, dialect, settings),
            value_list(columns, dialect),
            name_list(key_columns(columns), dialect, settings)
        );
        if set.is_empty() {
            sql.push_str(" DO NOTHING");
        } else {
            sql.push_str(" DO UPDATE SET ");
            sql.push_str(&assignments(set.iter().copied(), ", ", dialect, settings));
        }
        let binds = bind_columns(columns.iter().chain(set.iter().copied()));
        PreparedSql::new(sql, binds, request.table_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upsert::{plan_upsert, ColumnSpec};
    use crate::value::{ToSqlValue, ValueExpr};

    fn pg() -> DialectDescriptor {
        DialectKind::Postgres.descriptor().with_output_default_schema(false)
    }

    #[test]
    fn test_insert_on_conflict() {
        let request = UpsertRequest::new("t", "id")
            .column(ColumnSpec::bind("id", 1))
            .column(ColumnSpec::bind("name", "Alice"))
            .column(ColumnSpec::bind("email", "a@example.com"));
        let prepared = plan_upsert(&pg(), GenerationSettings::new(), &request).unwrap();
        assert_eq!(
            prepared.sql(),
            "INSERT INTO t (id, name, email) VALUES (?, ?, ?) \
             ON CONFLICT (id) DO UPDATE SET name = ?, email = ?"
        );
        assert_eq!(
            prepared.bind_column_names(),
            vec!["id", "name", "email", "name", "email"]
        );
    }

    #[test]
    fn test_insert_on_conflict_do_nothing() {
        let request = UpsertRequest::new("t", "id")
            .column(ColumnSpec::bind("id", 1))
            .column(ColumnSpec::bind("name", "Alice").insert_only());
        let prepared = plan_upsert(&pg(), GenerationSettings::new(), &request).unwrap();
        assert_eq!(
            prepared.sql(),
            "INSERT INTO t (id, name) VALUES (?, ?) ON CONFLICT (id) DO NOTHING"
        );
        assert_eq!(prepared.bind_column_names(), vec!["id", "name"]);
    }

    #[test]
    fn test_insert_on_conflict_with_literals_and_reserved_names() {
        let request = UpsertRequest::new("Events", "id")
            .schema("audit")
            .column(ColumnSpec::bind("id", 1))
            .column(ColumnSpec::new("user", ValueExpr::Literal(Some("O'Brien".to_sql_value()))))
            .column(ColumnSpec::function("at", "now()"));
        let prepared = plan_upsert(
            &DialectKind::Postgres.descriptor(),
            GenerationSettings::new(),
            &request,
        )
        .unwrap();
        assert_eq!(
            prepared.sql(),
            "INSERT INTO audit.Events (id, \"user\", at) VALUES (?, 'O''Brien', now()) \
             ON CONFLICT (id) DO UPDATE SET \"user\" = 'O''Brien', at = now()"
        );
        assert_eq!(prepared.bind_column_names(), vec!["id"]);
    }
}
