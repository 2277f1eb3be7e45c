//! Update-only statement, shared by every dialect.

use crate::dialect::DialectDescriptor;
use crate::settings::GenerationSettings;

use super::{
    assignments, bind_columns, key_columns, table_name, update_columns, ColumnValue, PreparedSql,
    UpsertRequest,
};

/// Renders `UPDATE <table> SET <col> = <value>, .. WHERE <key> = <value> AND ..`.
///
/// The SET list holds the updatable non-key columns and the WHERE clause
/// every key column, both in column order.
#[must_use]
pub fn prepare_update_sql(
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
    request: &UpsertRequest,
    columns: &[ColumnValue<'_>],
) -> PreparedSql {
    let set = update_columns(columns);
    let key = key_columns(columns);
    let sql = format!(
        "UPDATE {} SET {} WHERE {}",
        table_name(request, dialect, settings),
        assignments(set.iter().copied(), ", ", dialect, settings),
        assignments(key.iter().copied(), " AND ", dialect, settings)
    );
    let binds = bind_columns(set.iter().chain(key.iter()).copied());
    PreparedSql::new(sql, binds, request.table_ref())
}
