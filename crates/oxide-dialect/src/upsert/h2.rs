//! H2 `MERGE INTO .. KEY (..) VALUES (..)`.

use crate::dialect::{DialectDescriptor, DialectKind};
use crate::settings::GenerationSettings;

use super::{
    bind_columns, key_columns, name_list, table_name, value_list, ColumnValue,
    InsertOrUpdateGenerator, PreparedSql, UpsertRequest,
};

/// Upserts with H2's keyed `MERGE`.
///
/// H2 replaces every listed column of a matching row, so the update flag of
/// a column has no effect here.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeKey;

impl InsertOrUpdateGenerator for MergeKey {
    fn name(&self) -> &'static str {
        "mergeKey"
    }

    fn supports(&self, dialect: &DialectDescriptor) -> bool {
        dialect.kind() == DialectKind::H2
    }

    fn prepare_insert_or_update_sql(
        &self,
        dialect: &DialectDescriptor,
        settings: GenerationSettings,
        request: &UpsertRequest,
        columns: &[ColumnValue<'_>],
    ) -> PreparedSql {
        let sql = format!(
            "MERGE INTO {} ({}) KEY ({}) VALUES ({})",
            table_name(request, dialect, settings),
            name_list(columns, dialect, settings),
            name_list(key_columns(columns), dialect, settings),
            value_list(columns, dialect)
        );
        PreparedSql::new(sql, bind_columns(columns), request.table_ref())
    }
}
