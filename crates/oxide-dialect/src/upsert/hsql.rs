//! HSQLDB `MERGE INTO .. USING (VALUES (1)) ON ..`.

use crate::dialect::{DialectDescriptor, DialectKind};
use crate::settings::GenerationSettings;

use super::{
    assignments, bind_columns, key_columns, name_list, table_name, update_columns, value_list,
    ColumnValue, InsertOrUpdateGenerator, PreparedSql, UpsertRequest,
};

/// Upserts with a `MERGE` over a one-row `VALUES` source.
///
/// Key values appear in the ON clause and again in the INSERT branch, so
/// their bind columns are listed twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeUsingValues;

impl InsertOrUpdateGenerator for MergeUsingValues {
    fn name(&self) -> &'static str {
        "mergeUsingValues"
    }

    fn supports(&self, dialect: &DialectDescriptor) -> bool {
        dialect.kind() == DialectKind::Hsql
    }

    fn prepare_insert_or_update_sql(
        &self,
        dialect: &DialectDescriptor,
        settings: GenerationSettings,
        request: &UpsertRequest,
        columns: &[ColumnValue<'_>],
    ) -> PreparedSql {
        let key = key_columns(columns);
        let set = update_columns(columns);
        let mut sql = format!(
            "MERGE INTO {} USING (VALUES (1)) ON {} WHEN NOT MATCHED THEN INSERT ({}) VALUES ({})",
            table_name(request, dialect, settings),
            assignments(key.iter().copied(), " AND ", dialect, settings),
            name_list(columns, dialect, settings),
            value_list(columns, dialect)
        );
        if !set.is_empty() {
            sql.push_str(" WHEN MATCHED THEN UPDATE SET ");
            sql.push_str(&assignments(set.iter().copied(), ", ", dialect, settings));
        }
        let binds = bind_columns(
            key.iter()
                .copied()
                .chain(columns)
                .chain(set.iter().copied()),
        );
        PreparedSql::new(sql, binds, request.table_ref())
    }
}
