//! Rendering of `catalog.schema.object` names.

use crate::dialect::DialectDescriptor;
use crate::identifier::{escape_name, ObjectKind};
use crate::settings::GenerationSettings;

/// Resolves the catalog that must appear in a qualified name, if any.
fn catalog_to_use<'a>(
    catalog: Option<&'a str>,
    dialect: &'a DialectDescriptor,
    settings: GenerationSettings,
) -> Option<&'a str> {
    if (settings.include_catalog_in_specification && dialect.output_default_catalog())
        || !dialect.is_default_catalog(catalog)
    {
        catalog.or_else(|| dialect.default_catalog_name())
    } else {
        None
    }
}

/// Resolves the schema that must appear in a qualified name, if any.
fn schema_to_use<'a>(
    catalog: Option<&'a str>,
    schema: Option<&'a str>,
    dialect: &'a DialectDescriptor,
    settings: GenerationSettings,
) -> Option<&'a str> {
    let shown = (settings.include_catalog_in_specification
        && dialect.output_default_catalog()
        && !dialect.supports_omitted_inner_schema_name())
        || dialect.output_default_schema()
        || !dialect.is_default_schema(catalog, schema);
    if !shown {
        return None;
    }
    match schema {
        Some(name) => Some(name),
        None if dialect.is_default_catalog(catalog) => dialect.default_schema_name(),
        None => None,
    }
}

/// Renders `name` qualified by whichever catalog and schema the dialect
/// needs to see.
///
/// A resolved catalog with no schema renders as `catalog..name`, which
/// dialects that support an omitted inner schema read as "the default schema
/// of that catalog". Indexes are never qualified.
#[must_use]
pub fn escape_qualified_name(
    catalog: Option<&str>,
    schema: Option<&str>,
    name: &str,
    kind: ObjectKind,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> String {
    if kind == ObjectKind::Index {
        return escape_name(name, kind, dialect, settings);
    }
    let catalog_to_use = catalog_to_use(catalog, dialect, settings);
    let schema_to_use = schema_to_use(catalog, schema, dialect, settings);

    let mut rendered = String::new();
    if let Some(catalog) = catalog_to_use {
        rendered.push_str(&escape_name(catalog, ObjectKind::Catalog, dialect, settings));
        rendered.push('.');
    }
    if let Some(schema) = schema_to_use {
        rendered.push_str(&escape_name(schema, ObjectKind::Schema, dialect, settings));
    }
    if catalog_to_use.is_some() || schema_to_use.is_some() {
        rendered.push('.');
    }
    rendered.push_str(&escape_name(name, kind, dialect, settings));
    rendered
}

/// Renders a qualified table name.
#[must_use]
pub fn escape_table_name(
    catalog: Option<&str>,
    schema: Option<&str>,
    table: &str,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> String {
    escape_qualified_name(catalog, schema, table, ObjectKind::Table, dialect, settings)
}

/// Renders a qualified view name.
#[must_use]
pub fn escape_view_name(
    catalog: Option<&str>,
    schema: Option<&str>,
    view: &str,
    dialect: &DialectDescriptor,
    settings: GenerationSettings,
) -> String {
    escape_qualified_name(catalog, schema, view, ObjectKind::View, dialect, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::DialectKind;

    const DEFAULTS: GenerationSettings = GenerationSettings::new();
    const INCLUDE_CATALOG: GenerationSettings =
        GenerationSettings::new().include_catalog_in_specification(true);

    fn mssql() -> DialectDescriptor {
        DialectKind::Mssql
            .descriptor()
            .with_default_catalog("Cat1")
            .with_default_schema("Sch1")
    }

    #[test]
    fn test_index_is_never_qualified() {
        let d = mssql();
        assert_eq!(
            escape_qualified_name(None, None, "Idx1", ObjectKind::Index, &d, DEFAULTS),
            "Idx1"
        );
        assert_eq!(
            escape_qualified_name(Some("Cat2"), Some("Sch2"), "Idx1", ObjectKind::Index, &d, INCLUDE_CATALOG),
            "Idx1"
        );
    }

    #[test]
    fn test_mssql_table_names() {
        // (include catalog, output default catalog, output default schema, catalog, schema, expected)
        let cases: &[(bool, bool, bool, Option<&str>, Option<&str>, &str)] = &[
            (false, true, true, None, None, "Sch1.Tbl1"),
            (false, true, true, None, Some("Sch1"), "Sch1.Tbl1"),
            (false, true, false, None, None, "Tbl1"),
            (false, true, false, None, Some("Sch1"), "Tbl1"),
            (false, true, false, None, Some("Sch2"), "Sch2.Tbl1"),
            (true, true, true, None, None, "Cat1.Sch1.Tbl1"),
            (true, true, true, None, Some("Sch1"), "Cat1.Sch1.Tbl1"),
            (true, true, false, None, None, "Cat1..Tbl1"),
            (true, true, false, None, Some("Sch1"), "Cat1..Tbl1"),
            (true, false, false, None, None, "Tbl1"),
            (true, false, false, None, Some("Sch1"), "Tbl1"),
            (false, false, true, Some("Cat2"), None, "Cat2..Tbl1"),
            (false, false, true, Some("Cat2"), Some("Sch1"), "Cat2.Sch1.Tbl1"),
        ];
        for &(include, out_catalog, out_schema, catalog, schema, expected) in cases {
            let d = mssql()
                .with_output_default_catalog(out_catalog)
                .with_output_default_schema(out_schema);
            let settings = GenerationSettings::new().include_catalog_in_specification(include);
            assert_eq!(
                escape_table_name(catalog, schema, "Tbl1", &d, settings),
                expected,
                "include={include} out_catalog={out_catalog} out_schema={out_schema} \
                 catalog={catalog:?} schema={schema:?}"
            );
        }
    }

    #[test]
    fn test_h2_table_names() {
        let h2 = DialectKind::H2.descriptor();
        assert_eq!(escape_table_name(None, None, "Tbl1", &h2, DEFAULTS), "PUBLIC.Tbl1");
        assert_eq!(
            escape_table_name(None, Some("PUBLIC"), "Tbl1", &h2, DEFAULTS),
            "PUBLIC.Tbl1"
        );

        let hidden = h2.with_output_default_schema(false);
        assert_eq!(escape_table_name(None, None, "Tbl1", &hidden, DEFAULTS), "Tbl1");
        assert_eq!(
            escape_table_name(None, Some("PUBLIC"), "Tbl1", &hidden, DEFAULTS),
            "Tbl1"
        );
        assert_eq!(
            escape_table_name(None, Some("lbschem2"), "Tbl1", &hidden, DEFAULTS),
            "lbschem2.Tbl1"
        );
    }

    #[test]
    fn test_include_catalog_without_omitted_inner_schema() {
        // H2 cannot read `cat..tbl`, so the default schema is spelled out.
        let h2 = DialectKind::H2
            .descriptor()
            .with_default_catalog("TESTDB")
            .with_output_default_schema(false);
        assert_eq!(
            escape_table_name(None, None, "Tbl1", &h2, INCLUDE_CATALOG),
            "TESTDB.PUBLIC.Tbl1"
        );
    }

    #[test]
    fn test_qualified_parts_are_escaped() {
        let pg = DialectKind::Postgres.descriptor().with_default_catalog("lbcat");
        assert_eq!(
            escape_table_name(Some("other db"), Some("my schema"), "Tbl 1", &pg, DEFAULTS),
            "\"other db\".\"my schema\".\"tbl 1\""
        );
    }
}
