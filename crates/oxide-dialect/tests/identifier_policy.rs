//! Identifier quoting, case correction and qualification through the public
//! API, plus the DDL statements built on top of them.

mod common;
use common::*;

use oxide_dialect::{
    correct_name, escape_name, escape_optional_name, escape_qualified_name, escape_table_name,
    generate, must_quote, CatalogExists, CreateSchema, DialectKind, DropSchema, GenerateError,
    GenerationSettings, IdentityInsert, ObjectKind, QuotingStrategy, SchemaExists,
    SetIdentityInsert,
};

const KINDS: [ObjectKind; 6] = [
    ObjectKind::Catalog,
    ObjectKind::Schema,
    ObjectKind::Table,
    ObjectKind::Column,
    ObjectKind::Index,
    ObjectKind::Other,
];

const NAMES: [&str; 7] = ["Tbl1", "tbl1", "TBL1", "Tbl 1", "select", "a\"b", "_x9"];

#[test]
fn correct_name_is_idempotent() {
    let preserve = GenerationSettings::new().preserve_schema_case(true);
    for dialect in DialectKind::ALL.map(DialectKind::descriptor) {
        for settings in [DEFAULTS, preserve] {
            for kind in KINDS {
                for name in NAMES {
                    let once = correct_name(name, kind, &dialect, settings);
                    let twice = correct_name(&once, kind, &dialect, settings);
                    assert_eq!(once, twice, "{name} {kind} {:?}", dialect.kind());
                }
            }
        }
    }
}

#[test]
fn quoted_names_are_corrected_first() {
    for dialect in DialectKind::ALL.map(DialectKind::descriptor) {
        for kind in KINDS {
            for name in NAMES {
                let escaped = escape_name(name, kind, &dialect, DEFAULTS);
                if must_quote(name, kind, &dialect, DEFAULTS) {
                    let corrected = correct_name(name, kind, &dialect, DEFAULTS);
                    assert_eq!(escaped, dialect.quote_object(&corrected));
                } else {
                    assert_eq!(escaped, name);
                }
                assert_eq!(escaped, escape_name(name, kind, &dialect, DEFAULTS));
            }
        }
    }
}

#[test]
fn uppercasing_dialect_folds_plain_names() {
    let h2 = DialectKind::H2.descriptor();
    assert_eq!(correct_name("Tbl1", ObjectKind::Table, &h2, DEFAULTS), "TBL1");
    assert!(!must_quote("Tbl1", ObjectKind::Table, &h2, DEFAULTS));
    assert_eq!(escape_name("Tbl1", ObjectKind::Table, &h2, DEFAULTS), "Tbl1");
}

#[test]
fn quote_all_objects_keeps_case() {
    let h2 = DialectKind::H2
        .descriptor()
        .with_quoting_strategy(QuotingStrategy::QuoteAllObjects);
    assert_eq!(escape_name("Tbl1", ObjectKind::Table, &h2, DEFAULTS), "\"Tbl1\"");
    assert_eq!(
        escape_table_name(None, Some("app"), "Tbl1", &h2, DEFAULTS),
        "\"app\".\"Tbl1\""
    );
}

#[test]
fn absent_names_stay_absent() {
    let pg = DialectKind::Postgres.descriptor();
    assert_eq!(escape_optional_name(None, ObjectKind::Schema, &pg, DEFAULTS), None);
    assert_eq!(
        escape_optional_name(Some("My Schema"), ObjectKind::Schema, &pg, DEFAULTS).as_deref(),
        Some("\"my schema\"")
    );
}

#[test]
fn default_schema_suppression() {
    let h2 = bare(DialectKind::H2);
    assert_eq!(
        escape_qualified_name(None, Some("PUBLIC"), "Tbl1", ObjectKind::Table, &h2, DEFAULTS),
        "Tbl1"
    );
    assert_eq!(
        escape_qualified_name(None, Some("public"), "Tbl1", ObjectKind::Table, &h2, DEFAULTS),
        "Tbl1"
    );
}

#[test]
fn mssql_catalog_with_omitted_schema() {
    let mssql = DialectKind::Mssql
        .descriptor()
        .with_default_catalog("lbcat")
        .with_output_default_schema(false);
    let include = GenerationSettings::new().include_catalog_in_specification(true);
    assert_eq!(escape_table_name(None, None, "Tbl1", &mssql, include), "lbcat..Tbl1");
    assert_eq!(
        escape_table_name(Some("lbcat2"), Some("dbo"), "Tbl1", &mssql, DEFAULTS),
        "lbcat2.dbo.Tbl1"
    );
}

#[test]
fn indexes_are_never_qualified() {
    let mssql = DialectKind::Mssql.descriptor().with_default_catalog("lbcat");
    assert_eq!(
        escape_qualified_name(
            Some("other"),
            Some("sales"),
            "IX Orders",
            ObjectKind::Index,
            &mssql,
            DEFAULTS
        ),
        "[IX Orders]"
    );
}

#[test]
fn schema_statements_per_dialect() {
    let create = CreateSchema::new("Sales");
    let drop = DropSchema::new("Sales");
    let h2 = DialectKind::H2.descriptor();
    assert_eq!(generate(&create, &h2, DEFAULTS).unwrap()[0].text(), "CREATE SCHEMA Sales");
    assert_eq!(generate(&drop, &h2, DEFAULTS).unwrap()[0].text(), "DROP SCHEMA Sales");
    assert!(matches!(
        generate(&create, &DialectKind::Generic.descriptor(), DEFAULTS),
        Err(GenerateError::UnsupportedDialect { .. })
    ));
}

#[test]
fn existence_queries_use_corrected_literals() {
    let h2 = DialectKind::H2.descriptor();
    let sql = generate(&SchemaExists::new("Sales"), &h2, DEFAULTS).unwrap();
    assert!(sql[0].text().ends_with("WHERE SCHEMA_NAME = 'SALES')"));

    let preserve = GenerationSettings::new().preserve_schema_case(true);
    let sql = generate(&SchemaExists::new("Sales"), &h2, preserve).unwrap();
    assert!(sql[0].text().ends_with("WHERE SCHEMA_NAME = 'Sales')"));

    let sql = generate(&CatalogExists::new("App"), &DialectKind::Mssql.descriptor(), DEFAULTS)
        .unwrap();
    assert!(sql[0].text().contains("DB_ID(N'App')"));
}

#[test]
fn identity_insert_round_trip() {
    let mssql = DialectKind::Mssql.descriptor();
    let on = generate(
        &SetIdentityInsert::new("orders", IdentityInsert::On).schema("sales"),
        &mssql,
        DEFAULTS,
    )
    .unwrap();
    let off = generate(
        &SetIdentityInsert::new("orders", IdentityInsert::Off).schema("sales"),
        &mssql,
        DEFAULTS,
    )
    .unwrap();
    assert_eq!(on[0].text(), "SET IDENTITY_INSERT sales.orders ON");
    assert_eq!(off[0].text(), "SET IDENTITY_INSERT sales.orders OFF");
    assert_eq!(on[0].end_delimiter(), ";");
}
