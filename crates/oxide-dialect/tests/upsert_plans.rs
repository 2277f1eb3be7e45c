//! Upsert planning across dialects: statement shapes, bind order, and
//! requests supplied as JSON.

mod common;
use common::*;

use oxide_dialect::{
    plan_upsert, ColumnSpec, DialectKind, GenerateError, GenerationSettings, SqlValue,
    UpsertRequest,
};

#[test]
fn hsql_merge_binds_key_insert_and_update_columns() {
    let prepared = plan(&bare(DialectKind::Hsql), &users_request(false));
    assert_eq!(
        prepared.sql(),
        "MERGE INTO t USING (VALUES (1)) ON id = ? \
         WHEN NOT MATCHED THEN INSERT (id, name, email) VALUES (?, ?, ?) \
         WHEN MATCHED THEN UPDATE SET name = ?, email = ?"
    );
    assert_eq!(
        prepared.bind_column_names(),
        vec!["id", "id", "name", "email", "name", "email"]
    );
}

#[test]
fn postgres_insert_on_conflict() {
    let prepared = plan(&bare(DialectKind::Postgres), &users_request(false));
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
fn h2_merge_key() {
    let prepared = plan(&bare(DialectKind::H2), &users_request(false));
    assert_eq!(
        prepared.sql(),
        "MERGE INTO t (id, name, email) KEY (id) VALUES (?, ?, ?)"
    );
    assert_eq!(prepared.bind_column_names(), vec!["id", "name", "email"]);
}

#[test]
fn update_only_is_the_same_on_every_dialect() {
    for kind in DialectKind::ALL {
        let prepared = plan(&bare(kind), &users_request(true));
        assert_eq!(
            prepared.sql(),
            "UPDATE t SET name = ?, email = ? WHERE id = ?",
            "dialect {kind}"
        );
        assert_eq!(prepared.bind_column_names(), vec!["name", "email", "id"]);
    }
}

#[test]
fn insert_or_update_needs_a_registered_generator() {
    for kind in [DialectKind::Mssql, DialectKind::Generic] {
        let err = plan_upsert(&kind.descriptor(), DEFAULTS, &users_request(false)).unwrap_err();
        assert_eq!(err.to_string(), format!("insertOrUpdate is not supported on {kind}"));
    }
}

#[test]
fn bind_values_follow_bind_columns() {
    let prepared = plan(&bare(DialectKind::Hsql), &users_request(false));
    let values = prepared.bind_values();
    assert_eq!(values.len(), prepared.bind_columns().len());
    assert_eq!(values[0], SqlValue::Int(1));
    assert_eq!(values[1], SqlValue::Int(1));
    assert_eq!(values[5], SqlValue::Text(String::from("alice@example.com")));
}

#[test]
fn qualified_table_and_quoted_columns() {
    let request = UpsertRequest::new("Order", "Key")
        .schema("Sales Data")
        .column(ColumnSpec::bind("Key", 1))
        .column(ColumnSpec::bind("Total Amount", 9.5));
    let prepared = plan(&DialectKind::Postgres.descriptor(), &request);
    assert_eq!(
        prepared.sql(),
        "INSERT INTO \"sales data\".\"order\" (Key, \"total amount\") VALUES (?, ?) \
         ON CONFLICT (Key) DO UPDATE SET \"total amount\" = ?"
    );
    assert_eq!(prepared.affected_table().to_string(), "Sales Data.Order");
}

#[test]
fn preserved_schema_case_is_quoted() {
    let settings = GenerationSettings::new().preserve_schema_case(true);
    let request = users_request(false).schema("Sales");
    let prepared = plan_upsert(&DialectKind::H2.descriptor(), settings, &request).unwrap();
    assert!(prepared.sql().starts_with("MERGE INTO \"Sales\".t "));
}

#[test]
fn request_from_json_with_functions_and_literals() {
    let request = request_from_json(
        r#"{
            "tableName": "events",
            "primaryKey": "tenant, id",
            "columns": [
                {"name": "id", "value": {"bind": 42}},
                {"name": "tenant", "value": {"bind": "acme"}},
                {"name": "kind", "value": {"literal": "login"}},
                {"name": "created_at", "value": {"function": "CURRENT_TIMESTAMP"}, "allowUpdate": false},
                {"name": "payload", "value": {"bind": null}}
            ]
        }"#,
    );
    let prepared = plan(&bare(DialectKind::Postgres), &request);
    assert_eq!(
        prepared.sql(),
        "INSERT INTO events (id, tenant, kind, created_at, payload) \
         VALUES (?, ?, 'login', CURRENT_TIMESTAMP, ?) \
         ON CONFLICT (id, tenant) DO UPDATE SET kind = 'login', payload = ?"
    );
    assert_eq!(
        prepared.bind_column_names(),
        vec!["id", "tenant", "payload", "payload"]
    );
    assert_eq!(prepared.bind_values()[2], SqlValue::Null);
}

#[test]
fn invalid_json_request_reports_every_problem() {
    let request = request_from_json(r#"{"tableName": " ", "primaryKey": "id", "columns": []}"#);
    match plan_upsert(&DialectKind::H2.descriptor(), DEFAULTS, &request) {
        Err(GenerateError::Validation(errors)) => {
            assert!(errors.has_error("tableName"));
            assert!(errors.has_error("primaryKey"));
            assert!(errors.has_error("columns"));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn duplicate_columns_are_rejected() {
    let request = users_request(false).column(ColumnSpec::bind("id", 2));
    for kind in [DialectKind::H2, DialectKind::Hsql, DialectKind::Postgres] {
        match plan_upsert(&bare(kind), DEFAULTS, &request) {
            Err(GenerateError::Validation(errors)) => {
                assert_eq!(errors.to_string(), "column id is listed more than once");
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }
}
