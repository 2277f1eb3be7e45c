#![allow(dead_code)]

use oxide_dialect::{
    plan_upsert, ColumnSpec, DialectDescriptor, DialectKind, GenerationSettings, PreparedSql,
    UpsertRequest,
};

pub const DEFAULTS: GenerationSettings = GenerationSettings::new();

/// Descriptor for `kind` that hides its default schema, so table names
/// render unqualified.
pub fn bare(kind: DialectKind) -> DialectDescriptor {
    kind.descriptor().with_output_default_schema(false)
}

/// `t(id PK, name, email)` with every value bound.
pub fn users_request(only_update: bool) -> UpsertRequest {
    UpsertRequest::new("t", "id")
        .only_update(only_update)
        .column(ColumnSpec::bind("id", 1))
        .column(ColumnSpec::bind("name", "Alice"))
        .column(ColumnSpec::bind("email", "alice@example.com"))
}

pub fn plan(dialect: &DialectDescriptor, request: &UpsertRequest) -> PreparedSql {
    plan_upsert(dialect, DEFAULTS, request)
        .unwrap_or_else(|e| panic!("Failed to plan {request:?}\nError: {e}"))
}

pub fn request_from_json(json: &str) -> UpsertRequest {
    serde_json::from_str(json).unwrap_or_else(|e| panic!("Invalid request: {json}\nError: {e}"))
}
