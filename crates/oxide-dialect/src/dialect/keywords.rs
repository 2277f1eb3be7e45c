//! Reserved words per dialect.
//!
//! Lists are kept sorted so lookups can binary search on the upper-cased word.

use super::DialectKind;

/// Reserved words common to every supported dialect.
const SQL_RESERVED: &[&str] = &[
    "ALL",
    "ALTER",
    "AND",
    "ANY",
    "AS",
    "ASC",
    "BETWEEN",
    "BOTH",
    "BY",
    "CASE",
    "CAST",
    "CHECK",
    "COLUMN",
    "CONSTRAINT",
    "CREATE",
    "CROSS",
    "CURRENT_DATE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "CURRENT_USER",
    "DEFAULT",
    "DELETE",
    "DESC",
    "DISTINCT",
    "DROP",
    "ELSE",
    "END",
    "EXCEPT",
    "EXISTS",
    "FALSE",
    "FETCH",
    "FOR",
    "FOREIGN",
    "FROM",
    "FULL",
    "GRANT",
    "GROUP",
    "HAVING",
    "IN",
    "INNER",
    "INSERT",
    "INTERSECT",
    "INTO",
    "IS",
    "JOIN",
    "LEADING",
    "LEFT",
    "LIKE",
    "NATURAL",
    "NOT",
    "NULL",
    "ON",
    "OR",
    "ORDER",
    "OUTER",
    "PRIMARY",
    "REFERENCES",
    "RIGHT",
    "SELECT",
    "SESSION_USER",
    "SET",
    "SOME",
    "TABLE",
    "THEN",
    "TO",
    "TRAILING",
    "TRUE",
    "UNION",
    "UNIQUE",
    "UPDATE",
    "USER",
    "USING",
    "VALUES",
    "WHEN",
    "WHERE",
    "WITH",
];

const H2_RESERVED: &[&str] = &[
    "ARRAY",
    "CURRENT_CATALOG",
    "CURRENT_SCHEMA",
    "DAY",
    "HOUR",
    "IF",
    "INTERVAL",
    "KEY",
    "LIMIT",
    "LOCALTIME",
    "LOCALTIMESTAMP",
    "MINUS",
    "MINUTE",
    "MONTH",
    "OFFSET",
    "QUALIFY",
    "REGEXP",
    "ROW",
    "ROWNUM",
    "SECOND",
    "SYSDATE",
    "SYSTIME",
    "SYSTIMESTAMP",
    "TODAY",
    "TOP",
    "VALUE",
    "WINDOW",
    "YEAR",
];

const HSQL_RESERVED: &[&str] = &[
    "ARRAY",
    "BEGIN",
    "CALL",
    "CURRENT_CATALOG",
    "CURRENT_SCHEMA",
    "CURSOR",
    "DAY",
    "DECLARE",
    "HOUR",
    "INTERVAL",
    "LIMIT",
    "MERGE",
    "MINUTE",
    "MONTH",
    "POSITION",
    "ROW",
    "SECOND",
    "TRIGGER",
    "VALUE",
    "YEAR",
];

const POSTGRES_RESERVED: &[&str] = &[
    "ANALYSE",
    "ANALYZE",
    "ARRAY",
    "ASYMMETRIC",
    "COLLATE",
    "CURRENT_CATALOG",
    "CURRENT_ROLE",
    "CURRENT_SCHEMA",
    "DEFERRABLE",
    "DO",
    "ILIKE",
    "INITIALLY",
    "LATERAL",
    "LIMIT",
    "LOCALTIME",
    "LOCALTIMESTAMP",
    "OFFSET",
    "ONLY",
    "PLACING",
    "RETURNING",
    "SYMMETRIC",
    "VARIADIC",
    "WINDOW",
];

const MSSQL_RESERVED: &[&str] = &[
    "BACKUP",
    "BEGIN",
    "BREAK",
    "BROWSE",
    "BULK",
    "CHECKPOINT",
    "CLUSTERED",
    "COMMIT",
    "CONTINUE",
    "DATABASE",
    "DBCC",
    "DENY",
    "DISK",
    "DUMP",
    "ERRLVL",
    "EXEC",
    "EXECUTE",
    "EXIT",
    "FILE",
    "GOTO",
    "HOLDLOCK",
    "IDENTITY",
    "IDENTITY_INSERT",
    "IF",
    "INDEX",
    "KEY",
    "KILL",
    "MERGE",
    "NOCHECK",
    "NONCLUSTERED",
    "OFF",
    "OPEN",
    "PERCENT",
    "PIVOT",
    "PLAN",
    "PRINT",
    "PROC",
    "PROCEDURE",
    "RAISERROR",
    "READ",
    "RESTORE",
    "RETURN",
    "REVOKE",
    "ROLLBACK",
    "RULE",
    "SAVE",
    "SCHEMA",
    "SHUTDOWN",
    "STATISTICS",
    "TOP",
    "TRAN",
    "TRANSACTION",
    "TRIGGER",
    "TRUNCATE",
    "UNPIVOT",
    "USE",
    "VIEW",
    "WAITFOR",
    "WHILE",
];

const fn extras(kind: DialectKind) -> &'static [&'static str] {
    match kind {
        DialectKind::H2 => H2_RESERVED,
        DialectKind::Hsql => HSQL_RESERVED,
        DialectKind::Postgres => POSTGRES_RESERVED,
        DialectKind::Mssql => MSSQL_RESERVED,
        DialectKind::Generic => &[],
    }
}

/// Returns whether `word` is reserved in `kind`, ignoring ASCII case.
pub(super) fn is_reserved(kind: DialectKind, word: &str) -> bool {
    let upper = word.to_ascii_uppercase();
    let upper = upper.as_str();
    SQL_RESERVED.binary_search(&upper).is_ok() || extras(kind).binary_search(&upper).is_ok()
}
