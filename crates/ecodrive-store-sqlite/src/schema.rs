//! SQL schema for the EcoDrive SQLite store.
//!
//! One table, one row per namespaced blob key. The schema evolves with
//! `PRAGMA user_version`; future migrations will be gated on that number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Whole-blob key-value storage. Writes are full overwrites of a single row;
-- there are no transactions across keys and no row-level history.
CREATE TABLE IF NOT EXISTS blobs (
    key        TEXT PRIMARY KEY,
    value      TEXT NOT NULL,    -- JSON payload, opaque to this layer
    updated_at TEXT NOT NULL     -- ISO 8601 UTC; server-assigned
);

PRAGMA user_version = 1;
";
