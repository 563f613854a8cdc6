//! SQL schema for the Homeward transaction store.
//!
//! The relation shapes are a fixed external contract. Both relations carry
//! the same columns; a transaction lives in exactly one of them at a time.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`, so
/// repeated and concurrent bootstrap calls are safe without a lock.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS transactions (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    pet_id         VARCHAR,
    adoption_date  DATE,
    transaction_id VARCHAR
);

-- History is append-only: rows arrive via the archival copy step and are
-- never deleted by normal operation.
CREATE TABLE IF NOT EXISTS transactions_history (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    pet_id         VARCHAR,
    adoption_date  DATE,
    transaction_id VARCHAR
);
";
