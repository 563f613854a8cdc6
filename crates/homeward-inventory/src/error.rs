//! Error type for `homeward-inventory`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] redb::DatabaseError),

  #[error("transaction error: {0}")]
  Transaction(#[from] redb::TransactionError),

  #[error("table error: {0}")]
  Table(#[from] redb::TableError),

  #[error("storage error: {0}")]
  Storage(#[from] redb::StorageError),

  #[error("commit error: {0}")]
  Commit(#[from] redb::CommitError),

  #[error("record encoding error: {0}")]
  Encoding(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
