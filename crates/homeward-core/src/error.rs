//! Error taxonomy for the Homeward data-access layer.
//!
//! Backend error types stay behind the capability traits; the orchestration
//! layer boxes them into these variants so callers see one taxonomy.

use thiserror::Error;

/// Boxed source error from a storage or transport backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which step of the archive-then-purge lifecycle failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchivalStep {
  /// Copying live rows into the history relation.
  Copy,
  /// Deleting the copied rows from the live relation.
  Purge,
}

impl std::fmt::Display for ArchivalStep {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ArchivalStep::Copy => write!(f, "copy"),
      ArchivalStep::Purge => write!(f, "purge"),
    }
  }
}

#[derive(Debug, Error)]
pub enum Error {
  /// The relational store failed an insert, schema bootstrap, or read.
  #[error("persistence error: {0}")]
  Persistence(#[source] BoxError),

  /// An archival step failed. A failure during `purge` leaves rows present
  /// in both relations (duplication, never loss) — see the archival
  /// manager's contract.
  #[error("archival failed during {step}: {source}")]
  Archival {
    step:   ArchivalStep,
    #[source]
    source: BoxError,
  },

  /// The seed blob did not deserialize into a pet list. Fatal: no
  /// key-value writes are attempted.
  #[error("seed data is malformed: {0}")]
  SeedFormat(#[from] serde_json::Error),

  /// The key-value batch write failed outright or in part. Non-fatal in
  /// the seeding pipeline; logged and carried on.
  #[error("inventory batch write failed: {0}")]
  BatchWrite(#[source] BoxError),

  /// The first error observed from either downstream notification call.
  #[error("availability notification failed: {0}")]
  Notification(#[source] BoxError),

  /// The adoption failed validation before reaching the store.
  #[error("invalid adoption: {0}")]
  InvalidAdoption(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
