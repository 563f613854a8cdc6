//! Pet — a denormalized inventory item held in the key-value store.
//!
//! Pets enter the system through bulk seeding from a static JSON blob; the
//! key-value store is never reconciled incrementally.

use serde::{Deserialize, Serialize};

/// One pet available for adoption, keyed by `petid`.
///
/// All fields are strings — the shape mirrors the external seed blob and
/// the key-value record exactly. Fields missing from the blob read as
/// empty strings rather than failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pet {
  pub petid:         String,
  pub pettype:       String,
  pub availability:  String,
  pub cuteness_rate: String,
  pub petcolor:      String,
  pub image:         String,
  pub price:         String,
}

/// Outcome of a best-effort batch write.
///
/// Items that fail are reported here, never rolled back; items written
/// before a failure stay written.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
  /// Number of records written.
  pub written: usize,
  /// `(petid, reason)` for each record that could not be written.
  pub failed:  Vec<(String, String)>,
}

impl BatchReport {
  pub fn is_complete(&self) -> bool { self.failed.is_empty() }
}
