//! Adoption — one completed adoption event.
//!
//! An adoption is written to the live relation exactly once and never
//! updated in place; corrections are recorded as new events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A completed adoption event, as submitted by a caller.
///
/// `pet_type` rides along for the downstream availability update and is not
/// persisted relationally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adoption {
  pub pet_id:         String,
  pub pet_type:       String,
  pub transaction_id: String,
  /// Calendar date of the adoption (DATE column, no time component).
  pub adoption_date:  NaiveDate,
}

impl Adoption {
  /// Reject adoptions that would violate the row invariants before they
  /// reach the store: `pet_id` and `transaction_id` must be non-empty.
  pub fn validate(&self) -> Result<()> {
    if self.pet_id.is_empty() {
      return Err(Error::InvalidAdoption("pet_id is empty"));
    }
    if self.transaction_id.is_empty() {
      return Err(Error::InvalidAdoption("transaction_id is empty"));
    }
    Ok(())
  }
}

/// A persisted transaction row — the [`Adoption`] columns plus the
/// store-assigned surrogate id. Lives in exactly one of the live or history
/// relations at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
  pub id:             i64,
  pub pet_id:         String,
  pub transaction_id: String,
  pub adoption_date:  NaiveDate,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn adoption() -> Adoption {
    Adoption {
      pet_id:         "p1".into(),
      pet_type:       "puppy".into(),
      transaction_id: "t1".into(),
      adoption_date:  NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
  }

  #[test]
  fn valid_adoption_passes() {
    assert!(adoption().validate().is_ok());
  }

  #[test]
  fn empty_pet_id_rejected() {
    let mut a = adoption();
    a.pet_id = String::new();
    assert!(matches!(a.validate(), Err(Error::InvalidAdoption(_))));
  }

  #[test]
  fn empty_transaction_id_rejected() {
    let mut a = adoption();
    a.transaction_id = String::new();
    assert!(matches!(a.validate(), Err(Error::InvalidAdoption(_))));
  }
}
