//! Encoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! The DATE column holds ISO 8601 calendar dates (`YYYY-MM-DD`).

use chrono::NaiveDate;

use crate::{Error, Result};

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(e.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn date_roundtrip() {
    let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(decode_date(&encode_date(d)).unwrap(), d);
  }

  #[test]
  fn garbage_date_errors() {
    assert!(matches!(decode_date("not-a-date"), Err(Error::DateParse(_))));
  }
}
