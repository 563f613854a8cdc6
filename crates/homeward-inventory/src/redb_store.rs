//! [`RedbInventory`] — the embedded-database implementation of
//! [`InventoryStore`].

use std::{path::Path, sync::Arc};

use homeward_core::{
  pet::{BatchReport, Pet},
  store::InventoryStore,
};
use redb::{Database, ReadableTableMetadata, TableDefinition};
use tracing::warn;

use crate::Result;

/// Pets keyed by `petid`; values are JSON-encoded [`Pet`] records.
const PETS: TableDefinition<&str, &[u8]> = TableDefinition::new("pets");

/// A pet inventory backed by a single redb file.
///
/// Cloning is cheap — the database handle is reference-counted and safe for
/// concurrent use.
#[derive(Clone)]
pub struct RedbInventory {
  db: Arc<Database>,
}

impl RedbInventory {
  /// Open (or create) an inventory at `path` and make sure the pets table
  /// exists so reads never race table creation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let db = Database::create(path)?;
    let txn = db.begin_write()?;
    txn.open_table(PETS)?;
    txn.commit()?;
    Ok(Self { db: Arc::new(db) })
  }
}

impl InventoryStore for RedbInventory {
  type Error = crate::Error;

  async fn put_batch(&self, pets: &[Pet]) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    let txn = self.db.begin_write()?;
    {
      let mut table = txn.open_table(PETS)?;
      for pet in pets {
        // A record that fails to encode is skipped and reported; the rest
        // of the batch still goes through.
        match serde_json::to_vec(pet) {
          Ok(bytes) => {
            table.insert(pet.petid.as_str(), bytes.as_slice())?;
            report.written += 1;
          }
          Err(err) => {
            warn!(petid = %pet.petid, error = %err, "skipping unencodable pet record");
            report.failed.push((pet.petid.clone(), err.to_string()));
          }
        }
      }
    }
    txn.commit()?;

    Ok(report)
  }

  async fn get(&self, pet_id: &str) -> Result<Option<Pet>> {
    let txn = self.db.begin_read()?;
    let table = txn.open_table(PETS)?;
    let Some(guard) = table.get(pet_id)? else {
      return Ok(None);
    };
    Ok(Some(serde_json::from_slice(guard.value())?))
  }

  async fn count(&self) -> Result<usize> {
    let txn = self.db.begin_read()?;
    let table = txn.open_table(PETS)?;
    Ok(table.len()? as usize)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pet(id: &str) -> Pet {
    Pet {
      petid:         id.into(),
      pettype:       "kitten".into(),
      availability:  "yes".into(),
      cuteness_rate: "5".into(),
      petcolor:      "black".into(),
      image:         format!("{id}.png"),
      price:         "50".into(),
    }
  }

  fn inventory() -> (tempfile::TempDir, RedbInventory) {
    let dir = tempfile::tempdir().expect("tempdir");
    let inv = RedbInventory::open(dir.path().join("pets.redb")).expect("open");
    (dir, inv)
  }

  #[tokio::test]
  async fn batch_write_and_read_back() {
    let (_dir, inv) = inventory();

    let report = inv.put_batch(&[pet("p1"), pet("p2")]).await.unwrap();
    assert_eq!(report.written, 2);
    assert!(report.is_complete());

    let fetched = inv.get("p1").await.unwrap().unwrap();
    assert_eq!(fetched.pettype, "kitten");
    assert_eq!(inv.count().await.unwrap(), 2);
  }

  #[tokio::test]
  async fn rewrite_same_key_overwrites() {
    let (_dir, inv) = inventory();

    inv.put_batch(&[pet("p1")]).await.unwrap();
    let mut updated = pet("p1");
    updated.availability = "no".into();
    inv.put_batch(&[updated]).await.unwrap();

    assert_eq!(inv.count().await.unwrap(), 1);
    let fetched = inv.get("p1").await.unwrap().unwrap();
    assert_eq!(fetched.availability, "no");
  }

  #[tokio::test]
  async fn missing_key_returns_none() {
    let (_dir, inv) = inventory();
    assert!(inv.get("nope").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn empty_store_counts_zero() {
    let (_dir, inv) = inventory();
    assert_eq!(inv.count().await.unwrap(), 0);
  }
}
