//! [`InventorySeeder`] — the bulk seeding pipeline, and the file-backed
//! seed source.
//!
//! Fixed order: read → parse → batch-write → schema-ensure, strictly
//! sequential.

use std::path::PathBuf;

use homeward_core::{
  pet::Pet,
  store::{InventoryStore, SeedSource, TransactionStore},
  Error, Result,
};
use tracing::{info, warn};

// ─── Seed source ─────────────────────────────────────────────────────────────

/// Reads the static seed blob from a local file.
#[derive(Debug, Clone)]
pub struct FileSeedSource {
  path: PathBuf,
}

impl FileSeedSource {
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl SeedSource for FileSeedSource {
  type Error = std::io::Error;

  async fn fetch(&self) -> Result<Vec<u8>, Self::Error> {
    tokio::fs::read(&self.path).await
  }
}

// ─── Seeder ──────────────────────────────────────────────────────────────────

/// Loads the static pet collection into the key-value store, then makes
/// sure the relational schema exists.
pub struct InventorySeeder<S, I, T> {
  source:    S,
  inventory: I,
  records:   T,
}

impl<S, I, T> InventorySeeder<S, I, T>
where
  S: SeedSource,
  I: InventoryStore,
  T: TransactionStore,
{
  pub fn new(source: S, inventory: I, records: T) -> Self {
    Self { source, inventory, records }
  }

  /// Run the pipeline.
  ///
  /// Failure semantics per step:
  /// 1. a source read failure is logged and swallowed — the pipeline
  ///    carries on with empty bytes (which then fail to parse);
  /// 2. a parse failure is fatal and nothing is written;
  /// 3. a batch-write failure, partial or total, is logged and the
  ///    pipeline carries on;
  /// 4. a schema-ensure failure is fatal and surfaces to the caller.
  pub async fn seed(&self) -> Result<()> {
    let bytes = match self.source.fetch().await {
      Ok(bytes) => bytes,
      Err(err) => {
        warn!(error = %err, "seed source read failed, continuing with empty data");
        Vec::new()
      }
    };

    let pets: Vec<Pet> = serde_json::from_slice(&bytes)?;
    info!(count = pets.len(), "seeding pet inventory");

    match self.inventory.put_batch(&pets).await {
      Ok(report) if report.is_complete() => {
        info!(written = report.written, "inventory batch write complete");
      }
      Ok(report) => {
        warn!(
          written = report.written,
          failed = report.failed.len(),
          "inventory batch write was partial, continuing"
        );
      }
      Err(err) => {
        let err = Error::BatchWrite(Box::new(err));
        warn!(error = %err, "inventory batch write failed, continuing");
      }
    }

    self
      .records
      .ensure_schema()
      .await
      .map_err(|e| Error::Persistence(Box::new(e)))?;

    Ok(())
  }
}
