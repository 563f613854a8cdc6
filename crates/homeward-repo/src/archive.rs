//! [`ArchivalManager`] — the archive-then-purge transaction lifecycle.

use homeward_core::{
  error::{ArchivalStep, BoxError},
  store::TransactionStore,
  Error, Result,
};
use tracing::info;

/// Moves all live transactions into the history relation, then clears the
/// live relation.
///
/// The two steps are NOT atomic across each other: if the purge fails after
/// a successful copy, rows exist in BOTH relations — duplication, never
/// loss. That state is surfaced through [`Error::Archival`] with
/// `step == Purge` and no compensation is attempted.
pub struct ArchivalManager<T> {
  store: T,
}

impl<T: TransactionStore> ArchivalManager<T> {
  pub fn new(store: T) -> Self { Self { store } }

  /// Step 1 copy, step 2 purge; step 2 runs only if step 1 succeeded.
  pub async fn archive_and_purge(&self) -> Result<()> {
    self
      .store
      .copy_live_to_history()
      .await
      .map_err(|e| archival_error(ArchivalStep::Copy, e))?;

    self
      .store
      .purge_live()
      .await
      .map_err(|e| archival_error(ArchivalStep::Purge, e))?;

    info!("archived live transactions into history");
    Ok(())
  }
}

fn archival_error(
  step: ArchivalStep,
  source: impl Into<BoxError>,
) -> Error {
  Error::Archival { step, source: source.into() }
}
