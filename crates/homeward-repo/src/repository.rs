//! [`Repository`] — the façade composing the store backends and outbound
//! calls into one capability set.

use homeward_core::{
  adoption::{Adoption, TransactionRow},
  gate::FailureModeGate,
  store::{FlagSource, InventoryStore, SeedSource, TransactionStore},
  Error, Result,
};
use homeward_remote::AvailabilityNotifier;

use crate::{ArchivalManager, InventorySeeder};

/// The one entry point callers outside this layer talk to.
///
/// Pure delegation: each operation hands off to exactly one component.
/// Components never call each other, except that the seeder finishes by
/// ensuring the relational schema.
pub struct Repository<T, I, S, F> {
  records:   T,
  inventory: I,
  archival:  ArchivalManager<T>,
  seeder:    InventorySeeder<S, I, T>,
  notifier:  AvailabilityNotifier,
  gate:      FailureModeGate<F>,
}

impl<T, I, S, F> Repository<T, I, S, F>
where
  T: TransactionStore + Clone,
  I: InventoryStore + Clone,
  S: SeedSource,
  F: FlagSource,
{
  pub fn new(
    records: T,
    inventory: I,
    seeds: S,
    notifier: AvailabilityNotifier,
    gate: FailureModeGate<F>,
  ) -> Self {
    let archival = ArchivalManager::new(records.clone());
    let seeder = InventorySeeder::new(seeds, inventory.clone(), records.clone());
    Self { records, inventory, archival, seeder, notifier, gate }
  }

  /// Persist one adoption in the live relation. Validated first; any
  /// backing failure surfaces verbatim as [`Error::Persistence`].
  pub async fn create_transaction(&self, adoption: &Adoption) -> Result<()> {
    adoption.validate()?;
    self
      .records
      .create_transaction(adoption)
      .await
      .map_err(|e| Error::Persistence(Box::new(e)))
  }

  /// Idempotently create the live and history relations.
  pub async fn ensure_schema(&self) -> Result<()> {
    self
      .records
      .ensure_schema()
      .await
      .map_err(|e| Error::Persistence(Box::new(e)))
  }

  /// Move all live transactions to history, then clear the live relation.
  pub async fn archive_and_purge(&self) -> Result<()> {
    self.archival.archive_and_purge().await
  }

  /// Run the bulk seeding pipeline.
  pub async fn seed(&self) -> Result<()> { self.seeder.seed().await }

  /// Fan out the availability notification for `adoption`.
  pub async fn notify(&self, adoption: &Adoption) -> Result<()> {
    self
      .notifier
      .notify(adoption)
      .await
      .map_err(|e| Error::Notification(Box::new(e)))
  }

  /// Fail-safe read of the failure-mode flag. Never errors.
  pub async fn is_failure_mode_enabled(&self) -> bool {
    self.gate.is_failure_mode_enabled().await
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  pub async fn live_transactions(&self) -> Result<Vec<TransactionRow>> {
    self
      .records
      .live_transactions()
      .await
      .map_err(|e| Error::Persistence(Box::new(e)))
  }

  pub async fn history_transactions(&self) -> Result<Vec<TransactionRow>> {
    self
      .records
      .history_transactions()
      .await
      .map_err(|e| Error::Persistence(Box::new(e)))
  }

  pub async fn inventory_count(&self) -> Result<usize> {
    self
      .inventory
      .count()
      .await
      .map_err(|e| Error::Persistence(Box::new(e)))
  }
}
