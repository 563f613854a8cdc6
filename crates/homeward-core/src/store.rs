//! Capability traits for the backing stores and remote sources.
//!
//! Each trait covers one responsibility; the repository façade composes
//! them. Storage backends (`homeward-store-sqlite`, `homeward-inventory`)
//! and the remote layer (`homeward-remote`) implement these — orchestration
//! code depends only on the abstractions.

use std::future::Future;

use crate::{
  adoption::{Adoption, TransactionRow},
  pet::{BatchReport, Pet},
};

// ─── Relational ──────────────────────────────────────────────────────────────

/// Abstraction over the relational transaction store.
///
/// The two archival steps (`copy_live_to_history`, `purge_live`) are
/// exposed separately so the archival manager owns the sequencing and a
/// test double can fail the second step in isolation.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait TransactionStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert one adoption into the live relation. No retry; any backing
  /// failure surfaces verbatim.
  fn create_transaction<'a>(
    &'a self,
    adoption: &'a Adoption,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Idempotently create the live and history relations if absent. Safe to
  /// call repeatedly and concurrently with itself.
  fn ensure_schema(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Archival step 1: copy every live row into the history relation.
  fn copy_live_to_history(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Archival step 2: delete every row from the live relation.
  fn purge_live(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// All rows currently in the live relation, in insertion order.
  fn live_transactions(
    &self,
  ) -> impl Future<Output = Result<Vec<TransactionRow>, Self::Error>> + Send + '_;

  /// All rows in the history relation, in insertion order.
  fn history_transactions(
    &self,
  ) -> impl Future<Output = Result<Vec<TransactionRow>, Self::Error>> + Send + '_;
}

// ─── Key-value ───────────────────────────────────────────────────────────────

/// Abstraction over the denormalized pet inventory.
pub trait InventoryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Write a batch of pets keyed by `petid`, best-effort: per-item
  /// failures are collected in the [`BatchReport`] and already-written
  /// items are never rolled back. Re-writing an existing key overwrites.
  fn put_batch<'a>(
    &'a self,
    pets: &'a [Pet],
  ) -> impl Future<Output = Result<BatchReport, Self::Error>> + Send + 'a;

  /// Fetch one pet by id. Returns `None` if not found.
  fn get<'a>(
    &'a self,
    pet_id: &'a str,
  ) -> impl Future<Output = Result<Option<Pet>, Self::Error>> + Send + 'a;

  /// Number of pets currently stored.
  fn count(
    &self,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}

// ─── Remote sources ──────────────────────────────────────────────────────────

/// A static source of raw seed bytes (file, blob).
pub trait SeedSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn fetch(
    &self,
  ) -> impl Future<Output = Result<Vec<u8>, Self::Error>> + Send + '_;
}

/// A remote parameter store holding named string flags.
pub trait FlagSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Look up a flag by name. Returns `Ok(None)` when the flag is absent.
  fn get<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;
}
