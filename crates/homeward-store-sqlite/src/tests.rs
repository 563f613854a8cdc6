//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use homeward_core::{adoption::Adoption, store::TransactionStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn adoption(pet_id: &str, transaction_id: &str) -> Adoption {
  Adoption {
    pet_id:         pet_id.into(),
    pet_type:       "puppy".into(),
    transaction_id: transaction_id.into(),
    adoption_date:  NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
  }
}

// ─── Inserts ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_read_back_exactly_once() {
  let s = store().await;

  s.create_transaction(&adoption("p1", "t1")).await.unwrap();

  let live = s.live_transactions().await.unwrap();
  assert_eq!(live.len(), 1);
  assert_eq!(live[0].pet_id, "p1");
  assert_eq!(live[0].transaction_id, "t1");
  assert_eq!(
    live[0].adoption_date,
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
  );
}

#[tokio::test]
async fn inserts_preserve_order() {
  let s = store().await;

  s.create_transaction(&adoption("p1", "t1")).await.unwrap();
  s.create_transaction(&adoption("p2", "t2")).await.unwrap();
  s.create_transaction(&adoption("p3", "t3")).await.unwrap();

  let live = s.live_transactions().await.unwrap();
  let ids: Vec<_> = live.iter().map(|r| r.transaction_id.as_str()).collect();
  assert_eq!(ids, ["t1", "t2", "t3"]);
}

// ─── Schema bootstrap ────────────────────────────────────────────────────────

#[tokio::test]
async fn ensure_schema_is_idempotent() {
  let s = store().await;

  // Already ran once in open_in_memory; repeated calls must not fail and
  // must not disturb existing rows.
  s.create_transaction(&adoption("p1", "t1")).await.unwrap();
  s.ensure_schema().await.unwrap();
  s.ensure_schema().await.unwrap();

  assert_eq!(s.live_transactions().await.unwrap().len(), 1);
}

// ─── Archival steps ──────────────────────────────────────────────────────────

#[tokio::test]
async fn copy_then_purge_moves_rows() {
  let s = store().await;

  s.create_transaction(&adoption("p1", "t1")).await.unwrap();
  s.create_transaction(&adoption("p2", "t2")).await.unwrap();

  s.copy_live_to_history().await.unwrap();
  s.purge_live().await.unwrap();

  assert!(s.live_transactions().await.unwrap().is_empty());

  let history = s.history_transactions().await.unwrap();
  assert_eq!(history.len(), 2);
  assert_eq!(history[0].pet_id, "p1");
  assert_eq!(history[1].pet_id, "p2");
}

#[tokio::test]
async fn copy_without_purge_duplicates() {
  let s = store().await;

  s.create_transaction(&adoption("p1", "t1")).await.unwrap();
  s.copy_live_to_history().await.unwrap();

  // Between the two steps rows exist in both relations.
  assert_eq!(s.live_transactions().await.unwrap().len(), 1);
  assert_eq!(s.history_transactions().await.unwrap().len(), 1);
}

#[tokio::test]
async fn history_accumulates_across_archives() {
  let s = store().await;

  s.create_transaction(&adoption("p1", "t1")).await.unwrap();
  s.copy_live_to_history().await.unwrap();
  s.purge_live().await.unwrap();

  s.create_transaction(&adoption("p2", "t2")).await.unwrap();
  s.copy_live_to_history().await.unwrap();
  s.purge_live().await.unwrap();

  let history = s.history_transactions().await.unwrap();
  assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn purge_on_empty_live_is_a_noop() {
  let s = store().await;
  s.purge_live().await.unwrap();
  assert!(s.live_transactions().await.unwrap().is_empty());
}
