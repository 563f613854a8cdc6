//! [`SqliteStore`] — the SQLite implementation of [`TransactionStore`].

use std::path::Path;

use homeward_core::{
  adoption::{Adoption, TransactionRow},
  store::TransactionStore,
};
use tracing::debug;

use crate::{
  encode::{decode_date, encode_date},
  schema::SCHEMA,
  Error, Result,
};

/// A raw row as it comes back from SQLite, before date decoding.
struct RawRow {
  id:             i64,
  pet_id:         String,
  adoption_date:  String,
  transaction_id: String,
}

impl RawRow {
  fn into_row(self) -> Result<TransactionRow> {
    Ok(TransactionRow {
      id:             self.id,
      pet_id:         self.pet_id,
      transaction_id: self.transaction_id,
      adoption_date:  decode_date(&self.adoption_date)?,
    })
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Homeward transaction store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.ensure_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.ensure_schema().await?;
    Ok(store)
  }

  async fn select_all(&self, table: &'static str) -> Result<Vec<TransactionRow>> {
    let raws: Vec<RawRow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT id, pet_id, adoption_date, transaction_id FROM {table} ORDER BY id"
        ))?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawRow {
              id:             row.get(0)?,
              pet_id:         row.get(1)?,
              adoption_date:  row.get(2)?,
              transaction_id: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRow::into_row).collect()
  }

  async fn execute(&self, sql: &'static str) -> Result<()> {
    debug!(sql, "executing");
    self
      .conn
      .call(move |conn| {
        conn.execute(sql, [])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── TransactionStore impl ───────────────────────────────────────────────────

impl TransactionStore for SqliteStore {
  type Error = Error;

  async fn create_transaction(&self, adoption: &Adoption) -> Result<()> {
    let pet_id = adoption.pet_id.clone();
    let transaction_id = adoption.transaction_id.clone();
    let date_str = encode_date(adoption.adoption_date);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO transactions (pet_id, adoption_date, transaction_id)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![pet_id, date_str, transaction_id],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn ensure_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn copy_live_to_history(&self) -> Result<()> {
    self
      .execute("INSERT INTO transactions_history SELECT * FROM transactions")
      .await
  }

  async fn purge_live(&self) -> Result<()> {
    self.execute("DELETE FROM transactions").await
  }

  async fn live_transactions(&self) -> Result<Vec<TransactionRow>> {
    self.select_all("transactions").await
  }

  async fn history_transactions(&self) -> Result<Vec<TransactionRow>> {
    self.select_all("transactions_history").await
  }
}
