//! Key-value backends for the Homeward pet inventory.
//!
//! Two implementations of [`homeward_core::store::InventoryStore`]:
//! - [`RedbInventory`] — durable, backed by an embedded redb database;
//! - [`MemoryInventory`] — in-process map, for testing.

mod memory;
mod redb_store;

pub mod error;

pub use error::{Error, Result};
pub use memory::MemoryInventory;
pub use redb_store::RedbInventory;
