//! Orchestration layer for the Homeward adoption record store.
//!
//! Coordinates the backing stores and outbound calls behind the
//! [`Repository`] façade: transaction persistence, the archive-then-purge
//! lifecycle, the bulk seeding pipeline, availability notification, and the
//! failure-mode gate. All failure semantics live here; the backends stay
//! dumb.

mod archive;
mod config;
mod repository;
mod seed;

pub use archive::ArchivalManager;
pub use config::RepoConfig;
pub use repository::Repository;
pub use seed::{FileSeedSource, InventorySeeder};
