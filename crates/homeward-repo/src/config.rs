//! Runtime configuration for the repository layer.

use std::path::PathBuf;

use serde::Deserialize;

fn default_seed_path() -> PathBuf { PathBuf::from("seed.json") }

fn default_probe_url() -> String { "https://amazon.com".to_string() }

fn default_flag_name() -> String { "errormode".to_string() }

/// Settings for wiring up a [`Repository`](crate::Repository), usually
/// deserialised from `config.toml` plus `HOMEWARD_`-prefixed environment
/// overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoConfig {
  /// SQLite file holding the live and history relations.
  pub db_path:           PathBuf,
  /// redb file holding the pet inventory.
  pub inventory_path:    PathBuf,
  /// Static seed blob read by the seeding pipeline.
  #[serde(default = "default_seed_path")]
  pub seed_path:         PathBuf,
  /// Downstream endpoint for the availability status-update PUT.
  pub status_update_url: String,
  /// Probe endpoint hit alongside every status update.
  #[serde(default = "default_probe_url")]
  pub probe_url:         String,
  /// Base URL of the remote parameter store holding the failure-mode flag.
  pub flag_url:          String,
  /// Name of the failure-mode flag.
  #[serde(default = "default_flag_name")]
  pub flag_name:         String,
}
