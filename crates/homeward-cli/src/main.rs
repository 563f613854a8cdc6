//! Homeward admin binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), wires up the
//! repository, and runs one operation: record an adoption, archive the live
//! transactions, seed the pet inventory, or print store status.

use std::path::PathBuf;

use anyhow::Context as _;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use homeward_core::{adoption::Adoption, gate::FailureModeGate};
use homeward_inventory::RedbInventory;
use homeward_remote::{AvailabilityNotifier, HttpFlagSource};
use homeward_repo::{FileSeedSource, RepoConfig, Repository};
use homeward_store_sqlite::SqliteStore;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(author, version, about = "Homeward adoption record store")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Record an adoption and notify downstream services.
  Adopt {
    #[arg(long)]
    pet_id:   String,
    #[arg(long)]
    pet_type: String,
    /// Generated when omitted.
    #[arg(long)]
    transaction_id: Option<String>,
    /// `YYYY-MM-DD`; defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Move all live transactions into history and clear the live relation.
  Archive,
  /// Bulk-load the pet inventory from the seed blob.
  Seed,
  /// Print store counts and the failure-mode flag state.
  Status,
}

type Repo =
  Repository<SqliteStore, RedbInventory, FileSeedSource, HttpFlagSource>;

async fn build_repository(cfg: &RepoConfig) -> anyhow::Result<Repo> {
  let store = SqliteStore::open(&cfg.db_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.db_path))?;

  let inventory = RedbInventory::open(&cfg.inventory_path).with_context(|| {
    format!("failed to open inventory at {:?}", cfg.inventory_path)
  })?;

  let notifier =
    AvailabilityNotifier::new(&cfg.status_update_url, &cfg.probe_url)
      .context("failed to build notifier")?;

  let gate = FailureModeGate::new(
    HttpFlagSource::new(&cfg.flag_url).context("failed to build flag source")?,
    cfg.flag_name.clone(),
  );

  Ok(Repository::new(
    store,
    inventory,
    FileSeedSource::new(&cfg.seed_path),
    notifier,
    gate,
  ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("HOMEWARD"))
    .build()
    .context("failed to read configuration")?;
  let cfg: RepoConfig = settings
    .try_deserialize()
    .context("failed to deserialise RepoConfig")?;

  let repo = build_repository(&cfg).await?;

  match cli.command {
    Command::Adopt { pet_id, pet_type, transaction_id, date } => {
      if repo.is_failure_mode_enabled().await {
        anyhow::bail!("failure mode is enabled; simulating a failed adoption");
      }

      let adoption = Adoption {
        pet_id,
        pet_type,
        transaction_id: transaction_id
          .unwrap_or_else(|| Uuid::new_v4().to_string()),
        adoption_date: date.unwrap_or_else(|| Utc::now().date_naive()),
      };

      repo.create_transaction(&adoption).await?;
      info!(
        pet_id = %adoption.pet_id,
        transaction_id = %adoption.transaction_id,
        "adoption recorded"
      );

      if let Err(err) = repo.notify(&adoption).await {
        // The transaction is already persisted; a notification failure is
        // reported but does not undo it.
        warn!(error = %err, "availability notification failed");
        return Err(err.into());
      }
      info!("downstream services notified");
    }

    Command::Archive => {
      repo.archive_and_purge().await?;
      info!("live transactions archived");
    }

    Command::Seed => {
      repo.seed().await?;
      info!(pets = repo.inventory_count().await?, "inventory seeded");
    }

    Command::Status => {
      let live = repo.live_transactions().await?.len();
      let history = repo.history_transactions().await?.len();
      let pets = repo.inventory_count().await?;
      let failure_mode = repo.is_failure_mode_enabled().await;
      println!("live transactions:    {live}");
      println!("history transactions: {history}");
      println!("pets in inventory:    {pets}");
      println!("failure mode:         {failure_mode}");
    }
  }

  Ok(())
}
