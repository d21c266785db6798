//! bookshelf server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), layers
//! `BOOKSHELF_*` environment variables on top, and serves the bookshelf API
//! over HTTP from an empty in-memory shelf.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use bookshelf_server::{ServerConfig, app, load_config};
use bookshelf_store_memory::MemoryStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Bookshelf HTTP server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Override the configured bind host.
  #[arg(long)]
  host: Option<String>,

  /// Override the configured port.
  #[arg(short, long)]
  port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let loaded = load_config(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;
  let server_cfg = ServerConfig {
    host: cli.host.unwrap_or(loaded.host),
    port: cli.port.unwrap_or(loaded.port),
  };

  let store = Arc::new(MemoryStore::new());
  let address = server_cfg.address();

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("Server running at http://{address}");

  axum::serve(listener, app(store)).await.context("server error")?;

  Ok(())
}
