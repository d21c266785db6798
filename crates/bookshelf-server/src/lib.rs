//! HTTP server wiring for the bookshelf.
//!
//! Wraps the [`bookshelf_api`] router with permissive CORS and request
//! tracing, and loads the listening address from configuration.

use std::{path::Path, sync::Arc};

use axum::Router;
use bookshelf_core::store::BookStore;
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9000;

/// Runtime server configuration, deserialised from `config.toml` and
/// `BOOKSHELF_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Layer defaults, the optional file at `path`, and the environment, in
/// increasing order of precedence.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .set_default("host", DEFAULT_HOST)?
    .set_default("port", i64::from(DEFAULT_PORT))?
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("BOOKSHELF"))
    .build()?
    .try_deserialize()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application: API routes plus CORS and tracing layers.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: BookStore + 'static,
{
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(Any)
    .allow_headers(Any);

  bookshelf_api::api_router(store)
    .layer(TraceLayer::new_for_http())
    .layer(cors)
}
