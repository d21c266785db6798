//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use bookshelf_core::Error as CoreError;
use thiserror::Error;

use crate::response::Failure;

/// The write a rejected payload was meant for; used to word the message.
#[derive(Debug, Clone, Copy)]
pub enum Action {
  Add,
  Update,
}

impl Action {
  fn verb(self) -> &'static str {
    match self {
      Action::Add => "add",
      Action::Update => "update",
    }
  }
}

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Translate a payload rejection into a 400 with a client-facing message.
  pub fn rejected(action: Action, err: CoreError) -> Self {
    let reason = match err {
      CoreError::MissingBody | CoreError::InvalidPayload(_) => "Invalid payload",
      CoreError::MissingName => "Please provide the book name",
      CoreError::ReadPageExceedsPageCount { .. } => {
        "readPage must not be greater than pageCount"
      }
    };
    ApiError::BadRequest(format!("Failed to {} book. {reason}", action.verb()))
  }

  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store(Box::new(err))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, Failure::fail(m)),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, Failure::fail(m)),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, Failure::error(e.to_string()))
      }
    };
    (status, Json(body)).into_response()
  }
}
