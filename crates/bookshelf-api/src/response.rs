//! JSON envelopes shared by every endpoint.
//!
//! Successful responses look like `{"status":"success", "message"?, "data"?}`;
//! failures like `{"status":"fail"|"error", "message"}`.

use bookshelf_core::book::{Book, BookId, BookSummary};
use serde::Serialize;

/// `{"status":"success", ...}`
#[derive(Debug, Serialize)]
pub struct Success<T> {
  pub status:  &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data:    Option<T>,
}

impl<T> Success<T> {
  pub fn data(data: T) -> Self {
    Self { status: "success", message: None, data: Some(data) }
  }

  pub fn with_message(mut self, message: impl Into<String>) -> Self {
    self.message = Some(message.into());
    self
  }
}

impl Success<()> {
  pub fn message(message: impl Into<String>) -> Self {
    Self { status: "success", message: Some(message.into()), data: None }
  }
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize)]
pub struct Failure {
  pub status:  &'static str,
  pub message: String,
}

impl Failure {
  /// The client sent something we cannot act on (4xx).
  pub fn fail(message: impl Into<String>) -> Self {
    Self { status: "fail", message: message.into() }
  }

  /// The server could not complete a valid request (5xx).
  pub fn error(message: impl Into<String>) -> Self {
    Self { status: "error", message: message.into() }
  }
}

// ─── Payloads ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
  pub book_id: BookId,
}

#[derive(Debug, Serialize)]
pub struct BookList {
  pub books: Vec<BookSummary>,
}

#[derive(Debug, Serialize)]
pub struct OneBook {
  pub book: Book,
}
