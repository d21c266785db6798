//! Error types for `bookshelf-core`.

use thiserror::Error;

/// Rejections raised while turning a request payload into a [`BookDraft`].
///
/// [`BookDraft`]: crate::book::BookDraft
#[derive(Debug, Error)]
pub enum Error {
  #[error("missing body")]
  MissingBody,

  #[error("missing name")]
  MissingName,

  #[error("readPage exceeds pageCount ({read_page} > {page_count})")]
  ReadPageExceedsPageCount { read_page: i64, page_count: i64 },

  #[error("invalid payload: {0}")]
  InvalidPayload(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
