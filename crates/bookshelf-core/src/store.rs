//! The `BookStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `bookshelf-store-memory`). The HTTP layer depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  book::{Book, BookDraft, BookId, BookSummary},
  filter::BookFilter,
};

/// Abstraction over a bookshelf backend.
///
/// Inputs are already validated; a store only assigns identity and
/// timestamps. Lookups by id report a missing book as `None` rather than as
/// an error so callers can tell "absent" apart from a backend failure.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait BookStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Assign a fresh id and timestamps to `draft`, append it to the shelf and
  /// return the stored book.
  fn add_book(
    &self,
    draft: BookDraft,
  ) -> impl Future<Output = Result<Book, Self::Error>> + Send + '_;

  /// Summaries of the books selected by `filter`, in insertion order.
  fn list_books<'a>(
    &'a self,
    filter: &'a BookFilter,
  ) -> impl Future<Output = Result<Vec<BookSummary>, Self::Error>> + Send + 'a;

  /// Retrieve a book by id. Returns `None` if not found.
  fn get_book<'a>(
    &'a self,
    id: &'a BookId,
  ) -> impl Future<Output = Result<Option<Book>, Self::Error>> + Send + 'a;

  /// Replace the editable fields of a book and refresh `updated_at`.
  /// Returns the updated book, or `None` if not found.
  fn update_book<'a>(
    &'a self,
    id: &'a BookId,
    draft: BookDraft,
  ) -> impl Future<Output = Result<Option<Book>, Self::Error>> + Send + 'a;

  /// Remove a book. Returns the removed book, or `None` if not found.
  fn delete_book<'a>(
    &'a self,
    id: &'a BookId,
  ) -> impl Future<Output = Result<Option<Book>, Self::Error>> + Send + 'a;

  /// Number of books currently on the shelf, so callers can observe the
  /// collection size without listing it.
  fn count_books(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
