//! [`MemoryStore`] — the in-process implementation of [`BookStore`].

use std::sync::Arc;

use bookshelf_core::{
  book::{Book, BookDraft, BookId, BookSummary},
  filter::BookFilter,
  id,
  store::BookStore,
  timestamp,
};
use tokio::sync::RwLock;

use crate::{Error, Result};

/// How many ids to draw before giving up on finding an unused one.
const MAX_ID_ATTEMPTS: usize = 8;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A bookshelf held in process memory.
///
/// Every operation holds the lock for its whole duration, so concurrent
/// requests observe each other's writes atomically. Cloning is cheap — clones
/// share the same shelf.
#[derive(Clone, Default)]
pub struct MemoryStore {
  books: Arc<RwLock<Vec<Book>>>,
}

impl MemoryStore {
  /// Create an empty shelf.
  pub fn new() -> Self { Self::default() }
}

/// Draw ids from `generate` until one is not already on `books`.
pub(crate) fn fresh_id(
  books: &[Book],
  mut generate: impl FnMut() -> BookId,
) -> Result<BookId> {
  for attempt in 1..=MAX_ID_ATTEMPTS {
    let candidate = generate();
    if books.iter().all(|b| b.id != candidate) {
      return Ok(candidate);
    }
    tracing::warn!(%candidate, attempt, "generated book id already in use");
  }
  Err(Error::IdSpaceExhausted { attempts: MAX_ID_ATTEMPTS })
}

// ─── BookStore impl ──────────────────────────────────────────────────────────

impl BookStore for MemoryStore {
  type Error = Error;

  async fn add_book(&self, draft: BookDraft) -> Result<Book> {
    let mut books = self.books.write().await;
    let id = fresh_id(&books, id::generate)?;
    let book = Book::new(id, draft, timestamp::now());
    books.push(book.clone());
    Ok(book)
  }

  async fn list_books(&self, filter: &BookFilter) -> Result<Vec<BookSummary>> {
    let books = self.books.read().await;
    Ok(filter.apply(&books).into_iter().map(BookSummary::from).collect())
  }

  async fn get_book(&self, id: &BookId) -> Result<Option<Book>> {
    let books = self.books.read().await;
    Ok(books.iter().find(|b| &b.id == id).cloned())
  }

  async fn update_book(&self, id: &BookId, draft: BookDraft) -> Result<Option<Book>> {
    let mut books = self.books.write().await;
    let Some(book) = books.iter_mut().find(|b| &b.id == id) else {
      return Ok(None);
    };
    book.apply(draft, timestamp::now());
    Ok(Some(book.clone()))
  }

  async fn delete_book(&self, id: &BookId) -> Result<Option<Book>> {
    let mut books = self.books.write().await;
    Ok(
      books
        .iter()
        .position(|b| &b.id == id)
        .map(|index| books.remove(index)),
    )
  }

  async fn count_books(&self) -> Result<usize> { Ok(self.books.read().await.len()) }
}
