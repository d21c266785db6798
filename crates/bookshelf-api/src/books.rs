//! Handlers for `/books` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/books` | Body: book fields; returns 201 + `{bookId}` |
//! | `GET`    | `/books` | Optional `?name`, `?reading=0\|1`, `?finished=0\|1` |
//! | `GET`    | `/books/{id}` | 404 if not found |
//! | `PUT`    | `/books/{id}` | Body: book fields; replaces them |
//! | `DELETE` | `/books/{id}` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use bookshelf_core::{
  book::{BookId, BookInput},
  filter::BookFilter,
  store::BookStore,
};
use bytes::Bytes;

use crate::{
  error::{Action, ApiError},
  response::{BookList, Created, OneBook, Success},
};

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /books`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: BookStore,
{
  let draft = BookInput::from_json(&body)
    .and_then(BookInput::validate)
    .map_err(|e| {
      tracing::warn!(error = %e, "rejected new book");
      ApiError::rejected(Action::Add, e)
    })?;

  let book = store.add_book(draft).await.map_err(ApiError::store)?;
  tracing::info!(book_id = %book.id, name = %book.name, "book added");

  Ok((
    StatusCode::CREATED,
    Json(Success::data(Created { book_id: book.id }).with_message("Book added successfully")),
  ))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// Raw `GET /books` query values.
///
/// A key given more than once keeps its last value.
#[derive(Debug, Default)]
pub struct ListParams {
  pub name:     Option<String>,
  pub reading:  Option<String>,
  pub finished: Option<String>,
}

impl ListParams {
  pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
    let mut params = Self::default();
    for (key, value) in pairs {
      match key.as_str() {
        "name" => params.name = Some(value),
        "reading" => params.reading = Some(value),
        "finished" => params.finished = Some(value),
        _ => {}
      }
    }
    params
  }
}

/// `GET /books[?name=<substr>][&reading=0|1][&finished=0|1]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Success<BookList>>, ApiError>
where
  S: BookStore,
{
  let params = ListParams::from_pairs(pairs);
  let filter = BookFilter::from_query(
    params.name.as_deref(),
    params.reading.as_deref(),
    params.finished.as_deref(),
  );
  let books = store.list_books(&filter).await.map_err(ApiError::store)?;
  tracing::debug!(?filter, count = books.len(), "listed books");
  Ok(Json(Success::data(BookList { books })))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /books/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<BookId>,
) -> Result<Json<Success<OneBook>>, ApiError>
where
  S: BookStore,
{
  let book = store
    .get_book(&id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Book not found".to_string()))?;
  Ok(Json(Success::data(OneBook { book })))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /books/{id}`
///
/// Payload checks run before the lookup, so an invalid body for an unknown
/// id is a 400, not a 404.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<BookId>,
  body: Bytes,
) -> Result<Json<Success<()>>, ApiError>
where
  S: BookStore,
{
  let draft = BookInput::from_json(&body)
    .and_then(BookInput::validate)
    .map_err(|e| {
      tracing::warn!(book_id = %id, error = %e, "rejected book update");
      ApiError::rejected(Action::Update, e)
    })?;

  store
    .update_book(&id, draft)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Failed to update book. Id not found".to_string()))?;
  tracing::info!(book_id = %id, "book updated");

  Ok(Json(Success::message("Book updated successfully")))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /books/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<BookId>,
) -> Result<Json<Success<()>>, ApiError>
where
  S: BookStore,
{
  store
    .delete_book(&id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Failed to delete book. Id not found".to_string()))?;
  tracing::info!(book_id = %id, "book deleted");

  Ok(Json(Success::message("Book deleted successfully")))
}
