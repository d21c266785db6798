//! Book types — the only entity the bookshelf knows about.
//!
//! A request payload arrives as a [`BookInput`] (every field optional),
//! is checked into a [`BookDraft`], and becomes a stored [`Book`] once the
//! store assigns an id and timestamps.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Opaque, server-generated book identifier (see [`crate::id`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
  pub fn as_str(&self) -> &str { &self.0 }
}

impl From<String> for BookId {
  fn from(value: String) -> Self { Self(value) }
}

impl From<&str> for BookId {
  fn from(value: &str) -> Self { Self(value.to_owned()) }
}

impl fmt::Display for BookId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Input ───────────────────────────────────────────────────────────────────

/// The client-supplied book fields, as found in a create or update body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
  pub name:       Option<String>,
  pub year:       Option<i64>,
  pub author:     Option<String>,
  pub summary:    Option<String>,
  pub publisher:  Option<String>,
  pub page_count: Option<i64>,
  pub read_page:  Option<i64>,
  pub reading:    Option<bool>,
}

impl BookInput {
  /// Parse a raw request body.
  ///
  /// An empty body or a literal `null` counts as a missing payload.
  pub fn from_json(body: &[u8]) -> Result<Self> {
    if body.iter().all(u8::is_ascii_whitespace) {
      return Err(Error::MissingBody);
    }
    serde_json::from_slice::<Option<Self>>(body)?.ok_or(Error::MissingBody)
  }

  /// Run the name and page checks, in that order.
  ///
  /// The page check only runs when both `readPage` and `pageCount` are
  /// present and non-null; a JSON `null` counts as absent.
  pub fn validate(self) -> Result<BookDraft> {
    let name = match self.name {
      Some(name) if !name.is_empty() => name,
      _ => return Err(Error::MissingName),
    };

    if let (Some(read_page), Some(page_count)) = (self.read_page, self.page_count)
      && read_page > page_count
    {
      return Err(Error::ReadPageExceedsPageCount { read_page, page_count });
    }

    Ok(BookDraft {
      name,
      year: self.year,
      author: self.author,
      summary: self.summary,
      publisher: self.publisher,
      page_count: self.page_count,
      read_page: self.read_page,
      reading: self.reading,
    })
  }
}

/// A [`BookInput`] that passed validation: it has a name and
/// `readPage <= pageCount` whenever both are given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
  pub name:       String,
  pub year:       Option<i64>,
  pub author:     Option<String>,
  pub summary:    Option<String>,
  pub publisher:  Option<String>,
  pub page_count: Option<i64>,
  pub read_page:  Option<i64>,
  pub reading:    Option<bool>,
}

impl BookDraft {
  /// A book is finished when it has been read up to its last page. Two
  /// missing page counts compare equal.
  pub fn is_finished(&self) -> bool { self.page_count == self.read_page }
}

// ─── Stored record ───────────────────────────────────────────────────────────

/// A book as held by a store and returned by `GET /books/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
  pub id:          BookId,
  pub name:        String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub year:        Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author:      Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub summary:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub publisher:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub page_count:  Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub read_page:   Option<i64>,
  /// Derived from the page fields when the book is created. Updates leave it
  /// alone.
  pub finished:    bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reading:     Option<bool>,
  #[serde(with = "crate::timestamp")]
  pub inserted_at: DateTime<Utc>,
  #[serde(with = "crate::timestamp")]
  pub updated_at:  DateTime<Utc>,
}

impl Book {
  pub fn new(id: BookId, draft: BookDraft, now: DateTime<Utc>) -> Self {
    let finished = draft.is_finished();
    Self {
      id,
      name: draft.name,
      year: draft.year,
      author: draft.author,
      summary: draft.summary,
      publisher: draft.publisher,
      page_count: draft.page_count,
      read_page: draft.read_page,
      finished,
      reading: draft.reading,
      inserted_at: now,
      updated_at: now,
    }
  }

  /// Overwrite every client-editable field with `draft`.
  ///
  /// `id`, `inserted_at` and `finished` are kept as they are.
  pub fn apply(&mut self, draft: BookDraft, now: DateTime<Utc>) {
    self.name = draft.name;
    self.year = draft.year;
    self.author = draft.author;
    self.summary = draft.summary;
    self.publisher = draft.publisher;
    self.page_count = draft.page_count;
    self.read_page = draft.read_page;
    self.reading = draft.reading;
    self.updated_at = now;
  }
}

/// The `{id, name, publisher}` projection used by `GET /books`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
  pub id:        BookId,
  pub name:      String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
  fn from(book: &Book) -> Self {
    Self {
      id:        book.id.clone(),
      name:      book.name.clone(),
      publisher: book.publisher.clone(),
    }
  }
}
