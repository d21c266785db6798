//! Filters accepted by `GET /books`.
//!
//! Filters do not compose. They are evaluated in the order name, reading,
//! finished, and each one that is present selects from the *whole*
//! collection, so only the last present filter shapes the result. Clients
//! rely on this, so it is kept as is.

use crate::book::Book;

/// Parsed query filters. `None` means the filter was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
  /// Case-insensitive substring of the book name.
  pub name:     Option<String>,
  pub reading:  Option<bool>,
  pub finished: Option<bool>,
}

impl BookFilter {
  /// Build a filter from raw query values.
  ///
  /// Empty strings count as absent. Flags are `"1"` for true; any other
  /// value means false.
  pub fn from_query(
    name: Option<&str>,
    reading: Option<&str>,
    finished: Option<&str>,
  ) -> Self {
    fn present(v: Option<&str>) -> Option<&str> { v.filter(|s| !s.is_empty()) }
    Self {
      name:     present(name).map(str::to_owned),
      reading:  present(reading).map(parse_flag),
      finished: present(finished).map(parse_flag),
    }
  }

  /// Select matching books from `books`, preserving their order.
  pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
    let mut selected: Vec<&Book> = books.iter().collect();

    if let Some(name) = &self.name {
      let needle = name.to_lowercase();
      selected = books
        .iter()
        .filter(|b| b.name.to_lowercase().contains(&needle))
        .collect();
    }

    if let Some(reading) = self.reading {
      selected = books.iter().filter(|b| b.reading == Some(reading)).collect();
    }

    if let Some(finished) = self.finished {
      selected = books.iter().filter(|b| b.finished == finished).collect();
    }

    selected
  }
}

fn parse_flag(raw: &str) -> bool { raw == "1" }
