//! Error type for `bookshelf-store-memory`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Every generated id collided with one already on the shelf.
  #[error("could not generate a unique book id after {attempts} attempts")]
  IdSpaceExhausted { attempts: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
