//! Book id generation.
//!
//! Ids are 16 characters drawn uniformly from `[0-9A-Za-z]` using the OS
//! random number generator. Uniqueness against existing ids is the store's
//! job; see `MemoryStore`.

use rand_core::{OsRng, RngCore};

use crate::book::BookId;

/// Number of characters in a generated id.
pub const ID_LEN: usize = 16;

const ALPHABET: &[u8; 62] =
  b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Largest multiple of the alphabet size that fits in a byte. Bytes at or
/// above it are discarded so every character is equally likely.
const REJECT_FROM: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// Generate a fresh id from the OS RNG.
pub fn generate() -> BookId { generate_with(&mut OsRng) }

/// Generate an id from an arbitrary RNG.
pub fn generate_with<R: RngCore + ?Sized>(rng: &mut R) -> BookId {
  let mut id = String::with_capacity(ID_LEN);
  let mut buf = [0u8; 2 * ID_LEN];

  while id.len() < ID_LEN {
    rng.fill_bytes(&mut buf);
    for byte in buf.iter().copied().filter(|&b| b < REJECT_FROM) {
      id.push(char::from(ALPHABET[usize::from(byte) % ALPHABET.len()]));
      if id.len() == ID_LEN {
        break;
      }
    }
  }

  BookId::from(id)
}
