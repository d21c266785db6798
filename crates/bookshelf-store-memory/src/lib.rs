//! In-process backend for the bookshelf.
//!
//! Books live in an ordered `Vec` behind a single [`tokio::sync::RwLock`].
//! Nothing is persisted; the shelf starts empty with every process.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemoryStore;
