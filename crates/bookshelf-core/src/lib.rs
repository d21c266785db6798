//! Core types and trait definitions for the bookshelf service.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! All other crates depend on it.

pub mod book;
pub mod error;
pub mod filter;
pub mod id;
pub mod store;
pub mod timestamp;

pub use error::{Error, Result};
