//! # Storage Layer
//!
//! The [`DocumentStore`] trait is the only way the rest of the crate touches
//! documents. Names handed to a store are already sanitized (see
//! [`crate::sanitize`]); a store never interprets them as paths with more than
//! one component.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per document directly
//!   under a single root directory.
//! - [`memory::InMemoryStore`]: a map behind a mutex, for command tests.
//!
//! ## Consistency
//!
//! The filesystem is the database. There is no cache and no locking:
//! `delete` and `rename` check their preconditions and then mutate, so two
//! concurrent requests on the same name can interleave, and the last write
//! wins. Stores take `&self` so a single instance can be shared across
//! request handlers.

use crate::error::Result;
use crate::model::DocumentEntry;

pub mod fs;
pub mod memory;

pub trait DocumentStore: Send + Sync {
    /// Every document under the root, sorted by name.
    fn list(&self) -> Result<Vec<DocumentEntry>>;

    /// Read a document as UTF-8 text.
    fn read(&self, name: &str) -> Result<String>;

    /// Create or overwrite a document.
    fn write(&self, name: &str, content: &str) -> Result<()>;

    /// Remove a document. Fails with `NotFound` if it does not exist.
    fn delete(&self, name: &str) -> Result<()>;

    /// Move `old` to `new`. Fails with `NotFound` if `old` is missing and
    /// with `AlreadyExists` if `new` is taken.
    fn rename(&self, old: &str, new: &str) -> Result<()>;

    fn exists(&self, name: &str) -> bool;
}
