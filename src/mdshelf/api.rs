//! # API Facade
//!
//! A thin layer over [`crate::commands`] and the single entry point for every
//! operation. The web handlers only ever talk to a [`ShelfApi`].
//!
//! The facade:
//! - **sanitizes** every name taken from a URL or query before it reaches a command
//! - **dispatches** to the matching command
//! - **returns** plain Rust types (`Result<…>`), never HTTP responses
//!
//! It is generic over [`DocumentStore`], so tests run against
//! [`InMemoryStore`](crate::store::memory::InMemoryStore) and production runs
//! against [`FileStore`].

use crate::commands::{self, upload::Upload, CmdResult};
use crate::config::ShelfConfig;
use crate::diff::DiffOptions;
use crate::error::{Result, ShelfError};
use crate::model::{DiffPayload, Document, DocumentEntry};
use crate::sanitize::sanitize;
use crate::store::fs::FileStore;
use crate::store::DocumentStore;

pub const DEFAULT_BEFORE_NAME: &str = "before.md";
pub const DEFAULT_AFTER_NAME: &str = "after.md";

pub struct ShelfApi<S: DocumentStore> {
    store: S,
    file_ext: String,
}

impl ShelfApi<FileStore> {
    pub fn from_config(config: &ShelfConfig) -> Self {
        let store = FileStore::new(config.root.clone()).with_file_ext(&config.file_ext);
        Self::new(store, &config.file_ext)
    }
}

impl<S: DocumentStore> ShelfApi<S> {
    pub fn new(store: S, file_ext: &str) -> Self {
        Self {
            store,
            file_ext: file_ext.to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn safe_name(&self, name: &str) -> Result<String> {
        sanitize(name, &self.file_ext, true)
    }

    pub fn list_documents(&self) -> Result<Vec<DocumentEntry>> {
        commands::list::run(&self.store)
    }

    pub fn upload_document(&self, upload: Upload<'_>) -> Result<CmdResult> {
        commands::upload::run(&self.store, &self.file_ext, upload)
    }

    pub fn get_document(&self, name: &str) -> Result<Document> {
        let name = self.safe_name(name)?;
        commands::read::run(&self.store, &name)
    }

    pub fn save_document(&self, name: &str, content: Option<&str>) -> Result<CmdResult> {
        let name = self.safe_name(name)?;
        commands::save::run(&self.store, &name, content)
    }

    pub fn delete_document(&self, name: &str) -> Result<CmdResult> {
        let name = self.safe_name(name)?;
        commands::delete::run(&self.store, &name)
    }

    pub fn rename_document(&self, name: &str, new_name: Option<&str>) -> Result<CmdResult> {
        let name = self.safe_name(name)?;
        commands::rename::run(&self.store, &self.file_ext, &name, new_name)
    }

    /// Diff two stored documents. Missing or blank names are a validation error.
    pub fn diff_documents(
        &self,
        before: Option<&str>,
        after: Option<&str>,
        options: DiffOptions,
    ) -> Result<DiffPayload> {
        let (Some(before), Some(after)) = (non_blank(before), non_blank(after)) else {
            return Err(ShelfError::Validation(
                "Both files must be specified for comparison".into(),
            ));
        };
        let before = self.safe_name(before)?;
        let after = self.safe_name(after)?;
        commands::diff::stored(&self.store, &before, &after, options)
    }

    /// Diff two unsaved buffers. Display names default to `before.md` / `after.md`.
    pub fn diff_preview(
        &self,
        before_raw: &str,
        after_raw: &str,
        before_name: Option<&str>,
        after_name: Option<&str>,
        options: DiffOptions,
    ) -> DiffPayload {
        commands::diff::preview(
            before_raw,
            after_raw,
            before_name.unwrap_or(DEFAULT_BEFORE_NAME),
            after_name.unwrap_or(DEFAULT_AFTER_NAME),
            options,
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
