//! # Configuration
//!
//! A [`ShelfConfig`] is built once at startup (see `args.rs` in the binary)
//! and handed to whatever needs it. Nothing reads the environment after that.
//!
//! | Setting | Env | Default |
//! |---------|-----|---------|
//! | storage root | `UPLOAD_FOLDER` | `uploads` |
//! | bind address | `MDSHELF_BIND` | `127.0.0.1:5000` |
//! | max upload size (bytes) | `MAX_CONTENT_LENGTH` | 128 MiB |
//!
//! The document extension is fixed to `.md`.

use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOT: &str = "uploads";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 128 * 1024 * 1024;
pub const FILE_EXT: &str = ".md";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Directory holding every document. Absolute once [`prepare`](Self::prepare) ran.
    pub root: PathBuf,
    pub bind: SocketAddr,
    pub max_upload_bytes: usize,
    pub file_ext: String,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            file_ext: FILE_EXT.to_string(),
        }
    }
}

impl ShelfConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    /// Resolve the root to an absolute path and make sure it is a directory,
    /// creating it if needed.
    pub fn prepare(mut self) -> Result<Self> {
        self.root = absolute(&self.root)?;

        if self.root.exists() && !self.root.is_dir() {
            return Err(ShelfError::Config(format!(
                "Storage root {} exists and is not a directory",
                self.root.display()
            )));
        }
        fs::create_dir_all(&self.root)?;
        Ok(self)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(path))
}
