//! # Configuration
//!
//! Shelf configuration is managed by [`confique`], which layers TOML files,
//! environment variables and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Command line**: the optional `DATA_FILE` argument of `shelf` (applied by the CLI).
//! 2. **Environment variables**: `SHELF_DATA_FILE`, `SHELF_TITLE_CASE`.
//! 3. **Local Config**: `./shelf.toml` in the working directory.
//! 4. **User Config**: OS-appropriate config directory (via `directories` crate).
//! 5. **Compiled Defaults**: built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `books_data.json` | JSON file holding the catalog |
//! | `title_case` | `true` | Title-case titles and author names on entry |

use crate::error::{Result, ShelfError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "shelf.toml";
pub const DEFAULT_DATA_FILE: &str = "books_data.json";

/// Configuration for shelf, stored in `shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// JSON file holding the catalog
    #[config(default = "books_data.json", env = "SHELF_DATA_FILE")]
    pub data_file: PathBuf,

    /// Title-case titles and author names as they are entered
    #[config(default = true, env = "SHELF_TITLE_CASE")]
    pub title_case: bool,
}

impl ShelfConfig {
    /// Compiled defaults only: no files, no environment.
    pub fn defaults() -> Result<Self> {
        Self::builder()
            .load()
            .map_err(|e| ShelfError::Config(e.to_string()))
    }

    /// Load the layered configuration, looking for a local `shelf.toml` in `work_dir`.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let mut builder = Self::builder()
            .env()
            .file(work_dir.join(CONFIG_FILENAME));
        if let Some(path) = user_config_path() {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| ShelfError::Config(e.to_string()))
    }

    /// Load from the given files only, highest priority first. No environment lookup.
    pub fn load_files<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = Self::builder();
        for file in files {
            builder = builder.file(file.as_ref());
        }
        builder
            .load()
            .map_err(|e| ShelfError::Config(e.to_string()))
    }

    /// Replace the data file with an explicit one, e.g. from the command line.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }
}

/// `shelf.toml` inside the per-user config directory, if the platform has one.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "shelf", "shelf").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
