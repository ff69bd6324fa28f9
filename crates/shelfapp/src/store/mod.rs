//! # Storage Layer
//!
//! The catalog is a single JSON document holding every book. The
//! [`StorageBackend`](backend::StorageBackend) trait covers the raw I/O of that
//! document, and [`BookStore`](book_store::BookStore) owns the decoded catalog on top of it.
//!
//! ## Write Model
//!
//! - The whole catalog is kept in memory for the life of the process.
//! - Every mutation re-encodes and rewrites the whole document. There is no
//!   append log and no file locking; the last writer wins.
//! - Reads never touch the backend: search and listing are linear scans over
//!   the in-memory catalog.
//!
//! ## Load Policy
//!
//! - **Missing document**: an empty list (`[]`) is written and the catalog starts empty.
//! - **Malformed document**: a warning is logged, the catalog starts empty,
//!   and the document is left as is. The next mutation overwrites it.
//!
//! ## Implementations
//!
//! - [`FileStore`]: production store over [`fs_backend::FsBackend`].
//! - [`InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "title": "Moby Dick",
//!     "author": "Herman Melville",
//!     "year": 1851,
//!     "status": "Available"
//!   }
//! ]
//! ```

use crate::error::Result;
use std::path::PathBuf;

pub mod backend;
pub mod book_store;
pub mod fs_backend;
pub mod mem_backend;

pub use book_store::{BookStore, LoadReport};

pub type FileStore = BookStore<fs_backend::FsBackend>;
pub type InMemoryStore = BookStore<mem_backend::MemBackend>;

impl FileStore {
    /// Open the catalog stored at `path`, creating the file if needed.
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self> {
        BookStore::open(fs_backend::FsBackend::new(path))
    }
}
