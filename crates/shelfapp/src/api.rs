//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for every shelf operation, whatever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Owns** the [`BookStore`] for the lifetime of the session
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic (that lives in `commands/*.rs`) and performs no
//! terminal I/O.
//!
//! `ShelfApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `ShelfApi<FsBackend>`
//! - Testing: `ShelfApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::{BookField, BookStatus};
use crate::store::backend::StorageBackend;
use crate::store::{BookStore, LoadReport};

pub struct ShelfApi<B: StorageBackend> {
    store: BookStore<B>,
}

impl<B: StorageBackend> ShelfApi<B> {
    pub fn new(store: BookStore<B>) -> Self {
        Self { store }
    }

    /// Load the catalog from `backend` and wrap it.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self::new(BookStore::open(backend)?))
    }

    /// Add a book under the next free ID.
    pub fn add_book(
        &mut self,
        title: String,
        author: String,
        year: i32,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, author, year)
    }

    pub fn remove_book(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn search_books(&self, field: BookField, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, field, query)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn update_status(&mut self, id: u64, status: BookStatus) -> Result<commands::CmdResult> {
        commands::status::run(&mut self.store, id, status)
    }

    pub fn last_book_id(&self) -> u64 {
        self.store.last_assigned_id()
    }

    pub fn load_report(&self) -> &LoadReport {
        self.store.load_report()
    }

    pub fn store(&self) -> &BookStore<B> {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
