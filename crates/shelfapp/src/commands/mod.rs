//! # Command Layer
//!
//! This module contains the core business logic of shelf. Each user-facing
//! operation lives in its own submodule as a plain function over a
//! [`BookStore`](crate::store::BookStore).
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_books`: books that were added, removed or changed
//! - `listed_books`: books to display
//! - `messages`: leveled messages (info, success, warning, error)
//!
//! Commands never print, never prompt and never exit. Lookup failures such
//! as an unknown ID come back as `Err` for the UI to report.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a book with the next free ID
//! - [`remove`]: Delete a book by ID
//! - [`search`]: Exact, case-insensitive match on one field
//! - [`list`]: The whole catalog in display order
//! - [`status`]: Mark a book available or issued

use crate::model::Book;

pub mod add;
pub mod list;
pub mod remove;
pub mod search;
pub mod status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }
}
