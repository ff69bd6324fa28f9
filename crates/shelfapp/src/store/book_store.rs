use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookField, BookStatus};
use std::path::PathBuf;
use tracing::{debug, warn};

/// What happened when the catalog was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// The document existed and decoded cleanly.
    Loaded { books: usize },
    /// No document existed; an empty one was written.
    Created,
    /// The document could not be decoded. The catalog starts empty and the
    /// document is left as it was until the next mutation rewrites it.
    Recovered { reason: String },
}

pub struct BookStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    books: Vec<Book>,
    last_id: u64,
    report: LoadReport,
}

impl<B: StorageBackend> BookStore<B> {
    /// Build a store over `backend` and load the catalog from it.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self {
            backend,
            books: Vec::new(),
            last_id: 0,
            report: LoadReport::Created,
        };
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory catalog with the backing document.
    pub fn load(&mut self) -> Result<()> {
        let location = self.backend.location();

        let (books, report) = match self.backend.read()? {
            None => {
                debug!(path = %location.display(), "catalog file missing, creating it");
                self.backend.write(&encode(&[])?)?;
                (Vec::new(), LoadReport::Created)
            }
            Some(raw) => match decode(&raw) {
                Ok(books) => {
                    let count = books.len();
                    (books, LoadReport::Loaded { books: count })
                }
                Err(e) => {
                    warn!(
                        path = %location.display(),
                        error = %e,
                        "catalog file is malformed, starting with an empty catalog"
                    );
                    (
                        Vec::new(),
                        LoadReport::Recovered {
                            reason: e.to_string(),
                        },
                    )
                }
            },
        };

        self.last_id = books.iter().map(|b| b.id).max().unwrap_or(0);
        debug!(books = books.len(), last_id = self.last_id, "catalog loaded");
        self.books = books;
        self.report = report;
        Ok(())
    }

    /// Insert a book whose ID is not yet taken and persist the catalog.
    ///
    /// Callers are expected to pass `last_assigned_id() + 1`; the counter is
    /// advanced by one regardless of the ID actually supplied.
    pub fn add(&mut self, book: Book) -> Result<()> {
        if self.get(book.id).is_some() {
            return Err(ShelfError::DuplicateId(book.id));
        }

        let next_last = self.next_id()?;

        self.books.push(book);
        let previous_last = std::mem::replace(&mut self.last_id, next_last);
        if let Err(e) = self.save() {
            self.books.pop();
            self.last_id = previous_last;
            return Err(e);
        }
        Ok(())
    }

    /// Delete a book and persist the catalog. The ID is never handed out again.
    pub fn remove(&mut self, id: u64) -> Result<Book> {
        let pos = self.position(id).ok_or(ShelfError::BookNotFound(id))?;
        let removed = self.books.remove(pos);
        if let Err(e) = self.save() {
            self.books.insert(pos, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Books whose stringified `field` equals `query`, ignoring case,
    /// in catalog order.
    pub fn search(&self, field: BookField, query: &str) -> Vec<&Book> {
        let query = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.field_value(field).to_lowercase() == query)
            .collect()
    }

    /// Set the status of a book. Returns whether anything changed; an
    /// unchanged status does not touch the backing document.
    pub fn update_status(&mut self, id: u64, status: BookStatus) -> Result<bool> {
        let pos = self.position(id).ok_or(ShelfError::BookNotFound(id))?;
        let previous = self.books[pos].status;
        if previous == status {
            return Ok(false);
        }

        self.books[pos].status = status;
        if let Err(e) = self.save() {
            self.books[pos].status = previous;
            return Err(e);
        }
        Ok(true)
    }

    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn last_assigned_id(&self) -> u64 {
        self.last_id
    }

    /// The ID the next added book should carry. Fails once `u64::MAX` has
    /// been handed out.
    pub fn next_id(&self) -> Result<u64> {
        self.last_id
            .checked_add(1)
            .ok_or(ShelfError::IdSpaceExhausted(self.last_id))
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    fn save(&self) -> Result<()> {
        let content = encode(&self.books)?;
        self.backend.write(&content)?;
        debug!(books = self.books.len(), "catalog saved");
        Ok(())
    }
}

fn encode(books: &[Book]) -> Result<String> {
    serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)
}

/// Decode the backing document. A repeated ID keeps its first position and
/// takes the contents of the last record carrying it. IDs must be positive.
fn decode(raw: &str) -> serde_json::Result<Vec<Book>> {
    let records: Vec<Book> = serde_json::from_str(raw)?;
    if records.iter().any(|record| record.id == 0) {
        return Err(serde::de::Error::custom("book id 0 is not a valid id"));
    }
    let mut books: Vec<Book> = Vec::with_capacity(records.len());
    for record in records {
        match books.iter_mut().find(|book| book.id == record.id) {
            Some(existing) => {
                warn!(id = record.id, "duplicate book id in catalog file");
                *existing = record;
            }
            None => books.push(record),
        }
    }
    Ok(books)
}
