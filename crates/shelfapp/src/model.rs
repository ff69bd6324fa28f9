use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lending state of a book.
///
/// The serialized form is the display label, so the backing file reads
/// `"status": "Available"` rather than a symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Issued")]
    Issued,
}

impl BookStatus {
    /// All statuses in the order they are offered to the user.
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::Issued];

    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Issued => "Issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Searchable book fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Author,
    Year,
}

impl BookField {
    pub const ALL: [BookField; 3] = [BookField::Title, BookField::Author, BookField::Year];

    pub fn label(&self) -> &'static str {
        match self {
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Year => "Publication year",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Year => "year",
        };
        f.write_str(name)
    }
}

impl FromStr for BookField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(BookField::Title),
            "author" => Ok(BookField::Author),
            "year" => Ok(BookField::Year),
            other => Err(format!("Unknown search field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

impl Book {
    /// A new book is always available.
    pub fn new(id: u64, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status: BookStatus::Available,
        }
    }

    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = status;
        self
    }

    /// Stringified value of `field`, as compared by search.
    pub fn field_value(&self, field: BookField) -> String {
        match field {
            BookField::Title => self.title.clone(),
            BookField::Author => self.author.clone(),
            BookField::Year => self.year.to_string(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_label() {
        let json = serde_json::to_string(&BookStatus::Issued).unwrap();
        assert_eq!(json, "\"Issued\"");
        let parsed: BookStatus = serde_json::from_str("\"Available\"").unwrap();
        assert_eq!(parsed, BookStatus::Available);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let parsed: Result<BookStatus, _> = serde_json::from_str("\"Lost\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn book_record_has_flat_keys() {
        let book = Book::new(1, "Moby Dick", "Herman Melville", 1851);
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["title"], "Moby Dick");
        assert_eq!(value["author"], "Herman Melville");
        assert_eq!(value["year"], 1851);
        assert_eq!(value["status"], "Available");
    }

    #[test]
    fn book_parses_regardless_of_key_order() {
        let json = r#"{"status": "Issued", "year": 1925, "author": "F. Scott Fitzgerald", "title": "The Great Gatsby", "id": 7}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(
            book,
            Book::new(7, "The Great Gatsby", "F. Scott Fitzgerald", 1925)
                .with_status(BookStatus::Issued)
        );
    }

    #[test]
    fn display_line() {
        let book = Book::new(3, "Moby Dick", "Herman Melville", 1851);
        assert_eq!(
            book.to_string(),
            "ID: 3, Title: Moby Dick, Author: Herman Melville, Year: 1851, Status: Available"
        );
    }

    #[test]
    fn field_value_stringifies_year() {
        let book = Book::new(1, "Dune", "Frank Herbert", 1965);
        assert_eq!(book.field_value(BookField::Year), "1965");
        assert_eq!(book.field_value(BookField::Author), "Frank Herbert");
    }

    #[test]
    fn field_parses_case_insensitively() {
        assert_eq!("Author".parse::<BookField>().unwrap(), BookField::Author);
        assert!("isbn".parse::<BookField>().is_err());
    }
}
