use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::backend::StorageBackend;
use crate::store::BookStore;

pub fn run<B: StorageBackend>(
    store: &mut BookStore<B>,
    title: String,
    author: String,
    year: i32,
) -> Result<CmdResult> {
    let book = Book::new(store.next_id()?, title, author, year);
    store.add(book.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book \"{}\" added with ID {}",
        book.title, book.id
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::empty_store;
    use crate::commands::MessageLevel;
    use crate::model::BookStatus;

    #[test]
    fn assigns_sequential_ids() {
        let mut store = empty_store();

        let first = run(&mut store, "1984".into(), "George Orwell".into(), 1949).unwrap();
        let second = run(&mut store, "Animal Farm".into(), "George Orwell".into(), 1945).unwrap();

        assert_eq!(first.affected_books[0].id, 1);
        assert_eq!(second.affected_books[0].id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn new_books_are_available() {
        let mut store = empty_store();
        let result = run(&mut store, "Dune".into(), "Frank Herbert".into(), 1965).unwrap();
        assert_eq!(result.affected_books[0].status, BookStatus::Available);
    }

    #[test]
    fn reports_success() {
        let mut store = empty_store();
        let result = run(&mut store, "Dune".into(), "Frank Herbert".into(), 1965).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Book \"Dune\" added with ID 1");
    }
}
