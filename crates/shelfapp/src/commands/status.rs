use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::BookStatus;
use crate::store::backend::StorageBackend;
use crate::store::BookStore;

pub fn run<B: StorageBackend>(
    store: &mut BookStore<B>,
    id: u64,
    status: BookStatus,
) -> Result<CmdResult> {
    let changed = store.update_status(id, status)?;
    let book = store.get(id).cloned().ok_or(ShelfError::BookNotFound(id))?;

    let mut result = CmdResult::default();
    if changed {
        result.add_message(CmdMessage::success(format!(
            "Status of book with ID {} changed to {}",
            id, status
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Book with ID {} is already {}",
            id, status
        )));
    }
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::seeded_store;
    use crate::commands::MessageLevel;

    #[test]
    fn issues_a_book() {
        let mut store = seeded_store();

        let result = run(&mut store, 1, BookStatus::Issued).unwrap();

        assert_eq!(result.affected_books[0].status, BookStatus::Issued);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(
            result.messages[0].content,
            "Status of book with ID 1 changed to Issued"
        );
    }

    #[test]
    fn same_status_is_reported_as_noop() {
        let mut store = seeded_store();
        run(&mut store, 2, BookStatus::Issued).unwrap();

        let again = run(&mut store, 2, BookStatus::Issued).unwrap();

        assert_eq!(again.messages[0].level, MessageLevel::Info);
        assert_eq!(again.messages[0].content, "Book with ID 2 is already Issued");
        assert_eq!(store.get(2).unwrap().status, BookStatus::Issued);
    }

    #[test]
    fn unknown_id_fails() {
        let mut store = seeded_store();
        let result = run(&mut store, 99999, BookStatus::Available);
        assert!(matches!(result, Err(ShelfError::BookNotFound(99999))));
    }
}
