use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookField;
use crate::store::backend::StorageBackend;
use crate::store::BookStore;

pub fn run<B: StorageBackend>(
    store: &BookStore<B>,
    field: BookField,
    query: &str,
) -> Result<CmdResult> {
    let found: Vec<_> = store.search(field, query).into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("No books match your query"));
    } else {
        result.add_message(CmdMessage::info(format!("Books found: {}", found.len())));
    }
    Ok(result.with_listed_books(found))
}
