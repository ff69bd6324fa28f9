use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::BookStore;

pub fn run<B: StorageBackend>(store: &mut BookStore<B>, id: u64) -> Result<CmdResult> {
    let removed = store.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book with ID={} removed: {}",
        removed.id, removed.title
    )));
    Ok(result.with_affected_books(vec![removed]))
}
