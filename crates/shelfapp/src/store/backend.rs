use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw catalog I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while BookStore handles the "what" (decoding, IDs, queries).
pub trait StorageBackend {
    /// Read the whole backing document.
    /// Returns Ok(None) if the document does not exist yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self) -> Result<Option<String>>;

    /// Replace the whole backing document.
    fn write(&self, contents: &str) -> Result<()>;

    /// Where the document lives. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
