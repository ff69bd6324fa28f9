use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Book with ID {0} not found")]
    BookNotFound(u64),

    #[error("Book with ID {0} already exists")]
    DuplicateId(u64),

    #[error("No book IDs left after {0}")]
    IdSpaceExhausted(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, ShelfError>;
