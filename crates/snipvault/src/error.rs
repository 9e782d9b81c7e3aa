use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipError {
    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Persist rejected: {0}")]
    PersistRejected(String),

    #[error("Import too big: {size} bytes (limit {limit})")]
    ImportTooBig { size: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, SnipError>;
