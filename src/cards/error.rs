use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid value: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, CardsError>;
