use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read selector file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse selector file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid selector table: {0}")]
    InvalidSelector(String),
}

pub type Result<T> = std::result::Result<T, Error>;
