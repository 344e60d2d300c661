use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Browser driver could not be initialized: {0}")]
    DriverInit(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("CDP error: {0}")]
    Cdp(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
