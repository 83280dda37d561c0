use thiserror::Error;

#[derive(Error, Debug)]
pub enum WashError {
    #[error("a wash is already in progress")]
    Conflict,
    #[error("waxing requires hand-drying")]
    InvalidOption,
    #[error("invalid state: phase {0} is not a known wash phase")]
    InvalidState(u8),
    #[error("wash cycle did not terminate after visiting {visited} phases")]
    RuntimeInvariant { visited: usize },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WashError {
    /// Errors a driver can report to the customer and carry on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WashError::Conflict | WashError::InvalidOption)
    }
}

pub type Result<T> = std::result::Result<T, WashError>;
