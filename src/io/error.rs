use std::io;
use thiserror::Error;

/// IO-level errors for CSV parsing and report writing
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid transaction id: {0}")]
    InvalidId(String),
}
