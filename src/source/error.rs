use std::io;
use thiserror::Error;

use crate::io::IoError;

/// Failures while fetching a transaction batch
#[derive(Error, Debug)]
pub enum SourceError {
    /// For sources backed by a remote repository or service that cannot be
    /// reached; the shipped in-memory and CSV sources never return it.
    #[error("Transaction source unavailable: {0}")]
    Unavailable(String),

    #[error("Transaction read error: {0}")]
    Read(#[from] IoError),
}

impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        SourceError::Read(IoError::from(err))
    }
}
