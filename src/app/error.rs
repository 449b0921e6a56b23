use std::io;
use thiserror::Error;
use tokio::task::JoinError;
use tracing_subscriber::util::TryInitError;

use crate::engine::DispatchError;
use crate::io::IoError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV IO error: {0}")]
    CsvIo(#[from] IoError),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Dispatch worker failed: {0}")]
    Worker(#[from] JoinError),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] TryInitError),
}
