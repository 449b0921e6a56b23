use thiserror::Error;

use crate::domain::OperationError;
use crate::source::SourceError;

/// Engine-level errors for batch dispatch
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Transaction batch is empty")]
    EmptyBatch,

    #[error("Invalid transaction {id}: status {status:?}, type {tx_type:?}")]
    InvalidTransaction {
        id: i64,
        status: String,
        tx_type: String,
    },

    #[error("Operation error: {0}")]
    Operation(#[from] OperationError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}
