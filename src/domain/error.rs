use thiserror::Error;

use super::operations::Operation;

/// Failures raised by a payment operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Operation not implemented: {0}")]
    NotImplemented(Operation),

    #[error("Operation {operation} failed: {reason}")]
    Failed { operation: Operation, reason: String },
}
