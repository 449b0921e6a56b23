use std::sync::Arc;

use super::error::SourceError;
use crate::domain::Transaction;

/// Trait for supplying the pending transaction batch
/// Batches may be empty; order is whatever the backend yields
pub trait TransactionSource: Send + Sync {
    /// Fetch the full batch for one dispatch run
    fn transactions(&self) -> Result<Vec<Transaction>, SourceError>;
}

impl<T: TransactionSource + ?Sized> TransactionSource for &T {
    fn transactions(&self) -> Result<Vec<Transaction>, SourceError> {
        (**self).transactions()
    }
}

impl<T: TransactionSource + ?Sized> TransactionSource for Box<T> {
    fn transactions(&self) -> Result<Vec<Transaction>, SourceError> {
        (**self).transactions()
    }
}

impl<T: TransactionSource + ?Sized> TransactionSource for Arc<T> {
    fn transactions(&self) -> Result<Vec<Transaction>, SourceError> {
        (**self).transactions()
    }
}
