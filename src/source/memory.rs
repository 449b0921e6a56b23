use super::error::SourceError;
use super::traits::TransactionSource;
use crate::domain::Transaction;

/// Fixed in-memory batch, handed out unchanged on every fetch
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransactionSource {
    transactions: Vec<Transaction>,
}

impl InMemoryTransactionSource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl From<Vec<Transaction>> for InMemoryTransactionSource {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self::new(transactions)
    }
}

impl FromIterator<Transaction> for InMemoryTransactionSource {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl TransactionSource for InMemoryTransactionSource {
    fn transactions(&self) -> Result<Vec<Transaction>, SourceError> {
        Ok(self.transactions.clone())
    }
}
