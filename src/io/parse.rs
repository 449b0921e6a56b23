use serde::Deserialize;

use super::error::IoError;
use crate::domain::Transaction;

/// Raw CSV record as read from input
#[derive(Debug, Deserialize)]
pub struct RawTransactionRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "type", default)]
    pub tx_type: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
}

impl RawTransactionRecord {
    /// Parse this raw record into a Transaction.
    ///
    /// Only the id is checked here. Status and tags are carried through
    /// verbatim (absent fields become empty strings) and judged by the
    /// dispatcher.
    pub fn parse(self) -> Result<Transaction, IoError> {
        let id_str = self
            .id
            .ok_or_else(|| IoError::MissingField("id".to_string()))?;
        let id = id_str
            .trim()
            .parse::<i64>()
            .map_err(|_| IoError::InvalidId(id_str.clone()))?;

        Ok(Transaction::new(
            id,
            self.status.unwrap_or_default(),
            self.tx_type.unwrap_or_default(),
            self.method.unwrap_or_default(),
        ))
    }
}
