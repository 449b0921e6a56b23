use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::IoError;
use super::parse::RawTransactionRecord;
use crate::domain::Transaction;
use crate::source::{SourceError, TransactionSource};

/// Columns every transaction file must declare in its header
pub const REQUIRED_COLUMNS: [&str; 4] = ["id", "status", "type", "method"];

/// Read a whole CSV batch (`id,status,type,method`) from any reader
///
/// The header must name every required column. Fields are trimmed and rows
/// may leave trailing values empty.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>, IoError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|&&column| !headers.iter().any(|header| header == column))
    {
        return Err(IoError::MissingField(missing.to_string()));
    }

    csv_reader
        .deserialize::<RawTransactionRecord>()
        .map(|result| result.map_err(IoError::from).and_then(RawTransactionRecord::parse))
        .collect()
}

/// Transaction source backed by a CSV file
///
/// The file is re-read on every fetch, so each dispatch run sees its current contents.
#[derive(Debug, Clone)]
pub struct CsvTransactionSource {
    path: PathBuf,
}

impl CsvTransactionSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionSource for CsvTransactionSource {
    fn transactions(&self) -> Result<Vec<Transaction>, SourceError> {
        let file = File::open(&self.path)?;
        let transactions = read_transactions(file)?;
        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "Loaded transaction batch"
        );
        Ok(transactions)
    }
}
