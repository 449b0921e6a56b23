pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod parse;

// Re-export commonly used types
pub use csv_reader::{CsvTransactionSource, read_transactions};
pub use csv_writer::write_invocations;
pub use error::IoError;
pub use parse::RawTransactionRecord;
