pub mod error;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use error::SourceError;
pub use memory::InMemoryTransactionSource;
pub use traits::TransactionSource;
