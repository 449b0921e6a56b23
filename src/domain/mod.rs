pub mod error;
pub mod operations;
pub mod transaction;

// Re-export commonly used types
pub use error::OperationError;
pub use operations::{Operation, OperationPair, PaymentOperations};
pub use transaction::{OPEN_STATUS, PaymentMethod, Transaction, TransactionType};
