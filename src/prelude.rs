//! Prelude module for convenient imports
//!
//! Import everything you need with: `use txdispatch::prelude::*;`

// Domain types
pub use crate::domain::{
    OPEN_STATUS, Operation, OperationError, OperationPair, PaymentMethod, PaymentOperations,
    Transaction, TransactionType,
};

// Source types
pub use crate::source::{InMemoryTransactionSource, SourceError, TransactionSource};

// Engine types
pub use crate::engine::{DispatchError, Dispatcher};

// Gateway types
pub use crate::gateway::{RecordingOperations, UnimplementedOperations};

// IO types
pub use crate::io::{
    CsvTransactionSource, IoError, RawTransactionRecord, read_transactions, write_invocations,
};

// App types
pub use crate::app::{AppError, CliApp, Config, OperationsMode, init_logging};
