use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line configuration for the dispatcher binary
#[derive(Parser, Debug, Clone)]
#[command(
    name = "txdispatch",
    version,
    about = "Validate a transaction batch and route it to payment operations"
)]
pub struct Config {
    /// Transactions CSV file (id,status,type,method)
    pub input: PathBuf,

    /// Payment operations the transactions are routed to
    #[arg(long, value_enum, default_value_t = OperationsMode::Record)]
    pub operations: OperationsMode,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Which `PaymentOperations` implementation the binary injects
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationsMode {
    /// Record each invocation and print them as CSV
    #[default]
    Record,
    /// Every operation fails as not implemented
    Unimplemented,
}
