pub mod dispatcher;
pub mod error;

// Re-export commonly used types
pub use dispatcher::Dispatcher;
pub use error::DispatchError;
