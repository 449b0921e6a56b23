pub mod recording;
pub mod unimplemented;

// Re-export commonly used types
pub use recording::RecordingOperations;
pub use unimplemented::UnimplementedOperations;
