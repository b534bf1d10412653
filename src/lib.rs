//! Task List RS - The state-and-persistence core of a task list application
//!
//! This library owns an ordered sequence of short text tasks, keeps it
//! mirrored to a pluggable key-value store after every mutation, and derives
//! filtered projections for a rendering layer it knows nothing about.

/// Configuration for storage backend selection
pub mod config;
/// Key-value storage backend implementations
pub mod storage;
/// The authoritative task store
pub mod store;
/// Task definitions and filter projections
pub mod task;

pub use config::Config;
pub use storage::backend::{FileStore, MemoryStore};
pub use store::TaskStore;
pub use task::{FilterMode, Task};

use thiserror::Error;

/// Result type for task list operations
pub type Result<T> = std::result::Result<T, TaskListError>;

/// Error types for the task list core
#[derive(Error, Debug)]
pub enum TaskListError {
    /// Storage backend error occurred
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = TaskListError::Storage("disk full".to_string());
        assert_eq!(err.to_string(), "Storage error: disk full");

        let err = TaskListError::Config("missing data_dir".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing data_dir");
    }
}
