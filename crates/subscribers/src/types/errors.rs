//! Error types for the subscriber registry.

use slotwatch_storage::StorageError;
use thiserror::Error;

/// Failures of the explicit-`Result` persistence paths. The public
/// `register`/`unregister` operations never surface these.
#[derive(Debug, Error)]
pub enum SubscriberError {
    #[error("Failed to read subscriber set: {0}")]
    Read(#[source] StorageError),

    #[error("Failed to write subscriber set: {0}")]
    Write(#[source] StorageError),

    #[error("Stored subscriber set is malformed: {0}")]
    Malformed(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type SubscriberResult<T> = Result<T, SubscriberError>;
