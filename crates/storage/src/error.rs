//! Error types for the storage layer

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store backend error: {0}")]
    Backend(String),

    #[error("Write rejected for key {key}: {reason}")]
    Rejected { key: String, reason: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<redis::RedisError> for StorageError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_io_error() || err.is_connection_dropped() || err.is_connection_refusal() || err.is_timeout() {
            StorageError::Unavailable(err.to_string())
        } else {
            StorageError::Backend(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StorageError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "Store unavailable: connection refused");

        let err = StorageError::Rejected {
            key: "active_chat_ids".to_string(),
            reason: "read-only replica".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Write rejected for key active_chat_ids: read-only replica"
        );
    }
}
