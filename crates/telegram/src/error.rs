//! Error types for the Telegram layer

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Invalid update payload: {0}")]
    InvalidUpdate(String),
}

pub type TelegramResult<T> = Result<T, TelegramError>;
