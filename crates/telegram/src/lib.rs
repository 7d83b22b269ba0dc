//! # Slotwatch Telegram Crate
//!
//! Turns Telegram webhook updates into subscriber registry calls and reply
//! texts. Only the subset of the Bot API the bot actually reads is modelled.
//!
//! ## Architecture
//!
//! - **Types**: `Update`, `Message`, `Chat`, `User` payload models
//! - **Command**: slash-command parsing, including `@botname` addressing
//! - **Dispatcher**: maps a command for a chat to its reply
//! - **Webhook**: the `sendMessage` payload returned as the webhook response

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod replies;
pub mod types;
pub mod webhook;

pub use command::Command;
pub use dispatcher::CommandDispatcher;
pub use error::{TelegramError, TelegramResult};
pub use types::{Chat, Message, Update, User};
pub use webhook::WebhookReply;
