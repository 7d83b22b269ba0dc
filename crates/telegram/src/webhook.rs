//! Webhook reply payload.
//!
//! Telegram accepts a Bot API method call as the body of the webhook HTTP
//! response, which saves a round trip for simple text replies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookReply {
    pub method: String,
    pub chat_id: i64,
    pub text: String,
}

impl WebhookReply {
    pub fn send_message(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            method: "sendMessage".to_string(),
            chat_id,
            text: text.into(),
        }
    }
}
