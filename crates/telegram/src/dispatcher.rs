//! Command dispatch.

use std::sync::Arc;

use slotwatch_storage::KeyValueStore;
use slotwatch_subscribers::{ChatId, SubscriberRegistry};
use tracing::{debug, info};

use crate::command::Command;
use crate::replies::{HELP_REPLY, START_REPLY};
use crate::types::Update;
use crate::webhook::WebhookReply;

/// Routes parsed commands to the registry and produces reply texts.
pub struct CommandDispatcher<S> {
    registry: Arc<SubscriberRegistry<S>>,
    bot_username: Option<String>,
}

impl<S> CommandDispatcher<S>
where
    S: KeyValueStore,
{
    pub fn new(registry: Arc<SubscriberRegistry<S>>, bot_username: Option<String>) -> Self {
        Self {
            registry,
            bot_username,
        }
    }

    pub fn registry(&self) -> &Arc<SubscriberRegistry<S>> {
        &self.registry
    }

    /// Handle one webhook update. `None` means there is nothing to reply.
    pub async fn handle_update(&self, update: &Update) -> Option<WebhookReply> {
        let Some(message) = update.incoming_message() else {
            debug!(update_id = update.update_id, "ignoring update without message");
            return None;
        };
        let text = message.command_text()?;

        let Some(command) = Command::parse(text, self.bot_username.as_deref()) else {
            debug!(update_id = update.update_id, "ignoring non-command message");
            return None;
        };

        let chat_id = ChatId(message.chat.id);
        let reply = self.execute(command, chat_id).await;
        Some(WebhookReply::send_message(chat_id.get(), reply))
    }

    /// Run `command` on behalf of `chat_id` and return the reply text.
    pub async fn execute(&self, command: Command, chat_id: ChatId) -> String {
        info!(command = command.name(), %chat_id, "received command");

        match command {
            Command::Start => START_REPLY.to_string(),
            Command::Help => HELP_REPLY.to_string(),
            Command::Register => self.registry.register(chat_id).await.to_string(),
            Command::Unregister => self.registry.unregister(chat_id).await.to_string(),
        }
    }
}
