//! Shared application state for the gateway

use std::sync::Arc;

use slotwatch_config::TelegramConfig;
use slotwatch_storage::SharedStore;
use slotwatch_telegram::CommandDispatcher;

/// Dispatcher over whichever store backend the runtime selected.
pub type Dispatcher = CommandDispatcher<SharedStore>;

#[derive(Clone)]
pub struct GatewayState {
    /// Command dispatcher wrapping the subscriber registry
    pub dispatcher: Arc<Dispatcher>,
    /// Webhook path and secret
    pub telegram: TelegramConfig,
}

impl GatewayState {
    pub fn new(dispatcher: Arc<Dispatcher>, telegram: TelegramConfig) -> Self {
        Self {
            dispatcher,
            telegram,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn webhook_path(&self) -> &str {
        &self.telegram.webhook_path
    }

    pub fn webhook_secret(&self) -> Option<&str> {
        self.telegram.webhook_secret.as_deref()
    }
}
