//! Subscriber registry service.

use slotwatch_storage::KeyValueStore;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::entities::{ChatId, SubscriberSet};
use crate::types::{RegistrationOutcome, SubscriberError, SubscriberResult};

/// Well-known key holding the serialized subscriber set.
pub const SUBSCRIBERS_KEY: &str = "active_chat_ids";

/// Owns read-modify-write access to the subscriber set.
///
/// Nothing is cached between calls: each operation loads the set from the
/// store, mutates it, and writes the whole set back. Cycles issued through the
/// same registry are serialised; writers in other processes are not
/// coordinated with, so the last full write wins.
pub struct SubscriberRegistry<S> {
    store: S,
    key: String,
    cycle: Mutex<()>,
}

impl<S> SubscriberRegistry<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self::with_key(store, SUBSCRIBERS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            cycle: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Subscribe `chat_id`. Idempotent; never fails.
    pub async fn register(&self, chat_id: ChatId) -> RegistrationOutcome {
        let _cycle = self.cycle.lock().await;

        let mut subscribers = self.load().await;
        if !subscribers.insert(chat_id) {
            debug!(%chat_id, "chat already registered");
            return RegistrationOutcome::AlreadyRegistered;
        }

        self.save(&subscribers).await;
        info!(%chat_id, subscribers = subscribers.len(), "chat registered");
        RegistrationOutcome::Registered
    }

    /// Unsubscribe `chat_id`. Idempotent; never fails.
    pub async fn unregister(&self, chat_id: ChatId) -> RegistrationOutcome {
        let _cycle = self.cycle.lock().await;

        let mut subscribers = self.load().await;
        if !subscribers.remove(chat_id) {
            debug!(%chat_id, "chat was not registered");
            return RegistrationOutcome::NotRegistered;
        }

        self.save(&subscribers).await;
        info!(%chat_id, subscribers = subscribers.len(), "chat unregistered");
        RegistrationOutcome::Unregistered
    }

    /// Current subscribers.
    pub async fn subscribers(&self) -> SubscriberSet {
        self.load().await
    }

    pub async fn is_registered(&self, chat_id: ChatId) -> bool {
        self.load().await.contains(chat_id)
    }

    /// Load the set, degrading to empty on any read or parse failure.
    pub async fn load(&self) -> SubscriberSet {
        match self.fetch().await {
            Ok(subscribers) => subscribers,
            Err(error) => {
                warn!(key = %self.key, %error, "failed to load subscriber set, treating as empty");
                SubscriberSet::new()
            }
        }
    }

    /// Overwrite the stored set. Failures are logged and swallowed.
    pub async fn save(&self, subscribers: &SubscriberSet) {
        if let Err(error) = self.persist(subscribers).await {
            error!(
                key = %self.key,
                subscribers = subscribers.len(),
                %error,
                "failed to save subscriber set"
            );
        }
    }

    /// Read and validate the stored set.
    pub async fn fetch(&self) -> SubscriberResult<SubscriberSet> {
        let raw = self
            .store
            .get(&self.key)
            .await
            .map_err(SubscriberError::Read)?;

        match raw {
            Some(raw) => SubscriberSet::decode(&raw),
            None => Ok(SubscriberSet::new()),
        }
    }

    /// Serialize and overwrite the stored set.
    pub async fn persist(&self, subscribers: &SubscriberSet) -> SubscriberResult<()> {
        let encoded = subscribers.encode()?;
        self.store
            .put(&self.key, encoded)
            .await
            .map_err(SubscriberError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotwatch_storage::MemoryStore;

    #[tokio::test]
    async fn register_twice_stores_one_copy() {
        let registry = SubscriberRegistry::new(MemoryStore::new());

        assert_eq!(registry.register(ChatId(7)).await, RegistrationOutcome::Registered);
        assert_eq!(
            registry.register(ChatId(7)).await,
            RegistrationOutcome::AlreadyRegistered
        );

        let raw = registry.store().raw(SUBSCRIBERS_KEY).await;
        assert_eq!(raw.as_deref(), Some("[7]"));
    }

    #[tokio::test]
    async fn unregister_absent_does_not_write() {
        let registry = SubscriberRegistry::new(MemoryStore::new());

        assert_eq!(
            registry.unregister(ChatId(7)).await,
            RegistrationOutcome::NotRegistered
        );
        assert!(registry.store().is_empty().await);
    }

    #[tokio::test]
    async fn custom_key_is_respected() {
        let registry = SubscriberRegistry::with_key(MemoryStore::new(), "staging_chat_ids");
        registry.register(ChatId(1)).await;

        assert_eq!(registry.key(), "staging_chat_ids");
        assert!(registry.store().raw(SUBSCRIBERS_KEY).await.is_none());
        assert_eq!(
            registry.store().raw("staging_chat_ids").await.as_deref(),
            Some("[1]")
        );
    }

    #[tokio::test]
    async fn fetch_reports_malformed_values() {
        let registry =
            SubscriberRegistry::new(MemoryStore::with_entry(SUBSCRIBERS_KEY, "{\"ids\": [1]}"));

        assert!(matches!(
            registry.fetch().await,
            Err(SubscriberError::Malformed(_))
        ));
        assert!(registry.load().await.is_empty());
    }
}
