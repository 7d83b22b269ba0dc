//! Behavioural tests for the subscriber registry against in-memory and
//! failure-injecting stores.

use async_trait::async_trait;
use futures::future::join_all;
use mockall::mock;
use slotwatch_storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};
use slotwatch_subscribers::{
    ChatId, RegistrationOutcome, SubscriberError, SubscriberRegistry, SubscriberSet,
    SUBSCRIBERS_KEY,
};

mock! {
    pub Store {}

    #[async_trait]
    impl KeyValueStore for Store {
        async fn get(&self, key: &str) -> StorageResult<Option<String>>;
        async fn put(&self, key: &str, value: String) -> StorageResult<()>;
    }
}

fn seeded(raw: &str) -> SubscriberRegistry<MemoryStore> {
    SubscriberRegistry::new(MemoryStore::with_entry(SUBSCRIBERS_KEY, raw))
}

async fn stored(registry: &SubscriberRegistry<MemoryStore>) -> Option<String> {
    registry.store().raw(SUBSCRIBERS_KEY).await
}

fn members(set: &SubscriberSet) -> Vec<i64> {
    set.iter().map(ChatId::get).collect()
}

#[tokio::test]
async fn register_is_idempotent() {
    let registry = SubscriberRegistry::new(MemoryStore::new());
    let chat = ChatId(123_456);

    assert_eq!(registry.register(chat).await, RegistrationOutcome::Registered);
    assert_eq!(registry.register(chat).await, RegistrationOutcome::AlreadyRegistered);
    assert_eq!(registry.register(chat).await, RegistrationOutcome::AlreadyRegistered);

    assert_eq!(members(&registry.subscribers().await), vec![123_456]);
}

#[tokio::test]
async fn unregister_absent_leaves_set_unchanged() {
    let registry = seeded("[1,2]");

    assert_eq!(
        registry.unregister(ChatId(3)).await,
        RegistrationOutcome::NotRegistered
    );
    assert_eq!(stored(&registry).await.as_deref(), Some("[1,2]"));
}

#[tokio::test]
async fn register_then_unregister_restores_membership() {
    let registry = seeded("[10,20]");
    let before = registry.subscribers().await;

    registry.register(ChatId(30)).await;
    assert!(registry.is_registered(ChatId(30)).await);

    assert_eq!(
        registry.unregister(ChatId(30)).await,
        RegistrationOutcome::Unregistered
    );
    assert_eq!(registry.subscribers().await, before);
    assert!(!registry.is_registered(ChatId(30)).await);
}

#[tokio::test]
async fn absent_key_loads_as_empty_and_first_register_creates_it() {
    let registry = SubscriberRegistry::new(MemoryStore::new());

    assert!(registry.load().await.is_empty());
    registry.register(ChatId(5)).await;

    assert_eq!(stored(&registry).await.as_deref(), Some("[5]"));
}

#[tokio::test]
async fn malformed_value_loads_as_empty() {
    for raw in ["not json", "{\"a\":1}", "[\"abc\"]", "[1,"] {
        let registry = seeded(raw);
        assert!(registry.load().await.is_empty(), "{raw:?} should load as empty");
        assert!(matches!(
            registry.fetch().await,
            Err(SubscriberError::Malformed(_))
        ));
    }
}

#[tokio::test]
async fn register_over_malformed_value_replaces_it() {
    let registry = seeded("garbage");

    assert_eq!(registry.register(ChatId(9)).await, RegistrationOutcome::Registered);
    assert_eq!(stored(&registry).await.as_deref(), Some("[9]"));
}

#[tokio::test]
async fn save_of_load_is_byte_identical_for_canonical_values() {
    let canonical = "[111,222,-1001]";
    let registry = seeded(canonical);

    let loaded = registry.load().await;
    registry.save(&loaded).await;

    assert_eq!(stored(&registry).await.as_deref(), Some(canonical));
}

#[tokio::test]
async fn scripted_session_matches_expected_replies_and_state() {
    let registry = seeded("[111]");

    let outcome = registry.register(ChatId(222)).await;
    assert_eq!(outcome.message(), "You are now registered for updates!");
    assert_eq!(stored(&registry).await.as_deref(), Some("[111,222]"));

    let outcome = registry.register(ChatId(222)).await;
    assert_eq!(outcome.message(), "You are already registered for updates!");
    assert_eq!(stored(&registry).await.as_deref(), Some("[111,222]"));

    let outcome = registry.unregister(ChatId(111)).await;
    assert_eq!(outcome.message(), "You are now unregistered from updates!");
    assert_eq!(stored(&registry).await.as_deref(), Some("[222]"));

    let outcome = registry.unregister(ChatId(999)).await;
    assert_eq!(outcome.message(), "You are not registered for updates!");
    assert_eq!(stored(&registry).await.as_deref(), Some("[222]"));
}

#[tokio::test]
async fn concurrent_registrations_through_one_registry_are_not_lost() {
    let registry = SubscriberRegistry::new(MemoryStore::new());

    let outcomes = join_all((0..64).map(|id| registry.register(ChatId(id)))).await;

    assert!(outcomes
        .iter()
        .all(|outcome| *outcome == RegistrationOutcome::Registered));
    assert_eq!(registry.subscribers().await.len(), 64);
}

#[tokio::test]
async fn read_failure_degrades_to_empty_set() {
    let mut store = MockStore::new();
    store
        .expect_get()
        .withf(|key| key == SUBSCRIBERS_KEY)
        .returning(|_| Err(StorageError::Unavailable("connection refused".to_string())));
    store
        .expect_put()
        .withf(|key, value| key == SUBSCRIBERS_KEY && value == "[42]")
        .times(1)
        .returning(|_, _| Ok(()));

    let registry = SubscriberRegistry::new(store);

    assert_eq!(registry.register(ChatId(42)).await, RegistrationOutcome::Registered);
}

#[tokio::test]
async fn fetch_surfaces_read_failures() {
    let mut store = MockStore::new();
    store
        .expect_get()
        .returning(|_| Err(StorageError::Backend("WRONGTYPE".to_string())));

    let registry = SubscriberRegistry::new(store);

    assert!(matches!(registry.fetch().await, Err(SubscriberError::Read(_))));
    assert!(registry.subscribers().await.is_empty());
}

#[tokio::test]
async fn write_failure_is_swallowed_and_still_reports_success() {
    let mut store = MockStore::new();
    store.expect_get().returning(|_| Ok(Some("[1]".to_string())));
    store.expect_put().times(1).returning(|key, _| {
        Err(StorageError::Rejected {
            key: key.to_string(),
            reason: "read only".to_string(),
        })
    });

    let registry = SubscriberRegistry::new(store);

    assert_eq!(registry.register(ChatId(2)).await, RegistrationOutcome::Registered);
}

#[tokio::test]
async fn persist_surfaces_write_failures() {
    let mut store = MockStore::new();
    store
        .expect_put()
        .returning(|_, _| Err(StorageError::Unavailable("timeout".to_string())));

    let registry = SubscriberRegistry::new(store);
    let subscribers: SubscriberSet = [ChatId(1)].into_iter().collect();

    assert!(matches!(
        registry.persist(&subscribers).await,
        Err(SubscriberError::Write(_))
    ));
}

#[tokio::test]
async fn no_op_outcomes_perform_no_writes() {
    let mut store = MockStore::new();
    store.expect_get().returning(|_| Ok(Some("[7]".to_string())));
    store.expect_put().never();

    let registry = SubscriberRegistry::new(store);

    assert_eq!(
        registry.register(ChatId(7)).await,
        RegistrationOutcome::AlreadyRegistered
    );
    assert_eq!(
        registry.unregister(ChatId(8)).await,
        RegistrationOutcome::NotRegistered
    );
}
