//! # Slotwatch Storage Crate
//!
//! A deliberately small key-value capability: the subscriber registry only
//! ever needs to read and overwrite a single string value by key. The store
//! has no knowledge of what the value means.
//!
//! ## Backends
//!
//! - [`MemoryStore`]: process-local map, used for development and tests
//! - [`RedisStore`]: `GET`/`SET` against a Redis server
//!
//! ## Usage
//!
//! ```rust
//! use slotwatch_storage::{KeyValueStore, MemoryStore};
//!
//! # tokio_test_block(async {
//! let store = MemoryStore::new();
//! store.put("greeting", "hello".to_string()).await?;
//! assert_eq!(store.get("greeting").await?.as_deref(), Some("hello"));
//! # Ok::<(), slotwatch_storage::StorageError>(())
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

pub mod error;
pub mod memory;
pub mod redis_store;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Scoped get/put access to an opaque string store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` when nothing was ever written.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value stored under `key`.
    async fn put(&self, key: &str, value: String) -> StorageResult<()>;
}

#[async_trait]
impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key).await
    }

    async fn put(&self, key: &str, value: String) -> StorageResult<()> {
        (**self).put(key, value).await
    }
}

/// Type-erased store handle shared between services.
pub type SharedStore = Arc<dyn KeyValueStore>;
