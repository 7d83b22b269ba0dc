//! Redis-backed key-value store.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, info};

use crate::{KeyValueStore, StorageError, StorageResult};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
    key_prefix: Option<String>,
}

impl RedisStore {
    pub fn new(conn: ConnectionManager, key_prefix: Option<String>) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.filter(|prefix| !prefix.is_empty()),
        }
    }

    /// Open a managed connection to `url`, giving up after a few seconds.
    pub async fn connect(url: &str, key_prefix: Option<String>) -> StorageResult<Self> {
        let client = redis::Client::open(url)?;
        let conn = tokio::time::timeout(CONNECT_TIMEOUT, ConnectionManager::new(client))
            .await
            .map_err(|_| {
                StorageError::Unavailable(format!(
                    "timed out after {}s connecting to redis",
                    CONNECT_TIMEOUT.as_secs()
                ))
            })??;

        info!("redis connection established");
        Ok(Self::new(conn, key_prefix))
    }

    pub fn scoped_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{prefix}:{key}"),
            None => key.to_string(),
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let key = self.scoped_key(key);
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(&key).await?;
        debug!(%key, present = value.is_some(), "redis get");
        Ok(value)
    }

    async fn put(&self, key: &str, value: String) -> StorageResult<()> {
        let key = self.scoped_key(key);
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(&key, value).await?;
        debug!(%key, "redis set");
        Ok(())
    }
}
