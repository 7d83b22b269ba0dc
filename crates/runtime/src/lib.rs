use std::sync::Arc;

use anyhow::Result;
use slotwatch_config::{AppConfig, StorageBackend};
use slotwatch_storage::{MemoryStore, RedisStore, SharedStore};
use slotwatch_subscribers::SubscriberRegistry;
use slotwatch_telegram::CommandDispatcher;
use tracing::{info, warn};

pub mod telemetry {
    use anyhow::Result;
    use tracing::Level;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_max_level(Level::INFO)
            .with_env_filter(env_filter)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

/// Which store the services ended up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveBackend {
    Memory,
    Redis,
}

#[derive(Clone)]
pub struct BotServices {
    pub store: SharedStore,
    pub backend: ActiveBackend,
    pub registry: Arc<SubscriberRegistry<SharedStore>>,
    pub dispatcher: Arc<CommandDispatcher<SharedStore>>,
}

impl BotServices {
    pub async fn initialise(config: &AppConfig) -> Result<Self> {
        let (store, backend) = open_store(config).await;

        let registry = Arc::new(SubscriberRegistry::new(store.clone()));
        let dispatcher = Arc::new(CommandDispatcher::new(
            registry.clone(),
            config.telegram.bot_username.clone(),
        ));

        info!(backend = ?backend, key = registry.key(), "subscriber registry ready");

        Ok(Self {
            store,
            backend,
            registry,
            dispatcher,
        })
    }
}

/// Open the configured store. An unreachable Redis is tolerated by falling
/// back to the in-memory store so the bot keeps answering.
async fn open_store(config: &AppConfig) -> (SharedStore, ActiveBackend) {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("using in-memory subscriber store");
            (Arc::new(MemoryStore::new()), ActiveBackend::Memory)
        }
        StorageBackend::Redis => {
            match RedisStore::connect(&config.storage.redis_url, config.storage.key_prefix.clone())
                .await
            {
                Ok(store) => (Arc::new(store), ActiveBackend::Redis),
                Err(error) => {
                    warn!(
                        %error,
                        "failed to connect to redis, proceeding with in-memory subscriber store"
                    );
                    (Arc::new(MemoryStore::new()), ActiveBackend::Memory)
                }
            }
        }
    }
}

pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(?error, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
