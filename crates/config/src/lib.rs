use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "slotwatch.toml",
    "config/slotwatch.toml",
    "crates/config/slotwatch.toml",
    "../slotwatch.toml",
    "../config/slotwatch.toml",
    "../crates/config/slotwatch.toml",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub telegram: TelegramConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Settings for the Telegram webhook surface.
///
/// ```
/// use slotwatch_config::TelegramConfig;
///
/// let telegram = TelegramConfig::default();
/// assert_eq!(telegram.webhook_path, "/telegram/webhook");
/// assert!(telegram.bot_username.is_none());
/// assert!(telegram.webhook_secret.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Username of the bot, without the leading `@`. When set, commands
    /// addressed to a different bot (`/register@OtherBot`) are ignored.
    #[serde(default)]
    pub bot_username: Option<String>,
    /// Expected value of the `X-Telegram-Bot-Api-Secret-Token` header.
    #[serde(default)]
    pub webhook_secret: Option<String>,
    #[serde(default = "TelegramConfig::default_webhook_path")]
    pub webhook_path: String,
}

impl TelegramConfig {
    fn default_webhook_path() -> String {
        "/telegram/webhook".to_string()
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_username: None,
            webhook_secret: None,
            webhook_path: Self::default_webhook_path(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Redis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "StorageConfig::default_redis_url")]
    pub redis_url: String,
    /// Namespace prepended to keys as `<prefix>:<key>` on the Redis backend.
    #[serde(default)]
    pub key_prefix: Option<String>,
}

impl StorageConfig {
    fn default_redis_url() -> String {
        "redis://127.0.0.1:6379".to_string()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            redis_url: Self::default_redis_url(),
            key_prefix: None,
        }
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use slotwatch_config::load;
///
/// std::env::remove_var("SLOTWATCH_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.http.address.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder()
        .set_default("http.address", defaults.http.address.clone())?
        .set_default("http.port", i64::from(defaults.http.port))?
        .set_default("telegram.webhook_path", defaults.telegram.webhook_path.clone())?
        .set_default("storage.backend", "memory")?
        .set_default("storage.redis_url", defaults.storage.redis_url.clone())?;

    let environment_overrides = config::Environment::with_prefix("SLOTWATCH").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("SLOTWATCH_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via SLOTWATCH_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let mut config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    config.telegram.bot_username = config
        .telegram
        .bot_username
        .take()
        .map(|name| name.trim().trim_start_matches('@').to_string())
        .filter(|name| !name.is_empty());

    if !config.telegram.webhook_path.starts_with('/') {
        config.telegram.webhook_path = format!("/{}", config.telegram.webhook_path);
    }

    debug!(
        http = ?config.http,
        storage = ?config.storage.backend,
        webhook_path = %config.telegram.webhook_path,
        secret_configured = config.telegram.webhook_secret.is_some(),
        "loaded bot configuration"
    );
    Ok(config)
}
