//! Configuration management for the toolbox server.
//!
//! All configuration is resolved once at startup and passed down explicitly:
//! tool handlers receive the credentials and file paths they need through
//! their constructors and never re-read the process environment per call.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the toolbox server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials.
    pub credentials: CredentialsConfig,

    /// File-backed storage locations.
    pub storage: StorageConfig,

    /// Knowledge-base service configuration.
    pub knowledge_base: KnowledgeBaseConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Credentials for the external APIs the tools call.
///
/// Every key is optional: tools whose key is absent fail at call time with a
/// descriptive handler error rather than at startup.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// WeatherAPI key (`fetch_weather`).
    pub weather_api_key: Option<String>,

    /// NewsAPI key (`get_news`).
    pub news_api_key: Option<String>,

    /// Alpha Vantage key (`get_stock_price`).
    pub stocks_api_key: Option<String>,

    /// Knowledge-base service key (`search_doc_for_rag_context`,
    /// `ingest_documents`).
    pub knowledge_base_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redact(key: &Option<String>) -> Option<&'static str> {
            key.as_ref().map(|_| "[REDACTED]")
        }

        f.debug_struct("CredentialsConfig")
            .field("weather_api_key", &redact(&self.weather_api_key))
            .field("news_api_key", &redact(&self.news_api_key))
            .field("stocks_api_key", &redact(&self.stocks_api_key))
            .field(
                "knowledge_base_api_key",
                &redact(&self.knowledge_base_api_key),
            )
            .finish()
    }
}

/// Locations of the file-backed stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Newline-delimited notes file.
    pub notes_file: PathBuf,

    /// JSON task list file.
    pub tasks_file: PathBuf,
}

/// Knowledge-base HTTP service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBaseConfig {
    /// Base URL of the knowledge-base API.
    pub base_url: String,

    /// Bucket to search and ingest into.
    pub bucket_id: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            notes_file: PathBuf::from("mynotes.txt"),
            tasks_file: PathBuf::from("tasks.json"),
        }
    }
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.eyelevel.ai/api/v1".to_string(),
            bucket_id: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "toolbox-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            storage: StorageConfig::default(),
            knowledge_base: KnowledgeBaseConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `TOOLBOX_`, e.g. `TOOLBOX_SERVER_NAME`,
    /// `TOOLBOX_LOG_LEVEL`, `TOOLBOX_WEATHER_API_KEY`. A `.env` file in the
    /// working directory is honored.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("TOOLBOX_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("TOOLBOX_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.credentials = CredentialsConfig {
            weather_api_key: read_key("TOOLBOX_WEATHER_API_KEY", "fetch_weather"),
            news_api_key: read_key("TOOLBOX_NEWS_API_KEY", "get_news"),
            stocks_api_key: read_key("TOOLBOX_STOCKS_API_KEY", "get_stock_price"),
            knowledge_base_api_key: read_key(
                "TOOLBOX_KB_API_KEY",
                "search_doc_for_rag_context / ingest_documents",
            ),
        };

        if let Ok(path) = std::env::var("TOOLBOX_NOTES_FILE") {
            config.storage.notes_file = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("TOOLBOX_TASKS_FILE") {
            config.storage.tasks_file = PathBuf::from(path);
        }

        if let Ok(url) = std::env::var("TOOLBOX_KB_URL") {
            config.knowledge_base.base_url = url;
        }
        if let Ok(bucket) = std::env::var("TOOLBOX_KB_BUCKET") {
            config.knowledge_base.bucket_id = Some(bucket);
        }

        config
    }
}

/// Read an optional API key, logging which tools it unlocks.
fn read_key(var: &str, tools: &str) -> Option<String> {
    match std::env::var(var) {
        Ok(key) if !key.is_empty() => {
            info!("{} loaded from environment", var);
            Some(key)
        }
        _ => {
            warn!("{} not set - {} will report a handler error when called", var, tools);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOLBOX_WEATHER_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.weather_api_key.as_deref(),
            Some("test_key_12345")
        );
        unsafe {
            std::env::remove_var("TOOLBOX_WEATHER_API_KEY");
        }
    }

    #[test]
    fn test_missing_credentials_stay_none() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("TOOLBOX_NEWS_API_KEY");
        }
        let config = Config::from_env();
        assert!(config.credentials.news_api_key.is_none());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            weather_api_key: Some("super_secret_key".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_default_storage_paths() {
        let config = Config::default();
        assert_eq!(config.storage.notes_file, PathBuf::from("mynotes.txt"));
        assert_eq!(config.storage.tasks_file, PathBuf::from("tasks.json"));
    }
}
