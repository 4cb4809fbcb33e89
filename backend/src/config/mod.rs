//! Configuration management for the Health Companion backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HC__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub enhancer: EnhancerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Storage configuration for the file-backed user store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the users.json store file
    pub data_dir: PathBuf,
}

/// LLM-enhancement configuration.
///
/// The enhancer is optional: when disabled or unreachable, the summary
/// pipeline always falls back to the deterministic composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancerConfig {
    pub enabled: bool,
    pub url: String,
    pub model: String,
    /// Bound on the whole enhancement request, in seconds
    pub timeout_secs: u64,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: "http://localhost:11434".to_string(),
            model: "llama3.2".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            storage: StorageConfig {
                data_dir: PathBuf::from("data"),
            },
            enhancer: EnhancerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with HC__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (HC__ prefix)
            // e.g., HC__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("HC").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
