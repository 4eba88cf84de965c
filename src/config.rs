//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: CONTACTS_)
//! 2. Current working directory: ./config.toml
//! 3. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    #[serde(default)]
    pub service: ServiceConfig,

    /// Document store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            database: DatabaseConfig::default(),
            middleware: MiddlewareConfig::default(),
        }
    }
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            port: default_port(),
            log_level: default_log_level(),
            timeout_secs: default_timeout(),
            environment: default_environment(),
        }
    }
}

/// SurrealDB connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL; the scheme selects the protocol
    /// (ws://, http://, or mem:// for an in-memory instance)
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Namespace to select after connecting
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Database to select after connecting
    #[serde(default = "default_namespace")]
    pub database: String,

    /// Root username (optional; unauthenticated when absent)
    #[serde(default)]
    pub username: Option<String>,

    /// Root password (optional)
    #[serde(default)]
    pub password: Option<String>,

    /// Maximum retry attempts for establishing the connection
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between retry attempts in seconds
    #[serde(default = "default_retry_delay")]
    pub retry_delay_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            namespace: default_namespace(),
            database: default_namespace(),
            username: None,
            password: None,
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay(),
        }
    }
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in MB
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// CORS mode: "permissive" or "restrictive"
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            cors_mode: default_cors_mode(),
        }
    }
}

// Default value functions
fn default_service_name() -> String {
    "contacts-service".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_database_url() -> String {
    "mem://".to_string()
}

fn default_namespace() -> String {
    "contacts".to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    2
}

fn default_body_limit_mb() -> usize {
    2
}

fn default_cors_mode() -> String {
    "permissive".to_string()
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Reads `./config.toml` if present; environment variables
    /// (CONTACTS_ prefix) override all file-based configuration.
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load configuration from a specific file
    ///
    /// Useful for testing or non-standard deployments.
    pub fn load_from(path: &str) -> Result<Self> {
        let config = Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Config::default()))
            // Load from config file (if exists)
            .merge(Toml::file(path))
            // Override with environment variables
            .merge(Env::prefixed("CONTACTS_").split("_"))
            .extract()?;

        Ok(config)
    }
}
