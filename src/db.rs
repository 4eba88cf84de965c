//! SurrealDB database connection management
//!
//! Supports runtime protocol selection via URL scheme:
//! - `ws://` / `wss://` - WebSocket connections
//! - `http://` / `https://` - HTTP connections
//! - `mem://` - In-memory database (for testing)

use std::time::Duration;

use crate::{config::DatabaseConfig, error::Result};

/// SurrealDB client type alias using the `Any` engine for runtime protocol selection
pub type SurrealClient = surrealdb::Surreal<surrealdb::engine::any::Any>;

/// Create a SurrealDB client with retry logic
///
/// Retries connection attempts with exponential backoff based on the
/// configuration, then selects the configured namespace and database.
pub async fn connect(config: &DatabaseConfig) -> Result<SurrealClient> {
    let mut attempt = 0;
    let base_delay = Duration::from_secs(config.retry_delay_secs);

    loop {
        match try_connect(config).await {
            Ok(client) => {
                if attempt > 0 {
                    tracing::info!(
                        "SurrealDB connection established after {} attempt(s)",
                        attempt + 1
                    );
                } else {
                    tracing::info!(
                        "SurrealDB connected: url={}, ns={}, db={}",
                        sanitize_connection_url(&config.url),
                        config.namespace,
                        config.database
                    );
                }
                return Ok(client);
            }
            Err(e) => {
                attempt += 1;

                if attempt > config.max_retries {
                    tracing::error!(
                        "Failed to connect to SurrealDB after {} attempts: {}",
                        config.max_retries + 1,
                        e
                    );
                    return Err(e);
                }

                let delay_multiplier = 2_u32.pow(attempt.saturating_sub(1));
                let delay = base_delay * delay_multiplier;

                tracing::warn!(
                    "SurrealDB connection attempt {} failed: {}. Retrying in {:?}...",
                    attempt,
                    e,
                    delay
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Attempt to create a SurrealDB client (single try)
async fn try_connect(config: &DatabaseConfig) -> Result<SurrealClient> {
    let url_safe = sanitize_connection_url(&config.url);
    tracing::debug!("Connecting to SurrealDB: {}", url_safe);

    // Connect using the any engine (protocol determined by URL scheme)
    let client = surrealdb::engine::any::connect(&config.url).await?;

    // Authenticate if credentials are provided
    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        client
            .signin(surrealdb::opt::auth::Root { username, password })
            .await?;
    }

    // Select namespace and database
    client
        .use_ns(&config.namespace)
        .use_db(&config.database)
        .await?;

    Ok(client)
}

/// Sanitize connection URL for safe logging (remove credentials if present)
pub fn sanitize_connection_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(scheme_end) = url.find("://") {
            let scheme = &url[..=scheme_end + 2];
            let after_at = &url[at_pos..];
            return format!("{}***{}", scheme, after_at);
        }
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_connection_url_no_credentials() {
        let url = "ws://localhost:8000";
        assert_eq!(sanitize_connection_url(url), url);
    }

    #[test]
    fn test_sanitize_connection_url_with_credentials() {
        let url = "ws://user:pass@localhost:8000";
        let sanitized = sanitize_connection_url(url);
        assert!(sanitized.contains("***"));
        assert!(sanitized.contains("localhost:8000"));
        assert!(!sanitized.contains("user"));
        assert!(!sanitized.contains("pass"));
    }

    #[test]
    fn test_sanitize_connection_url_mem() {
        let url = "mem://";
        assert_eq!(sanitize_connection_url(url), url);
    }

    #[tokio::test]
    async fn test_mem_connection() {
        let config = DatabaseConfig {
            url: "mem://".to_string(),
            max_retries: 0,
            ..DatabaseConfig::default()
        };

        let result = connect(&config).await;
        assert!(
            result.is_ok(),
            "Failed to connect to in-memory SurrealDB: {:?}",
            result.err()
        );
    }
}
