//! Application state shared across handlers

use std::sync::Arc;

use crate::{config::Config, db::SurrealClient, repository::ContactRepository};

/// Shared application state
///
/// Holds the configuration and the process-wide store connection,
/// established once at startup and shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    db: SurrealClient,
}

impl AppState {
    /// Create a new AppState over an established database connection
    pub fn new(config: Config, db: SurrealClient) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the database client
    ///
    /// The client is internally reference-counted, so cloning is cheap.
    pub fn db(&self) -> &SurrealClient {
        &self.db
    }

    /// Get a contact repository over the shared connection
    pub fn contacts(&self) -> ContactRepository {
        ContactRepository::new(self.db.clone())
    }
}
