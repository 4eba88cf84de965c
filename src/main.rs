//! Contacts service entrypoint

use contacts_service::{app, config::Config, db, observability, server::Server, AppState, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing
    observability::init_tracing(&config)?;

    tracing::info!("Starting contacts service");

    // Connect to the store; startup fails if the store is unreachable
    let client = db::connect(&config.database).await?;

    let state = AppState::new(config.clone(), client);

    // Run server
    Server::new(config).serve(app(state)).await?;

    Ok(())
}
