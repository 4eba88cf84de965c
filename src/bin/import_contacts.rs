//! Bulk data-import binary
//!
//! Wipes the contact collection and repopulates it from the static dataset
//! embedded at compile time. Invoked out-of-band, never during normal
//! service operation. Exits 0 on success, 1 on failure.

use contacts_service::{
    config::Config,
    db,
    error::{Error, Result},
    models::NewContact,
    observability,
    repository::ContactRepository,
};

/// Static seed dataset
const SEED_DATA: &str = include_str!("../../data/contacts.json");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // tracing may not be initialized yet if config loading failed
        eprintln!("Error importing data: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::load()?;
    observability::init_tracing(&config)?;

    let contacts: Vec<NewContact> = serde_json::from_str(SEED_DATA)
        .map_err(|e| Error::Internal(format!("invalid seed dataset: {}", e)))?;

    let client = db::connect(&config.database).await?;
    let repo = ContactRepository::new(client);

    // Clear existing data
    let removed = repo.delete_all().await?;
    tracing::info!("Existing contacts removed: {}", removed);

    // Insert new data
    let inserted = repo.insert_many(contacts).await?;
    tracing::info!("Contacts imported successfully: {}", inserted.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dataset_parses_and_is_valid() {
        let contacts: Vec<NewContact> = serde_json::from_str(SEED_DATA).unwrap();
        assert!(!contacts.is_empty());
        for contact in &contacts {
            assert!(!contact.name.trim().is_empty());
            assert!(!contact.email.trim().is_empty());
            assert!(!contact.phone.trim().is_empty());
        }
    }
}
