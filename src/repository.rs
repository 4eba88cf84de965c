//! Contact persistence over the SurrealDB client
//!
//! Each operation is a single store call against the `contact` table. The
//! store's per-record atomicity is the only consistency guarantee; concurrent
//! updates to the same record race at last-write-wins granularity.

use crate::{
    db::SurrealClient,
    error::{Error, Result},
    models::{ContactRecord, NewContact, UpdateContactRequest},
};

/// Table holding contact records
const TABLE: &str = "contact";

/// Repository for contact records
#[derive(Clone)]
pub struct ContactRepository {
    client: SurrealClient,
}

impl ContactRepository {
    /// Create a repository over an established client
    pub fn new(client: SurrealClient) -> Self {
        Self { client }
    }

    /// Retrieve every contact, in store-native order
    pub async fn find_all(&self) -> Result<Vec<ContactRecord>> {
        let records: Vec<ContactRecord> = self.client.select(TABLE).await?;
        Ok(records)
    }

    /// Look up a single contact by its record key
    ///
    /// A malformed or unknown key simply fails to match and returns `None`.
    pub async fn find_by_id(&self, id: String) -> Result<Option<ContactRecord>> {
        let record: Option<ContactRecord> = self.client.select((TABLE, id)).await?;
        Ok(record)
    }

    /// Persist a new contact; the store assigns the record id
    pub async fn create(&self, contact: NewContact) -> Result<ContactRecord> {
        let created: Option<ContactRecord> = self.client.create(TABLE).content(contact).await?;
        created.ok_or_else(|| Error::Internal("store returned no record on create".to_string()))
    }

    /// Merge the supplied fields into an existing contact
    ///
    /// Fields absent from the patch keep their prior values. Returns `None`
    /// when no record matches the key.
    pub async fn update(
        &self,
        id: String,
        patch: UpdateContactRequest,
    ) -> Result<Option<ContactRecord>> {
        let updated: Option<ContactRecord> =
            self.client.update((TABLE, id)).merge(patch).await?;
        Ok(updated)
    }

    /// Remove a contact by its record key
    ///
    /// Returns the removed record, or `None` when no record matches.
    pub async fn delete(&self, id: String) -> Result<Option<ContactRecord>> {
        let removed: Option<ContactRecord> = self.client.delete((TABLE, id)).await?;
        Ok(removed)
    }

    /// Remove every contact record; used by the bulk loader
    pub async fn delete_all(&self) -> Result<usize> {
        let removed: Vec<ContactRecord> = self.client.delete(TABLE).await?;
        Ok(removed.len())
    }

    /// Insert a batch of contacts; used by the bulk loader
    pub async fn insert_many(&self, contacts: Vec<NewContact>) -> Result<Vec<ContactRecord>> {
        let inserted: Vec<ContactRecord> = self.client.insert(TABLE).content(contacts).await?;
        Ok(inserted)
    }
}
