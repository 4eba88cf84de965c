//! Data models for the contacts API

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use utoipa::ToSchema;

/// Contact record as stored in the database
///
/// The `id` is assigned by the store at creation time and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Contact as exposed on the wire
///
/// The store-assigned record id is flattened to its string key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    /// Opaque store-assigned identifier
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        Self {
            id: record.id.key().to_string(),
            name: record.name,
            email: record.email,
            phone: record.phone,
        }
    }
}

/// Field payload for a new contact (the store assigns the id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Create contact request
///
/// All three fields are required; each is modeled as optional so a missing
/// field and an empty field surface the same rejection before any store call.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CreateContactRequest {
    /// Validate the request and produce the record payload to persist
    pub fn validate(self) -> Result<NewContact, String> {
        match (
            non_empty(self.name),
            non_empty(self.email),
            non_empty(self.phone),
        ) {
            (Some(name), Some(email), Some(phone)) => Ok(NewContact { name, email, phone }),
            _ => Err("All fields (name, email, phone) are required".to_string()),
        }
    }
}

/// Update contact request
///
/// Any subset of fields may be supplied; omitted fields keep their prior
/// values. A field supplied as empty is rejected rather than treated as
/// absent, so an empty string never silently clears a field.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UpdateContactRequest {
    /// Check if the request supplies any field
    pub fn has_updates(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.phone.is_some()
    }

    /// Validate the update request
    pub fn validate(&self) -> Result<(), String> {
        if !self.has_updates() {
            return Err(
                "At least one field (name, email, or phone) is required to update".to_string(),
            );
        }
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err("name cannot be empty".to_string());
        }
        if matches!(&self.email, Some(email) if email.trim().is_empty()) {
            return Err("email cannot be empty".to_string());
        }
        if matches!(&self.phone, Some(phone) if phone.trim().is_empty()) {
            return Err("phone cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Response for a successful create
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateContactResponse {
    pub message: String,
    #[serde(rename = "contactId")]
    pub contact_id: String,
}

/// Response for a successful update
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateContactResponse {
    pub message: String,
    pub contact: Contact,
}

/// Generic confirmation response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
