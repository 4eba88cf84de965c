//! HTTP handlers for the contacts API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{Error, Result},
    models::{
        Contact, CreateContactRequest, CreateContactResponse, MessageResponse,
        UpdateContactRequest, UpdateContactResponse,
    },
    state::AppState,
};

/// List all contacts
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    responses(
        (status = 200, description = "A list of contacts", body = [Contact]),
        (status = 500, description = "Server error", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>> {
    let records = state.contacts().find_all().await?;
    Ok(Json(records.into_iter().map(Contact::from).collect()))
}

/// Get a single contact by ID
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "The contact ID")),
    responses(
        (status = 200, description = "A single contact", body = Contact),
        (status = 404, description = "Contact not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Server error", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>> {
    let record = state
        .contacts()
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Contact not found".to_string()))?;

    Ok(Json(record.into()))
}

/// Create a new contact
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact added successfully", body = CreateContactResponse),
        (status = 400, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 500, description = "Server error", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<CreateContactResponse>)> {
    // Reject before touching the store
    let contact = request.validate().map_err(Error::Validation)?;

    let created = state.contacts().create(contact).await?;
    let contact_id = created.id.key().to_string();

    info!("Created contact {}", contact_id);

    Ok((
        StatusCode::CREATED,
        Json(CreateContactResponse {
            message: "Contact added successfully".to_string(),
            contact_id,
        }),
    ))
}

/// Update an existing contact by ID
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "The contact ID")),
    request_body = UpdateContactRequest,
    responses(
        (status = 200, description = "Contact updated successfully", body = UpdateContactResponse),
        (status = 400, description = "No fields supplied", body = crate::error::ErrorResponse),
        (status = 404, description = "Contact not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Server error", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<UpdateContactResponse>> {
    request.validate().map_err(Error::Validation)?;

    let updated = state
        .contacts()
        .update(id, request)
        .await?
        .ok_or_else(|| Error::NotFound("Contact not found".to_string()))?;

    info!("Updated contact {}", updated.id.key());

    Ok(Json(UpdateContactResponse {
        message: "Contact updated successfully".to_string(),
        contact: updated.into(),
    }))
}

/// Delete a contact by ID
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "The contact ID")),
    responses(
        (status = 200, description = "Contact deleted successfully", body = MessageResponse),
        (status = 404, description = "Contact not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Server error", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let removed = state
        .contacts()
        .delete(id)
        .await?
        .ok_or_else(|| Error::NotFound("Contact not found".to_string()))?;

    info!("Deleted contact {}", removed.id.key());

    Ok(Json(MessageResponse {
        message: "Contact deleted successfully".to_string(),
    }))
}

/// Health check endpoint
///
/// Returns "ok" if the service is running.
/// Used by Kubernetes liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness check endpoint
///
/// Returns "ready" if the store answers a trivial query.
/// Used by Kubernetes readiness probe.
pub async fn readiness(State(state): State<AppState>) -> std::result::Result<&'static str, StatusCode> {
    state
        .db()
        .query("RETURN 1")
        .await
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)?;

    Ok("ready")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, db};

    async fn test_state() -> AppState {
        let config = Config::default();
        let client = db::connect(&config.database).await.unwrap();
        AppState::new(config, client)
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn test_readiness() {
        let state = test_state().await;
        let response = readiness(State(state)).await;
        assert_eq!(response.unwrap(), "ready");
    }

    #[tokio::test]
    async fn test_get_unknown_contact_is_not_found() {
        let state = test_state().await;
        let result = get_contact(State(state), Path("missing".to_string())).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields_without_persisting() {
        let state = test_state().await;

        let request = CreateContactRequest {
            name: Some("Ann".to_string()),
            email: None,
            phone: Some("555-0100".to_string()),
        };
        let result = create_contact(State(state.clone()), Json(request)).await;
        assert!(matches!(result, Err(Error::Validation(_))));

        // Nothing was persisted
        let all = state.contacts().find_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_update_with_no_fields_leaves_record_unchanged() {
        let state = test_state().await;

        let created = create_contact(
            State(state.clone()),
            Json(CreateContactRequest {
                name: Some("Ann".to_string()),
                email: Some("ann@x.com".to_string()),
                phone: Some("555-0100".to_string()),
            }),
        )
        .await
        .unwrap();
        let id = created.1 .0.contact_id.clone();

        let empty = UpdateContactRequest {
            name: None,
            email: None,
            phone: None,
        };
        let result = update_contact(State(state.clone()), Path(id.clone()), Json(empty)).await;
        assert!(matches!(result, Err(Error::Validation(_))));

        let record = state.contacts().find_by_id(id).await.unwrap().unwrap();
        assert_eq!(record.name, "Ann");
        assert_eq!(record.email, "ann@x.com");
        assert_eq!(record.phone, "555-0100");
    }
}
