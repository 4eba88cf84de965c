//! OpenAPI documentation for the contacts API
//!
//! The specification is generated with utoipa from the handler annotations
//! and served two ways: Swagger UI at `/api-docs` and the raw JSON document
//! at `/swagger.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{error::ErrorResponse, handlers, models};

/// OpenAPI document for the contacts API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts API",
        version = "1.0.0",
        description = "API for managing contacts"
    ),
    paths(
        handlers::list_contacts,
        handlers::get_contact,
        handlers::create_contact,
        handlers::update_contact,
        handlers::delete_contact,
    ),
    components(schemas(
        models::Contact,
        models::CreateContactRequest,
        models::UpdateContactRequest,
        models::CreateContactResponse,
        models::UpdateContactResponse,
        models::MessageResponse,
        ErrorResponse,
    )),
    tags((name = "contacts", description = "The contacts managing API"))
)]
pub struct ApiDoc;

/// Router serving Swagger UI and the raw OpenAPI document
pub fn routes() -> Router {
    SwaggerUi::new("/api-docs")
        .url("/swagger.json", ApiDoc::openapi())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_covers_all_operations() {
        let spec = ApiDoc::openapi();

        let list_path = spec.paths.paths.get("/api/contacts").unwrap();
        assert!(list_path.get.is_some());
        assert!(list_path.post.is_some());

        let id_path = spec.paths.paths.get("/api/contacts/{id}").unwrap();
        assert!(id_path.get.is_some());
        assert!(id_path.put.is_some());
        assert!(id_path.delete.is_some());
    }

    #[test]
    fn test_spec_metadata() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Contacts API");
        assert_eq!(spec.info.version, "1.0.0");
    }
}
