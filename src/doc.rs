//! OpenAPI documentation for the user API.
//!
//! Registers the five user handlers and the schemas they exchange. The document
//! is served as JSON at `/api-docs/openapi.json` and rendered by Swagger UI under
//! `/docs` when docs are enabled.

use crate::error::ErrorBody;
use crate::model::{NewUser, User};
use crate::response::MessageBody;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "CRUD over a single user record type."
    ),
    paths(
        crate::handlers::users::list_users,
        crate::handlers::users::get_user,
        crate::handlers::users::create_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
    ),
    components(schemas(User, NewUser, ErrorBody, MessageBody)),
    tags((name = "users", description = "User management"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_user_route() {
        let doc = ApiDoc::openapi();
        let collection = doc.paths.paths.get("/api/users").expect("collection path");
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());
        let item = doc.paths.paths.get("/api/users/{id}").expect("item path");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }

    #[test]
    fn registers_entity_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;
        for name in ["User", "NewUser", "ErrorBody", "MessageBody"] {
            assert!(schemas.contains_key(name), "missing schema {}", name);
        }
    }
}
