//! User CRUD routes under /api/users.

use crate::handlers::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(state)
}
