//! User CRUD handlers: list, read, create, replace, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{JsonBody, UserId};
use crate::model::{NewUser, User};
use crate::response::{self, MessageBody};
use crate::state::AppState;
use axum::{extract::State, response::Response, Json};

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "Every stored user", body = [User]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.store.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.store.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = NewUser,
    responses(
        (status = 201, description = "Created; 200 under the legacy status profile", body = User),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 413, description = "Body over the size limit", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewUser>,
) -> Result<Response, AppError> {
    let user = state.store.create(body).await?;
    tracing::info!(id = user.id, "user created");
    Ok(response::created(state.status_profile, user))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = NewUser,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Malformed body or id", body = ErrorBody),
        (status = 413, description = "Body over the size limit", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(body): JsonBody<NewUser>,
) -> Result<Json<User>, AppError> {
    let user = state.store.replace(id, body).await?;
    tracing::info!(id, "user replaced");
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 200, description = "Deleted, legacy status profile", body = MessageBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Response, AppError> {
    state.store.delete(id).await?;
    tracing::info!(id, "user deleted");
    Ok(response::deleted(state.status_profile))
}
