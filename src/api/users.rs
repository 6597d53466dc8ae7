//! System user management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::system_user::{CreateSystemUser, SystemUser, UpdateSystemUser},
};

use super::{extract::ApiJson, parse_id, MessageResponse};

const NOT_FOUND: &str = "User not found";

/// List users ordered by creation time
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users, password hashes redacted", body = Vec<SystemUser>)
    )
)]
pub async fn list_users(State(state): State<crate::AppState>) -> AppResult<Json<Vec<SystemUser>>> {
    let users = state.services.users.list().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateSystemUser,
    responses(
        (status = 201, description = "User created", body = SystemUser),
        (status = 400, description = "Missing username or password", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateSystemUser>,
) -> AppResult<(StatusCode, Json<SystemUser>)> {
    let created = state.services.users.create(&data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID (UUID)")),
    request_body = UpdateSystemUser,
    responses(
        (status = 200, description = "User updated", body = SystemUser),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    ApiJson(data): ApiJson<UpdateSystemUser>,
) -> AppResult<Json<SystemUser>> {
    let id = parse_id(&id, NOT_FOUND)?;
    let updated = state.services.users.update(id, &data).await?;
    Ok(Json(updated))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID (UUID)")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, NOT_FOUND)?;
    state.services.users.delete(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
