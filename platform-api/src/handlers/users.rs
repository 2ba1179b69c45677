use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

use crate::dtos::{
    LoginRequest, MessageResponse, RegisterRequest, UserListResponse, UserResponse,
};
use crate::startup::AppState;

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    state.accounts.register(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    state.accounts.login(req).await?;

    Ok(Json(MessageResponse::new("Login successful")))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id_user): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.accounts.delete(id_user).await?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id_user): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.directory.get_by_id(id_user).await?;

    Ok(Json(UserResponse {
        message: "User found successfully".to_string(),
        user,
    }))
}

#[axum::debug_handler]
pub async fn users_by_role(
    State(state): State<AppState>,
    Path(id_role): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let users = state.directory.get_by_role(id_role).await?;

    Ok(Json(UserListResponse {
        message: "Users found successfully".to_string(),
        users,
    }))
}

#[axum::debug_handler]
pub async fn all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = state.directory.get_all().await?;

    Ok(Json(UserListResponse {
        message: "Users found successfully".to_string(),
        users,
    }))
}
