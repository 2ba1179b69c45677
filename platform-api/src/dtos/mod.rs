//! Request and response bodies for the HTTP surface.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::UserView;
use crate::utils::Password;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Password,
    #[validate(length(min = 1, message = "Full name must not be empty"))]
    pub full_name: String,
    pub id_role: i32,
    pub wallet_address: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: Password,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub message: String,
    pub user: UserView,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub message: String,
    pub users: Vec<UserView>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub links: Vec<String>,
}
