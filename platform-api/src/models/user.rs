//! User model - account rows and their read-side projection.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// User entity as stored. The password is held only as an argon2 hash;
/// this struct is deliberately not `Serialize` so the hash can never
/// leak into a response body.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    /// Unique, matched exactly (case-sensitive).
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub id_role: i32,
    pub wallet_address: String,
    pub created_utc: DateTime<Utc>,
}

/// Read-only projection returned by directory queries: the stored role
/// reference resolved to its description, the password hash excluded.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserView {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    /// Resolved role description, e.g. "Producer".
    pub role: String,
    pub id_role: i32,
    pub wallet_address: String,
}
