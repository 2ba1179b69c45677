//! Role model - the fixed categories a user account belongs to.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// The canonical role set, seeded idempotently at bootstrap.
pub const CANONICAL_ROLES: [&str; 4] = ["Admin", "Auditor", "Producer", "Investor"];

/// Role entity. `description` is unique across all roles.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Role {
    pub id: i32,
    pub description: String,
    pub created_utc: DateTime<Utc>,
}
