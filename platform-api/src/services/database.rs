//! PostgreSQL account store.
//!
//! Thin query layer over the connection pool. Uniqueness of `email` and
//! `description` is enforced by the store's constraints; unique
//! violations surface as domain errors here, never via check-then-insert.

use sqlx::postgres::PgPool;

use crate::models::{Role, User, UserView};
use crate::services::ServiceError;

const USER_VIEW_COLUMNS: &str = "u.id, u.email, u.full_name, r.description AS role, \
     u.id_role, u.wallet_address";

/// PostgreSQL database wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database wrapper from a connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Health check - ping the database.
    pub async fn health_check(&self) -> Result<(), ServiceError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(ServiceError::Database)?;
        Ok(())
    }

    // ==================== Role Operations ====================

    /// Seed the canonical role set. Idempotent: running it twice leaves
    /// exactly one row per description.
    pub async fn seed_roles(&self, descriptions: &[&str]) -> Result<(), ServiceError> {
        for description in descriptions {
            sqlx::query("INSERT INTO roles (description) VALUES ($1) ON CONFLICT (description) DO NOTHING")
                .bind(description)
                .execute(&self.pool)
                .await
                .map_err(ServiceError::Database)?;
        }
        Ok(())
    }

    /// Find a role by its unique description.
    pub async fn find_role_by_description(
        &self,
        description: &str,
    ) -> Result<Option<Role>, ServiceError> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE description = $1")
            .bind(description)
            .fetch_optional(&self.pool)
            .await
            .map_err(ServiceError::Database)
    }

    // ==================== User Operations ====================

    /// Insert a new user. A unique violation on `email` is the losing
    /// side of a registration race and maps to `DuplicateAccount`.
    pub async fn insert_user(
        &self,
        email: &str,
        password_hash: &str,
        full_name: &str,
        id_role: i32,
        wallet_address: &str,
    ) -> Result<User, ServiceError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, full_name, id_role, wallet_address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, full_name, id_role, wallet_address, created_utc
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(full_name)
        .bind(id_role)
        .bind(wallet_address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                ServiceError::DuplicateAccount
            }
            _ => ServiceError::Database(e),
        })
    }

    /// Find a user by email. Exact, case-sensitive match.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(ServiceError::Database)
    }

    /// Find a user projection by id, with the role description resolved.
    pub async fn find_user_view_by_id(&self, id: i32) -> Result<Option<UserView>, ServiceError> {
        sqlx::query_as::<_, UserView>(&format!(
            "SELECT {USER_VIEW_COLUMNS} FROM users u JOIN roles r ON r.id = u.id_role WHERE u.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(ServiceError::Database)
    }

    /// All user projections for one role, id ascending.
    pub async fn find_user_views_by_role(
        &self,
        id_role: i32,
    ) -> Result<Vec<UserView>, ServiceError> {
        sqlx::query_as::<_, UserView>(&format!(
            "SELECT {USER_VIEW_COLUMNS} FROM users u JOIN roles r ON r.id = u.id_role \
             WHERE u.id_role = $1 ORDER BY u.id ASC"
        ))
        .bind(id_role)
        .fetch_all(&self.pool)
        .await
        .map_err(ServiceError::Database)
    }

    /// All user projections, id ascending.
    pub async fn all_user_views(&self) -> Result<Vec<UserView>, ServiceError> {
        sqlx::query_as::<_, UserView>(&format!(
            "SELECT {USER_VIEW_COLUMNS} FROM users u JOIN roles r ON r.id = u.id_role \
             ORDER BY u.id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(ServiceError::Database)
    }

    /// Delete a user by id. Returns whether a row was removed.
    pub async fn delete_user(&self, id: i32) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(ServiceError::Database)?;
        Ok(result.rows_affected() > 0)
    }
}
