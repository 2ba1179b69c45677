//! Credential service: registration, login, deletion.

use crate::dtos::{LoginRequest, RegisterRequest};
use crate::services::{Database, ServiceError};
use crate::utils::{hash_password, verify_password, PasswordHashString};

#[derive(Clone)]
pub struct AccountService {
    db: Database,
}

impl AccountService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Register a new account.
    ///
    /// The plaintext password lives only long enough to be hashed. There
    /// is no email pre-check: the store's unique constraint is the
    /// authoritative tie-breaker, so two concurrent registrations with
    /// the same email resolve to exactly one winner.
    pub async fn register(&self, req: RegisterRequest) -> Result<(), ServiceError> {
        let password_hash = hash_password(&req.password)
            .map_err(|e| ServiceError::Internal(anyhow::anyhow!("Password hashing error: {}", e)))?;

        let user = self
            .db
            .insert_user(
                &req.email,
                password_hash.as_str(),
                &req.full_name,
                req.id_role,
                &req.wallet_address,
            )
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(())
    }

    /// Verify credentials. Returns a bare success signal: no session or
    /// token artifact is issued upstream of this service.
    ///
    /// A missing user and a failed verification are indistinguishable to
    /// the caller.
    pub async fn login(&self, req: LoginRequest) -> Result<(), ServiceError> {
        let user = self
            .db
            .find_user_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        verify_password(
            &req.password,
            &PasswordHashString::new(user.password_hash.clone()),
        )
        .map_err(|_| ServiceError::InvalidCredentials)?;

        tracing::info!(user_id = user.id, "User logged in");
        Ok(())
    }

    /// Delete an account. Idempotent in effect, not in outcome: the
    /// second call on the same id reports `NotFound`.
    pub async fn delete(&self, user_id: i32) -> Result<(), ServiceError> {
        if self.db.delete_user(user_id).await? {
            tracing::info!(user_id, "User deleted");
            Ok(())
        } else {
            Err(ServiceError::NotFound)
        }
    }
}
