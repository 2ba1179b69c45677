//! Directory service: read-side account queries.
//!
//! Results are ordered by id ascending, which is fixed for test
//! stability only; callers must not rely on any other ordering.

use crate::models::UserView;
use crate::services::{Database, ServiceError};

#[derive(Clone)]
pub struct DirectoryService {
    db: Database,
}

impl DirectoryService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<UserView, ServiceError> {
        self.db
            .find_user_view_by_id(user_id)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// Users holding the given role. Zero matches are an `EmptyResult`
    /// error, not an empty list (upstream contract, preserved as-is).
    pub async fn get_by_role(&self, id_role: i32) -> Result<Vec<UserView>, ServiceError> {
        let users = self.db.find_user_views_by_role(id_role).await?;
        if users.is_empty() {
            return Err(ServiceError::EmptyResult);
        }
        Ok(users)
    }

    /// All users. Same empty-is-error policy as `get_by_role`.
    pub async fn get_all(&self) -> Result<Vec<UserView>, ServiceError> {
        let users = self.db.all_user_views().await?;
        if users.is_empty() {
            return Err(ServiceError::EmptyResult);
        }
        Ok(users)
    }
}
