//! System user management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::system_user::{CreateSystemUser, SystemUser, UpdateSystemUser},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all users (password hashes are never serialized)
    pub async fn list(&self) -> AppResult<Vec<SystemUser>> {
        self.repository.users.list().await
    }

    /// Create a user, storing only the hash of the supplied password
    pub async fn create(&self, data: &CreateSystemUser) -> AppResult<SystemUser> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let password_hash = hash_password(&data.password)?;
        let user = self.repository.users.create(data, &password_hash).await?;
        tracing::info!(id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Update a user; the stored hash changes only when a new password is supplied
    pub async fn update(&self, id: Uuid, data: &UpdateSystemUser) -> AppResult<SystemUser> {
        let password_hash = data.new_password().map(hash_password).transpose()?;
        self.repository.users.update(id, data, password_hash).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.users.delete(id).await?;
        tracing::info!(%id, "User deleted");
        Ok(())
    }
}

/// Work factor for stored password hashes
pub const BCRYPT_COST: u32 = 10;

/// Hash a password with bcrypt
pub fn hash_password(password: &str) -> AppResult<String> {
    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}
