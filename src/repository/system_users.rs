//! System users repository

use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::system_user::{CreateSystemUser, SystemUser, UpdateSystemUser, DEFAULT_ROLE},
};

#[derive(Clone)]
pub struct SystemUsersRepository {
    pool: Pool<Postgres>,
}

impl SystemUsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all users ordered by creation time
    pub async fn list(&self) -> AppResult<Vec<SystemUser>> {
        let rows = sqlx::query_as::<_, SystemUser>("SELECT * FROM system_users ORDER BY created_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a user with an already hashed password
    pub async fn create(&self, data: &CreateSystemUser, password_hash: &str) -> AppResult<SystemUser> {
        let row = sqlx::query_as::<_, SystemUser>(
            r#"
            INSERT INTO system_users (username, password_hash, role, permissions, is_active)
            VALUES ($1, $2, $3, COALESCE($4, '{}'::jsonb), $5)
            RETURNING *
            "#,
        )
        .bind(&data.username)
        .bind(password_hash)
        .bind(data.role.as_deref().unwrap_or(DEFAULT_ROLE))
        .bind(&data.permissions)
        .bind(data.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Apply a partial update. `password_hash` replaces the stored hash only when given.
    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateSystemUser,
        password_hash: Option<String>,
    ) -> AppResult<SystemUser> {
        let mut query = update_query(id, data, password_hash);
        query
            .build_query_as::<SystemUser>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Delete a user
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM system_users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}

fn update_query(
    id: Uuid,
    data: &UpdateSystemUser,
    password_hash: Option<String>,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("UPDATE system_users SET updated_at = NOW()");

    macro_rules! set_field {
        ($field:expr, $column:literal) => {
            if let Some(value) = &$field {
                qb.push(concat!(", ", $column, " = ")).push_bind(value.clone());
            }
        };
    }

    set_field!(data.username, "username");
    set_field!(password_hash, "password_hash");
    set_field!(data.role, "role");
    set_field!(data.permissions, "permissions");
    set_field!(data.is_active, "is_active");

    qb.push(" WHERE id = ").push_bind(id).push(" RETURNING *");
    qb
}
