//! Repository layer for database operations

pub mod assignments;
pub mod equipment;
pub mod system_users;
pub mod time_entries;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub equipment: equipment::EquipmentRepository,
    pub users: system_users::SystemUsersRepository,
    pub assignments: assignments::AssignmentsRepository,
    pub time_entries: time_entries::TimeEntriesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            users: system_users::SystemUsersRepository::new(pool.clone()),
            assignments: assignments::AssignmentsRepository::new(pool.clone()),
            time_entries: time_entries::TimeEntriesRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round trip to the database
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
