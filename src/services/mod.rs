//! Business logic services

pub mod assignments;
pub mod equipment;
pub mod time_entries;
pub mod users;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub users: users::UsersService,
    pub assignments: assignments::AssignmentsService,
    pub time_entries: time_entries::TimeEntriesService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            assignments: assignments::AssignmentsService::new(repository.clone()),
            time_entries: time_entries::TimeEntriesService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn check_database(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
