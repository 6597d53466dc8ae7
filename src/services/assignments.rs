//! Project assignment service (equipment and managers)

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::assignment::{
        CreateEquipmentAssignment, CreateManagerAssignment, EquipmentAssignment, ManagerAssignment,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AssignmentsService {
    repository: Repository,
}

impl AssignmentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_equipment(&self) -> AppResult<Vec<EquipmentAssignment>> {
        self.repository.assignments.list_equipment().await
    }

    /// Assign equipment to a project. Overlapping active assignments are allowed.
    pub async fn assign_equipment(&self, data: &CreateEquipmentAssignment) -> AppResult<EquipmentAssignment> {
        let assignment = self.repository.assignments.create_equipment(data).await?;
        tracing::info!(
            id = %assignment.id,
            equipment_id = %assignment.equipment_id,
            project_id = %assignment.project_id,
            "Equipment assigned to project"
        );
        Ok(assignment)
    }

    /// Bring equipment back from its project
    pub async fn return_equipment(&self, id: Uuid) -> AppResult<EquipmentAssignment> {
        let assignment = self.repository.assignments.return_equipment(id).await?;
        tracing::info!(%id, "Equipment assignment returned");
        Ok(assignment)
    }

    pub async fn list_managers(&self) -> AppResult<Vec<ManagerAssignment>> {
        self.repository.assignments.list_managers().await
    }

    pub async fn assign_manager(&self, data: &CreateManagerAssignment) -> AppResult<ManagerAssignment> {
        let assignment = self.repository.assignments.create_manager(data).await?;
        tracing::info!(
            id = %assignment.id,
            manager_id = %assignment.manager_id,
            project_id = %assignment.project_id,
            "Manager assigned to project"
        );
        Ok(assignment)
    }

    pub async fn deactivate_manager(&self, id: Uuid) -> AppResult<ManagerAssignment> {
        let assignment = self.repository.assignments.deactivate_manager(id).await?;
        tracing::info!(%id, "Manager assignment deactivated");
        Ok(assignment)
    }
}
