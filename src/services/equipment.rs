//! Equipment service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list().await
    }

    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let equipment = self.repository.equipment.create(data).await?;
        tracing::info!(id = %equipment.id, name = %equipment.name, "Equipment created");
        Ok(equipment)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateEquipment) -> AppResult<Equipment> {
        self.repository.equipment.update(id, data).await
    }

    /// Delete equipment together with its project assignments
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.equipment.delete(id).await?;
        tracing::info!(%id, "Equipment deleted");
        Ok(())
    }
}
