//! Equipment and manager project assignments repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::assignment::{
        CreateEquipmentAssignment, CreateManagerAssignment, EquipmentAssignment, ManagerAssignment,
    },
};

#[derive(Clone)]
pub struct AssignmentsRepository {
    pool: Pool<Postgres>,
}

impl AssignmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // -----------------------------------------------------------------------
    // Equipment assignments
    // -----------------------------------------------------------------------

    pub async fn list_equipment(&self) -> AppResult<Vec<EquipmentAssignment>> {
        let rows = sqlx::query_as::<_, EquipmentAssignment>(
            "SELECT * FROM equipment_project_assignments ORDER BY assigned_date",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create_equipment(&self, data: &CreateEquipmentAssignment) -> AppResult<EquipmentAssignment> {
        let row = sqlx::query_as::<_, EquipmentAssignment>(
            r#"
            INSERT INTO equipment_project_assignments
                (equipment_id, project_id, assigned_date, returned_date, is_active, notes)
            VALUES ($1, $2, COALESCE($3, NOW()), $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.equipment_id)
        .bind(&data.project_id)
        .bind(data.assigned_date)
        .bind(data.returned_date)
        .bind(data.is_active.unwrap_or(true))
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Close an active equipment assignment
    pub async fn return_equipment(&self, id: Uuid) -> AppResult<EquipmentAssignment> {
        let row = sqlx::query_as::<_, EquipmentAssignment>(
            r#"
            UPDATE equipment_project_assignments
            SET is_active = FALSE, returned_date = NOW()
            WHERE id = $1 AND is_active
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(row),
            None => {
                let exists: bool = sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM equipment_project_assignments WHERE id = $1)",
                )
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
                Err(if exists {
                    AppError::Conflict("Equipment assignment already returned".to_string())
                } else {
                    AppError::NotFound("Equipment assignment not found".to_string())
                })
            }
        }
    }

    // -----------------------------------------------------------------------
    // Manager assignments
    // -----------------------------------------------------------------------

    pub async fn list_managers(&self) -> AppResult<Vec<ManagerAssignment>> {
        let rows = sqlx::query_as::<_, ManagerAssignment>(
            "SELECT * FROM manager_project_assignments ORDER BY assigned_date",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create_manager(&self, data: &CreateManagerAssignment) -> AppResult<ManagerAssignment> {
        let row = sqlx::query_as::<_, ManagerAssignment>(
            r#"
            INSERT INTO manager_project_assignments (manager_id, project_id, assigned_date, is_active)
            VALUES ($1, $2, COALESCE($3, NOW()), $4)
            RETURNING *
            "#,
        )
        .bind(&data.manager_id)
        .bind(&data.project_id)
        .bind(data.assigned_date)
        .bind(data.is_active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Mark an active manager assignment inactive
    pub async fn deactivate_manager(&self, id: Uuid) -> AppResult<ManagerAssignment> {
        let row = sqlx::query_as::<_, ManagerAssignment>(
            r#"
            UPDATE manager_project_assignments
            SET is_active = FALSE
            WHERE id = $1 AND is_active
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(row),
            None => {
                let exists: bool = sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM manager_project_assignments WHERE id = $1)",
                )
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
                Err(if exists {
                    AppError::Conflict("Manager assignment already inactive".to_string())
                } else {
                    AppError::NotFound("Manager assignment not found".to_string())
                })
            }
        }
    }
}
