//! Equipment repository

use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment ordered by name
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create equipment
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (
                name, category, brand, model, serial_number, purchase_date,
                condition, notes, inspection_from, inspection_to,
                insurance_company, insurance_policy_number,
                insurance_oc, insurance_ac, insurance_assistance,
                insurance_from, insurance_to,
                lease_company, lease_from, lease_to
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19, $20
            )
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.category)
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(data.purchase_date)
        .bind(data.condition.unwrap_or_default())
        .bind(&data.notes)
        .bind(data.inspection_from)
        .bind(data.inspection_to)
        .bind(&data.insurance_company)
        .bind(&data.insurance_policy_number)
        .bind(data.insurance_oc.unwrap_or(false))
        .bind(data.insurance_ac.unwrap_or(false))
        .bind(data.insurance_assistance.unwrap_or(false))
        .bind(data.insurance_from)
        .bind(data.insurance_to)
        .bind(&data.lease_company)
        .bind(data.lease_from)
        .bind(data.lease_to)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Apply a partial update
    pub async fn update(&self, id: Uuid, data: &UpdateEquipment) -> AppResult<Equipment> {
        let mut query = update_query(id, data);
        query
            .build_query_as::<Equipment>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Equipment not found".to_string()))
    }

    /// Delete equipment; its assignments go with it (ON DELETE CASCADE)
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Equipment not found".to_string()));
        }
        Ok(())
    }
}

/// Build the UPDATE statement touching only the supplied fields
fn update_query(id: Uuid, data: &UpdateEquipment) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("UPDATE equipment SET updated_at = NOW()");

    macro_rules! set_field {
        ($field:expr, $column:literal) => {
            if let Some(value) = &$field {
                qb.push(concat!(", ", $column, " = ")).push_bind(value.clone());
            }
        };
    }

    set_field!(data.name, "name");
    set_field!(data.category, "category");
    set_field!(data.brand, "brand");
    set_field!(data.model, "model");
    set_field!(data.serial_number, "serial_number");
    set_field!(data.purchase_date, "purchase_date");
    set_field!(data.condition, "condition");
    set_field!(data.notes, "notes");
    set_field!(data.inspection_from, "inspection_from");
    set_field!(data.inspection_to, "inspection_to");
    set_field!(data.insurance_company, "insurance_company");
    set_field!(data.insurance_policy_number, "insurance_policy_number");
    set_field!(data.insurance_oc, "insurance_oc");
    set_field!(data.insurance_ac, "insurance_ac");
    set_field!(data.insurance_assistance, "insurance_assistance");
    set_field!(data.insurance_from, "insurance_from");
    set_field!(data.insurance_to, "insurance_to");
    set_field!(data.lease_company, "lease_company");
    set_field!(data.lease_from, "lease_from");
    set_field!(data.lease_to, "lease_to");

    qb.push(" WHERE id = ").push_bind(id).push(" RETURNING *");
    qb
}
