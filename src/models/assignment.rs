//! Equipment and manager project assignment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Loan of a piece of equipment to a project, current or historical
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentAssignment {
    pub id: Uuid,
    pub equipment_id: Uuid,
    /// Free-text project identifier
    pub project_id: String,
    pub assigned_date: DateTime<Utc>,
    pub returned_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub notes: Option<String>,
}

/// Create equipment assignment request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipmentAssignment {
    pub equipment_id: Uuid,
    pub project_id: String,
    /// Defaults to now
    pub assigned_date: Option<DateTime<Utc>>,
    pub returned_date: Option<DateTime<Utc>>,
    /// Defaults to true
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}

/// Manager responsible for a project
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagerAssignment {
    pub id: Uuid,
    /// Free-text manager identifier
    pub manager_id: String,
    pub project_id: String,
    pub assigned_date: DateTime<Utc>,
    pub is_active: bool,
}

/// Create manager assignment request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateManagerAssignment {
    pub manager_id: String,
    pub project_id: String,
    pub assigned_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}
