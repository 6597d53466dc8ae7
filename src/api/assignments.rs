//! Equipment and manager project assignment endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::assignment::{
        CreateEquipmentAssignment, CreateManagerAssignment, EquipmentAssignment, ManagerAssignment,
    },
};

use super::{extract::ApiJson, parse_id};

/// List equipment assignments
#[utoipa::path(
    get,
    path = "/equipment-assignments",
    tag = "assignments",
    responses(
        (status = 200, description = "Equipment assignments", body = Vec<EquipmentAssignment>)
    )
)]
pub async fn list_equipment_assignments(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<EquipmentAssignment>>> {
    let assignments = state.services.assignments.list_equipment().await?;
    Ok(Json(assignments))
}

/// Assign equipment to a project
#[utoipa::path(
    post,
    path = "/equipment-assignments",
    tag = "assignments",
    request_body = CreateEquipmentAssignment,
    responses(
        (status = 201, description = "Assignment created", body = EquipmentAssignment)
    )
)]
pub async fn create_equipment_assignment(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateEquipmentAssignment>,
) -> AppResult<(StatusCode, Json<EquipmentAssignment>)> {
    let assignment = state.services.assignments.assign_equipment(&data).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// Mark an equipment assignment as returned
#[utoipa::path(
    post,
    path = "/equipment-assignments/{id}/return",
    tag = "assignments",
    params(("id" = String, Path, description = "Assignment ID (UUID)")),
    responses(
        (status = 200, description = "Assignment closed", body = EquipmentAssignment),
        (status = 404, description = "Assignment not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Assignment already returned", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_equipment_assignment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<EquipmentAssignment>> {
    let id = parse_id(&id, "Equipment assignment not found")?;
    let assignment = state.services.assignments.return_equipment(id).await?;
    Ok(Json(assignment))
}

/// List manager assignments
#[utoipa::path(
    get,
    path = "/manager-assignments",
    tag = "assignments",
    responses(
        (status = 200, description = "Manager assignments", body = Vec<ManagerAssignment>)
    )
)]
pub async fn list_manager_assignments(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ManagerAssignment>>> {
    let assignments = state.services.assignments.list_managers().await?;
    Ok(Json(assignments))
}

/// Assign a manager to a project
#[utoipa::path(
    post,
    path = "/manager-assignments",
    tag = "assignments",
    request_body = CreateManagerAssignment,
    responses(
        (status = 201, description = "Assignment created", body = ManagerAssignment)
    )
)]
pub async fn create_manager_assignment(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateManagerAssignment>,
) -> AppResult<(StatusCode, Json<ManagerAssignment>)> {
    let assignment = state.services.assignments.assign_manager(&data).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// Deactivate a manager assignment
#[utoipa::path(
    post,
    path = "/manager-assignments/{id}/deactivate",
    tag = "assignments",
    params(("id" = String, Path, description = "Assignment ID (UUID)")),
    responses(
        (status = 200, description = "Assignment deactivated", body = ManagerAssignment),
        (status = 404, description = "Assignment not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Assignment already inactive", body = crate::error::ErrorResponse)
    )
)]
pub async fn deactivate_manager_assignment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ManagerAssignment>> {
    let id = parse_id(&id, "Manager assignment not found")?;
    let assignment = state.services.assignments.deactivate_manager(id).await?;
    Ok(Json(assignment))
}
