//! Time tracking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::time_entry::{
        CreateTimeEntry, EmployeeMonthlySummary, TimeEntry, TimeEntryQuery, TimeReportQuery,
        UpdateTimeEntry,
    },
};

use super::{
    extract::{ApiJson, ApiQuery},
    parse_id, MessageResponse,
};

const NOT_FOUND: &str = "Time entry not found";

/// List time entries ordered by work date then employee name
#[utoipa::path(
    get,
    path = "/time-entries",
    tag = "time-entries",
    params(TimeEntryQuery),
    responses(
        (status = 200, description = "Time entries", body = Vec<TimeEntry>)
    )
)]
pub async fn list_time_entries(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<TimeEntryQuery>,
) -> AppResult<Json<Vec<TimeEntry>>> {
    let entries = state.services.time_entries.list(query.project_id.as_deref()).await?;
    Ok(Json(entries))
}

/// Monthly per-employee totals
#[utoipa::path(
    get,
    path = "/time-entries/report",
    tag = "time-entries",
    params(TimeReportQuery),
    responses(
        (status = 200, description = "Monthly summaries ordered by employee name", body = Vec<EmployeeMonthlySummary>),
        (status = 400, description = "Invalid month", body = crate::error::ErrorResponse)
    )
)]
pub async fn monthly_report(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<TimeReportQuery>,
) -> AppResult<Json<Vec<EmployeeMonthlySummary>>> {
    let report = state.services.time_entries.monthly_report(&query).await?;
    Ok(Json(report))
}

/// Record a time entry
#[utoipa::path(
    post,
    path = "/time-entries",
    tag = "time-entries",
    request_body = CreateTimeEntry,
    responses(
        (status = 201, description = "Time entry created", body = TimeEntry),
        (status = 400, description = "Invalid time of day", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_time_entry(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateTimeEntry>,
) -> AppResult<(StatusCode, Json<TimeEntry>)> {
    let entry = state.services.time_entries.create(&data).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Update a time entry
#[utoipa::path(
    put,
    path = "/time-entries/{id}",
    tag = "time-entries",
    params(("id" = String, Path, description = "Time entry ID (UUID)")),
    request_body = UpdateTimeEntry,
    responses(
        (status = 200, description = "Time entry updated", body = TimeEntry),
        (status = 404, description = "Time entry not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_time_entry(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    ApiJson(data): ApiJson<UpdateTimeEntry>,
) -> AppResult<Json<TimeEntry>> {
    let id = parse_id(&id, NOT_FOUND)?;
    let entry = state.services.time_entries.update(id, &data).await?;
    Ok(Json(entry))
}

/// Delete a time entry
#[utoipa::path(
    delete,
    path = "/time-entries/{id}",
    tag = "time-entries",
    params(("id" = String, Path, description = "Time entry ID (UUID)")),
    responses(
        (status = 200, description = "Time entry deleted", body = MessageResponse),
        (status = 404, description = "Time entry not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_time_entry(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, NOT_FOUND)?;
    state.services.time_entries.delete(id).await?;
    Ok(Json(MessageResponse::new("Time entry deleted successfully")))
}

/// `report` is not an entry id; PUT or DELETE on it is a miss like any other non-UUID id
pub async fn report_is_not_an_entry() -> AppError {
    AppError::NotFound(NOT_FOUND.to_string())
}
