//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assignments, equipment, health, time_entries, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Worksite API",
        version = "0.1.0",
        description = "Construction site equipment, staff assignment and time tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "Admin API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Users
        users::list_users,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Assignments
        assignments::list_equipment_assignments,
        assignments::create_equipment_assignment,
        assignments::return_equipment_assignment,
        assignments::list_manager_assignments,
        assignments::create_manager_assignment,
        assignments::deactivate_manager_assignment,
        // Time tracking
        time_entries::list_time_entries,
        time_entries::monthly_report,
        time_entries::create_time_entry,
        time_entries::update_time_entry,
        time_entries::delete_time_entry,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::enums::EquipmentCondition,
            // Users
            crate::models::system_user::SystemUser,
            crate::models::system_user::CreateSystemUser,
            crate::models::system_user::UpdateSystemUser,
            // Assignments
            crate::models::assignment::EquipmentAssignment,
            crate::models::assignment::CreateEquipmentAssignment,
            crate::models::assignment::ManagerAssignment,
            crate::models::assignment::CreateManagerAssignment,
            // Time tracking
            crate::models::time_entry::TimeEntry,
            crate::models::time_entry::CreateTimeEntry,
            crate::models::time_entry::UpdateTimeEntry,
            crate::models::time_entry::EmployeeMonthlySummary,
            crate::models::enums::AbsenceType,
            // Common
            health::HealthResponse,
            super::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment inventory"),
        (name = "users", description = "System user management"),
        (name = "assignments", description = "Equipment and manager project assignments"),
        (name = "time-entries", description = "Employee time tracking")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
