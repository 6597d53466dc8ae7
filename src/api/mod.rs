//! API handlers for Worksite REST endpoints

pub mod assignments;
pub mod equipment;
pub mod extract;
pub mod health;
pub mod openapi;
pub mod time_entries;
pub mod users;

use axum::{
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Confirmation body returned by delete endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Parse a path identifier. Anything that is not a UUID cannot name a row,
/// so it is reported as not found.
pub(crate) fn parse_id(raw: &str, not_found: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(not_found.to_string()))
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment
        .route(
            "/equipment",
            get(equipment::list_equipment).post(equipment::create_equipment),
        )
        .route(
            "/equipment/:id",
            put(equipment::update_equipment).delete(equipment::delete_equipment),
        )
        // System users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", put(users::update_user).delete(users::delete_user))
        // Assignments
        .route(
            "/equipment-assignments",
            get(assignments::list_equipment_assignments).post(assignments::create_equipment_assignment),
        )
        .route(
            "/equipment-assignments/:id/return",
            post(assignments::return_equipment_assignment),
        )
        .route(
            "/manager-assignments",
            get(assignments::list_manager_assignments).post(assignments::create_manager_assignment),
        )
        .route(
            "/manager-assignments/:id/deactivate",
            post(assignments::deactivate_manager_assignment),
        )
        // Time tracking
        .route(
            "/time-entries",
            get(time_entries::list_time_entries).post(time_entries::create_time_entry),
        )
        .route(
            "/time-entries/report",
            get(time_entries::monthly_report)
                .put(time_entries::report_is_not_an_entry)
                .delete(time_entries::report_is_not_an_entry),
        )
        .route(
            "/time-entries/:id",
            put(time_entries::update_time_entry).delete(time_entries::delete_time_entry),
        )
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "x").unwrap(), id);
        assert!(matches!(
            parse_id("42", "Equipment not found"),
            Err(AppError::NotFound(msg)) if msg == "Equipment not found"
        ));
    }
}
