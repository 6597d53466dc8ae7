//! Worksite Server
//!
//! REST JSON backend for a construction company's admin tools: equipment
//! inventory, system users, equipment and manager project assignments,
//! and employee time tracking.

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
