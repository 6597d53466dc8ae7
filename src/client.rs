//! Typed HTTP client for the Worksite API
//!
//! Thin wrapper around `reqwest` used by admin tooling and integration
//! tests. Every endpoint of the server has one async method; error bodies
//! of the form `{"error": "..."}` are decoded into [`ClientError`].

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    api::{health::HealthResponse, MessageResponse},
    error::ErrorResponse,
    models::{
        assignment::{
            CreateEquipmentAssignment, CreateManagerAssignment, EquipmentAssignment,
            ManagerAssignment,
        },
        equipment::{CreateEquipment, Equipment, UpdateEquipment},
        system_user::{CreateSystemUser, SystemUser, UpdateSystemUser},
        time_entry::{CreateTimeEntry, EmployeeMonthlySummary, TimeEntry, UpdateTimeEntry},
    },
};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}/api{}", self.base_url, path))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or(body);

        tracing::debug!("API call failed with {}: {}", status, message);

        if status == StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(message))
        } else {
            Err(ClientError::Api { status, message })
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ClientResult<T> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ClientResult<T> {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    async fn delete(&self, path: &str) -> ClientResult<MessageResponse> {
        self.send(self.request(Method::DELETE, path)).await
    }

    // Health

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.get("/health").await
    }

    // Equipment

    pub async fn list_equipment(&self) -> ClientResult<Vec<Equipment>> {
        self.get("/equipment").await
    }

    pub async fn create_equipment(&self, data: &CreateEquipment) -> ClientResult<Equipment> {
        self.post("/equipment", data).await
    }

    pub async fn update_equipment(&self, id: Uuid, data: &UpdateEquipment) -> ClientResult<Equipment> {
        self.put(&format!("/equipment/{}", id), data).await
    }

    pub async fn delete_equipment(&self, id: Uuid) -> ClientResult<MessageResponse> {
        self.delete(&format!("/equipment/{}", id)).await
    }

    // Users

    pub async fn list_users(&self) -> ClientResult<Vec<SystemUser>> {
        self.get("/users").await
    }

    pub async fn create_user(&self, data: &CreateSystemUser) -> ClientResult<SystemUser> {
        self.post("/users", data).await
    }

    pub async fn update_user(&self, id: Uuid, data: &UpdateSystemUser) -> ClientResult<SystemUser> {
        self.put(&format!("/users/{}", id), data).await
    }

    pub async fn delete_user(&self, id: Uuid) -> ClientResult<MessageResponse> {
        self.delete(&format!("/users/{}", id)).await
    }

    // Assignments

    pub async fn list_equipment_assignments(&self) -> ClientResult<Vec<EquipmentAssignment>> {
        self.get("/equipment-assignments").await
    }

    pub async fn create_equipment_assignment(
        &self,
        data: &CreateEquipmentAssignment,
    ) -> ClientResult<EquipmentAssignment> {
        self.post("/equipment-assignments", data).await
    }

    pub async fn return_equipment_assignment(&self, id: Uuid) -> ClientResult<EquipmentAssignment> {
        self.send(self.request(Method::POST, &format!("/equipment-assignments/{}/return", id)))
            .await
    }

    pub async fn list_manager_assignments(&self) -> ClientResult<Vec<ManagerAssignment>> {
        self.get("/manager-assignments").await
    }

    pub async fn create_manager_assignment(
        &self,
        data: &CreateManagerAssignment,
    ) -> ClientResult<ManagerAssignment> {
        self.post("/manager-assignments", data).await
    }

    pub async fn deactivate_manager_assignment(&self, id: Uuid) -> ClientResult<ManagerAssignment> {
        self.send(self.request(Method::POST, &format!("/manager-assignments/{}/deactivate", id)))
            .await
    }

    // Time tracking

    pub async fn list_time_entries(&self, project_id: Option<&str>) -> ClientResult<Vec<TimeEntry>> {
        let mut request = self.request(Method::GET, "/time-entries");
        if let Some(project_id) = project_id {
            request = request.query(&[("projectId", project_id)]);
        }
        self.send(request).await
    }

    pub async fn create_time_entry(&self, data: &CreateTimeEntry) -> ClientResult<TimeEntry> {
        self.post("/time-entries", data).await
    }

    pub async fn update_time_entry(&self, id: Uuid, data: &UpdateTimeEntry) -> ClientResult<TimeEntry> {
        self.put(&format!("/time-entries/{}", id), data).await
    }

    pub async fn delete_time_entry(&self, id: Uuid) -> ClientResult<MessageResponse> {
        self.delete(&format!("/time-entries/{}", id)).await
    }

    /// Monthly per-employee totals; `month` is `YYYY-MM`.
    pub async fn time_report(
        &self,
        month: &str,
        project_id: Option<&str>,
    ) -> ClientResult<Vec<EmployeeMonthlySummary>> {
        let mut query = vec![("month", month)];
        if let Some(project_id) = project_id {
            query.push(("projectId", project_id));
        }
        self.send(self.request(Method::GET, "/time-entries/report").query(&query))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:3001//");
        assert_eq!(client.base_url(), "http://localhost:3001");
    }
}
