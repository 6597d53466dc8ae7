//! ApiClient tests against a mocked server

use serde_json::json;
use uuid::Uuid;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use worksite_server::{
    client::{ApiClient, ClientError},
    models::{
        equipment::UpdateEquipment,
        system_user::CreateSystemUser,
        EquipmentCondition,
    },
};

fn equipment_json(id: Uuid) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Drill",
        "category": "Tools",
        "serialNumber": "SN-1",
        "condition": "fair",
        "createdAt": "2024-03-01T08:00:00Z",
        "updatedAt": "2024-03-02T08:00:00Z",
        "insuranceOc": false
    })
}

#[tokio::test]
async fn test_list_equipment() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/api/equipment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([equipment_json(id)])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let equipment = client.list_equipment().await.unwrap();

    assert_eq!(equipment.len(), 1);
    assert_eq!(equipment[0].id, id);
    assert_eq!(equipment[0].condition, EquipmentCondition::Fair);
    assert_eq!(equipment[0].serial_number.as_deref(), Some("SN-1"));
    assert_eq!(equipment[0].brand, None);
}

#[tokio::test]
async fn test_update_sends_only_given_fields() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("PUT"))
        .and(path(format!("/api/equipment/{}", id)))
        .and(body_json(json!({ "condition": "fair", "notes": null })))
        .respond_with(ResponseTemplate::new(200).set_body_json(equipment_json(id)))
        .expect(1)
        .mount(&server)
        .await;

    let update = UpdateEquipment {
        condition: Some(EquipmentCondition::Fair),
        notes: Some(None),
        ..Default::default()
    };

    let client = ApiClient::new(server.uri());
    let updated = client.update_equipment(id, &update).await.unwrap();
    assert_eq!(updated.name, "Drill");
}

#[tokio::test]
async fn test_not_found_is_decoded() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/users/{}", id)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "User not found" })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    match client.delete_user(id).await {
        Err(ClientError::NotFound(message)) => assert_eq!(message, "User not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_validation_error_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "password: Password is required" })),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let request = CreateSystemUser {
        username: "jan".to_string(),
        password: String::new(),
        role: None,
        permissions: None,
        is_active: None,
    };

    match client.create_user(&request).await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status.as_u16(), 400);
            assert!(message.contains("Password is required"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_user_response_has_no_hash() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": Uuid::new_v4(),
            "username": "jan",
            "role": "employee",
            "permissions": {},
            "isActive": true
        }])))
        .mount(&server)
        .await;

    let users = ApiClient::new(server.uri()).list_users().await.unwrap();
    assert_eq!(users[0].username, "jan");
    assert!(users[0].password_hash.is_empty());
}

#[tokio::test]
async fn test_time_entries_filter_and_report_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/time-entries"))
        .and(query_param("projectId", "P-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/time-entries/report"))
        .and(query_param("month", "2024-03"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "employeeId": "e-1",
            "employeeName": "Jan",
            "workedHours": 7.5,
            "workDays": 1,
            "vacationDays": 0,
            "sickLeaveDays": 1,
            "unpaidLeaveDays": 0,
            "absenceDays": 0
        }])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    assert!(client.list_time_entries(Some("P-7")).await.unwrap().is_empty());

    let report = client.time_report("2024-03", None).await.unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].worked_hours, 7.5);
    assert_eq!(report[0].sick_leave_days, 1);
}

#[tokio::test]
async fn test_return_conflict() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(format!("/api/equipment-assignments/{}/return", id)))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "error": "Equipment assignment already returned" })),
        )
        .mount(&server)
        .await;

    let result = ApiClient::new(server.uri()).return_equipment_assignment(id).await;
    assert!(matches!(result, Err(ClientError::Api { status, .. }) if status.as_u16() == 409));
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "OK" })))
        .mount(&server)
        .await;

    let health = ApiClient::new(server.uri()).health().await.unwrap();
    assert_eq!(health.status, "OK");
}
