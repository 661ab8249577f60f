//! Integration tests for customer CRUD.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use helpers::TestApp;
use orderhub_database::CustomerStore;

fn new_customer(email: &str) -> serde_json::Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": email,
        "phoneNumber": "+44 20 7946 0958",
    })
}

#[tokio::test]
async fn test_create_and_get_customer() {
    let app = TestApp::new();
    let token = app.login().await;

    let created = app
        .request(
            "POST",
            "/api/customers",
            Some(new_customer("ada@example.com")),
            Some(&token),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_str().expect("id").to_string();
    assert_eq!(
        created.headers["location"].to_str().unwrap(),
        format!("/api/customers/{id}")
    );
    assert_eq!(created.body["firstName"], "Ada");
    assert_eq!(created.body["phoneNumber"], "+44 20 7946 0958");

    let fetched = app
        .request("GET", &format!("/api/customers/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);

    // Audit columns record the caller.
    let stored = app
        .db
        .customers()
        .find_by_id(id.parse().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.created_by.as_deref(), Some(helpers::TEST_EMAIL));
    assert!(stored.customer_number.starts_with("CUST-"));
}

#[tokio::test]
async fn test_list_customers_excludes_deleted() {
    let app = TestApp::new();
    let token = app.login().await;
    let keep = app.seed_customer("Grace", "Hopper", "grace@example.com").await;
    let gone = app.seed_customer("Alan", "Turing", "alan@example.com").await;

    let deleted = app
        .request("DELETE", &format!("/api/customers/{}", gone.id), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let list = app.request("GET", "/api/customers", None, Some(&token)).await;
    assert_eq!(list.status, StatusCode::OK);
    let items = list.body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], keep.id.to_string());
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/customers",
            Some(json!({
                "firstName": "",
                "lastName": "L".repeat(101),
                "email": "nope",
                "phoneNumber": "abc",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let errors = &response.body["errors"];
    assert_eq!(errors["firstName"][0], "First name is required");
    assert!(errors["lastName"].is_array());
    assert!(
        errors["email"]
            .as_array()
            .unwrap()
            .iter()
            .any(|m| m == "Invalid email format")
    );
    assert_eq!(errors["phoneNumber"][0], "Phone number format is invalid");
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::new();
    let token = app.login().await;
    app.seed_customer("Grace", "Hopper", "grace@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/customers",
            Some(new_customer("grace@example.com")),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["title"], "Conflict");
}

#[tokio::test]
async fn test_padded_contact_details_are_trimmed() {
    let app = TestApp::new();
    let token = app.login().await;

    let created = app
        .request(
            "POST",
            "/api/customers",
            Some(json!({
                "firstName": " Ada ",
                "lastName": "Lovelace",
                "email": " ada@example.com ",
                "phoneNumber": " +44 20 7946 0958 ",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["firstName"], "Ada");
    assert_eq!(created.body["email"], "ada@example.com");
    assert_eq!(created.body["phoneNumber"], "+44 20 7946 0958");

    let id: Uuid = created.body["id"].as_str().unwrap().parse().unwrap();
    let updated = app
        .request(
            "PUT",
            &format!("/api/customers/{id}"),
            Some(json!({
                "firstName": "Ada",
                "lastName": "King",
                "email": "ada.king@example.com  ",
                "phoneNumber": "(555) 010-0100",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::NO_CONTENT);

    let stored = app.db.customers().find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.email, "ada.king@example.com");
    assert_eq!(stored.phone.as_deref(), Some("(555) 010-0100"));
}

#[tokio::test]
async fn test_update_customer() {
    let app = TestApp::new();
    let token = app.login().await;
    let customer = app.seed_customer("Grace", "Hopper", "grace@example.com").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/customers/{}", customer.id),
            Some(json!({
                "firstName": "Grace Brewster",
                "lastName": "Murray-Hopper",
                "email": "grace.hopper@example.com",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let fetched = app
        .request("GET", &format!("/api/customers/{}", customer.id), None, Some(&token))
        .await;
    assert_eq!(fetched.body["lastName"], "Murray-Hopper");
    assert_eq!(fetched.body["email"], "grace.hopper@example.com");
    assert!(fetched.body["phoneNumber"].is_null());
}

#[tokio::test]
async fn test_update_rejects_invalid_name_characters() {
    let app = TestApp::new();
    let token = app.login().await;
    let customer = app.seed_customer("Grace", "Hopper", "grace@example.com").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/customers/{}", customer.id),
            Some(json!({
                "firstName": "Gr4ce",
                "lastName": "Hopper",
                "email": "grace@example.com",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["errors"]["firstName"][0],
        "First name contains invalid characters"
    );
}

#[tokio::test]
async fn test_missing_customer_is_not_found() {
    let app = TestApp::new();
    let token = app.login().await;
    let path = format!("/api/customers/{}", Uuid::new_v4());

    let get = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
    assert_eq!(get.body["status"], 404);

    let update = app
        .request(
            "PUT",
            &path,
            Some(json!({
                "firstName": "Nobody",
                "lastName": "Here",
                "email": "nobody@example.com",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_customer_reads_as_missing() {
    let app = TestApp::new();
    let token = app.login().await;
    let customer = app.seed_customer("Alan", "Turing", "alan@example.com").await;
    let path = format!("/api/customers/{}", customer.id);

    assert_eq!(
        app.request("DELETE", &path, None, Some(&token)).await.status,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        app.request("GET", &path, None, Some(&token)).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.request("DELETE", &path, None, Some(&token)).await.status,
        StatusCode::NOT_FOUND
    );

    // The row stays, flagged.
    let stored = app.db.customers().find_by_id(customer.id).await.unwrap().unwrap();
    assert!(stored.is_deleted);
    assert!(stored.deleted_at_utc.is_some());
    assert_eq!(stored.updated_by.as_deref(), Some(helpers::TEST_EMAIL));
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app
        .request("GET", "/api/customers/not-a-uuid", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["errors"]["request"].is_array());
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = TestApp::with_config(|config| config.server.body_limit_bytes = 256);
    let token = app.login().await;

    // Streamed body without a Content-Length header.
    let response = app
        .request(
            "POST",
            "/api/customers",
            Some(json!({
                "firstName": "A".repeat(400),
                "lastName": "Lovelace",
                "email": "ada@example.com",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["title"], "Payload Too Large");
    assert!(app.db.customers().find_all().await.unwrap().is_empty());

    // Declared length over the limit is refused before the handler runs.
    let payload = serde_json::to_string(&new_customer(&format!("{}@example.com", "a".repeat(300))))
        .unwrap();
    let request = Request::builder()
        .method("POST")
        .uri("/api/customers")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, payload.len())
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(payload))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
