//! Integration tests for paginated customer order retrieval.

mod helpers;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use uuid::Uuid;

use helpers::{TestApp, base_time};
use orderhub_database::OrderStore;
use orderhub_entity::{Order, OrderStatus};
use rust_decimal::Decimal;

fn orders_path(customer_id: Uuid, query: &str) -> String {
    if query.is_empty() {
        format!("/api/customers/{customer_id}/orders")
    } else {
        format!("/api/customers/{customer_id}/orders?{query}")
    }
}

fn ts(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn order_numbers(body: &serde_json::Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["orderNumber"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_default_page_shape() {
    let app = TestApp::new();
    let token = app.login().await;
    let customer = app.seed_customer("Ada", "Lovelace", "ada@example.com").await;
    let seeded = app.seed_orders(customer.id, 3).await;

    let response = app
        .request("GET", &orders_path(customer.id, ""), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = &response.body;
    assert_eq!(body["totalCount"], 3);
    assert_eq!(body["pageNumber"], 1);
    assert_eq!(body["pageSize"], 20);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["hasNext"], false);
    assert_eq!(body["hasPrevious"], false);

    let first = &body["items"][0];
    assert_eq!(first["id"], seeded[0].id.to_string());
    assert_eq!(first["orderNumber"], seeded[0].order_number.as_str());
    assert_eq!(first["status"], 2);
    assert_eq!(first["totalAmount"], 100.0);
    assert_eq!(first["customerId"], customer.id.to_string());
    assert!(first["orderDateUtc"].is_string());
}

#[tokio::test]
async fn test_pages_are_newest_first_without_overlap() {
    let app = TestApp::new();
    let token = app.login().await;
    let customer = app.seed_customer("Ada", "Lovelace", "ada@example.com").await;
    let seeded = app.seed_orders(customer.id, 25).await;

    let mut seen = Vec::new();
    for page in 1..=3 {
        let response = app
            .request(
                "GET",
                &orders_path(customer.id, &format!("pageNumber={page}&pageSize=10")),
                None,
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["totalCount"], 25);
        assert_eq!(response.body["totalPages"], 3);
        assert_eq!(response.body["hasPrevious"], page > 1);
        assert_eq!(response.body["hasNext"], page < 3);
        seen.extend(order_numbers(&response.body));
    }

    // Seeded newest first, so pages concatenate back to the seed order.
    let expected: Vec<String> = seeded.iter().map(|o| o.order_number.clone()).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn test_same_timestamp_ties_are_stable() {
    let app = TestApp::new();
    let token = app.login().await;
    let customer = app.seed_customer("Ada", "Lovelace", "ada@example.com").await;

    let store = app.db.orders();
    for i in 0..6 {
        let order = Order::new(
            format!("ORD-TIE-{i}"),
            customer.id,
            OrderStatus::Placed,
            base_time(),
            Decimal::new(100, 0),
        );
        store.insert(&order).await.unwrap();
    }

    let first = app
        .request("GET", &orders_path(customer.id, "pageSize=3"), None, Some(&token))
        .await;
    let second = app
        .request(
            "GET",
            &orders_path(customer.id, "pageNumber=2&pageSize=3"),
            None,
            Some(&token),
        )
        .await;

    let mut all = order_numbers(&first.body);
    all.extend(order_numbers(&second.body));
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 6);

    // Repeating a request returns the same page.
    let again = app
        .request("GET", &orders_path(customer.id, "pageSize=3"), None, Some(&token))
        .await;
    assert_eq!(order_numbers(&again.body), order_numbers(&first.body));
}

#[tokio::test]
async fn test_status_filter() {
    let app = TestApp::new();
    let token = app.login().await;
    let customer = app.seed_customer("Ada", "Lovelace", "ada@example.com").await;
    app.seed_orders(customer.id, 5).await;
    app.seed_order(
        customer.id,
        "ORD-SHIPPED",
        OrderStatus::Shipped,
        base_time() - Duration::days(3),
    )
    .await;

    let response = app
        .request("GET", &orders_path(customer.id, "status=3"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["totalCount"], 1);
    assert_eq!(order_numbers(&response.body), vec!["ORD-SHIPPED".to_string()]);
    assert_eq!(response.body["items"][0]["status"], 3);
}

#[tokio::test]
async fn test_date_range_is_half_open_and_reversed_range_is_swapped() {
    let app = TestApp::new();
    let token = app.login().await;
    let customer = app.seed_customer("Ada", "Lovelace", "ada@example.com").await;
    let seeded = app.seed_orders(customer.id, 10).await;

    let from = ts(base_time() - Duration::hours(4));
    let to = ts(base_time());

    let forward = app
        .request(
            "GET",
            &orders_path(customer.id, &format!("fromUtc={from}&toUtc={to}")),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(forward.status, StatusCode::OK);
    assert_eq!(forward.body["totalCount"], 4);
    let expected: Vec<String> = seeded[1..=4].iter().map(|o| o.order_number.clone()).collect();
    assert_eq!(order_numbers(&forward.body), expected);

    let reversed = app
        .request(
            "GET",
            &orders_path(customer.id, &format!("fromUtc={to}&toUtc={from}")),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(reversed.status, StatusCode::OK);
    assert_eq!(reversed.body["items"], forward.body["items"]);
}

#[tokio::test]
async fn test_deleted_orders_are_hidden() {
    let app = TestApp::new();
    let token = app.login().await;
    let customer = app.seed_customer("Ada", "Lovelace", "ada@example.com").await;
    app.seed_orders(customer.id, 2).await;

    let mut deleted = Order::new(
        "ORD-DELETED",
        customer.id,
        OrderStatus::Paid,
        base_time() + Duration::hours(1),
        Decimal::new(10000, 2),
    );
    deleted.is_deleted = true;
    app.db.orders().insert(&deleted).await.unwrap();

    let response = app
        .request("GET", &orders_path(customer.id, ""), None, Some(&token))
        .await;

    assert_eq!(response.body["totalCount"], 2);
    assert!(!order_numbers(&response.body).contains(&"ORD-DELETED".to_string()));
}

#[tokio::test]
async fn test_unknown_customer_yields_empty_page() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app
        .request("GET", &orders_path(Uuid::new_v4(), ""), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["totalCount"], 0);
    assert_eq!(response.body["items"], serde_json::json!([]));
    assert_eq!(response.body["totalPages"], 0);
}

#[tokio::test]
async fn test_oversized_page_is_rejected() {
    let app = TestApp::new();
    let token = app.login().await;
    let customer = app.seed_customer("Ada", "Lovelace", "ada@example.com").await;

    let response = app
        .request("GET", &orders_path(customer.id, "pageSize=9999"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["title"], "Validation failed");
    assert!(response.body["errors"]["pageSize"].is_array());
}

#[tokio::test]
async fn test_invalid_parameters_are_rejected() {
    let app = TestApp::new();
    let token = app.login().await;
    let customer = app.seed_customer("Ada", "Lovelace", "ada@example.com").await;

    let bad_status = app
        .request("GET", &orders_path(customer.id, "status=9"), None, Some(&token))
        .await;
    assert_eq!(bad_status.status, StatusCode::BAD_REQUEST);
    assert!(bad_status.body["errors"]["status"].is_array());

    let bad_page = app
        .request("GET", &orders_path(customer.id, "pageNumber=0"), None, Some(&token))
        .await;
    assert_eq!(bad_page.status, StatusCode::BAD_REQUEST);
    assert!(bad_page.body["errors"]["pageNumber"].is_array());

    let unparsable = app
        .request("GET", &orders_path(customer.id, "fromUtc=yesterday"), None, Some(&token))
        .await;
    assert_eq!(unparsable.status, StatusCode::BAD_REQUEST);

    let bad_id = app
        .request("GET", "/api/customers/not-a-uuid/orders", None, Some(&token))
        .await;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_orders_require_token() {
    let app = TestApp::new();

    let response = app
        .request("GET", &orders_path(Uuid::new_v4(), ""), None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
