//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::OnceLock;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use orderhub_api::{AppState, build_app};
use orderhub_auth::PasswordHasher;
use orderhub_core::config::{AppConfig, ConfiguredUser};
use orderhub_database::{CustomerStore, Database, MemoryDatabase, OrderStore};
use orderhub_entity::{Customer, Order, OrderStatus};

/// Account seeded into every test app.
pub const TEST_EMAIL: &str = "tester@example.com";
/// Password of [`TEST_EMAIL`].
pub const TEST_PASSWORD: &str = "Sup3r-Secret!";

fn test_password_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| {
        PasswordHasher
            .hash_password(TEST_PASSWORD)
            .expect("Failed to hash test password")
    })
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// In-memory tables behind the router, for seeding
    pub db: MemoryDatabase,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application on a fresh in-memory database
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Like [`TestApp::new`], with config overrides applied before the app is built
    pub fn with_config(overrides: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = AppConfig::default();
        config.auth.users = vec![ConfiguredUser {
            email: TEST_EMAIL.to_string(),
            password_hash: test_password_hash().to_string(),
            roles: vec!["User".to_string()],
        }];
        overrides(&mut config);

        let db = MemoryDatabase::new();
        let state = AppState::new(config.clone(), Database::Memory(db.clone()))
            .expect("Failed to build app state");

        Self {
            router: build_app(state),
            db,
            config,
        }
    }

    /// Login and return the bearer token
    pub async fn login(&self) -> String {
        let body = serde_json::json!({
            "email": TEST_EMAIL,
            "password": TEST_PASSWORD,
        });

        let response = self
            .request("POST", "/api/authentication/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Store a customer directly, bypassing the API
    pub async fn seed_customer(&self, first: &str, last: &str, email: &str) -> Customer {
        let customer = Customer::new(first, last, email, None, Some("seed".to_string()));
        self.db
            .customers()
            .insert(&customer)
            .await
            .expect("Failed to seed customer");
        customer
    }

    /// Store `count` paid orders of 100.00, one hour apart, newest at [`base_time`]
    pub async fn seed_orders(&self, customer_id: Uuid, count: i64) -> Vec<Order> {
        let store = self.db.orders();
        let mut orders = Vec::new();
        for i in 0..count {
            let order = Order::new(
                format!("ORD-{}-{i:04}", &customer_id.simple().to_string()[..8]),
                customer_id,
                OrderStatus::Paid,
                base_time() - Duration::hours(i),
                Decimal::new(10000, 2),
            );
            store.insert(&order).await.expect("Failed to seed order");
            orders.push(order);
        }
        orders
    }

    /// Store one order with the given status and date
    pub async fn seed_order(
        &self,
        customer_id: Uuid,
        number: &str,
        status: OrderStatus,
        date: DateTime<Utc>,
    ) -> Order {
        let order = Order::new(number, customer_id, status, date, Decimal::new(2500, 2));
        self.db
            .orders()
            .insert(&order)
            .await
            .expect("Failed to seed order");
        order
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Newest seeded order date.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: axum::http::HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}
