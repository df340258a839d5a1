#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::Utc;
use marketplace_api::{
    app_router,
    auth::hash_password,
    config::AppConfig,
    db,
    entities::admin,
    AppState,
};
use sea_orm::{ActiveModelTrait, Set};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "a_reasonably_long_marketplace_signing_secret_42";
pub const PASSWORD: &str = "secret";

/// Router over a throwaway SQLite file with migrations applied
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _dir: TempDir,
}

/// Signed-in account: the cookie token plus the account id it carries
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub token: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let mut cfg = AppConfig::new(
            url,
            TEST_SECRET.to_string(),
            "127.0.0.1".to_string(),
            5001,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("connect");
        db::run_migrations(&pool).await.expect("migrate");

        let state = AppState::new(pool, cfg);
        let router = app_router(state.clone());

        Self {
            router,
            state,
            _dir: dir,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::COOKIE, format!("accessToken={}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };

        self.router.clone().oneshot(request).await.expect("response")
    }

    /// Sends a request and decodes the JSON body
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let response = self.request(method, uri, body, token).await;
        let status = response.status();
        (status, response_json(response).await)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, token).await
    }

    pub async fn post(&self, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body), token).await
    }

    pub async fn put(&self, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body), token).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None, token).await
    }

    fn account(&self, token: String) -> Account {
        let claims = self.state.auth.verify_token(&token).expect("valid token");
        Account {
            id: Uuid::parse_str(claims.id.as_deref().expect("id claim")).expect("uuid claim"),
            token,
        }
    }

    async fn register(&self, uri: &str, name: &str, email: &str) -> Account {
        let response = self
            .request(
                Method::POST,
                uri,
                Some(json!({ "name": name, "email": email, "password": PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED, "register {}", email);
        let token = cookie_token(&response).expect("accessToken cookie");
        self.account(token)
    }

    pub async fn register_seller(&self, name: &str, email: &str) -> Account {
        self.register("/api/seller-register", name, email).await
    }

    pub async fn register_customer(&self, name: &str, email: &str) -> Account {
        self.register("/api/customer/customer-register", name, email)
            .await
    }

    /// Admins are not self-registered; insert one and log it in
    pub async fn admin(&self) -> Account {
        let now = Utc::now();
        admin::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set("Root".to_string()),
            email: Set("admin@example.com".to_string()),
            password: Set(hash_password(PASSWORD).expect("hash")),
            image: Set(String::new()),
            role: Set("admin".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.state.db)
        .await
        .expect("insert admin");

        let (status, body) = self
            .post(
                "/api/admin-login",
                json!({ "email": "admin@example.com", "password": PASSWORD }),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        self.account(body["token"].as_str().expect("token").to_string())
    }

    /// Seller-owned product; returns the product JSON
    pub async fn add_product(&self, seller: &Account, name: &str, price: &str, stock: i32) -> Value {
        let (status, body) = self
            .post(
                "/api/product-add",
                json!({
                    "name": name,
                    "category": "Electronics",
                    "brand": "Acme",
                    "price": price,
                    "stock": stock,
                    "discount": 0,
                    "description": "Test product",
                    "images": ["https://img.example.com/p.png"],
                }),
                Some(&seller.token),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["product"].clone()
    }
}

/// Value of the `accessToken` cookie set by a response
pub fn cookie_token(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|cookie| {
            cookie
                .split(';')
                .next()
                .and_then(|pair| pair.trim().strip_prefix("accessToken="))
                .map(str::to_string)
        })
}

pub async fn response_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
}

/// Decimal fields serialize as strings; compare numerically
pub fn num(value: &Value) -> f64 {
    match value {
        Value::String(s) => s.parse().expect("decimal string"),
        Value::Number(n) => n.as_f64().expect("number"),
        other => panic!("not a number: {}", other),
    }
}

pub fn id_of(value: &Value) -> String {
    value["id"].as_str().expect("id").to_string()
}
