//! Backend for a multi-vendor marketplace.
//!
//! Sellers list products, customers shop across sellers with a single cart,
//! and every checkout is split into one order per seller. Authentication is a
//! JWT carried in the `accessToken` cookie.

pub mod auth;
pub mod config;
pub mod db;
pub mod discovery;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod migrator;
pub mod seed;
pub mod services;
pub mod tracing;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer};

use crate::auth::{AuthConfig, AuthService};
use crate::config::AppConfig;
use crate::handlers::AppServices;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: AppConfig,
    pub auth: Arc<AuthService>,
    pub services: AppServices,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        let db = Arc::new(db);
        let auth = Arc::new(AuthService::new(AuthConfig::from(&config)));
        let services = AppServices::new(db.clone(), auth.clone());
        Self {
            db,
            config,
            auth,
            services,
        }
    }
}

/// Every `/api` route, grouped by who may call it
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(api_status))
        // public
        .merge(handlers::auth::public_routes())
        .merge(handlers::catalog::public_routes())
        .merge(handlers::reviews::public_routes())
        // any signed-in account
        .merge(handlers::auth::authenticated_routes())
        // admin
        .merge(handlers::catalog::admin_routes())
        .merge(handlers::orders::admin_routes())
        .merge(handlers::dashboard::admin_routes())
        // seller
        .merge(handlers::auth::seller_routes())
        .merge(handlers::catalog::seller_routes())
        .merge(handlers::orders::seller_routes())
        .merge(handlers::dashboard::seller_routes())
        // customer
        .merge(handlers::cart::customer_routes())
        .merge(handlers::wishlist::customer_routes())
        .merge(handlers::orders::customer_routes())
        .merge(handlers::reviews::customer_routes())
}

/// CORS for the storefront and dashboard. Credentials are allowed so the
/// browser sends the auth cookie, which rules out wildcard origins.
pub fn cors_layer(cfg: &AppConfig) -> CorsLayer {
    let mut origins = cfg.cors_origins();
    if origins.is_empty() {
        origins = discovery::default_client_origins(&cfg.host);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Full application router with middleware applied
pub fn app_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let auth = state.auth.clone();

    Router::new()
        .route("/", get(|| async { "Hello Server" }))
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(Extension(auth))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(crate::tracing::configure_http_tracing())
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
}

/// Reports backend URLs as seen from the caller's `Host`, else the bind host
async fn api_status(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let cfg = &state.config;
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(&cfg.host);
    Json(json!({
        "status": "ok",
        "service": "marketplace-api",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": cfg.environment,
        "api_base_url": discovery::api_base_url(host, cfg.port),
        "socket_url": discovery::socket_url(host, cfg.port),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match db::ping(&state.db).await {
        Ok(()) => "healthy",
        Err(e) => {
            ::tracing::warn!(error = %e, "health check: database unreachable");
            "unhealthy"
        }
    };

    let status = if database == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": database,
            "checks": { "database": database },
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
