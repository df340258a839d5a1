//! Cookie-based JWT authentication.
//!
//! Login handlers issue an HS256 token and store it in the `accessToken`
//! cookie. [`auth_middleware`] verifies that cookie on every protected route
//! and attaches an [`AuthUser`] to the request; [`role_middleware`] narrows a
//! route group down to a single [`Role`].

pub mod cookies;
pub mod password;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{fmt, sync::Arc, time::Duration};
use thiserror::Error;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::ServiceError;

pub use cookies::{access_cookie, expired_access_cookie, read_cookie, ACCESS_TOKEN_COOKIE};
pub use password::{hash_password, verify_password};

/// Account kind carried in the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Seller,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Seller => "seller",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id; tokens without one are rejected as an invalid session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Identity attached to a request that passed [`auth_middleware`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub role: Role,
}

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Same value as [`AuthUser::id`]; customer routes read it under this name
    pub fn user_id(&self) -> &str {
        &self.id
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Account id as a UUID
    pub fn uuid(&self) -> Result<Uuid, ServiceError> {
        Uuid::parse_str(&self.id)
            .map_err(|_| ServiceError::Unauthorized("Invalid user session".to_string()))
    }
}

/// Token settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub cookie_secure: bool,
}

impl AuthConfig {
    pub fn new(jwt_secret: String, token_ttl: Duration, cookie_secure: bool) -> Self {
        Self {
            jwt_secret,
            token_ttl,
            cookie_secure,
        }
    }
}

impl From<&AppConfig> for AuthConfig {
    fn from(cfg: &AppConfig) -> Self {
        Self::new(
            cfg.jwt_secret.clone(),
            Duration::from_secs(cfg.jwt_expiration_secs),
            cfg.cookie_secure,
        )
    }
}

/// Issues and verifies access tokens
#[derive(Debug, Clone)]
pub struct AuthService {
    pub config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn create_token(&self, id: &str, role: Role) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            id: Some(id.to_string()),
            role,
            iat: now,
            exp: now + self.config.token_ttl.as_secs() as i64,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    /// `Set-Cookie` value carrying a freshly issued token
    pub fn login_cookie(&self, token: &str) -> String {
        access_cookie(token, self.config.token_ttl.as_secs(), self.config.cookie_secure)
    }
}

/// Failures surfaced by the auth layer. Bodies are `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please Login First")]
    MissingToken,

    #[error("Please Login")]
    InvalidToken(String),

    #[error("Invalid user session")]
    InvalidSession,

    #[error("Access denied")]
    AccessDenied,

    #[error("Token creation failed: {0}")]
    TokenCreation(String),

    #[error("Authentication service not available")]
    ServiceUnavailable,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidToken(_) => StatusCode::CONFLICT,
            Self::InvalidSession => StatusCode::UNAUTHORIZED,
            Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::TokenCreation(_) | Self::ServiceUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::TokenCreation(msg) => {
                error!("Token creation failed: {}", msg);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (self.status_code(), Json(json!({ "error": message }))).into_response()
    }
}

impl From<AuthError> for ServiceError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenCreation(msg) => ServiceError::JwtError(msg),
            AuthError::AccessDenied => ServiceError::Forbidden(err.to_string()),
            other => ServiceError::Unauthorized(other.to_string()),
        }
    }
}

/// Resolves the cookie token into an [`AuthUser`]
pub fn authenticate(headers: &axum::http::HeaderMap, auth: &AuthService) -> Result<AuthUser, AuthError> {
    let token = read_cookie(headers, ACCESS_TOKEN_COOKIE)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let claims = auth.verify_token(&token)?;
    let id = match claims.id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(AuthError::InvalidSession),
    };

    Ok(AuthUser {
        id,
        role: claims.role,
    })
}

/// Verifies the `accessToken` cookie and attaches the caller's identity
pub async fn auth_middleware(mut request: Request, next: Next) -> Response {
    let auth_service = match request.extensions().get::<Arc<AuthService>>() {
        Some(service) => service.clone(),
        None => return AuthError::ServiceUnavailable.into_response(),
    };

    match authenticate(request.headers(), &auth_service) {
        Ok(user) => {
            debug!(user_id = %user.id, role = %user.role, "authenticated request");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(AuthError::InvalidToken(msg)) => {
            warn!("Auth middleware error: {}", msg);
            AuthError::InvalidToken(msg).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Rejects callers whose role differs from `required_role`
pub async fn role_middleware(
    State(required_role): State<Role>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or(AuthError::MissingToken)?;

    if !user.has_role(required_role) {
        return Err(AuthError::AccessDenied);
    }

    Ok(next.run(request).await)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}

/// Extension methods for Router to add auth middleware
pub trait AuthRouterExt {
    fn with_auth(self) -> Self;
    fn with_role(self, role: Role) -> Self;
}

impl<S> AuthRouterExt for axum::Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_auth(self) -> Self {
        self.route_layer(axum::middleware::from_fn(auth_middleware))
    }

    fn with_role(self, role: Role) -> Self {
        self.route_layer(axum::middleware::from_fn_with_state(role, role_middleware))
            .with_auth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request as HttpRequest},
        routing::get,
        Extension, Router,
    };
    use tower::ServiceExt;

    const SECRET: &str = "a_reasonably_long_marketplace_signing_secret_42";

    fn service() -> Arc<AuthService> {
        Arc::new(AuthService::new(AuthConfig::new(
            SECRET.to_string(),
            Duration::from_secs(3600),
            false,
        )))
    }

    async fn whoami(user: AuthUser) -> String {
        format!("{}:{}", user.role, user.user_id())
    }

    fn app(auth: Arc<AuthService>) -> Router {
        let any = Router::new().route("/me", get(whoami)).with_auth();
        let sellers = Router::new()
            .route("/seller-only", get(whoami))
            .with_role(Role::Seller);
        any.merge(sellers).layer(Extension(auth))
    }

    async fn call(app: Router, uri: &str, cookie: Option<String>) -> (StatusCode, String) {
        let mut builder = HttpRequest::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[test]
    fn token_round_trip_keeps_id_and_role() {
        let auth = service();
        let token = auth.create_token("abc-123", Role::Customer).unwrap();
        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.id.as_deref(), Some("abc-123"));
        assert_eq!(claims.role, Role::Customer);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = AuthService::new(AuthConfig::new(
            "another_marketplace_secret_that_is_long_enough".into(),
            Duration::from_secs(60),
            false,
        ));
        let token = other.create_token("abc", Role::Admin).unwrap();
        assert!(matches!(
            service().verify_token(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[tokio::test]
    async fn missing_cookie_asks_for_login() {
        let (status, body) = call(app(service()), "/me", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, r#"{"error":"Please Login First"}"#);
    }

    #[tokio::test]
    async fn garbage_token_is_conflict() {
        let (status, body) = call(
            app(service()),
            "/me",
            Some("accessToken=not.a.jwt".to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, r#"{"error":"Please Login"}"#);
    }

    #[tokio::test]
    async fn empty_id_is_invalid_session() {
        let auth = service();
        let token = auth.create_token("", Role::Seller).unwrap();
        let (status, body) = call(app(auth), "/me", Some(format!("accessToken={}", token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"error":"Invalid user session"}"#);
    }

    #[tokio::test]
    async fn token_without_id_is_invalid_session() {
        let now = Utc::now().timestamp();
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "role": "customer", "iat": now, "exp": now + 600 }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let (status, body) = call(app(service()), "/me", Some(format!("accessToken={}", token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"error":"Invalid user session"}"#);
    }

    #[tokio::test]
    async fn valid_cookie_reaches_handler() {
        let auth = service();
        let token = auth.create_token("u-1", Role::Customer).unwrap();
        let (status, body) = call(
            app(auth),
            "/me",
            Some(format!("theme=dark; accessToken={}", token)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "customer:u-1");
    }

    #[tokio::test]
    async fn role_gate_rejects_other_roles() {
        let auth = service();
        let admin = auth.create_token("a-1", Role::Admin).unwrap();
        let seller = auth.create_token("s-1", Role::Seller).unwrap();

        let (status, body) = call(
            app(auth.clone()),
            "/seller-only",
            Some(format!("accessToken={}", admin)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, r#"{"error":"Access denied"}"#);

        let (status, body) = call(
            app(auth),
            "/seller-only",
            Some(format!("accessToken={}", seller)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "seller:s-1");
    }

    #[tokio::test]
    async fn role_gate_still_requires_login() {
        let (status, _) = call(app(service()), "/seller-only", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
