use crate::handlers::common::{caller_id, map_service_error, success_response, validate_input};
use crate::{
    auth::{expired_access_cookie, AuthRouterExt, AuthUser, Role},
    entities::seller::ShopInfo,
    errors::ApiError,
    services::accounts::{LoginInput, RegisterInput, Session},
    AppState,
};
use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Login, registration and logout; no cookie required
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/admin-login", post(admin_login))
        .route("/seller-register", post(seller_register))
        .route("/seller-login", post(seller_login))
        .route("/customer/customer-register", post(customer_register))
        .route("/customer/customer-login", post(customer_login))
        .route("/logout", get(logout))
        .route("/customer/logout", get(logout))
}

/// Any signed-in account
pub fn authenticated_routes() -> Router<AppState> {
    Router::new().route("/get-user", get(get_user)).with_auth()
}

pub fn seller_routes() -> Router<AppState> {
    Router::new()
        .route("/profile-info-add", post(profile_info_add))
        .route("/profile-image-upload", post(profile_image_upload))
        .with_role(Role::Seller)
}

#[derive(Debug, Serialize)]
struct TokenResponse {
    token: String,
    message: &'static str,
}

/// Sets the `accessToken` cookie and echoes the token in the body
fn session_response(state: &AppState, session: Session, status: StatusCode, message: &'static str) -> Response {
    let cookie = state.auth.login_cookie(&session.token);
    (
        status,
        [(header::SET_COOKIE, cookie)],
        Json(TokenResponse {
            token: session.token,
            message,
        }),
    )
        .into_response()
}

async fn admin_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let session = state
        .services
        .accounts
        .admin_login(payload)
        .await
        .map_err(map_service_error)?;
    Ok(session_response(&state, session, StatusCode::OK, "Login Success"))
}

async fn seller_register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let session = state
        .services
        .accounts
        .seller_register(payload)
        .await
        .map_err(map_service_error)?;
    Ok(session_response(&state, session, StatusCode::CREATED, "Register Success"))
}

async fn seller_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let session = state
        .services
        .accounts
        .seller_login(payload)
        .await
        .map_err(map_service_error)?;
    Ok(session_response(&state, session, StatusCode::OK, "Login Success"))
}

async fn customer_register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let session = state
        .services
        .accounts
        .customer_register(payload)
        .await
        .map_err(map_service_error)?;
    Ok(session_response(&state, session, StatusCode::CREATED, "User Register Success"))
}

async fn customer_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let session = state
        .services
        .accounts
        .customer_login(payload)
        .await
        .map_err(map_service_error)?;
    Ok(session_response(&state, session, StatusCode::OK, "User Login Success"))
}

async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, expired_access_cookie())],
        Json(json!({ "message": "Logout Success" })),
    )
}

async fn get_user(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .services
        .accounts
        .get_user(&user)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "userInfo": profile })))
}

async fn profile_info_add(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ShopInfo>,
) -> Result<impl IntoResponse, ApiError> {
    let seller = state
        .services
        .accounts
        .update_shop_info(caller_id(&user)?, payload)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({
        "userInfo": seller,
        "message": "Profile info Add Successfully",
    })))
}

#[derive(Debug, Deserialize)]
struct ProfileImageRequest {
    image: String,
}

async fn profile_image_upload(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ProfileImageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let seller = state
        .services
        .accounts
        .update_profile_image(caller_id(&user)?, payload.image)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({
        "userInfo": seller,
        "message": "Image Upload Success",
    })))
}
