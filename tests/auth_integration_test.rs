mod common;

use axum::http::{header, Method, StatusCode};
use common::{cookie_token, response_json, TestApp, PASSWORD, TEST_SECRET};
use marketplace_api::auth::Role;
use serde_json::json;

#[tokio::test]
async fn missing_cookie_is_conflict() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/get-user", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Please Login First");
}

#[tokio::test]
async fn tampered_token_is_conflict() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/get-user", Some("not.a.jwt")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Please Login");
}

#[tokio::test]
async fn token_without_account_id_is_unauthorized() {
    let app = TestApp::new().await;
    let token = app.state.auth.create_token("", Role::Customer).unwrap();

    let (status, body) = app.get("/api/get-user", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid user session");
}

#[tokio::test]
async fn signed_token_missing_id_claim_is_unauthorized() {
    let app = TestApp::new().await;
    let now = chrono::Utc::now().timestamp();
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &json!({ "role": "customer", "iat": now, "exp": now + 600 }),
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let (status, body) = app.get("/api/get-user", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid user session");
}

#[tokio::test]
async fn wrong_role_is_forbidden() {
    let app = TestApp::new().await;
    let customer = app.register_customer("Ann", "ann@example.com").await;

    let (status, body) = app
        .post(
            "/api/category-add",
            json!({ "name": "Electronics" }),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied");

    let (status, _) = app.get("/api/products-get", Some(&customer.token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn registration_sets_cookie_and_profile_is_readable() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/seller-register",
            Some(json!({ "name": "Collins", "email": "Collins@TechStore.com", "password": PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("accessToken="));
    assert!(cookie.contains("HttpOnly"));

    let token = cookie_token(&response).unwrap();
    let body = response_json(response).await;
    assert_eq!(body["message"], "Register Success");
    assert_eq!(body["token"], token.as_str());

    let (status, body) = app.get("/api/get-user", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userInfo"]["email"], "collins@techstore.com");
    assert_eq!(body["userInfo"]["status"], "pending");
    assert!(body["userInfo"].get("password").is_none());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = TestApp::new().await;
    app.register_customer("Ann", "ann@example.com").await;

    let (status, body) = app
        .post(
            "/api/customer/customer-register",
            json!({ "name": "Ann Again", "email": "ann@example.com", "password": "other" }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Email already exists");
}

#[tokio::test]
async fn login_checks_credentials() {
    let app = TestApp::new().await;
    app.register_customer("Ann", "ann@example.com").await;

    let (status, body) = app
        .post(
            "/api/customer/customer-login",
            json!({ "email": "ann@example.com", "password": PASSWORD }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User Login Success");

    let (status, body) = app
        .post(
            "/api/customer/customer-login",
            json!({ "email": "ann@example.com", "password": "wrong" }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Password wrong");

    let (status, body) = app
        .post(
            "/api/customer/customer-login",
            json!({ "email": "nobody@example.com", "password": PASSWORD }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Email not found");
}

#[tokio::test]
async fn malformed_email_fails_validation() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post(
            "/api/seller-register",
            json!({ "name": "X", "email": "not-an-email", "password": PASSWORD }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_login_and_logout() {
    let app = TestApp::new().await;
    let admin = app.admin().await;

    let (status, body) = app.get("/api/get-user", Some(&admin.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userInfo"]["role"], "admin");

    let response = app.request(Method::GET, "/api/logout", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(cookie.starts_with("accessToken=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn seller_updates_shop_profile() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;

    let (status, body) = app
        .post(
            "/api/profile-info-add",
            json!({
                "shopName": "Collins Tech Store",
                "division": "Nairobi",
                "district": "Nairobi",
                "sub_district": "Westlands",
            }),
            Some(&seller.token),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    let (_, body) = app.get("/api/get-user", Some(&seller.token)).await;
    assert_eq!(body["userInfo"]["shop_info"]["shopName"], "Collins Tech Store");
}
