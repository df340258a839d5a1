mod common;

use axum::http::StatusCode;
use common::{id_of, num, Account, TestApp};
use serde_json::json;

/// One paid order of `qty` units at `price`, returning the order id
async fn paid_order(app: &TestApp, customer: &Account, product_id: &str, qty: i32) -> String {
    let (status, body) = app
        .post(
            "/api/home/order/place-order",
            json!({ "items": [{ "product_id": product_id, "quantity": qty }] }),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let order_id = body["orderId"].as_str().unwrap().to_string();

    let (status, _) = app
        .post(&format!("/api/order/confirm/{}", order_id), json!({}), Some(&customer.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    order_id
}

#[tokio::test]
async fn admin_reviews_and_activates_sellers() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;

    let (status, body) = app
        .get("/api/get-sellers?status=pending", Some(&admin.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["email"], "collins@techstore.com");

    let (status, body) = app
        .post(
            "/api/seller-status-update",
            json!({ "seller_id": seller.id, "status": "active" }),
            Some(&admin.token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seller"]["status"], "active");

    let (_, body) = app
        .get("/api/get-sellers?status=pending", Some(&admin.token))
        .await;
    assert_eq!(body["pagination"]["total"], 0);

    let (status, body) = app
        .get(&format!("/api/get-seller/{}", seller.id), Some(&admin.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seller"]["status"], "active");

    let (status, _) = app
        .get("/api/get-sellers?status=pending", Some(&seller.token))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn withdrawal_request_and_confirmation() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;
    let customer = app.register_customer("Ann", "ann@example.com").await;
    let product = app.add_product(&seller, "Monitor", "150.00", 10).await;
    paid_order(&app, &customer, &id_of(&product), 2).await;

    let (status, body) = app
        .post(
            "/api/payment/withdrawal-request",
            json!({ "amount": "500" }),
            Some(&seller.token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);

    let (status, body) = app
        .post(
            "/api/payment/withdrawal-request",
            json!({ "amount": "100" }),
            Some(&seller.token),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["withdrawal"]["status"], "pending");
    let request_id = id_of(&body["withdrawal"]);

    let (_, body) = app
        .get("/api/payment/seller-payment-details", Some(&seller.token))
        .await;
    assert_eq!(num(&body["total_amount"]), 300.0);
    assert_eq!(num(&body["pending_amount"]), 100.0);
    assert_eq!(num(&body["available_amount"]), 200.0);

    let (status, body) = app.get("/api/payment/request", Some(&admin.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["withdrawalRequest"].as_array().unwrap().len(), 1);

    let (status, body) = app
        .post(
            "/api/payment/request-confirm",
            json!({ "payment_id": request_id }),
            Some(&admin.token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payment"]["status"], "success");

    let (status, _) = app
        .post(
            "/api/payment/request-confirm",
            json!({ "payment_id": request_id }),
            Some(&admin.token),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = app
        .get("/api/payment/seller-payment-details", Some(&seller.token))
        .await;
    assert_eq!(num(&body["withdrawal_amount"]), 100.0);
    assert_eq!(num(&body["available_amount"]), 200.0);
    assert_eq!(body["success_withdraws"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn dashboards_summarize_sales() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;
    let customer = app.register_customer("Ann", "ann@example.com").await;
    let product = app.add_product(&seller, "Tablet", "250.00", 10).await;
    paid_order(&app, &customer, &id_of(&product), 1).await;

    let (status, body) = app
        .get("/api/admin/get-dashboard-data", Some(&admin.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(num(&body["total_sale"]), 250.0);
    assert_eq!(body["total_product"], 1);
    assert_eq!(body["total_order"], 1);
    assert_eq!(body["total_seller"], 1);
    assert_eq!(body["recent_orders"].as_array().unwrap().len(), 1);

    let (status, body) = app
        .get("/api/seller/get-dashboard-data", Some(&seller.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(num(&body["total_sale"]), 250.0);
    assert_eq!(body["total_order"], 1);
    assert_eq!(body["total_pending_order"], 0);
}

#[tokio::test]
async fn order_status_updates() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;
    let customer = app.register_customer("Ann", "ann@example.com").await;
    let product = app.add_product(&seller, "Tablet", "250.00", 10).await;
    let order_id = paid_order(&app, &customer, &id_of(&product), 1).await;

    let (status, body) = app
        .get(&format!("/api/admin/order/{}", order_id), Some(&admin.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"]["suborders"].as_array().unwrap().len(), 1);
    let suborder_id = id_of(&body["order"]["suborders"][0]);

    let (status, body) = app
        .put(
            &format!("/api/admin/order-status/update/{}", order_id),
            json!({ "status": "shipped" }),
            Some(&admin.token),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    let (_, body) = app
        .get("/api/home/customer/get-orders/shipped", Some(&customer.token))
        .await;
    assert_eq!(body["orders"].as_array().unwrap().len(), 1);

    let (status, _) = app
        .put(
            &format!("/api/seller/order-status/update/{}", suborder_id),
            json!({ "status": "delivered" }),
            Some(&seller.token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app
        .get(&format!("/api/seller/order/{}", suborder_id), Some(&seller.token))
        .await;
    assert_eq!(body["order"]["delivery_status"], "delivered");

    let (_, body) = app.get("/api/admin/orders", Some(&admin.token)).await;
    assert_eq!(body["pagination"]["total"], 1);
}
