mod common;

use axum::http::StatusCode;
use common::{id_of, num, TestApp};
use serde_json::json;

#[tokio::test]
async fn cart_groups_lines_by_seller() {
    let app = TestApp::new().await;
    let tech = app.register_seller("Collins", "collins@techstore.com").await;
    let fashion = app.register_seller("Fashion Hub", "fashion@hub.com").await;
    let customer = app.register_customer("Ann", "ann@example.com").await;

    let mouse = app.add_product(&tech, "Wireless Mouse", "20.00", 10).await;
    let shirt = app.add_product(&fashion, "Linen Shirt", "30.00", 1).await;

    let (status, body) = app
        .post(
            "/api/home/product/add-to-cart",
            json!({ "product_id": id_of(&mouse), "quantity": 2 }),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let mouse_line = body["item"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .post(
            "/api/home/product/add-to-cart",
            json!({ "product_id": id_of(&mouse), "quantity": 1 }),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Product Already Added To Cart");

    app.post(
        "/api/home/product/add-to-cart",
        json!({ "product_id": id_of(&shirt), "quantity": 1 }),
        Some(&customer.token),
    )
    .await;

    let (status, cart) = app
        .get("/api/home/product/get-cart-products", Some(&customer.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["cart_products"].as_array().unwrap().len(), 2);
    assert_eq!(cart["cart_product_count"], 3);
    assert_eq!(num(&cart["price"]), 70.0);
    assert_eq!(num(&cart["shipping_fee"]), 40.0);
    assert!(cart["out_of_stock_products"].as_array().unwrap().is_empty());

    let (status, body) = app
        .put(
            &format!("/api/home/product/quantity-inc/{}", mouse_line),
            json!({}),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item"]["quantity"], 3);

    let (_, body) = app
        .put(
            &format!("/api/home/product/quantity-dec/{}", mouse_line),
            json!({}),
            Some(&customer.token),
        )
        .await;
    assert_eq!(body["item"]["quantity"], 2);

    let (status, _) = app
        .delete(
            &format!("/api/home/product/delete-cart-product/{}", mouse_line),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, cart) = app
        .get("/api/home/product/get-cart-products", Some(&customer.token))
        .await;
    assert_eq!(cart["cart_product_count"], 1);
    assert_eq!(num(&cart["shipping_fee"]), 20.0);
}

#[tokio::test]
async fn cart_flags_lines_beyond_stock() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;
    let customer = app.register_customer("Ann", "ann@example.com").await;
    let product = app.add_product(&seller, "Rare Vinyl", "45.00", 1).await;

    app.post(
        "/api/home/product/add-to-cart",
        json!({ "product_id": id_of(&product), "quantity": 3 }),
        Some(&customer.token),
    )
    .await;

    let (_, cart) = app
        .get("/api/home/product/get-cart-products", Some(&customer.token))
        .await;
    assert!(cart["cart_products"].as_array().unwrap().is_empty());
    assert_eq!(cart["out_of_stock_products"].as_array().unwrap().len(), 1);
    assert_eq!(num(&cart["price"]), 0.0);
}

#[tokio::test]
async fn wishlist_add_list_remove() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;
    let customer = app.register_customer("Ann", "ann@example.com").await;
    let product = app.add_product(&seller, "Desk Lamp", "18.00", 9).await;

    let (status, body) = app
        .post(
            "/api/home/product/add-to-wishlist",
            json!({ "product_id": id_of(&product) }),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["wishlist"]["slug"], "desk-lamp");
    let entry = body["wishlist"]["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .post(
            "/api/home/product/add-to-wishlist",
            json!({ "product_id": id_of(&product) }),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = app
        .get("/api/home/product/get-wishlist-products", Some(&customer.token))
        .await;
    assert_eq!(body["wishlist_count"], 1);

    let (status, _) = app
        .delete(
            &format!("/api/home/product/remove-wishlist-product/{}", entry),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app
        .get("/api/home/product/get-wishlist-products", Some(&customer.token))
        .await;
    assert_eq!(body["wishlist_count"], 0);
}

#[tokio::test]
async fn placing_and_paying_an_order() {
    let app = TestApp::new().await;
    let tech = app.register_seller("Collins", "collins@techstore.com").await;
    let fashion = app.register_seller("Fashion Hub", "fashion@hub.com").await;
    let customer = app.register_customer("Ann", "ann@example.com").await;

    let mouse = app.add_product(&tech, "Wireless Mouse", "20.00", 10).await;
    let shirt = app.add_product(&fashion, "Linen Shirt", "30.00", 4).await;

    app.post(
        "/api/home/product/add-to-cart",
        json!({ "product_id": id_of(&mouse), "quantity": 2 }),
        Some(&customer.token),
    )
    .await;

    let (status, body) = app
        .post(
            "/api/home/order/place-order",
            json!({
                "items": [
                    { "product_id": id_of(&mouse), "quantity": 2 },
                    { "product_id": id_of(&shirt), "quantity": 1 },
                ],
                "shipping_fee": "40",
                "shipping_info": { "name": "Ann", "address": "1 Main St", "city": "Nairobi" },
            }),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let order_id = body["orderId"].as_str().unwrap().to_string();

    let (_, body) = app
        .get(&format!("/api/product-get/{}", id_of(&mouse)), Some(&tech.token))
        .await;
    assert_eq!(body["product"]["stock"], 8);

    let (_, cart) = app
        .get("/api/home/product/get-cart-products", Some(&customer.token))
        .await;
    assert_eq!(cart["cart_product_count"], 0);

    let (status, body) = app
        .get(
            &format!("/api/home/customer/get-order-details/{}", order_id),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(num(&body["order"]["price"]), 110.0);
    assert_eq!(body["order"]["payment_status"], "unpaid");
    assert_eq!(body["order"]["delivery_status"], "pending");

    let (_, body) = app.get("/api/seller/orders", Some(&tech.token)).await;
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(num(&body["data"][0]["price"]), 40.0);

    let (status, body) = app
        .post(&format!("/api/order/confirm/{}", order_id), json!({}), Some(&customer.token))
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["order"]["payment_status"], "paid");
    assert_eq!(body["order"]["delivery_status"], "placed");

    let (status, body) = app
        .post(&format!("/api/order/confirm/{}", order_id), json!({}), Some(&customer.token))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Order already paid");

    let (_, body) = app
        .get("/api/payment/seller-payment-details", Some(&fashion.token))
        .await;
    assert_eq!(num(&body["total_amount"]), 30.0);
    assert_eq!(num(&body["available_amount"]), 30.0);

    let (_, body) = app
        .get("/api/home/customer/get-dashboard-data", Some(&customer.token))
        .await;
    assert_eq!(body["total_order"], 1);
    assert_eq!(body["pending_order"], 0);

    let (_, body) = app
        .get("/api/home/customer/get-orders/placed", Some(&customer.token))
        .await;
    assert_eq!(body["orders"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn order_beyond_stock_is_rejected_without_side_effects() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;
    let customer = app.register_customer("Ann", "ann@example.com").await;
    let plenty = app.add_product(&seller, "Notebook", "3.00", 50).await;
    let scarce = app.add_product(&seller, "Fountain Pen", "60.00", 1).await;

    let (status, _) = app
        .post(
            "/api/home/order/place-order",
            json!({
                "items": [
                    { "product_id": id_of(&plenty), "quantity": 5 },
                    { "product_id": id_of(&scarce), "quantity": 2 },
                ],
            }),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = app
        .get(&format!("/api/product-get/{}", id_of(&plenty)), Some(&seller.token))
        .await;
    assert_eq!(body["product"]["stock"], 50);

    let (_, body) = app
        .get("/api/home/customer/get-dashboard-data", Some(&customer.token))
        .await;
    assert_eq!(body["total_order"], 0);
}

#[tokio::test]
async fn repeated_lines_cannot_exceed_stock() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;
    let customer = app.register_customer("Ann", "ann@example.com").await;
    let product = app.add_product(&seller, "Headphones", "80.00", 3).await;
    let id = id_of(&product);

    let (status, _) = app
        .post(
            "/api/home/order/place-order",
            json!({
                "items": [
                    { "product_id": id, "quantity": 2 },
                    { "product_id": id, "quantity": 2 },
                ],
            }),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = app
        .get(&format!("/api/product-get/{}", id), Some(&seller.token))
        .await;
    assert_eq!(body["product"]["stock"], 3);
}

#[tokio::test]
async fn last_unit_goes_to_one_buyer() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;
    let ann = app.register_customer("Ann", "ann@example.com").await;
    let ben = app.register_customer("Ben", "ben@example.com").await;
    let product = app.add_product(&seller, "Signed Poster", "45.00", 1).await;
    let order = json!({ "items": [{ "product_id": id_of(&product), "quantity": 1 }] });

    let (first, second) = tokio::join!(
        app.post("/api/home/order/place-order", order.clone(), Some(&ann.token)),
        app.post("/api/home/order/place-order", order.clone(), Some(&ben.token)),
    );
    let mut statuses = vec![first.0, second.0];
    statuses.sort();
    assert_eq!(
        statuses,
        vec![StatusCode::CREATED, StatusCode::UNPROCESSABLE_ENTITY]
    );

    let (_, body) = app
        .get(&format!("/api/product-get/{}", id_of(&product)), Some(&seller.token))
        .await;
    assert_eq!(body["product"]["stock"], 0);
}

#[tokio::test]
async fn other_customers_orders_are_hidden() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;
    let ann = app.register_customer("Ann", "ann@example.com").await;
    let bob = app.register_customer("Bob", "bob@example.com").await;
    let product = app.add_product(&seller, "Notebook", "3.00", 50).await;

    let (_, body) = app
        .post(
            "/api/home/order/place-order",
            json!({ "items": [{ "product_id": id_of(&product), "quantity": 1 }] }),
            Some(&ann.token),
        )
        .await;
    let order_id = body["orderId"].as_str().unwrap().to_string();

    let (status, _) = app
        .get(
            &format!("/api/home/customer/get-order-details/{}", order_id),
            Some(&bob.token),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post(&format!("/api/order/confirm/{}", order_id), json!({}), Some(&bob.token))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reviews_update_product_rating() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;
    let customer = app.register_customer("Ann", "ann@example.com").await;
    let product = app.add_product(&seller, "Headphones", "75.00", 5).await;
    let product_id = id_of(&product);

    for (rating, name) in [(5, "Ann"), (4, "Bob")] {
        let (status, _) = app
            .post(
                "/api/home/customer/submit-review",
                json!({ "product_id": product_id, "name": name, "rating": rating, "review": "Solid" }),
                Some(&customer.token),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = app
        .post(
            "/api/home/customer/submit-review",
            json!({ "product_id": product_id, "name": "Eve", "rating": 6, "review": "" }),
            Some(&customer.token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .get(&format!("/api/home/customer/get-reviews/{}?pageNo=1", product_id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_review"], 2);
    assert_eq!(body["rating_review"][0]["rating"], 5);
    assert_eq!(body["rating_review"][0]["sum"], 1);

    let (_, body) = app
        .get(&format!("/api/product-get/{}", product_id), Some(&seller.token))
        .await;
    assert_eq!(num(&body["product"]["rating"]), 4.5);
}
