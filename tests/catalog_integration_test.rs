mod common;

use axum::http::StatusCode;
use common::{id_of, num, TestApp};
use serde_json::json;

#[tokio::test]
async fn admin_manages_categories() {
    let app = TestApp::new().await;
    let admin = app.admin().await;

    let (status, body) = app
        .post(
            "/api/category-add",
            json!({ "name": "Clothing & Fashion", "image": "https://img.example.com/c.png" }),
            Some(&admin.token),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["category"]["slug"], "clothing-fashion");

    let (status, body) = app
        .post(
            "/api/category-add",
            json!({ "name": "clothing  fashion" }),
            Some(&admin.token),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Category already exists");

    let (status, body) = app.get("/api/category-get?page=1&per_page=10", Some(&admin.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "Clothing & Fashion");

    let (status, body) = app.get("/api/home/get-categorys", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn seller_product_lifecycle() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;

    let product = app.add_product(&seller, "Wireless Mouse", "24.50", 10).await;
    let id = id_of(&product);
    assert_eq!(product["slug"], "wireless-mouse");
    assert_eq!(product["seller_id"], seller.id.to_string());
    assert_eq!(num(&product["rating"]), 0.0);

    let (status, body) = app
        .get(&format!("/api/product-get/{}", id), Some(&seller.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["name"], "Wireless Mouse");

    let (status, body) = app
        .put(
            &format!("/api/product-update/{}", id),
            json!({
                "name": "Wireless Mouse Pro",
                "category": "Electronics",
                "price": "29.99",
                "stock": 7,
                "discount": 10,
            }),
            Some(&seller.token),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["product"]["slug"], "wireless-mouse-pro");
    assert_eq!(body["product"]["stock"], 7);
    assert_eq!(body["product"]["images"][0], "https://img.example.com/p.png");

    let (status, body) = app.get("/api/products-get", Some(&seller.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);

    let (status, _) = app
        .delete(&format!("/api/product-delete/{}", id), Some(&seller.token))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .get(&format!("/api/product-get/{}", id), Some(&seller.token))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sellers_cannot_touch_each_others_products() {
    let app = TestApp::new().await;
    let owner = app.register_seller("Collins", "collins@techstore.com").await;
    let rival = app.register_seller("Fashion Hub", "fashion@hub.com").await;

    let product = app.add_product(&owner, "Laptop Stand", "35.00", 5).await;
    let id = id_of(&product);

    let (status, body) = app
        .delete(&format!("/api/product-delete/{}", id), Some(&rival.token))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied");

    let (status, _) = app
        .post(
            "/api/banner/add",
            json!({ "product_id": id, "banner": "https://img.example.com/b.png" }),
            Some(&rival.token),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn duplicate_names_get_distinct_slugs() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;

    let first = app.add_product(&seller, "USB Cable", "5.00", 100).await;
    let second = app.add_product(&seller, "USB Cable", "6.00", 100).await;

    assert_eq!(first["slug"], "usb-cable");
    let slug = second["slug"].as_str().unwrap();
    assert!(slug.starts_with("usb-cable-"));
    assert_ne!(slug, "usb-cable");
}

#[tokio::test]
async fn storefront_queries() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;

    app.add_product(&seller, "Budget Phone", "100.00", 5).await;
    app.add_product(&seller, "Flagship Phone", "900.00", 5).await;
    app.add_product(&seller, "Phone Case", "15.00", 50).await;

    let (status, body) = app.get("/api/home/price-range-latest-product", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(num(&body["priceRange"]["low"]), 15.0);
    assert_eq!(num(&body["priceRange"]["high"]), 900.0);

    let (status, body) = app
        .get("/api/home/query-products?sortPrice=low-to-high", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["per_page"], 12);
    let names: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Phone Case", "Budget Phone", "Flagship Phone"]);

    let (_, body) = app
        .get("/api/home/query-products?searchValue=Flagship", None)
        .await;
    assert_eq!(body["total"], 1);

    let (_, body) = app
        .get("/api/home/query-products?category=Books", None)
        .await;
    assert_eq!(body["total"], 0);

    let (status, body) = app.get("/api/home/get-products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().unwrap().len(), 3);
    assert_eq!(body["latest_product"][0].as_array().unwrap().len(), 3);
    assert!(body["discount_product"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn product_details_by_slug() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;

    app.add_product(&seller, "Mechanical Keyboard", "80.00", 3).await;
    app.add_product(&seller, "Keycap Set", "25.00", 3).await;

    let (status, body) = app
        .get("/api/home/product-details/mechanical-keyboard", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["name"], "Mechanical Keyboard");
    assert_eq!(body["related_products"].as_array().unwrap().len(), 1);
    assert_eq!(body["more_products"][0]["name"], "Keycap Set");

    let (status, _) = app.get("/api/home/product-details/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn banners_link_to_product_slug() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;
    let product = app.add_product(&seller, "Smart Watch", "120.00", 4).await;

    let (status, body) = app
        .post(
            "/api/banner/add",
            json!({ "product_id": id_of(&product), "banner": "https://img.example.com/b.png" }),
            Some(&seller.token),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["banner"]["link"], "smart-watch");

    let (status, body) = app.get("/api/banners", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["banners"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_rejects_negative_price() {
    let app = TestApp::new().await;
    let seller = app.register_seller("Collins", "collins@techstore.com").await;
    let product = app.add_product(&seller, "Desk Lamp", "40.00", 8).await;
    let id = id_of(&product);

    let (status, body) = app
        .put(
            &format!("/api/product-update/{}", id),
            json!({ "name": "Desk Lamp", "category": "Electronics", "price": "-50", "stock": 8 }),
            Some(&seller.token),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);

    let (_, body) = app
        .get(&format!("/api/product-get/{}", id), Some(&seller.token))
        .await;
    assert_eq!(num(&body["product"]["price"]), 40.0);
}
