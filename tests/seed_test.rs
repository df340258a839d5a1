mod common;

use axum::http::StatusCode;
use common::TestApp;
use marketplace_api::{
    entities::{product, seller, SellerStatus},
    seed::{Profile, Seeder},
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

#[tokio::test]
async fn standard_profile_populates_storefront() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    let summary = Seeder::new(db, Some(42))
        .unwrap()
        .run(Profile::Standard)
        .await
        .unwrap();

    assert_eq!(summary.count("admins"), 2);
    assert_eq!(summary.count("sellers"), 2);
    assert_eq!(summary.count("customers"), 6);
    assert_eq!(summary.count("categories"), 8);
    assert_eq!(summary.count("products"), 18);
    assert_eq!(summary.count("banners"), 4);
    assert!((36..=72).contains(&summary.count("reviews")));
    assert!((6..=18).contains(&summary.count("customer_orders")));
    assert!(summary.count("seller_orders") >= summary.count("customer_orders"));
    assert_eq!(summary.count("seller_wallets"), 12);

    let active = seller::Entity::find()
        .filter(seller::Column::Status.eq(SellerStatus::Active))
        .count(db)
        .await
        .unwrap();
    assert_eq!(active, 2);

    let unrated = product::Entity::find()
        .filter(product::Column::Rating.eq(0))
        .count(db)
        .await
        .unwrap();
    assert_eq!(unrated, 0);
}

#[tokio::test]
async fn seeded_accounts_can_log_in() {
    let app = TestApp::new().await;
    Seeder::new(&app.state.db, Some(7))
        .unwrap()
        .run(Profile::Standard)
        .await
        .unwrap();

    let (status, _) = app
        .post(
            "/api/seller-login",
            json!({ "email": "collins@techstore.com", "password": "secret" }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/api/home/query-products", None).await;
    assert_eq!(body["total"], 18);
}

#[tokio::test]
async fn standard_profile_is_rerunnable() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    Seeder::new(db, Some(1)).unwrap().run(Profile::Standard).await.unwrap();
    let summary = Seeder::new(db, Some(2)).unwrap().run(Profile::Standard).await.unwrap();

    assert_eq!(summary.count("sellers"), 2);
    assert_eq!(summary.count("admins"), 2);
    assert_eq!(summary.count("products"), 18);
}

#[tokio::test]
async fn jersey_profile_replaces_its_own_catalog() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    let first = Seeder::new(db, Some(3)).unwrap().run(Profile::Jerseys).await.unwrap();
    assert_eq!(first.count("products"), 90);
    assert_eq!(first.count("sellers"), 1);
    assert_eq!(first.count("categories"), 5);

    let second = Seeder::new(db, Some(4)).unwrap().run(Profile::Jerseys).await.unwrap();
    assert_eq!(second.count("products"), 90);
    assert_eq!(second.count("categories"), 5);
}

#[tokio::test]
async fn products_only_creates_a_seller_when_missing() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    let summary = Seeder::new(db, None)
        .unwrap()
        .run(Profile::ProductsOnly)
        .await
        .unwrap();
    assert_eq!(summary.count("sellers"), 1);
    assert_eq!(summary.count("products"), 5);
}

#[tokio::test]
async fn all_profile_uses_fixed_seller_ids() {
    let app = TestApp::new().await;
    let db = &*app.state.db;

    let summary = Seeder::new(db, Some(9)).unwrap().run(Profile::All).await.unwrap();
    assert_eq!(summary.count("sellers"), 4);
    assert_eq!(summary.count("categories"), 11);
    assert_eq!(summary.count("products"), 18 + 90);

    let first = uuid::Uuid::from_u128(0x5e11e700_0000_4000_8000_000000000001);
    let seller = seller::Entity::find_by_id(first).one(db).await.unwrap().unwrap();
    assert_eq!(seller.email, "collins@techstore.com");
}
