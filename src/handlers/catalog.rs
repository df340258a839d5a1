use crate::handlers::common::{
    caller_id, created_response, map_service_error, success_response, validate_input,
    PaginatedResponse,
};
use crate::{
    auth::{AuthRouterExt, AuthUser, Role},
    errors::ApiError,
    services::{
        catalog::{CategoryInput, ProductFilter, ProductInput},
        ListQuery,
    },
    AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

/// Storefront reads
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/home/get-categorys", get(list_categories))
        .route("/home/get-products", get(home_products))
        .route("/home/price-range-latest-product", get(price_range))
        .route("/home/query-products", get(query_products))
        .route("/home/product-details/:slug", get(product_details))
        .route("/banners", get(list_banners))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/category-add", post(add_category))
        .route("/category-get", get(list_categories))
        .with_role(Role::Admin)
}

pub fn seller_routes() -> Router<AppState> {
    Router::new()
        .route("/product-add", post(add_product))
        .route("/products-get", get(seller_products))
        .route("/product-get/:product_id", get(get_product))
        .route("/product-update/:product_id", put(update_product))
        .route("/product-delete/:product_id", delete(delete_product))
        .route("/banner/add", post(add_banner))
        .route("/banner/get/:product_id", get(get_banner))
        .route("/banner/update/:banner_id", put(update_banner))
        .with_role(Role::Seller)
}

async fn add_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let category = state
        .services
        .catalog
        .add_category(payload)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(json!({
        "category": category,
        "message": "Category Added Successfully",
    })))
}

async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state
        .services
        .catalog
        .list_categories(&query)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(PaginatedResponse::from_page(page, &query)))
}

async fn add_product(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<ProductInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let product = state
        .services
        .catalog
        .add_product(caller_id(&user)?, payload)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(json!({
        "product": product,
        "message": "Product Added Successfully",
    })))
}

async fn seller_products(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state
        .services
        .catalog
        .seller_products(caller_id(&user)?, &query)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(PaginatedResponse::from_page(page, &query)))
}

async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .catalog
        .get_product(product_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "product": product })))
}

async fn update_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<Uuid>,
    Json(payload): Json<ProductInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let product = state
        .services
        .catalog
        .update_product(caller_id(&user)?, product_id, payload)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({
        "product": product,
        "message": "Product Updated Successfully",
    })))
}

async fn delete_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .catalog
        .delete_product(caller_id(&user)?, product_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "message": "Product Deleted Successfully" })))
}

async fn home_products(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let products = state
        .services
        .catalog
        .home_products()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(products))
}

async fn price_range(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let range = state
        .services
        .catalog
        .price_range()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "priceRange": range })))
}

async fn query_products(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .services
        .catalog
        .query_products(&filter)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(result))
}

async fn product_details(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let details = state
        .services
        .catalog
        .product_details(&slug)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(details))
}

#[derive(Debug, Deserialize)]
struct AddBannerRequest {
    product_id: Uuid,
    banner: String,
}

#[derive(Debug, Deserialize)]
struct UpdateBannerRequest {
    banner: String,
}

async fn add_banner(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<AddBannerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let banner = state
        .services
        .catalog
        .add_banner(caller_id(&user)?, payload.product_id, payload.banner)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(json!({
        "banner": banner,
        "message": "Banner Add Success",
    })))
}

async fn get_banner(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let banner = state
        .services
        .catalog
        .get_banner(product_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "banner": banner })))
}

async fn update_banner(
    State(state): State<AppState>,
    user: AuthUser,
    Path(banner_id): Path<Uuid>,
    Json(payload): Json<UpdateBannerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let banner = state
        .services
        .catalog
        .update_banner(caller_id(&user)?, banner_id, payload.banner)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({
        "banner": banner,
        "message": "Banner Updated Success",
    })))
}

async fn list_banners(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let banners = state
        .services
        .catalog
        .list_banners()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "banners": banners })))
}
