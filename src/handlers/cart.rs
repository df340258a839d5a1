use crate::handlers::common::{caller_id, created_response, map_service_error, success_response};
use crate::{
    auth::{AuthRouterExt, AuthUser, Role},
    errors::ApiError,
    services::cart::AddToCartInput,
    AppState,
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use serde_json::json;
use uuid::Uuid;

/// Creates the router for cart endpoints
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/home/product/add-to-cart", post(add_to_cart))
        .route("/home/product/get-cart-products", get(get_cart))
        .route(
            "/home/product/delete-cart-product/:cart_id",
            delete(delete_cart_item),
        )
        .route("/home/product/quantity-inc/:cart_id", put(quantity_inc))
        .route("/home/product/quantity-dec/:cart_id", put(quantity_dec))
        .with_role(Role::Customer)
}

async fn add_to_cart(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<AddToCartInput>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state
        .services
        .cart
        .add_to_cart(caller_id(&user)?, payload)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(json!({
        "item": item,
        "message": "Added To Cart Successfully",
    })))
}

async fn get_cart(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let cart = state
        .services
        .cart
        .get_cart(caller_id(&user)?)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(cart))
}

async fn delete_cart_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(cart_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .cart
        .delete_cart_item(caller_id(&user)?, cart_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "message": "Product Remove Successfully" })))
}

async fn quantity_inc(
    State(state): State<AppState>,
    user: AuthUser,
    Path(cart_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state
        .services
        .cart
        .quantity_inc(caller_id(&user)?, cart_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "item": item, "message": "Qty Updated" })))
}

async fn quantity_dec(
    State(state): State<AppState>,
    user: AuthUser,
    Path(cart_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state
        .services
        .cart
        .quantity_dec(caller_id(&user)?, cart_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "item": item, "message": "Qty Updated" })))
}
