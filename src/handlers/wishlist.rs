use crate::handlers::common::{caller_id, created_response, map_service_error, success_response};
use crate::{
    auth::{AuthRouterExt, AuthUser, Role},
    errors::ApiError,
    services::wishlist::AddToWishlistInput,
    AppState,
};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};
use serde_json::json;
use uuid::Uuid;

pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/home/product/add-to-wishlist", post(add_to_wishlist))
        .route("/home/product/get-wishlist-products", get(get_wishlist))
        .route(
            "/home/product/remove-wishlist-product/:wishlist_id",
            delete(remove_wishlist),
        )
        .with_role(Role::Customer)
}

async fn add_to_wishlist(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<AddToWishlistInput>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state
        .services
        .wishlist
        .add_to_wishlist(caller_id(&user)?, payload.product_id)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(json!({
        "wishlist": entry,
        "message": "Product Add to Wishlist Success",
    })))
}

async fn get_wishlist(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let view = state
        .services
        .wishlist
        .get_wishlist(caller_id(&user)?)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(view))
}

async fn remove_wishlist(
    State(state): State<AppState>,
    user: AuthUser,
    Path(wishlist_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .wishlist
        .remove_wishlist(caller_id(&user)?, wishlist_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({
        "message": "Wishlist Product Remove",
        "wishlistId": wishlist_id,
    })))
}
