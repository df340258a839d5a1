use crate::handlers::common::{
    caller_id, created_response, map_service_error, success_response, PaginatedResponse,
};
use crate::{
    auth::{AuthRouterExt, AuthUser, Role},
    entities::DeliveryStatus,
    errors::ApiError,
    services::{orders::PlaceOrderInput, ListQuery},
    AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/home/order/place-order", post(place_order))
        .route("/home/customer/get-dashboard-data", get(customer_dashboard))
        .route("/home/customer/get-orders/:status", get(customer_orders))
        .route(
            "/home/customer/get-order-details/:order_id",
            get(order_details),
        )
        .route("/order/confirm/:order_id", post(confirm_payment))
        .with_role(Role::Customer)
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/orders", get(admin_orders))
        .route("/admin/order/:order_id", get(admin_order_details))
        .route(
            "/admin/order-status/update/:order_id",
            put(admin_order_status_update),
        )
        .with_role(Role::Admin)
}

pub fn seller_routes() -> Router<AppState> {
    Router::new()
        .route("/seller/orders", get(seller_orders))
        .route("/seller/order/:order_id", get(seller_order_details))
        .route(
            "/seller/order-status/update/:order_id",
            put(seller_order_status_update),
        )
        .with_role(Role::Seller)
}

#[derive(Debug, Deserialize)]
struct StatusRequest {
    status: DeliveryStatus,
}

async fn place_order(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<PlaceOrderInput>,
) -> Result<impl IntoResponse, ApiError> {
    let order_id = state
        .services
        .orders
        .place_order(caller_id(&user)?, payload)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(json!({
        "orderId": order_id,
        "message": "Order Placed Success",
    })))
}

async fn customer_dashboard(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let dashboard = state
        .services
        .orders
        .customer_dashboard(caller_id(&user)?)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(dashboard))
}

async fn customer_orders(
    State(state): State<AppState>,
    user: AuthUser,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let orders = state
        .services
        .orders
        .customer_orders(caller_id(&user)?, &status)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "orders": orders })))
}

async fn order_details(
    State(state): State<AppState>,
    user: AuthUser,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state
        .services
        .orders
        .order_details(caller_id(&user)?, order_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "order": order })))
}

/// Payment callback: only the ordering customer may confirm
async fn confirm_payment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let orders = &state.services.orders;
    orders
        .order_details(caller_id(&user)?, order_id)
        .await
        .map_err(map_service_error)?;
    let order = orders
        .confirm_payment(order_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({
        "order": order,
        "message": "Payment Confirmed",
    })))
}

async fn admin_orders(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state
        .services
        .orders
        .admin_orders(&query)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(PaginatedResponse::from_page(page, &query)))
}

async fn admin_order_details(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state
        .services
        .orders
        .admin_order_details(order_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "order": order })))
}

async fn admin_order_status_update(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Json(payload): Json<StatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state
        .services
        .orders
        .admin_order_status_update(order_id, payload.status)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({
        "order": order,
        "message": "Order Status Change Success",
    })))
}

async fn seller_orders(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state
        .services
        .orders
        .seller_orders(caller_id(&user)?, &query)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(PaginatedResponse::from_page(page, &query)))
}

async fn seller_order_details(
    State(state): State<AppState>,
    user: AuthUser,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state
        .services
        .orders
        .seller_order_details(caller_id(&user)?, order_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "order": order })))
}

async fn seller_order_status_update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(order_id): Path<Uuid>,
    Json(payload): Json<StatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let order = state
        .services
        .orders
        .seller_order_status_update(caller_id(&user)?, order_id, payload.status)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({
        "order": order,
        "message": "Order Status Updated",
    })))
}
