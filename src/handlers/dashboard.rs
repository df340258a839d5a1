//! Seller management, payouts and the two dashboards.

use crate::handlers::common::{
    caller_id, created_response, map_service_error, success_response, PaginatedResponse,
};
use crate::{
    auth::{AuthRouterExt, AuthUser, Role},
    entities::SellerStatus,
    errors::ApiError,
    services::{payments::WithdrawalInput, ListQuery},
    AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/get-sellers", get(sellers_by_status))
        .route("/get-seller/:seller_id", get(get_seller))
        .route("/seller-status-update", post(seller_status_update))
        .route("/payment/request", get(pending_requests))
        .route("/payment/request-confirm", post(confirm_withdrawal))
        .route("/admin/get-dashboard-data", get(admin_dashboard))
        .with_role(Role::Admin)
}

pub fn seller_routes() -> Router<AppState> {
    Router::new()
        .route("/payment/seller-payment-details", get(payment_details))
        .route("/payment/withdrawal-request", post(withdrawal_request))
        .route("/seller/get-dashboard-data", get(seller_dashboard))
        .with_role(Role::Seller)
}

#[derive(Debug, Deserialize)]
struct SellerListQuery {
    status: SellerStatus,
    page: Option<u64>,
    per_page: Option<u64>,
    search: Option<String>,
}

impl SellerListQuery {
    fn list(&self) -> ListQuery {
        let defaults = ListQuery::default();
        ListQuery {
            page: self.page.unwrap_or(defaults.page),
            per_page: self.per_page.unwrap_or(defaults.per_page),
            search: self.search.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SellerStatusRequest {
    seller_id: Uuid,
    status: SellerStatus,
}

#[derive(Debug, Deserialize)]
struct ConfirmWithdrawalRequest {
    payment_id: Uuid,
}

async fn sellers_by_status(
    State(state): State<AppState>,
    Query(query): Query<SellerListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let list = query.list();
    let page = state
        .services
        .sellers
        .sellers_by_status(query.status, &list)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(PaginatedResponse::from_page(page, &list)))
}

async fn get_seller(
    State(state): State<AppState>,
    Path(seller_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let seller = state
        .services
        .sellers
        .get_seller(seller_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "seller": seller })))
}

async fn seller_status_update(
    State(state): State<AppState>,
    Json(payload): Json<SellerStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let seller = state
        .services
        .sellers
        .seller_status_update(payload.seller_id, payload.status)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({
        "seller": seller,
        "message": "Seller Status Updated Successfully",
    })))
}

async fn payment_details(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let details = state
        .services
        .payments
        .seller_payment_details(caller_id(&user)?)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(details))
}

async fn withdrawal_request(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<WithdrawalInput>,
) -> Result<impl IntoResponse, ApiError> {
    let request = state
        .services
        .payments
        .withdrawal_request(caller_id(&user)?, payload.amount)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(json!({
        "withdrawal": request,
        "message": "Withdrawal Request Sent",
    })))
}

async fn pending_requests(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let requests = state
        .services
        .payments
        .admin_pending_requests()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "withdrawalRequest": requests })))
}

async fn confirm_withdrawal(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmWithdrawalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let request = state
        .services
        .payments
        .confirm_withdrawal(payload.payment_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({
        "payment": request,
        "message": "Request Confirm Success",
    })))
}

async fn admin_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let dashboard = state
        .services
        .dashboard
        .admin_dashboard()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(dashboard))
}

async fn seller_dashboard(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let dashboard = state
        .services
        .dashboard
        .seller_dashboard(caller_id(&user)?)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(dashboard))
}
