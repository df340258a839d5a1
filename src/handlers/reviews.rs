use crate::handlers::common::{created_response, map_service_error, success_response, validate_input};
use crate::{
    auth::{AuthRouterExt, Role},
    errors::ApiError,
    services::reviews::ReviewInput,
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

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/home/customer/get-reviews/:product_id", get(product_reviews))
}

pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/home/customer/submit-review", post(submit_review))
        .with_role(Role::Customer)
}

#[derive(Debug, Deserialize)]
struct ReviewPageQuery {
    #[serde(default = "first_page", rename = "pageNo")]
    page_no: u64,
}

fn first_page() -> u64 {
    1
}

async fn submit_review(
    State(state): State<AppState>,
    Json(payload): Json<ReviewInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let review = state
        .services
        .reviews
        .submit_review(payload)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(json!({
        "review": review,
        "message": "Review Added Successfully",
    })))
}

async fn product_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Query(query): Query<ReviewPageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let reviews = state
        .services
        .reviews
        .product_reviews(product_id, query.page_no)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(reviews))
}
