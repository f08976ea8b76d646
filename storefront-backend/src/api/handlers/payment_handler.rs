// src/api/handlers/payment_handler.rs

use crate::api::dto::payment_dto::{
    CreateCheckoutRequest, CreateCheckoutResponse, CreateCustomerRequest, CustomerResponse,
};
use crate::api::{dto::common::ApiResponse, AppState};
use crate::error::AppResult;
use crate::service::polar_client::{PolarCustomer, PolarCustomerState};
use crate::utils::error_helper::{convert_validation_errors, not_found_error, parse_uuid};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tracing::info;
use validator::Validate;

/// Polar顧客作成
pub async fn create_customer_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<PolarCustomer>>)> {
    payload
        .validate()
        .map_err(|e| convert_validation_errors(e, "payment_handler::create_customer"))?;

    info!(user_id = %payload.user_id, "Creating Polar customer");

    let customer = app_state
        .sync_service
        .create_customer(payload.user_id, &payload.email, payload.name.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Customer created successfully", customer)),
    ))
}

/// チェックアウトURL作成
pub async fn create_checkout_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCheckoutRequest>,
) -> AppResult<Json<ApiResponse<CreateCheckoutResponse>>> {
    payload
        .validate()
        .map_err(|e| convert_validation_errors(e, "payment_handler::create_checkout"))?;

    info!(
        customer_id = %payload.customer_id,
        product = %payload.product_slug,
        "Creating checkout session"
    );

    let checkout_url = app_state
        .sync_service
        .get_checkout_url(&payload.customer_id, &payload.product_slug)
        .await?;

    Ok(Json(ApiResponse::success(
        "Checkout session created successfully",
        CreateCheckoutResponse { checkout_url },
    )))
}

/// ユーザーに紐づくローカルの顧客情報
pub async fn get_customer_handler(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<CustomerResponse>>> {
    let user_id = parse_uuid(&user_id, "user_id")?;

    let customer = app_state
        .sync_service
        .get_customer_by_user_id(user_id)
        .await?
        .ok_or_else(|| {
            not_found_error(
                "Polar customer",
                &user_id.to_string(),
                "payment_handler::get_customer",
            )
        })?;

    Ok(Json(ApiResponse::success(
        "Customer retrieved successfully",
        customer.into(),
    )))
}

/// Polar上の顧客状態
pub async fn get_customer_state_handler(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<PolarCustomerState>>> {
    let user_id = parse_uuid(&user_id, "user_id")?;

    let state = app_state
        .sync_service
        .get_customer_state(user_id)
        .await?
        .ok_or_else(|| {
            not_found_error(
                "Polar customer",
                &user_id.to_string(),
                "payment_handler::get_customer_state",
            )
        })?;

    Ok(Json(ApiResponse::success(
        "Customer state retrieved successfully",
        state,
    )))
}

pub fn payment_router(app_state: AppState) -> Router {
    Router::new()
        .route("/payments/customers", post(create_customer_handler))
        .route("/payments/checkout", post(create_checkout_handler))
        .route("/payments/customers/{user_id}", get(get_customer_handler))
        .route(
            "/payments/customers/{user_id}/state",
            get(get_customer_state_handler),
        )
        .with_state(app_state)
}
