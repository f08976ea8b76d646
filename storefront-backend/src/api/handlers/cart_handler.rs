// src/api/handlers/cart_handler.rs

use crate::api::dto::cart_dto::CartSummaryRequest;
use crate::api::{dto::common::ApiResponse, AppState};
use crate::domain::cart::CartSummary;
use crate::error::{AppError, AppResult};
use crate::utils::error_helper::convert_validation_errors;
use axum::{extract::Json, routing::post, Router};
use validator::Validate;

/// クライアントのカート明細を正規化して集計する
pub async fn cart_summary_handler(
    Json(payload): Json<CartSummaryRequest>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    payload
        .validate()
        .map_err(|e| convert_validation_errors(e, "cart_handler::cart_summary"))?;

    let summary = payload.into_cart().summary().ok_or_else(|| {
        AppError::ValidationError("items: cart total exceeds the supported amount".to_string())
    })?;

    Ok(Json(ApiResponse::success("Cart summary calculated", summary)))
}

pub fn cart_router(app_state: AppState) -> Router {
    Router::new()
        .route("/cart/summary", post(cart_summary_handler))
        .with_state(app_state)
}
