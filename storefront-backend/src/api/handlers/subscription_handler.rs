// src/api/handlers/subscription_handler.rs

use crate::api::dto::subscription_dto::{
    ActiveSubscriptionResponse, SubscriptionResponse, SyncSubscriptionRequest,
    SyncSubscriptionResponse,
};
use crate::api::{dto::common::ApiResponse, AppState};
use crate::error::AppResult;
use crate::utils::error_helper::{convert_validation_errors, parse_uuid};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde_json::json;
use validator::Validate;

pub async fn list_subscriptions_handler(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<SubscriptionResponse>>>> {
    let user_id = parse_uuid(&user_id, "user_id")?;

    let subscriptions: Vec<SubscriptionResponse> = app_state
        .sync_service
        .get_user_subscriptions(user_id)
        .await?
        .into_iter()
        .map(SubscriptionResponse::from)
        .collect();

    let total = subscriptions.len();
    Ok(Json(ApiResponse::success_with_metadata(
        "Subscriptions retrieved successfully",
        subscriptions,
        json!({ "total": total }),
    )))
}

pub async fn active_subscription_handler(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<ActiveSubscriptionResponse>>> {
    let user_id = parse_uuid(&user_id, "user_id")?;

    let has_active_subscription = app_state
        .sync_service
        .has_active_subscription(user_id)
        .await?;

    Ok(Json(ApiResponse::success(
        "Subscription status retrieved successfully",
        ActiveSubscriptionResponse {
            user_id,
            has_active_subscription,
        },
    )))
}

/// サブスクリプションの同期（新規なら201、更新なら200）
pub async fn sync_subscription_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<SyncSubscriptionRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<SyncSubscriptionResponse>>)> {
    payload
        .validate()
        .map_err(|e| convert_validation_errors(e, "subscription_handler::sync_subscription"))?;

    let outcome = app_state
        .sync_service
        .sync_subscription(
            payload.user_id,
            &payload.customer_id,
            &payload.subscription_id,
            &payload.product_id,
            &payload.status,
        )
        .await?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(ApiResponse::success(
            "Subscription synced successfully",
            outcome.into(),
        )),
    ))
}

pub fn subscription_router(app_state: AppState) -> Router {
    Router::new()
        .route("/subscriptions/sync", post(sync_subscription_handler))
        .route("/subscriptions/{user_id}", get(list_subscriptions_handler))
        .route(
            "/subscriptions/{user_id}/active",
            get(active_subscription_handler),
        )
        .with_state(app_state)
}
