// src/api/handlers/admin_handler.rs

use crate::api::dto::admin_dto::AdminSummaryResponse;
use crate::api::{dto::common::ApiResponse, AppState};
use crate::error::AppResult;
use axum::{
    extract::{Json, State},
    routing::get,
    Router,
};

/// 管理画面用のユーザー・アップロード一覧
pub async fn admin_summary_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<AdminSummaryResponse>>> {
    let users = app_state
        .admin_report_service
        .get_users_with_uploads()
        .await?;

    Ok(Json(ApiResponse::success(
        "Admin summary retrieved successfully",
        users.into(),
    )))
}

pub fn admin_router(app_state: AppState) -> Router {
    Router::new()
        .route("/admin/summary", get(admin_summary_handler))
        .with_state(app_state)
}
