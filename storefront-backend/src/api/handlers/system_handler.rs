// src/api/handlers/system_handler.rs

use crate::api::dto::system_dto::SystemInfoResponse;
use crate::api::{dto::common::ApiResponse, AppState};
use crate::error::AppResult;
use crate::service::diagnostics_service::DatabaseReport;
use axum::{
    extract::{Json, State},
    routing::get,
    Router,
};

pub async fn health_handler() -> &'static str {
    "OK"
}

pub async fn get_system_info(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<SystemInfoResponse>>> {
    let config = &app_state.config;

    Ok(Json(ApiResponse::success(
        "System information retrieved",
        SystemInfoResponse {
            environment: config.environment.clone(),
            is_test: config.is_test(),
            is_production: config.is_production(),
            is_development: config.is_development(),
        },
    )))
}

/// データベース接続テスト
pub async fn test_db_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<ApiResponse<DatabaseReport>>> {
    let report = app_state.diagnostics_service.check().await?;

    Ok(Json(ApiResponse::success(
        "Database connection successful",
        report,
    )))
}

pub fn system_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/system/info", get(get_system_info))
        .route("/api/test-db", get(test_db_handler))
        .with_state(app_state)
}
