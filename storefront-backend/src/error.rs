// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::error_helper::validation_messages;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Multiple validation errors")]
    ValidationErrors(Vec<String>),

    #[error("Failed to parse UUID: {0}")]
    UuidError(#[from] uuid::Error),

    #[error("Validation failed")]
    ValidationFailure(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

/// 呼び出し側が「データなし」と「呼び出し失敗」を区別するためのエラー分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    RemoteUnavailable,
    PersistenceFailure,
    InvalidInput,
    Conflict,
    Internal,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::DbErr(DbErr::RecordNotFound(_)) => ErrorKind::NotFound,
            AppError::DbErr(_) => ErrorKind::PersistenceFailure,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::ValidationError(_)
            | AppError::ValidationErrors(_)
            | AppError::UuidError(_)
            | AppError::ValidationFailure(_)
            | AppError::BadRequest(_) => ErrorKind::InvalidInput,
            AppError::Conflict(_) => ErrorKind::Conflict,
            AppError::InternalServerError(_) => ErrorKind::Internal,
            AppError::ExternalServiceError(_) => ErrorKind::RemoteUnavailable,
        }
    }
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::DbErr(db_err) => {
                tracing::error!(error = ?db_err, "Database error"); // サーバーログには詳細を出す

                let status = match db_err {
                    DbErr::RecordNotFound(_) => StatusCode::NOT_FOUND,
                    DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };

                let (message, details) = match &db_err {
                    DbErr::RecordNotFound(entity) => (
                        "The requested resource was not found".to_string(),
                        Some(json!({ "entity": entity })),
                    ),
                    DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => (
                        "Database connection not available".to_string(),
                        Some(json!({ "operation": "connect", "hint": "Check DATABASE_URL" })),
                    ),
                    DbErr::Exec(_) => (
                        "A database operation failed".to_string(),
                        Some(json!({ "operation": "exec", "hint": "Check database connection" })),
                    ),
                    DbErr::Query(_) => (
                        "A database query failed".to_string(),
                        Some(json!({ "operation": "query", "hint": "Check query syntax" })),
                    ),
                    _ => ("A database error occurred".to_string(), None),
                };

                (
                    status,
                    ErrorResponse::new(message, "database_error").with_details(details),
                )
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(message, "not_found"),
            ),
            AppError::ValidationError(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message, "validation_error"),
            ),
            AppError::ValidationErrors(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Validation failed", "validation_errors")
                    .with_validation_errors(group_by_field(&errors)),
            ),
            AppError::UuidError(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(format!("Invalid UUID: {}", err), "invalid_uuid"),
            ),
            AppError::ValidationFailure(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Validation failed", "validation_errors")
                    .with_validation_errors(group_by_field(&validation_messages(&errors))),
            ),
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message, "bad_request"),
            ),
            AppError::Conflict(message) => {
                (StatusCode::CONFLICT, ErrorResponse::new(message, "conflict"))
            }
            AppError::InternalServerError(message) => {
                tracing::error!(message = %message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("An internal server error occurred", "internal_server_error"),
                )
            }
            AppError::ExternalServiceError(message) => {
                tracing::error!(message = %message, "External service error");
                let mut response = ErrorResponse::new(message, "external_service_error");
                response.error = "External service error".to_string();
                (StatusCode::BAD_GATEWAY, response)
            }
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<HashMap<String, Vec<String>>>,
    pub error_type: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>, error_type: &str) -> Self {
        let message = message.into();
        Self {
            success: false,
            error: message.clone(),
            message,
            details: None,
            validation_errors: None,
            error_type: error_type.to_string(),
        }
    }

    fn with_details(mut self, details: Option<serde_json::Value>) -> Self {
        self.details = details;
        self
    }

    fn with_validation_errors(mut self, errors: HashMap<String, Vec<String>>) -> Self {
        self.validation_errors = Some(errors);
        self
    }
}

/// "field: message" 形式のメッセージをフィールドごとにまとめる
fn group_by_field(errors: &[String]) -> HashMap<String, Vec<String>> {
    let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
    for error in errors {
        if let Some((field, message)) = error.split_once(": ") {
            field_errors
                .entry(field.to_string())
                .or_default()
                .push(message.to_string());
        }
    }
    field_errors
}
