// src/utils/error_helper.rs

//! エラーハンドリングの共通ヘルパー

use crate::error::AppError;
use tracing::warn;
use uuid::Uuid;
use validator::{ValidationErrors, ValidationErrorsKind};

/// validatorのValidationErrorsをAppErrorに変換する
///
/// ネストした構造体・リストのエラーも `items[0].id` の形式のフィールド名で展開する。
pub fn convert_validation_errors(validation_errors: ValidationErrors, context: &str) -> AppError {
    let errors = validation_messages(&validation_errors);

    warn!(
        context = %context,
        error_count = errors.len(),
        "Validation failed"
    );

    AppError::ValidationErrors(errors)
}

/// ValidationErrorsを "field: message" 形式の一覧に展開（ソート済み）
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_validation_messages(errors, "", &mut messages);
    messages.sort();
    messages
}

fn collect_validation_messages(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| {
                    let message = error
                        .message
                        .as_ref()
                        .map_or_else(|| "Invalid value".to_string(), |cow| cow.to_string());
                    format!("{}: {}", path, message)
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_messages(nested, &path, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_validation_messages(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

/// パスパラメータなどの文字列をUUIDとして解釈
pub fn parse_uuid(value: &str, field: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value.trim())
        .map_err(|_| AppError::ValidationError(format!("{}: must be a valid UUID", field)))
}

/// リソース未発見エラーをログ付きで生成
pub fn not_found_error(resource: &str, identifier: &str, context: &str) -> AppError {
    warn!(
        context = %context,
        resource = %resource,
        identifier = %identifier,
        "Resource not found"
    );
    AppError::NotFound(format!(
        "{} with identifier {} not found",
        resource, identifier
    ))
}
