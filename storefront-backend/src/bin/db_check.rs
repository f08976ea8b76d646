// src/bin/db_check.rs

//! データベース接続の確認ツール
//!
//! DATABASE_URL（と任意のDB_SCHEMA）で接続し、SELECT 1・スキーマ・テーブル一覧を出力する。

use std::process::ExitCode;
use storefront_backend::config::AppConfig;
use storefront_backend::db;
use storefront_backend::logging::init_tracing;
use storefront_backend::service::diagnostics_service::DiagnosticsService;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(database_url = %config.redacted_database_url(), "Testing database connection");

    let conn = match db::connect(&config).await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!(error = %e, "Database connection failed");
            return ExitCode::FAILURE;
        }
    };

    let service = DiagnosticsService::new(conn, config.db_schema.clone());
    match service.check().await {
        Ok(report) => {
            tracing::info!(select_one = report.select_one, "Connection successful");
            if report.schema_exists {
                tracing::info!(schema = %report.schema, "Schema exists");
            } else {
                tracing::warn!(schema = %report.schema, "Schema does not exist");
            }
            if report.tables.is_empty() {
                tracing::warn!("No tables found");
            }
            for table in &report.tables {
                tracing::info!(table = %table, "Table");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Database check failed");
            ExitCode::FAILURE
        }
    }
}
