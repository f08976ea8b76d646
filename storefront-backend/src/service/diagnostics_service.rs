// src/service/diagnostics_service.rs

use crate::db::{self, DbPool};
use crate::error::AppResult;
use serde::Serialize;

const DEFAULT_SCHEMA: &str = "public";

/// データベース接続の診断結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseReport {
    pub connected: bool,
    pub select_one: i32,
    pub schema: String,
    pub schema_exists: bool,
    pub tables: Vec<String>,
}

#[derive(Clone)]
pub struct DiagnosticsService {
    db: DbPool,
    schema: String,
}

impl DiagnosticsService {
    pub fn new(db: DbPool, schema: Option<String>) -> Self {
        Self {
            db,
            schema: schema.unwrap_or_else(|| DEFAULT_SCHEMA.to_string()),
        }
    }

    /// SELECT 1・スキーマの有無・テーブル一覧を確認
    pub async fn check(&self) -> AppResult<DatabaseReport> {
        let select_one = db::ping(&self.db).await?;
        let schema_exists = db::schema_exists(&self.db, &self.schema).await?;
        let tables = if schema_exists {
            db::list_tables(&self.db, &self.schema).await?
        } else {
            Vec::new()
        };

        tracing::info!(
            schema = %self.schema,
            schema_exists,
            table_count = tables.len(),
            "Database check completed"
        );

        Ok(DatabaseReport {
            connected: true,
            select_one,
            schema: self.schema.clone(),
            schema_exists,
            tables,
        })
    }
}
