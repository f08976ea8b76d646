// src/db.rs
use crate::config::AppConfig;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use std::time::Duration;

pub type DbPool = DatabaseConnection;

pub async fn create_db_pool(config: &AppConfig) -> Result<DbPool, DbErr> {
    Database::connect(&config.database_url).await
}

// スキーマを指定して接続するバージョン
pub async fn create_db_pool_with_schema(config: &AppConfig, schema: &str) -> Result<DbPool, DbErr> {
    let mut opt = ConnectOptions::new(config.database_url.clone());

    // 接続オプションを設定
    opt.max_connections(20)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8 * 60))
        .sqlx_logging(config.is_development())
        .set_schema_search_path(schema.to_string());

    Database::connect(opt).await
}

/// 設定に応じて接続プールを作成（スキーマがなければ作成する）
pub async fn connect(config: &AppConfig) -> Result<DbPool, DbErr> {
    let Some(schema) = &config.db_schema else {
        return create_db_pool(config).await;
    };

    tracing::info!(schema = %schema, "Using schema");
    let base_pool = create_db_pool(config).await?;
    if !schema_exists(&base_pool, schema).await? {
        tracing::info!(schema = %schema, "Schema does not exist, creating it");
        create_schema(&base_pool, schema).await?;
    }
    base_pool.close().await?;

    create_db_pool_with_schema(config, schema).await
}

// 接続確認用の最小クエリ
pub async fn ping(conn: &DbPool) -> Result<i32, DbErr> {
    let result = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT 1 AS test",
        ))
        .await?
        .ok_or_else(|| DbErr::Custom("SELECT 1 returned no rows".to_string()))?;

    result.try_get("", "test")
}

// スキーマが存在するか確認するヘルパー関数
pub async fn schema_exists(conn: &DbPool, schema: &str) -> Result<bool, DbErr> {
    let result_opt = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT EXISTS (
                SELECT 1 FROM information_schema.schemata
                WHERE schema_name = $1
            ) AS exists;",
            [schema.into()],
        ))
        .await?;

    // 結果が存在すれば処理、なければfalseを返す
    if let Some(result) = result_opt {
        let exists: bool = result.try_get("", "exists")?;
        Ok(exists)
    } else {
        Ok(false)
    }
}

// スキーマ内のテーブル名一覧（名前順）
pub async fn list_tables(conn: &DbPool, schema: &str) -> Result<Vec<String>, DbErr> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT table_name::text AS table_name
             FROM information_schema.tables
             WHERE table_schema = $1
             ORDER BY table_name",
            [schema.into()],
        ))
        .await?;

    rows.iter()
        .map(|row| row.try_get::<String>("", "table_name"))
        .collect()
}

// スキーマを作成するヘルパー関数
pub async fn create_schema(conn: &DbPool, schema: &str) -> Result<(), DbErr> {
    let create_schema = format!(
        "CREATE SCHEMA IF NOT EXISTS \"{}\";",
        schema.replace('"', "\"\"")
    );
    conn.execute(Statement::from_string(DatabaseBackend::Postgres, create_schema))
        .await?;
    Ok(())
}
