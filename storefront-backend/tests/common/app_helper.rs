// tests/common/app_helper.rs

use axum::Router;
use std::sync::Arc;
use storefront_backend::api::{self, AppState};
use storefront_backend::config::AppConfig;
use storefront_backend::service::subscription_sync_service::SubscriptionSyncService;

use crate::common::{db::TestDatabase, mock_polar::MockPolarClient};

/// モックPolarクライアントを使ったアプリのセットアップ
pub async fn setup_app() -> (Router, TestDatabase, MockPolarClient) {
    let db = TestDatabase::new().await;
    let polar = MockPolarClient::new();

    let mut config = AppConfig::for_testing();
    config.database_url = db.url.clone();

    let app_state = AppState::new(db.connection.clone(), config, Arc::new(polar.clone()));
    (api::router(app_state), db, polar)
}

/// サービス単体のテスト用
pub async fn setup_sync_service() -> (SubscriptionSyncService, TestDatabase, MockPolarClient) {
    let db = TestDatabase::new().await;
    let polar = MockPolarClient::new();
    let service = SubscriptionSyncService::new(db.connection.clone(), Arc::new(polar.clone()));
    (service, db, polar)
}
