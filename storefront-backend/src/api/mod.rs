// src/api/mod.rs
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::domain::catalog::{self, Product};
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::cors_layer;
use crate::service::{
    admin_report_service::AdminReportService, diagnostics_service::DiagnosticsService,
    polar_client::PolarClient, subscription_sync_service::SubscriptionSyncService,
};
use axum::{middleware as axum_middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod handlers;

use handlers::{
    admin_handler::admin_router, cart_handler::cart_router, catalog_handler::catalog_router,
    payment_handler::payment_router, subscription_handler::subscription_router,
    system_handler::system_router,
};

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub sync_service: Arc<SubscriptionSyncService>,
    pub admin_report_service: Arc<AdminReportService>,
    pub diagnostics_service: Arc<DiagnosticsService>,
    pub products: Arc<Vec<Product>>,
    pub db: Arc<DbPool>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig, polar: Arc<dyn PolarClient>) -> Self {
        Self {
            sync_service: Arc::new(SubscriptionSyncService::new(db.clone(), polar)),
            admin_report_service: Arc::new(AdminReportService::new(db.clone())),
            diagnostics_service: Arc::new(DiagnosticsService::new(
                db.clone(),
                config.db_schema.clone(),
            )),
            products: Arc::new(catalog::seed_products()),
            db: Arc::new(db),
            config: Arc::new(config),
        }
    }
}

/// 全ルーターとミドルウェアを組み立てる
pub fn router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config.cors_allowed_origins);

    Router::new()
        .merge(cart_router(app_state.clone()))
        .merge(catalog_router(app_state.clone()))
        .merge(payment_router(app_state.clone()))
        .merge(subscription_router(app_state.clone()))
        .merge(admin_router(app_state.clone()))
        .merge(system_router(app_state))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(axum_middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
