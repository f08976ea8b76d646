// src/main.rs
use migration::{Migrator, MigratorTrait};
use storefront_backend::api::{self, AppState};
use storefront_backend::config::{Config, PolarConfig};
use storefront_backend::db;
use storefront_backend::logging::init_tracing;
use storefront_backend::service::polar_client::polar_client_from_config;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    init_tracing();

    tracing::info!("Starting Storefront Backend server...");

    // 設定を読み込む
    let app_config = Config::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        database_url = %app_config.redacted_database_url(),
        "Configuration loaded"
    );

    // データベース接続を作成（一度だけ作成して各サービスに注入する）
    let db_pool = db::connect(&app_config).await?;
    tracing::info!("Database connection established");

    Migrator::up(&db_pool, None).await?;
    tracing::info!("Database migrations applied");

    let polar_config = PolarConfig::from_env();
    let polar_client = polar_client_from_config(&polar_config)?;
    tracing::info!(
        base_url = %polar_config.base_url(),
        development_mode = polar_config.development_mode,
        "Polar client configured"
    );

    let server_addr = app_config.server_addr();
    let app_state = AppState::new(db_pool, app_config, polar_client);
    let app_router = api::router(app_state);

    tracing::info!("Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
