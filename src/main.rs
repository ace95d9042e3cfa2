use std::sync::Arc;
use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use wallet_api::api_doc::ApiDoc;
use wallet_api::routes::create_router;
use wallet_api::shared::config::AppConfig;
use wallet_api::shared::database::{Database, MemoryWalletRepository, PgWalletRepository, WalletStore};
use wallet_api::shared::services::AppState;
use wallet_api::shared::shutdown::ShutdownSignal;

#[tokio::main]
async fn main() -> Result<()> {
    // .env 파일이 있으면 로드
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wallet_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // 저장소 선택: DATABASE_URL 있으면 PostgreSQL, 없으면 메모리
    let store: Arc<dyn WalletStore> = match &config.database_url {
        Some(db_url) => {
            let db = Database::new(db_url, config.db_max_connections).await?;
            db.initialize().await?;
            Arc::new(PgWalletRepository::new(db.pool().clone()))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, wallets are kept in memory and lost on restart");
            Arc::new(MemoryWalletRepository::new())
        }
    };

    // AppState 생성
    let app_state = AppState::new(store);

    // CORS 설정
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS_ORIGIN: {}", config.cors_origin))?,
        )
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    // Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    // 바인딩 전에 시그널 핸들러 설치
    let shutdown = ShutdownSignal::install().context("Failed to install signal handlers")?;

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;

    tracing::info!(
        addr = %config.bind_addr(),
        store = if config.database_url.is_some() { "postgres" } else { "memory" },
        "Server running, Swagger UI available at /api"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let signal = shutdown.recv().await;
            tracing::info!(signal, "Shutdown signal received, draining connections");
        })
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
