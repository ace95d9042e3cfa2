// Wallet domain routes
// 지갑 도메인 라우터
use axum::{routing::{get, post}, Router};
use crate::domains::wallet::handlers::wallet_handler;
use crate::shared::services::AppState;

/// Create wallet router
/// 지갑 라우터 생성
///
/// # Routes
/// - `POST /create_wallet` - 지갑 생성
/// - `GET  /:id` - 지갑 조회
/// - `POST /:id/operation` - 입금/출금
pub fn create_wallet_router() -> Router<AppState> {
    Router::new()
        .route("/create_wallet", post(wallet_handler::create_wallet))
        .route("/:id", get(wallet_handler::get_wallet))
        .route("/:id/operation", post(wallet_handler::perform_operation))
}
