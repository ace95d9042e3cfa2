use crate::domains::wallet::models::{
    CreateWalletRequest, Operation, OperationRequest, OperationResponse, WalletResponse,
};
use crate::shared::services::AppState;
use crate::shared::errors::WalletError;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// 지갑 생성 핸들러
/// Create wallet handler
#[utoipa::path(
    post,
    path = "/api/v1/wallets/create_wallet",
    request_body = CreateWalletRequest,
    responses(
        (status = 200, description = "Wallet created successfully", body = WalletResponse),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Failed to create wallet")
    ),
    tag = "Wallets"
)]
pub async fn create_wallet(
    State(app_state): State<AppState>,
    request: Result<Json<CreateWalletRequest>, JsonRejection>,
) -> Result<Json<WalletResponse>, (StatusCode, Json<serde_json::Value>)> {
    let Json(request) = request
        .map_err(|e| WalletError::InvalidRequest(e.body_text()))?;

    let wallet = app_state
        .wallet_state
        .wallet_service
        .create_wallet(&request.name)
        .await
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(wallet.into()))
}

/// 지갑 조회 핸들러 (ID로)
/// Get wallet by ID handler
#[utoipa::path(
    get,
    path = "/api/v1/wallets/{id}",
    params(
        ("id" = String, Path, description = "Wallet ID")
    ),
    responses(
        (status = 200, description = "Wallet retrieved successfully", body = WalletResponse),
        (status = 404, description = "Wallet not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallets"
)]
pub async fn get_wallet(
    State(app_state): State<AppState>,
    Path(wallet_id): Path<String>,
) -> Result<Json<WalletResponse>, (StatusCode, Json<serde_json::Value>)> {
    let wallet = app_state
        .wallet_state
        .wallet_service
        .get_wallet(&wallet_id)
        .await
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(wallet.into()))
}

/// 입금/출금 핸들러
/// Deposit / withdraw handler
///
/// 연산 타입과 금액은 지갑 조회 전에 검증됩니다.
#[utoipa::path(
    post,
    path = "/api/v1/wallets/{id}/operation",
    params(
        ("id" = String, Path, description = "Wallet ID")
    ),
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Operation applied", body = OperationResponse),
        (status = 400, description = "Invalid operation type, invalid amount or insufficient funds"),
        (status = 404, description = "Wallet not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallets"
)]
pub async fn perform_operation(
    State(app_state): State<AppState>,
    Path(wallet_id): Path<String>,
    request: Result<Json<OperationRequest>, JsonRejection>,
) -> Result<Json<OperationResponse>, (StatusCode, Json<serde_json::Value>)> {
    let Json(request) = request
        .map_err(|e| WalletError::InvalidRequest(e.body_text()))?;
    let operation = Operation::try_from(request)?;

    let wallet = app_state
        .wallet_state
        .wallet_service
        .apply_operation(&wallet_id, operation)
        .await
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(OperationResponse {
        balance: wallet.balance,
    }))
}
