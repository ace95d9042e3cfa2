use thiserror::Error;
use axum::{http::StatusCode, Json};
use rust_decimal::Decimal;
use serde_json::json;

/// 지갑 관련 에러
/// Wallet-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalletError {
    /// 지갑을 찾을 수 없음
    /// Wallet not found
    #[error("Wallet not found: id={id}")]
    NotFound { id: String },

    /// 잔액 부족 (출금 금액 > 현재 잔액)
    /// Insufficient funds (withdraw amount > current balance)
    #[error("Insufficient funds: balance={balance}, requested={requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    /// 지원하지 않는 연산 타입 (DEPOSIT / WITHDRAW 외)
    /// Unsupported operation type
    #[error("Invalid operation type: {0}")]
    InvalidOperationType(String),

    /// 잘못된 금액 (음수, 소수점 2자리 초과, 범위 초과)
    /// Invalid amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// 요청 본문 파싱 실패
    /// Malformed request body
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 지갑 생성 실패
    /// Wallet creation failed
    #[error("Failed to create wallet: {0}")]
    CreationFailed(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl WalletError {
    /// HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            WalletError::NotFound { .. } => StatusCode::NOT_FOUND,
            WalletError::InsufficientFunds { .. }
            | WalletError::InvalidOperationType(_)
            | WalletError::InvalidAmount(_)
            | WalletError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            WalletError::CreationFailed(_) | WalletError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message sent to the client. Storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            WalletError::CreationFailed(_) => "Failed to create wallet".to_string(),
            WalletError::DatabaseError(_) => {
                "Internal storage error, retry the operation".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<sqlx::Error> for WalletError {
    fn from(err: sqlx::Error) -> Self {
        WalletError::DatabaseError(err.to_string())
    }
}

/// WalletError를 HTTP 응답으로 변환
impl From<WalletError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: WalletError) -> Self {
        let status = err.status_code();
        if status.is_server_error() {
            tracing::error!(error = %err, "wallet request failed");
        } else {
            tracing::debug!(error = %err, "wallet request rejected");
        }

        (status, Json(json!({ "error": err.public_message() })))
    }
}
