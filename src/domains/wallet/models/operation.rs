use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use crate::domains::wallet::models::BALANCE_SCALE;
use crate::shared::errors::WalletError;

// =====================================================
// Operation 모델
// =====================================================
// 역할: 지갑 잔액 변경 요청 (저장되지 않음)
//
// - OperationType: DEPOSIT / WITHDRAW 두 가지만 존재 (닫힌 enum)
// - amount: 0 이상, 소수점 2자리 이하
//
// HTTP 요청은 문자열 타입으로 들어오고, 경계에서 Operation으로 변환됩니다.
// =====================================================

/// 연산 타입
/// Operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    /// 입금
    Deposit,
    /// 출금
    Withdraw,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Deposit => "DEPOSIT",
            OperationType::Withdraw => "WITHDRAW",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationType {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEPOSIT" => Ok(OperationType::Deposit),
            "WITHDRAW" => Ok(OperationType::Withdraw),
            other => Err(WalletError::InvalidOperationType(other.to_string())),
        }
    }
}

/// 검증된 연산 (엔진 입력)
/// Validated operation, the engine's input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operation {
    pub operation_type: OperationType,
    /// Non-negative, scale 2
    pub amount: Decimal,
}

impl Operation {
    /// 금액 검증 후 Operation 생성
    /// Build an operation, validating the amount
    ///
    /// - 음수 금액 거부
    /// - 소수점 2자리 초과 거부 (반올림하지 않음)
    /// - 통과한 금액은 scale 2로 맞춤 ("50" → "50.00")
    pub fn new(operation_type: OperationType, amount: Decimal) -> Result<Self, WalletError> {
        if amount < Decimal::ZERO {
            return Err(WalletError::InvalidAmount(format!(
                "amount must not be negative (got {})",
                amount
            )));
        }

        if amount.normalize().scale() > BALANCE_SCALE {
            return Err(WalletError::InvalidAmount(format!(
                "amount must have at most {} decimal places (got {})",
                BALANCE_SCALE, amount
            )));
        }

        let mut amount = amount;
        amount.rescale(BALANCE_SCALE);
        if amount.scale() != BALANCE_SCALE {
            return Err(WalletError::InvalidAmount(format!(
                "amount is too large to hold {} decimal places (got {})",
                BALANCE_SCALE, amount
            )));
        }

        Ok(Self { operation_type, amount })
    }

    pub fn deposit(amount: Decimal) -> Result<Self, WalletError> {
        Self::new(OperationType::Deposit, amount)
    }

    pub fn withdraw(amount: Decimal) -> Result<Self, WalletError> {
        Self::new(OperationType::Withdraw, amount)
    }
}

/// 연산 요청 (HTTP 본문)
/// Operation request body
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = OperationRequest)]
pub struct OperationRequest {
    /// "DEPOSIT" or "WITHDRAW"
    #[schema(example = "DEPOSIT")]
    pub operation_type: String,

    /// Amount as a decimal string
    #[schema(value_type = String, example = "50.00")]
    pub amount: Decimal,
}

impl TryFrom<OperationRequest> for Operation {
    type Error = WalletError;

    fn try_from(request: OperationRequest) -> Result<Self, Self::Error> {
        let operation_type = request.operation_type.parse::<OperationType>()?;
        Operation::new(operation_type, request.amount)
    }
}

/// 연산 응답
/// Operation response (`{balance}`)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = OperationResponse)]
pub struct OperationResponse {
    #[schema(value_type = String, example = "20.00")]
    pub balance: Decimal,
}
