use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

// =====================================================
// Wallet 모델
// =====================================================
// 역할: 이름이 붙은 단일 잔액 계좌
// 설명: 잔액은 소수점 2자리 고정소수점 (Decimal), 항상 0 이상
//
// 생명주기:
// - 생성 시 잔액 0.00, 새 UUID 발급
// - 입금/출금 연산으로만 잔액 변경
// - 삭제 없음
// =====================================================

/// Balance scale (cents precision)
/// 잔액 소수점 자리수
pub const BALANCE_SCALE: u32 = 2;

/// 지갑 정보 (데이터베이스에서 조회한 지갑)
/// Wallet record as persisted by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(as = Wallet)]
pub struct Wallet {
    /// Wallet ID (UUID v4 text, immutable)
    /// 지갑 ID
    #[schema(example = "3f2b8c1e-5d4a-4c3b-9a8e-7f6d5c4b3a21")]
    pub id: String,

    /// Human-readable label
    /// 지갑 이름
    #[schema(example = "Alice")]
    pub name: String,

    /// Current balance, never negative
    /// 현재 잔액
    #[schema(value_type = String, example = "20.00")]
    pub balance: Decimal,

    /// Created timestamp
    pub created_at: DateTime<Utc>,

    /// Updated timestamp (changes on every committed save)
    pub updated_at: DateTime<Utc>,
}

impl Wallet {
    /// 새 지갑 (잔액 0.00)
    /// New wallet with a zero balance
    pub fn new(id: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            balance: Decimal::new(0, BALANCE_SCALE),
            created_at: now,
            updated_at: now,
        }
    }
}

/// 지갑 생성 요청
/// Create wallet request
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = CreateWalletRequest)]
pub struct CreateWalletRequest {
    #[schema(example = "Alice")]
    pub name: String,
}

/// 지갑 조회 응답
/// Wallet response (`{id, name, balance}`)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = WalletResponse)]
pub struct WalletResponse {
    pub id: String,
    pub name: String,
    #[schema(value_type = String, example = "20.00")]
    pub balance: Decimal,
}

impl From<Wallet> for WalletResponse {
    fn from(wallet: Wallet) -> Self {
        Self {
            id: wallet.id,
            name: wallet.name,
            balance: wallet.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wallet_has_zero_balance_with_cents_scale() {
        let wallet = Wallet::new("w-1".to_string(), "Alice".to_string());
        assert_eq!(wallet.balance, Decimal::ZERO);
        assert_eq!(wallet.balance.to_string(), "0.00");
        assert_eq!(wallet.created_at, wallet.updated_at);
    }

    #[test]
    fn test_response_serializes_balance_as_string() {
        let mut wallet = Wallet::new("w-1".to_string(), "Alice".to_string());
        wallet.balance = Decimal::new(2000, 2);

        let json = serde_json::to_value(WalletResponse::from(wallet)).unwrap();
        assert_eq!(json["id"], "w-1");
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["balance"], "20.00");
        assert!(json.get("created_at").is_none());
    }
}
