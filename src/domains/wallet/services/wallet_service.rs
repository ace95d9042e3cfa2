use std::sync::Arc;
use crate::domains::wallet::models::{Operation, Wallet};
use crate::domains::wallet::services::engine;
use crate::shared::database::WalletStore;
use crate::shared::errors::WalletError;

/// 지갑 서비스
/// WalletService: handles wallet-related business logic
///
/// 저장소는 trait 객체로 주입됩니다 (PostgreSQL / 메모리).
#[derive(Clone)]
pub struct WalletService {
    store: Arc<dyn WalletStore>,
}

impl WalletService {
    /// 생성자
    /// Constructor
    pub fn new(store: Arc<dyn WalletStore>) -> Self {
        Self { store }
    }

    /// 새 지갑 생성
    /// Create new wallet
    ///
    /// 저장 실패는 NotFound가 아니라 CreationFailed로 보고합니다.
    pub async fn create_wallet(&self, name: &str) -> Result<Wallet, WalletError> {
        let wallet = self.store.create(name).await.map_err(|e| match e {
            WalletError::DatabaseError(detail) => WalletError::CreationFailed(detail),
            other => other,
        })?;

        tracing::info!(wallet_id = %wallet.id, name = %wallet.name, "wallet created");
        Ok(wallet)
    }

    /// 지갑 조회 (ID로)
    /// Get wallet by ID
    pub async fn get_wallet(&self, wallet_id: &str) -> Result<Wallet, WalletError> {
        self.store
            .get(wallet_id)
            .await?
            .ok_or_else(|| WalletError::NotFound { id: wallet_id.to_string() })
    }

    /// 입금/출금 적용
    /// Apply a deposit or withdrawal
    ///
    /// 조회 → 계산 → 저장이 하나의 unit-of-work 안에서 실행됩니다.
    /// 같은 지갑에 대한 동시 요청은 저장소에서 직렬화되므로
    /// 두 출금이 같은 잔액을 보고 동시에 통과할 수 없습니다.
    pub async fn apply_operation(
        &self,
        wallet_id: &str,
        operation: Operation,
    ) -> Result<Wallet, WalletError> {
        let wallet = self
            .store
            .update(wallet_id, &|wallet: &mut Wallet| engine::apply(wallet, &operation))
            .await?;

        tracing::info!(
            wallet_id = %wallet.id,
            operation = %operation.operation_type,
            amount = %operation.amount,
            balance = %wallet.balance,
            "wallet operation applied"
        );
        Ok(wallet)
    }
}
