use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use uuid::Uuid;
use crate::domains::wallet::models::Wallet;
use crate::shared::database::store::{WalletMutation, WalletStore};
use crate::shared::errors::WalletError;

/// 메모리 지갑 저장소
/// In-memory wallet store
///
/// 테스트 및 DATABASE_URL 미설정 시 사용합니다.
///
/// # 동시성
/// 하나의 Mutex가 맵 전체를 보호합니다. `update()`는 잠금을 쥔 채
/// 복사본에 mutate를 적용하고, 성공했을 때만 맵에 다시 씁니다.
/// mutate는 동기 함수이므로 잠금 중에 `.await`가 발생하지 않습니다.
///
/// # 장애 주입
/// `fail_writes(true)` 이후 모든 쓰기는 `DatabaseError`로 실패합니다.
#[derive(Default)]
pub struct MemoryWalletRepository {
    wallets: Mutex<HashMap<String, Wallet>>,
    fail_writes: AtomicBool,
}

impl MemoryWalletRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 쓰기 실패 시뮬레이션 on/off
    /// Toggle simulated write failures
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// 저장된 지갑 수
    pub fn len(&self) -> usize {
        self.wallets.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.lock().is_empty()
    }

    fn check_writable(&self) -> Result<(), WalletError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(WalletError::DatabaseError("simulated write failure".to_string()));
        }
        Ok(())
    }

    // PostgreSQL 스키마의 CHECK (balance >= 0)과 동일한 제약
    fn check_balance(wallet: &Wallet) -> Result<(), WalletError> {
        if wallet.balance < Decimal::ZERO {
            return Err(WalletError::DatabaseError(format!(
                "balance check violated: wallet {} balance {}",
                wallet.id, wallet.balance
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl WalletStore for MemoryWalletRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, name: &str) -> Result<Wallet, WalletError> {
        self.check_writable()?;

        let wallet = Wallet::new(Uuid::new_v4().to_string(), name.to_string());
        self.wallets.lock().insert(wallet.id.clone(), wallet.clone());

        Ok(wallet)
    }

    async fn get(&self, id: &str) -> Result<Option<Wallet>, WalletError> {
        Ok(self.wallets.lock().get(id).cloned())
    }

    async fn save(&self, wallet: &Wallet) -> Result<Wallet, WalletError> {
        let mut wallets = self.wallets.lock();

        let stored = wallets
            .get(&wallet.id)
            .ok_or_else(|| WalletError::NotFound { id: wallet.id.clone() })?;
        Self::check_balance(wallet)?;
        self.check_writable()?;

        let mut updated = stored.clone();
        updated.balance = wallet.balance;
        updated.updated_at = Utc::now();
        wallets.insert(updated.id.clone(), updated.clone());

        Ok(updated)
    }

    async fn update(&self, id: &str, mutate: WalletMutation<'_>) -> Result<Wallet, WalletError> {
        let mut wallets = self.wallets.lock();

        let mut wallet = wallets
            .get(id)
            .cloned()
            .ok_or_else(|| WalletError::NotFound { id: id.to_string() })?;

        mutate(&mut wallet)?;
        Self::check_balance(&wallet)?;
        self.check_writable()?;

        wallet.updated_at = Utc::now();
        wallets.insert(wallet.id.clone(), wallet.clone());

        Ok(wallet)
    }
}
