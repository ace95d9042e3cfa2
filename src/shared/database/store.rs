// =====================================================
// WalletStore Trait (저장소 인터페이스)
// =====================================================
// 지갑 레코드의 영속화 계약을 정의합니다.
// Service 계층은 이 trait만 사용하여 저장소와 통신합니다.
//
// 구현체:
// - PgWalletRepository: PostgreSQL (운영)
// - MemoryWalletRepository: 메모리 (테스트, DATABASE_URL 미설정 시)
//
// 원자성:
// update()는 하나의 unit-of-work 안에서 조회 → 계산 → 저장을 수행합니다.
// 같은 지갑에 대한 동시 update()는 직렬화됩니다.
// =====================================================

use async_trait::async_trait;
use crate::domains::wallet::models::Wallet;
use crate::shared::errors::WalletError;

/// Synchronous mutation run on the locked copy inside `WalletStore::update`.
/// Returning `Err` aborts the unit-of-work without writing anything.
pub type WalletMutation<'a> =
    &'a (dyn Fn(&mut Wallet) -> Result<(), WalletError> + Send + Sync);

/// 지갑 저장소 인터페이스
/// Wallet store interface
#[async_trait]
pub trait WalletStore: Send + Sync {
    /// Backend name reported by the health endpoint
    fn backend(&self) -> &'static str;

    /// 새 지갑 생성 (잔액 0.00, 새 UUID)
    /// Persist a new wallet with a fresh id and zero balance
    ///
    /// 실패 시 레코드가 남지 않음 (rollback)
    async fn create(&self, name: &str) -> Result<Wallet, WalletError>;

    /// ID로 지갑 조회 (없으면 None)
    /// Point lookup, absence is `Ok(None)`
    async fn get(&self, id: &str) -> Result<Option<Wallet>, WalletError>;

    /// 지갑 잔액 덮어쓰기 후 갱신된 레코드 반환
    /// Overwrite the wallet's balance and return the refreshed record
    ///
    /// # Errors
    /// - `NotFound`: 레코드 없음
    /// - `DatabaseError`: 저장 실패 (기존 상태 유지)
    async fn save(&self, wallet: &Wallet) -> Result<Wallet, WalletError>;

    /// 잠금 상태에서 조회 → mutate → 저장 (하나의 unit-of-work)
    /// Lock, fetch, mutate and persist the wallet as one unit-of-work
    ///
    /// `mutate`가 에러를 반환하거나 저장이 실패하면 아무것도 기록되지 않습니다.
    ///
    /// # Errors
    /// - `NotFound`: 레코드 없음 (`mutate` 호출 전)
    /// - `mutate`가 반환한 에러
    /// - `DatabaseError`: 저장 실패
    async fn update(&self, id: &str, mutate: WalletMutation<'_>) -> Result<Wallet, WalletError>;
}
