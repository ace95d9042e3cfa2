use std::sync::Arc;
use crate::domains::wallet::services::state::WalletState;
use crate::shared::database::WalletStore;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
#[derive(Clone)]
pub struct AppState {
    pub wallet_state: WalletState,
    /// 사용 중인 저장소 종류 ("postgres" / "memory")
    /// Active store backend
    pub store_backend: &'static str,
}

impl AppState {
    /// Create AppState with a wallet store
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(store: Arc<dyn WalletStore>) -> Self {
        let store_backend = store.backend();
        let wallet_state = WalletState::new(store);

        Self {
            wallet_state,
            store_backend,
        }
    }
}
