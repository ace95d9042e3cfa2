// =====================================================
// 잔액 연산 엔진
// Wallet Operation Engine
// =====================================================
// 입금/출금에 따른 다음 잔액을 계산합니다 (순수 함수, I/O 없음).
//
// 규칙:
// - DEPOSIT:  balance + amount
// - WITHDRAW: balance < amount 이면 InsufficientFunds, 아니면 balance - amount
// - 결과는 항상 scale 2
//
// 실패 시 wallet은 변경되지 않습니다.
// =====================================================

use crate::domains::wallet::models::{Operation, OperationType, Wallet, BALANCE_SCALE};
use crate::shared::errors::WalletError;

/// 연산 적용
/// Apply an operation to the wallet's balance
///
/// # Errors
/// - `InsufficientFunds`: 출금 금액이 잔액보다 큼
/// - `InvalidAmount`: 결과 잔액이 Decimal 범위를 넘거나 scale 2로 표현 불가
pub fn apply(wallet: &mut Wallet, operation: &Operation) -> Result<(), WalletError> {
    let mut next = match operation.operation_type {
        OperationType::Deposit => wallet
            .balance
            .checked_add(operation.amount)
            .ok_or_else(|| {
                WalletError::InvalidAmount("resulting balance is out of range".to_string())
            })?,
        OperationType::Withdraw => {
            if wallet.balance < operation.amount {
                return Err(WalletError::InsufficientFunds {
                    balance: wallet.balance,
                    requested: operation.amount,
                });
            }
            wallet.balance - operation.amount
        }
    };

    // 정밀도 한계를 넘으면 rust_decimal이 소수 자리를 버리므로 scale로 확인
    next.rescale(BALANCE_SCALE);
    if next.scale() != BALANCE_SCALE {
        return Err(WalletError::InvalidAmount(
            "resulting balance exceeds cents precision".to_string(),
        ));
    }
    wallet.balance = next;

    Ok(())
}
