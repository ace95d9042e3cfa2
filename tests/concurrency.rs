// =====================================================
// 동시성 통합 테스트
// =====================================================
// 같은 지갑에 대한 동시 조회-계산-저장이 직렬화되는지 확인합니다.
// (lost update / 초과 출금 방지)
// =====================================================

mod common;
use common::*;
use axum::http::StatusCode;
use futures_util::future::join_all;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wallet_api::domains::wallet::models::Operation;
use wallet_api::shared::errors::WalletError;

/// 테스트: 동시 출금 경쟁
///
/// 잔액 N×A−ε 지갑에 A 출금 N건을 동시에 보내면
/// 최대 floor((N×A−ε)/A) = N−1 건만 성공하고 잔액은 음수가 되지 않아야 합니다.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_withdrawals_never_overdraw() {
    let (service, _) = setup_service();
    let wallet = service.create_wallet("Race").await.unwrap();

    const N: usize = 20;
    let amount = dec!(10.00);
    let start = amount * Decimal::from(N as u64) - dec!(0.01); // 199.99
    service
        .apply_operation(&wallet.id, Operation::deposit(start).unwrap())
        .await
        .unwrap();

    let handles: Vec<_> = (0..N)
        .map(|_| {
            let service = service.clone();
            let id = wallet.id.clone();
            tokio::spawn(async move {
                service
                    .apply_operation(&id, Operation::withdraw(amount).unwrap())
                    .await
            })
        })
        .collect();

    let results: Vec<_> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    let succeeded = results.iter().filter(|r| r.is_ok()).count();
    let insufficient = results
        .iter()
        .filter(|r| matches!(r, Err(WalletError::InsufficientFunds { .. })))
        .count();

    assert_eq!(succeeded, N - 1);
    assert_eq!(insufficient, 1);

    let final_wallet = service.get_wallet(&wallet.id).await.unwrap();
    assert_eq!(final_wallet.balance, dec!(9.99));
    assert!(final_wallet.balance >= Decimal::ZERO);
}

/// 테스트: 동시 입금에서 갱신 손실 없음
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deposits_are_not_lost() {
    let (service, _) = setup_service();
    let wallet = service.create_wallet("Deposits").await.unwrap();

    let handles: Vec<_> = (0..100)
        .map(|_| {
            let service = service.clone();
            let id = wallet.id.clone();
            tokio::spawn(async move {
                service
                    .apply_operation(&id, Operation::deposit(dec!(1.25)).unwrap())
                    .await
            })
        })
        .collect();

    for joined in join_all(handles).await {
        joined.unwrap().unwrap();
    }

    let final_wallet = service.get_wallet(&wallet.id).await.unwrap();
    assert_eq!(final_wallet.balance, dec!(125.00));
}

/// 테스트: 입금/출금 혼합 경쟁
///
/// 결과 잔액 = 초기 + 성공 입금 합 − 성공 출금 합
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_mixed_operations_keep_balance_consistent() {
    let (service, _) = setup_service();
    let wallet = service.create_wallet("Mixed").await.unwrap();
    service
        .apply_operation(&wallet.id, Operation::deposit(dec!(5.00)).unwrap())
        .await
        .unwrap();

    let handles: Vec<_> = (0..60)
        .map(|i| {
            let service = service.clone();
            let id = wallet.id.clone();
            tokio::spawn(async move {
                let operation = if i % 2 == 0 {
                    Operation::deposit(dec!(2.00)).unwrap()
                } else {
                    Operation::withdraw(dec!(3.00)).unwrap()
                };
                (operation, service.apply_operation(&id, operation).await)
            })
        })
        .collect();

    let mut expected = dec!(5.00);
    for joined in join_all(handles).await {
        let (operation, result) = joined.unwrap();
        match result {
            Ok(updated) => {
                assert!(updated.balance >= Decimal::ZERO);
                if operation == Operation::deposit(dec!(2.00)).unwrap() {
                    expected += dec!(2.00);
                } else {
                    expected -= dec!(3.00);
                }
            }
            Err(WalletError::InsufficientFunds { .. }) => {}
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    let final_wallet = service.get_wallet(&wallet.id).await.unwrap();
    assert_eq!(final_wallet.balance, expected);
    assert!(final_wallet.balance >= Decimal::ZERO);
}

/// 테스트: HTTP 경로에서도 동시 출금이 초과 출금되지 않음
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_http_withdrawals() {
    let (app, _) = setup_app();
    let id = create_wallet(&app, "Http").await;
    operate(&app, &id, "DEPOSIT", "49.99").await;

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let app = app.clone();
            let id = id.clone();
            tokio::spawn(async move { operate(&app, &id, "WITHDRAW", "10.00").await.0 })
        })
        .collect();

    let statuses: Vec<StatusCode> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 4);
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::BAD_REQUEST).count(),
        1
    );
    assert_eq!(balance_of(&app, &id).await, "9.99");
}
