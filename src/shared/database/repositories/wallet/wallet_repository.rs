use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use crate::domains::wallet::models::{Wallet, BALANCE_SCALE};
use crate::shared::database::store::{WalletMutation, WalletStore};
use crate::shared::errors::WalletError;

// 지갑 레포지토리 (PostgreSQL)
// PgWalletRepository: handles all database operations for wallets
//
// 모든 쓰기 연산은 트랜잭션 안에서 실행됩니다.
// commit 전에 트랜잭션이 drop되면 자동으로 rollback됩니다.

pub struct PgWalletRepository {
    pool: PgPool,
}

impl PgWalletRepository {
    // 레포지토리 생성
    // Create repository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_wallet(row: &PgRow) -> Wallet {
    Wallet {
        id: row.get("id"),
        name: row.get("name"),
        balance: row.get("balance"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl WalletStore for PgWalletRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    // 지갑 생성
    // Create wallet
    async fn create(&self, name: &str) -> Result<Wallet, WalletError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO wallets (id, name, balance, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, balance, created_at, updated_at
            "#,
        )
        .bind(&id)
        .bind(name)
        .bind(Decimal::new(0, BALANCE_SCALE))
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row_to_wallet(&row))
    }

    // ID로 지갑 조회
    // Get wallet by ID
    async fn get(&self, id: &str) -> Result<Option<Wallet>, WalletError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, balance, created_at, updated_at
            FROM wallets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_wallet))
    }

    // 잔액 덮어쓰기
    // Overwrite balance
    async fn save(&self, wallet: &Wallet) -> Result<Wallet, WalletError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            UPDATE wallets
            SET balance = $1, updated_at = $2
            WHERE id = $3
            RETURNING id, name, balance, created_at, updated_at
            "#,
        )
        .bind(wallet.balance)
        .bind(Utc::now())
        .bind(&wallet.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| WalletError::NotFound { id: wallet.id.clone() })?;

        tx.commit().await?;

        Ok(row_to_wallet(&row))
    }

    // 행 잠금(FOR UPDATE) 상태에서 조회 → 계산 → 저장
    // Row-locked read-modify-write in a single transaction
    async fn update(&self, id: &str, mutate: WalletMutation<'_>) -> Result<Wallet, WalletError> {
        let mut tx = self.pool.begin().await?;

        // 같은 지갑에 대한 다른 트랜잭션은 commit/rollback까지 대기
        let row = sqlx::query(
            r#"
            SELECT id, name, balance, created_at, updated_at
            FROM wallets
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| WalletError::NotFound { id: id.to_string() })?;

        let mut wallet = row_to_wallet(&row);
        mutate(&mut wallet)?;

        let row = sqlx::query(
            r#"
            UPDATE wallets
            SET balance = $1, updated_at = $2
            WHERE id = $3
            RETURNING id, name, balance, created_at, updated_at
            "#,
        )
        .bind(wallet.balance)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row_to_wallet(&row))
    }
}
