//! PostgreSQL-backed account store.

use async_trait::async_trait;

use crate::{
    db::DbPool,
    models::account::{Account, CreateAccountRequest},
    services::account_service::NewAccount,
    store::{AccountStore, StoreError},
};

/// Account store over the `accounts` table.
#[derive(Debug, Clone)]
pub struct PostgresAccountStore {
    pool: DbPool,
}

impl PostgresAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PostgresAccountStore {
    async fn create_account(&self, req: CreateAccountRequest) -> Result<Account, StoreError> {
        let new_account = NewAccount::from_request(req);

        // id and created_at come from column defaults
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (first_name, last_name, number, balance)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, number, balance, created_at
            "#,
        )
        .bind(&new_account.first_name)
        .bind(&new_account.last_name)
        .bind(&new_account.number)
        .bind(new_account.balance)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, StoreError> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn get_accounts(&self, limit: usize) -> Result<Vec<Account>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM accounts
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn delete_account(&self, id: i32) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_account(&self, account: &Account) -> Result<(), StoreError> {
        let updated_count = sqlx::query(
            r#"
            UPDATE accounts
            SET first_name = $1,
                last_name = $2,
                number = $3,
                balance = $4,
                updated_at = NOW()
            WHERE id = $5
            "#,
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.number)
        .bind(account.balance)
        .bind(account.id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated_count == 0 {
            return Err(StoreError::NotFound(account.id));
        }

        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
