//! In-memory account store.
//!
//! Keeps accounts in a `BTreeMap` behind a tokio `RwLock`. Used by tests and
//! local runs without a database.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    models::account::{Account, CreateAccountRequest},
    services::account_service::NewAccount,
    store::{AccountStore, StoreError},
};

#[derive(Debug, Default)]
struct Accounts {
    last_id: i32,
    rows: BTreeMap<i32, Account>,
}

/// Account store held entirely in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<Accounts>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create_account(&self, req: CreateAccountRequest) -> Result<Account, StoreError> {
        let new_account = NewAccount::from_request(req);

        let mut accounts = self.accounts.write().await;
        // ids start at 1, like a SERIAL column
        accounts.last_id += 1;

        let account = Account {
            id: accounts.last_id,
            first_name: new_account.first_name,
            last_name: new_account.last_name,
            number: new_account.number,
            balance: new_account.balance,
            created_at: Utc::now(),
        };
        accounts.rows.insert(account.id, account.clone());

        Ok(account)
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, StoreError> {
        self.accounts
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn get_accounts(&self, limit: usize) -> Result<Vec<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.rows.values().take(limit).cloned().collect())
    }

    async fn delete_account(&self, id: i32) -> Result<(), StoreError> {
        self.accounts.write().await.rows.remove(&id);
        Ok(())
    }

    async fn update_account(&self, account: &Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().await;
        let stored = accounts
            .rows
            .get_mut(&account.id)
            .ok_or(StoreError::NotFound(account.id))?;

        stored.first_name = account.first_name.clone();
        stored.last_name = account.last_name.clone();
        stored.number = account.number.clone();
        stored.balance = account.balance;

        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
