//! Account persistence.
//!
//! `AccountStore` is the capability set every backend implements. Handlers
//! only ever see `Arc<dyn AccountStore>`, so the backend is chosen once at
//! startup and never dispatched on by name.

use async_trait::async_trait;

use crate::models::account::{Account, CreateAccountRequest};

pub mod memory;
pub mod postgres;

#[cfg(test)]
pub(crate) mod contract;

pub use memory::InMemoryAccountStore;
pub use postgres::PostgresAccountStore;

/// Errors returned by account stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No account row with this id.
    #[error("Record not found for the given id: {0}")]
    NotFound(i32),

    /// Connection, query or constraint failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage operations over ledger accounts.
///
/// Every call is a single independent statement. There are no transactions
/// and no retries; concurrent writers are isolated only by the backend.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account built from `req`.
    ///
    /// The number is generated here and the balance starts at zero. The
    /// backend assigns `id` and `created_at`.
    async fn create_account(&self, req: CreateAccountRequest) -> Result<Account, StoreError>;

    /// Fetch one account, or `StoreError::NotFound` if no row has this id.
    async fn get_account_by_id(&self, id: i32) -> Result<Account, StoreError>;

    /// Fetch up to `limit` accounts in backend-default order.
    async fn get_accounts(&self, limit: usize) -> Result<Vec<Account>, StoreError>;

    /// Hard delete. Deleting an id that does not exist is not an error.
    async fn delete_account(&self, id: i32) -> Result<(), StoreError>;

    /// Overwrite names, number and balance of an existing account.
    ///
    /// `id` and `created_at` are never changed. Last writer wins.
    async fn update_account(&self, account: &Account) -> Result<(), StoreError>;

    /// Check the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
