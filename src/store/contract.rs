//! Behaviour every `AccountStore` backend must share.
//!
//! Each backend's test module calls these against its own instance.

use chrono::{DateTime, Utc};

use crate::{
    models::account::CreateAccountRequest,
    store::{AccountStore, StoreError},
};

fn request(first_name: &str, last_name: &str) -> CreateAccountRequest {
    CreateAccountRequest {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

/// `not_before` must be read from the same clock the backend stamps
/// `created_at` with.
pub async fn create_assigns_id_and_timestamp(
    store: &dyn AccountStore,
    not_before: DateTime<Utc>,
) {
    let account = store
        .create_account(request("Ada", "Lovelace"))
        .await
        .unwrap();

    assert_ne!(account.id, 0);
    assert!(account.created_at >= not_before);
    assert_eq!(account.balance, 0);
}

pub async fn create_then_get_roundtrips_fields(store: &dyn AccountStore) {
    let created = store
        .create_account(request("Ada", "Lovelace"))
        .await
        .unwrap();

    let fetched = store.get_account_by_id(created.id).await.unwrap();

    assert_eq!(fetched.first_name, "Ada");
    assert_eq!(fetched.last_name, "Lovelace");
    assert_eq!(fetched.number, created.number);
    assert_eq!(fetched.balance, 0);
    assert_eq!(fetched.created_at, created.created_at);
}

pub async fn delete_is_idempotent(store: &dyn AccountStore) {
    let account = store
        .create_account(request("Grace", "Hopper"))
        .await
        .unwrap();

    store.delete_account(account.id).await.unwrap();
    assert!(matches!(
        store.get_account_by_id(account.id).await,
        Err(StoreError::NotFound(id)) if id == account.id
    ));

    // second delete of the same id still succeeds
    store.delete_account(account.id).await.unwrap();
}

pub async fn get_accounts_on_empty_store_is_empty(store: &dyn AccountStore) {
    assert!(store.get_accounts(200).await.unwrap().is_empty());
}

pub async fn get_accounts_respects_limit(store: &dyn AccountStore) {
    for i in 0..5 {
        store
            .create_account(request(&format!("First{i}"), &format!("Last{i}")))
            .await
            .unwrap();
    }

    assert_eq!(store.get_accounts(2).await.unwrap().len(), 2);
    assert_eq!(store.get_accounts(200).await.unwrap().len(), 5);
}

pub async fn update_persists_mutable_fields(store: &dyn AccountStore) {
    let mut account = store
        .create_account(request("Alan", "Turing"))
        .await
        .unwrap();

    account.last_name = "Mathison Turing".to_string();
    account.balance = 500;
    store.update_account(&account).await.unwrap();

    let fetched = store.get_account_by_id(account.id).await.unwrap();
    assert_eq!(fetched.last_name, "Mathison Turing");
    assert_eq!(fetched.balance, 500);
    assert_eq!(fetched.created_at, account.created_at);
}

pub async fn update_missing_account_is_not_found(store: &dyn AccountStore) {
    let mut account = store
        .create_account(request("Edsger", "Dijkstra"))
        .await
        .unwrap();
    store.delete_account(account.id).await.unwrap();

    account.balance = 10;
    assert!(matches!(
        store.update_account(&account).await,
        Err(StoreError::NotFound(_))
    ));
}
