//! Data models representing database entities and API payloads.

/// Ledger account model
pub mod account;
/// Bearer token claims
pub mod token;
/// Transfer request model
pub mod transfer;
