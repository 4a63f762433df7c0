//! Business logic services.
//!
//! Services hold the logic that sits between HTTP handlers and the account
//! store: building new accounts, validating transfers, and signing tokens.

pub mod account_service;
pub mod token_service;
pub mod transfer_service;
