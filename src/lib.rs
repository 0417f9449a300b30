//! Read-only account queries over credit-card accounts and their history:
//! balance, recent transactions, and decline status.

pub mod config;
pub mod dlq;
pub mod domain;
pub mod engine;
pub mod fixtures;
pub mod ingestion;
pub mod output;
pub mod repository;
pub mod service;

pub use domain::{
    Account, AccountNotFound, AccountRepository, AccountStatus, DeclineReason, Error,
    Transaction, TransactionRepository,
};
pub use service::{AccountQueryService, RECENT_TRANSACTIONS_LIMIT};
