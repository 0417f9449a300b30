use std::str::FromStr;

use serde::Serialize;

use crate::domain::{Account, AccountStatus, Error, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Balance,
    Transactions,
    Status,
}

impl FromStr for QueryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "balance" => Ok(QueryKind::Balance),
            "transactions" => Ok(QueryKind::Transactions),
            "status" => Ok(QueryKind::Status),
            other => Err(Error::Ingestion(format!("Invalid query type: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub kind: QueryKind,
    pub account_id: String,
}

impl QueryRequest {
    pub fn new(kind: QueryKind, account_id: impl Into<String>) -> Self {
        Self {
            kind,
            account_id: account_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Balance(Account),
    Transactions(Vec<Transaction>),
    Status(AccountStatus),
    NotFound,
}

impl QueryOutcome {
    /// HTTP-equivalent status for the outcome. An empty history is still a 200.
    pub fn status_code(&self) -> u16 {
        match self {
            QueryOutcome::NotFound => 404,
            _ => 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
    pub request: QueryRequest,
    pub outcome: QueryOutcome,
}
