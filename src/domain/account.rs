use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::domain::{DeclineReason, Error};

/// Account standing. A decline reason exists only on the declined variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Declined(DeclineReason),
}

impl AccountStatus {
    /// Builds a status from its wire parts, rejecting any pairing that breaks
    /// the "reason iff declined" rule.
    pub fn from_parts(status: &str, decline_reason: Option<&str>) -> Result<Self, Error> {
        let reason = decline_reason.map(str::trim).filter(|r| !r.is_empty());

        match (status.trim().to_ascii_lowercase().as_str(), reason) {
            ("active", None) => Ok(AccountStatus::Active),
            ("active", Some(r)) => Err(Error::InvalidRecord(format!(
                "Active account cannot carry a decline reason: {}",
                r
            ))),
            ("declined", Some(r)) => Ok(AccountStatus::Declined(r.parse()?)),
            ("declined", None) => Err(Error::InvalidRecord(
                "Declined account requires a decline reason".to_string(),
            )),
            (other, _) => Err(Error::InvalidRecord(format!(
                "Invalid account status: {}",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Declined(_) => "declined",
        }
    }

    pub fn decline_reason(&self) -> Option<DeclineReason> {
        match self {
            AccountStatus::Active => None,
            AccountStatus::Declined(reason) => Some(*reason),
        }
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, AccountStatus::Declined(_))
    }
}

// Serialized as the status view: `{status, decline_reason?}`.
impl Serialize for AccountStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AccountStatus::Active => {
                let mut state = serializer.serialize_struct("AccountStatus", 1)?;
                state.serialize_field("status", self.as_str())?;
                state.end()
            }
            AccountStatus::Declined(reason) => {
                let mut state = serializer.serialize_struct("AccountStatus", 2)?;
                state.serialize_field("status", self.as_str())?;
                state.serialize_field("decline_reason", reason)?;
                state.end()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    #[serde(rename = "account_number")]
    account_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    credit_limit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    balance: Decimal,
    last_payment_date: DateTime<Utc>,
    #[serde(flatten)]
    status: AccountStatus,
}

impl Account {
    pub fn new(
        account_id: impl Into<String>,
        credit_limit: Decimal,
        balance: Decimal,
        last_payment_date: DateTime<Utc>,
        status: AccountStatus,
    ) -> Result<Self, Error> {
        let account_id = account_id.into();

        if credit_limit.is_sign_negative() && !credit_limit.is_zero() {
            return Err(Error::InvalidRecord(format!(
                "Account {} has a negative credit limit",
                account_id
            )));
        }
        if balance.is_sign_negative() && !balance.is_zero() {
            return Err(Error::InvalidRecord(format!(
                "Account {} has a negative balance",
                account_id
            )));
        }

        Ok(Self {
            account_id,
            credit_limit,
            balance,
            last_payment_date,
            status,
        })
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn credit_limit(&self) -> Decimal {
        self.credit_limit
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn last_payment_date(&self) -> DateTime<Utc> {
        self.last_payment_date
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn is_over_limit(&self) -> bool {
        self.balance > self.credit_limit
    }
}
