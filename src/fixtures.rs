//! Built-in sample dataset. Dates are relative to the `now` passed in, so the
//! history ordering holds no matter when the binary runs.

use chrono::{DateTime, Duration, Months, Utc};
use rust_decimal::Decimal;

use crate::domain::{Account, AccountStatus, DeclineReason, Error, Transaction};
use crate::repository::{InMemoryAccounts, InMemoryTransactions};

pub fn sample_accounts(now: DateTime<Utc>) -> Result<InMemoryAccounts, Error> {
    let days_ago = |days: i64| now - Duration::days(days);
    let month_ago = now
        .checked_sub_months(Months::new(1))
        .unwrap_or_else(|| days_ago(30));
    let declined = AccountStatus::Declined;

    InMemoryAccounts::from_accounts([
        account("1234", 5000, 1500, days_ago(15), AccountStatus::Active)?,
        account(
            "0987",
            10000,
            10001,
            days_ago(5),
            declined(DeclineReason::CreditLimitReached),
        )?,
        account(
            "1111",
            8000,
            7000,
            days_ago(20),
            declined(DeclineReason::TravelUsage),
        )?,
        account(
            "4444",
            15000,
            14000,
            days_ago(10),
            declined(DeclineReason::LargePurchaseFlagged),
        )?,
        account(
            "7777",
            6000,
            5500,
            days_ago(30),
            declined(DeclineReason::MissedPayments),
        )?,
        account(
            "0000",
            7000,
            6000,
            month_ago,
            declined(DeclineReason::ExpiredOrDeactivated),
        )?,
    ])
}

pub fn sample_transactions(now: DateTime<Utc>) -> Result<InMemoryTransactions, Error> {
    // (id, account, amount in cents, days ago, description)
    let rows: [(&str, &str, i64, i64, &str); 14] = [
        ("1", "1234", -10000, 1, "Restaurant"),
        ("2", "1234", -5000, 2, "Gas Station"),
        ("3", "0987", -50000, 1, "Electronics"),
        ("4", "4444", -500000, 1, "Luxury Purchase"),
        ("5", "1111", -15075, 1, "Hotel - Paris"),
        ("6", "1111", -8950, 1, "Restaurant - Paris"),
        ("7", "1111", -20000, 2, "Train Ticket - London to Paris"),
        ("8", "1111", -7525, 2, "Taxi - London"),
        ("9", "1111", -150000, 3, "Flight - New York to London"),
        ("10", "1111", -12030, 3, "Duty Free Shop - JFK Airport"),
        ("11", "1111", -4500, 4, "Taxi - New York"),
        ("12", "1111", -8575, 4, "Restaurant - New York"),
        ("13", "1111", -25000, 5, "Hotel - New York"),
        ("14", "1111", -6025, 5, "Souvenir Shop - Times Square"),
    ];

    InMemoryTransactions::from_transactions(rows.into_iter().map(
        |(id, account_id, cents, days, description)| Transaction {
            id: id.to_string(),
            account_id: account_id.to_string(),
            amount: Decimal::new(cents, 2),
            date: now - Duration::days(days),
            description: description.to_string(),
        },
    ))
}

fn account(
    account_id: &str,
    credit_limit: i64,
    balance: i64,
    last_payment_date: DateTime<Utc>,
    status: AccountStatus,
) -> Result<Account, Error> {
    Account::new(
        account_id,
        Decimal::from(credit_limit),
        Decimal::from(balance),
        last_payment_date,
        status,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountRepository, TransactionRepository};

    #[test]
    fn sample_data_is_consistent() {
        let now = Utc::now();
        let accounts = sample_accounts(now).unwrap();
        let transactions = sample_transactions(now).unwrap();

        assert_eq!(accounts.len(), 6);
        assert_eq!(transactions.len(), 14);
        assert_eq!(transactions.find_by_account("1111").len(), 10);

        let over_limit = accounts.find("0987").unwrap();
        assert!(over_limit.is_over_limit());
        assert_eq!(
            over_limit.status().decline_reason(),
            Some(DeclineReason::CreditLimitReached)
        );
    }
}
