use crate::domain::{
    Account, AccountNotFound, AccountRepository, AccountStatus, QueryKind, QueryOutcome,
    QueryRequest, QueryResponse, Transaction, TransactionRepository,
};

/// Cap on the history returned by `get_recent_transactions`.
pub const RECENT_TRANSACTIONS_LIMIT: usize = 10;

/// Read-only queries over injected repositories. Holds no per-request state,
/// so one instance can serve concurrent callers.
#[derive(Debug)]
pub struct AccountQueryService<A, T>
where
    A: AccountRepository,
    T: TransactionRepository,
{
    accounts: A,
    transactions: T,
}

impl<A, T> AccountQueryService<A, T>
where
    A: AccountRepository,
    T: TransactionRepository,
{
    pub fn new(accounts: A, transactions: T) -> Self {
        Self {
            accounts,
            transactions,
        }
    }

    pub fn get_balance(&self, account_id: &str) -> Result<Account, AccountNotFound> {
        tracing::debug!(account_id, "balance lookup");
        self.find_account(account_id).inspect(|account| {
            if account.is_over_limit() {
                tracing::debug!(account_id, "account is over its credit limit");
            }
        })
    }

    /// Most recent first, at most `RECENT_TRANSACTIONS_LIMIT` entries.
    /// Unknown accounts are not an error here: they just have no history.
    pub fn get_recent_transactions(&self, account_id: &str) -> Vec<Transaction> {
        tracing::debug!(account_id, "transaction history lookup");

        let mut recent = self.transactions.find_by_account(account_id);
        // sort_by is stable: equal dates keep repository order
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(RECENT_TRANSACTIONS_LIMIT);
        recent
    }

    pub fn get_account_status(&self, account_id: &str) -> Result<AccountStatus, AccountNotFound> {
        tracing::debug!(account_id, "status lookup");
        self.find_account(account_id).map(|account| account.status())
    }

    pub fn execute(&self, request: &QueryRequest) -> QueryResponse {
        let account_id = request.account_id.as_str();
        let outcome = match request.kind {
            QueryKind::Balance => self
                .get_balance(account_id)
                .map_or(QueryOutcome::NotFound, QueryOutcome::Balance),
            QueryKind::Transactions => {
                QueryOutcome::Transactions(self.get_recent_transactions(account_id))
            }
            QueryKind::Status => self
                .get_account_status(account_id)
                .map_or(QueryOutcome::NotFound, QueryOutcome::Status),
        };

        QueryResponse {
            request: request.clone(),
            outcome,
        }
    }

    fn find_account(&self, account_id: &str) -> Result<Account, AccountNotFound> {
        self.accounts.find(account_id).ok_or_else(|| {
            tracing::info!(account_id, "account not found");
            AccountNotFound(account_id.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Duration, Utc};
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::DeclineReason;
    use crate::fixtures::{sample_accounts, sample_transactions};
    use crate::repository::{InMemoryAccounts, InMemoryTransactions};

    type SampleService = AccountQueryService<InMemoryAccounts, InMemoryTransactions>;

    fn sample_service() -> SampleService {
        let now = Utc::now();
        AccountQueryService::new(
            sample_accounts(now).unwrap(),
            sample_transactions(now).unwrap(),
        )
    }

    fn tx(id: &str, account_id: &str, date: DateTime<Utc>) -> Transaction {
        Transaction {
            id: id.to_string(),
            account_id: account_id.to_string(),
            amount: Decimal::new(-100, 2),
            date,
            description: format!("purchase {}", id),
        }
    }

    fn assert_newest_first(txs: &[Transaction]) {
        for pair in txs.windows(2) {
            assert!(pair[0].date >= pair[1].date, "{} before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn balance_returns_the_requested_account() {
        let service = sample_service();
        for id in ["1234", "0987", "1111", "4444", "7777", "0000"] {
            assert_eq!(service.get_balance(id).unwrap().account_id(), id);
        }
    }

    #[test]
    fn unknown_account_is_not_found_for_balance_and_status() {
        let service = sample_service();
        for id in ["9999999999", "", "12 34", "0987654321"] {
            assert_eq!(
                service.get_balance(id),
                Err(AccountNotFound(id.to_string()))
            );
            assert_eq!(
                service.get_account_status(id),
                Err(AccountNotFound(id.to_string()))
            );
        }
    }

    #[test]
    fn unknown_account_has_empty_history() {
        let service = sample_service();
        assert!(service.get_recent_transactions("9999999999").is_empty());
    }

    #[test]
    fn active_account_status_has_no_reason() {
        let status = sample_service().get_account_status("1234").unwrap();
        assert_eq!(status, AccountStatus::Active);
        assert_eq!(status.decline_reason(), None);
    }

    #[test]
    fn over_limit_account_is_declined_for_credit_limit() {
        let service = sample_service();

        let account = service.get_balance("0987").unwrap();
        assert_eq!(account.credit_limit(), Decimal::from(10000));
        assert_eq!(account.balance(), Decimal::from(10001));

        let status = service.get_account_status("0987").unwrap();
        assert_eq!(
            status,
            AccountStatus::Declined(DeclineReason::CreditLimitReached)
        );
        assert_eq!(status.decline_reason().unwrap().message(), "You met your credit limit");
    }

    #[test]
    fn reason_present_iff_declined() {
        let service = sample_service();
        for id in ["1234", "0987", "1111", "4444", "7777", "0000"] {
            let status = service.get_account_status(id).unwrap();
            assert_eq!(status.is_declined(), status.decline_reason().is_some());
        }
    }

    #[test]
    fn history_is_newest_first_with_ties_in_repository_order() {
        let txs = sample_service().get_recent_transactions("1111");

        assert_eq!(txs.len(), 10);
        assert_newest_first(&txs);
        assert_eq!(
            txs.iter()
                .take(4)
                .map(|t| t.description.as_str())
                .collect::<Vec<_>>(),
            vec![
                "Hotel - Paris",
                "Restaurant - Paris",
                "Train Ticket - London to Paris",
                "Taxi - London",
            ]
        );
    }

    #[test]
    fn history_is_capped_at_ten_most_recent() {
        let now = Utc::now();
        let history = (1..=11).map(|i| tx(&i.to_string(), "1111", now - Duration::days(i)));
        let service = AccountQueryService::new(
            InMemoryAccounts::new(),
            InMemoryTransactions::from_transactions(history).unwrap(),
        );

        let txs = service.get_recent_transactions("1111");
        assert_eq!(txs.len(), RECENT_TRANSACTIONS_LIMIT);
        assert_newest_first(&txs);
        assert!(txs.iter().all(|t| t.id != "11"));
    }

    #[test]
    fn history_length_is_min_of_cap_and_matches() {
        let service = sample_service();
        for (id, expected) in [("1111", 10), ("1234", 2), ("0987", 1), ("7777", 0)] {
            assert_eq!(service.get_recent_transactions(id).len(), expected, "{}", id);
        }
    }

    #[test]
    fn history_sorts_unordered_input_without_touching_repository() {
        let now = Utc::now();
        let transactions = Arc::new(
            InMemoryTransactions::from_transactions([
                tx("a", "42", now - Duration::days(3)),
                tx("b", "42", now),
                tx("c", "42", now - Duration::days(1)),
                tx("d", "42", now),
            ])
            .unwrap(),
        );
        let service = AccountQueryService::new(InMemoryAccounts::new(), Arc::clone(&transactions));

        let ids = |txs: Vec<Transaction>| txs.into_iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids(service.get_recent_transactions("42")), vec!["b", "d", "c", "a"]);
        assert_eq!(ids(transactions.find_by_account("42")), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn history_is_idempotent() {
        let service = sample_service();
        assert_eq!(
            service.get_recent_transactions("1111"),
            service.get_recent_transactions("1111")
        );
    }

    #[test]
    fn transactions_for_missing_accounts_are_still_returned() {
        let now = Utc::now();
        let service = AccountQueryService::new(
            InMemoryAccounts::new(),
            InMemoryTransactions::from_transactions([tx("1", "ghost", now)]).unwrap(),
        );
        assert_eq!(service.get_recent_transactions("ghost").len(), 1);
        assert!(service.get_balance("ghost").is_err());
    }

    #[test]
    fn execute_maps_misses_per_query_kind() {
        let service = sample_service();

        let balance = service.execute(&QueryRequest::new(QueryKind::Balance, "9999999999"));
        assert_eq!(balance.outcome, QueryOutcome::NotFound);

        let status = service.execute(&QueryRequest::new(QueryKind::Status, "9999999999"));
        assert_eq!(status.outcome, QueryOutcome::NotFound);

        let history =
            service.execute(&QueryRequest::new(QueryKind::Transactions, "9999999999"));
        assert_eq!(history.outcome, QueryOutcome::Transactions(vec![]));
        assert_eq!(history.outcome.status_code(), 200);
    }

    #[tokio::test]
    async fn concurrent_queries_agree() {
        let service = Arc::new(sample_service());
        let expected = service.get_recent_transactions("1111");

        let handles = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    (
                        service.get_recent_transactions("1111"),
                        service.get_account_status("1234"),
                    )
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            let (history, status) = handle.await.unwrap();
            assert_eq!(history, expected);
            assert_eq!(status, Ok(AccountStatus::Active));
        }
    }
}
