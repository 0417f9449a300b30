use futures::Stream;

use crate::domain::{Account, Error, QueryRequest, QueryResponse, Transaction};

/// Point lookup of accounts. Implementations hand out snapshots and never
/// expose mutation to callers.
pub trait AccountRepository: Send + Sync {
    fn find(&self, account_id: &str) -> Option<Account>;
}

/// Transactions for one account, in no particular order. Never fails: an
/// unknown account yields an empty list.
pub trait TransactionRepository: Send + Sync {
    fn find_by_account(&self, account_id: &str) -> Vec<Transaction>;
}

pub trait RequestStream {
    type ReqStream: Stream<Item = Result<QueryRequest, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::ReqStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait ResponseSink {
    fn report_response(&mut self, response: &QueryResponse) -> Result<(), Error>;
    fn flush(&mut self) -> Result<(), Error>;
}

impl<T: AccountRepository + ?Sized> AccountRepository for std::sync::Arc<T> {
    fn find(&self, account_id: &str) -> Option<Account> {
        (**self).find(account_id)
    }
}

impl<T: TransactionRepository + ?Sized> TransactionRepository for std::sync::Arc<T> {
    fn find_by_account(&self, account_id: &str) -> Vec<Transaction> {
        (**self).find_by_account(account_id)
    }
}
