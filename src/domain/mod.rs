pub mod account;
pub mod decline_reason;
pub mod error;
pub mod query;
pub mod traits;
pub mod transaction;

pub use account::{Account, AccountStatus};
pub use decline_reason::DeclineReason;
pub use error::{AccountNotFound, Error};
pub use query::{QueryKind, QueryOutcome, QueryRequest, QueryResponse};
pub use traits::{
    AccountRepository, DeadLetterQueue, RequestStream, ResponseSink, TransactionRepository,
};
pub use transaction::Transaction;
