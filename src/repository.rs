use std::collections::{HashMap, HashSet, hash_map::Entry};
use std::io::Read;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{
    Account, AccountRepository, AccountStatus, Error, Transaction, TransactionRepository,
};

#[derive(Default, Debug)]
pub struct InMemoryAccounts {
    accounts: HashMap<String, Account>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn insert(&mut self, account: Account) -> Result<(), Error> {
        match self.accounts.entry(account.account_id().to_string()) {
            Entry::Vacant(e) => {
                e.insert(account);
                Ok(())
            }
            Entry::Occupied(e) => Err(Error::InvalidRecord(format!(
                "Account {} already exists",
                e.key()
            ))),
        }
    }

    pub fn from_accounts(accounts: impl IntoIterator<Item = Account>) -> Result<Self, Error> {
        let mut repo = Self::new();
        for account in accounts {
            repo.insert(account)?;
        }
        Ok(repo)
    }

    /// Loads `account_number,credit_limit,balance,last_payment_date,status,decline_reason`.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, Error> {
        let mut repo = Self::new();
        for row in csv_reader(reader).into_deserialize::<AccountRow>() {
            let row = row.map_err(|e| Error::InvalidRecord(format!("Account row: {}", e)))?;
            repo.insert(Account::try_from(row)?)?;
        }
        tracing::debug!(count = repo.len(), "loaded accounts");
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountRepository for InMemoryAccounts {
    fn find(&self, account_id: &str) -> Option<Account> {
        self.accounts.get(account_id).cloned()
    }
}

/// Keeps insertion order, which is what callers see for equal dates.
#[derive(Default, Debug)]
pub struct InMemoryTransactions {
    ledger: Vec<Transaction>,
}

impl InMemoryTransactions {
    pub fn new() -> Self {
        Self { ledger: Vec::new() }
    }

    pub fn from_transactions(
        transactions: impl IntoIterator<Item = Transaction>,
    ) -> Result<Self, Error> {
        let mut seen = HashSet::new();
        let mut ledger = Vec::new();
        for tx in transactions {
            if !seen.insert(tx.id.clone()) {
                return Err(Error::InvalidRecord(format!(
                    "Transaction ID {} already exists",
                    tx.id
                )));
            }
            ledger.push(tx);
        }
        Ok(Self { ledger })
    }

    /// Loads `id,account_number,amount,date,description`.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, Error> {
        let rows = csv_reader(reader)
            .into_deserialize::<TransactionRow>()
            .map(|row| {
                row.map(Transaction::from)
                    .map_err(|e| Error::InvalidRecord(format!("Transaction row: {}", e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let repo = Self::from_transactions(rows)?;
        tracing::debug!(count = repo.len(), "loaded transactions");
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }
}

impl TransactionRepository for InMemoryTransactions {
    fn find_by_account(&self, account_id: &str) -> Vec<Transaction> {
        self.ledger
            .iter()
            .filter(|tx| tx.account_id == account_id)
            .cloned()
            .collect()
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct AccountRow {
    account_number: String,
    #[serde(with = "rust_decimal::serde::str")]
    credit_limit: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    balance: Decimal,
    last_payment_date: DateTime<Utc>,
    status: String,
    decline_reason: Option<String>,
}

impl TryFrom<AccountRow> for Account {
    type Error = Error;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let status = AccountStatus::from_parts(&row.status, row.decline_reason.as_deref())?;
        Account::new(
            row.account_number,
            row.credit_limit,
            row.balance,
            row.last_payment_date,
            status,
        )
    }
}

#[derive(Debug, Deserialize)]
struct TransactionRow {
    id: String,
    account_number: String,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    date: DateTime<Utc>,
    description: String,
}

impl From<TransactionRow> for Transaction {
    fn from(row: TransactionRow) -> Self {
        Transaction {
            id: row.id,
            account_id: row.account_number,
            amount: row.amount,
            date: row.date,
            description: row.description,
        }
    }
}
