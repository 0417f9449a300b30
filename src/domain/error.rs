/// The only failure the query core reports: the identifier has no account.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Account not found: {0}")]
pub struct AccountNotFound(pub String);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Output failed with: {0}")]
    Output(#[from] serde_json::Error),
}
