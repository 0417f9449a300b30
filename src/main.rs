use std::{env, fs::File, io::Read, path::Path};

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use credit_card_service::config::Config;
use credit_card_service::dlq::TracingDLQ;
use credit_card_service::domain::Error;
use credit_card_service::engine::Engine;
use credit_card_service::fixtures;
use credit_card_service::ingestion::CsvRequestReader;
use credit_card_service::output::JsonLinesOutput;
use credit_card_service::repository::{InMemoryAccounts, InMemoryTransactions};
use credit_card_service::service::AccountQueryService;

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(env::args().skip(1))?;
    tracing::debug!(?config, "starting");

    // Set up the components
    let now = Utc::now();
    let accounts = match &config.accounts {
        Some(path) => InMemoryAccounts::from_csv(open(path)?)?,
        None => fixtures::sample_accounts(now)?,
    };
    let transactions = match &config.transactions {
        Some(path) => InMemoryTransactions::from_csv(open(path)?)?,
        None => fixtures::sample_transactions(now)?,
    };
    let service = AccountQueryService::new(accounts, transactions);

    let requests: Box<dyn Read + Send> = match &config.requests {
        Some(path) => Box::new(open(path)?),
        None => Box::new(std::io::stdin()),
    };

    let mut engine = Engine::new(
        CsvRequestReader::new(requests),
        JsonLinesOutput::stdout(),
        TracingDLQ::new(),
        service,
    );

    engine.process().await?;
    engine.flush()?;

    tracing::info!(
        answered = engine.output().written(),
        rejected = engine.dlq().reported(),
        "done"
    );

    Ok(())
}

fn open(path: &Path) -> Result<File, Error> {
    File::open(path).map_err(|e| Error::Config(format!("Cannot open {}: {}", path.display(), e)))
}
