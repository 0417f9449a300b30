use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::RequestStream;
use crate::domain::{Error, QueryRequest};

pub struct CsvRequestReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvRequestReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    query: String,
    account: Option<String>,
}

impl TryFrom<CsvRow> for QueryRequest {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let kind = row.query.parse()?;
        // An empty identifier is a malformed row, not an unknown account.
        let account_id = row
            .account
            .filter(|a| !a.is_empty())
            .ok_or_else(|| Error::Ingestion(format!("Missing account for {} query", row.query)))?;

        Ok(QueryRequest { kind, account_id })
    }
}

impl<R: Read + Send + 'static> RequestStream for CsvRequestReader<R> {
    type ReqStream = Pin<Box<dyn Stream<Item = Result<QueryRequest, Error>> + Send>>;

    fn stream(&mut self) -> Self::ReqStream {
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<QueryRequest, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => QueryRequest::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
