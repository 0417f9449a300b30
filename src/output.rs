use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::domain::{
    Account, AccountStatus, Error, QueryKind, QueryOutcome, QueryResponse, ResponseSink,
    Transaction,
};

/// Writes one JSON object per response, in the order responses arrive.
#[derive(Debug)]
pub struct JsonLinesOutput<W: Write> {
    writer: BufWriter<W>,
    written: usize,
}

impl<W: Write> JsonLinesOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            written: 0,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> Result<W, Error> {
        self.writer
            .into_inner()
            .map_err(|e| Error::IO(e.into_error()))
    }
}

impl JsonLinesOutput<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Body<'a> {
    Balance(&'a Account),
    Transactions(&'a [Transaction]),
    Status(&'a AccountStatus),
}

#[derive(Serialize)]
struct Line<'a> {
    query: QueryKind,
    account_number: &'a str,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Body<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

impl<'a> From<&'a QueryResponse> for Line<'a> {
    fn from(response: &'a QueryResponse) -> Self {
        let (body, error) = match &response.outcome {
            QueryOutcome::Balance(account) => (Some(Body::Balance(account)), None),
            QueryOutcome::Transactions(txs) => (Some(Body::Transactions(txs)), None),
            QueryOutcome::Status(status) => (Some(Body::Status(status)), None),
            QueryOutcome::NotFound => (None, Some("Account not found")),
        };

        Line {
            query: response.request.kind,
            account_number: &response.request.account_id,
            code: response.outcome.status_code(),
            body,
            error,
        }
    }
}

impl<W: Write> ResponseSink for JsonLinesOutput<W> {
    fn report_response(&mut self, response: &QueryResponse) -> Result<(), Error> {
        serde_json::to_writer(&mut self.writer, &Line::from(response))?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()?;
        Ok(())
    }
}
