use crate::domain::{
    AccountRepository, Error, QueryRequest, TransactionRepository,
    traits::{DeadLetterQueue, RequestStream, ResponseSink},
};
use crate::service::AccountQueryService;

use futures::StreamExt;

#[derive(Debug)]
pub struct Engine<I, O, D, A, T>
where
    I: RequestStream,
    O: ResponseSink,
    D: DeadLetterQueue,
    A: AccountRepository,
    T: TransactionRepository,
{
    ingestion: I,
    output: O,
    dlq: D,
    service: AccountQueryService<A, T>,
}

impl<I, O, D, A, T> Engine<I, O, D, A, T>
where
    I: RequestStream,
    O: ResponseSink,
    D: DeadLetterQueue,
    A: AccountRepository,
    T: TransactionRepository,
{
    pub fn new(ingestion: I, output: O, dlq: D, service: AccountQueryService<A, T>) -> Self {
        Self {
            ingestion,
            output,
            dlq,
            service,
        }
    }

    /// Drains the request stream. Malformed requests go to the DLQ and the run
    /// continues; a failing output sink aborts it.
    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(req) = res.next().await {
            match req {
                Ok(req) => self.answer(&req)?,
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn answer(&mut self, request: &QueryRequest) -> Result<(), Error> {
        let response = self.service.execute(request);
        tracing::debug!(
            query = ?request.kind,
            account_id = %request.account_id,
            code = response.outcome.status_code(),
            "answered"
        );
        self.output.report_response(&response)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.output.flush()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn dlq(&self) -> &D {
        &self.dlq
    }
}
