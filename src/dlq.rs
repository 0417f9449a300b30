use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{DeadLetterQueue, Error};

/// Reports rejected requests as `tracing` warnings, which go to stderr.
#[derive(Default, Debug)]
pub struct TracingDLQ {
    reported: AtomicUsize,
}

impl TracingDLQ {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> usize {
        self.reported.load(Ordering::Relaxed)
    }
}

impl DeadLetterQueue for TracingDLQ {
    fn report(&self, error: &Error) {
        self.reported.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(%error, "DLQ report");
    }
}
