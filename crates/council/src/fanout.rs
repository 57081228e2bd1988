//! Parallel fan-out of one conversation to many models
//!
//! Every model in a batch is queried at the same time and the batch waits for all
//! of them, so a batch takes about as long as its slowest model. A model that fails
//! or times out only empties its own entry.

use futures::future::join_all;
use std::time::Duration;
use tracing::info;

use crate::models::message::Message;
use crate::models::response::{ResultMap, ResultSlots};
use crate::providers::base::ChatBackend;
use crate::providers::configs::DEFAULT_QUERY_TIMEOUT;

pub struct Fanout<B> {
    backend: B,
    timeout: Duration,
}

impl<B: ChatBackend> Fanout<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Override the per-call timeout applied to every model in a batch
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Query every model concurrently, one result per requested slot in input order
    ///
    /// Duplicate identifiers are queried once per occurrence and keep separate entries.
    pub async fn query_slots<S: AsRef<str>>(
        &self,
        models: &[S],
        messages: &[Message],
    ) -> ResultSlots {
        let futures: Vec<_> = models
            .iter()
            .map(|model| self.backend.query(model.as_ref(), messages, self.timeout))
            .collect();

        // Wait for every call, whichever order they finish in
        let outcomes = join_all(futures).await;

        let succeeded = outcomes.iter().filter(|outcome| outcome.is_some()).count();
        info!(
            requested = models.len(),
            succeeded,
            failed = models.len() - succeeded,
            "fan-out complete"
        );

        models
            .iter()
            .map(|model| model.as_ref().to_string())
            .zip(outcomes)
            .collect()
    }

    /// Query every model concurrently and key the outcomes by model identifier
    ///
    /// The key set always equals the set of requested identifiers. When an
    /// identifier is requested more than once, the outcome of its last slot wins.
    pub async fn query_all<S: AsRef<str>>(&self, models: &[S], messages: &[Message]) -> ResultMap {
        self.query_slots(models, messages).await.into_iter().collect()
    }
}
