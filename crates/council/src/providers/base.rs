use async_trait::async_trait;
use std::time::Duration;

use crate::models::message::Message;
use crate::models::response::ModelResponse;

/// A backend that can answer a conversation on behalf of a named model
///
/// Implementations absorb their own failures. An unreachable, slow or misbehaving
/// model yields `None` and must never surface an error to the caller, so a batch
/// of queries can always be joined without error handling.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send the conversation to `model` and wait at most `timeout` for the reply
    async fn query(
        &self,
        model: &str,
        messages: &[Message],
        timeout: Duration,
    ) -> Option<ModelResponse>;
}
