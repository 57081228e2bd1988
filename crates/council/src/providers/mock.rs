use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::models::message::Message;
use crate::models::response::ModelResponse;
use crate::providers::base::ChatBackend;

/// A mock backend that answers each model with a pre-configured reply after a delay
///
/// Models without a configured reply fail.
#[derive(Default)]
pub struct MockBackend {
    replies: HashMap<String, (Duration, Option<String>)>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, model: &str, content: &str) -> Self {
        self.with_delayed_reply(model, Duration::ZERO, content)
    }

    pub fn with_delayed_reply(mut self, model: &str, delay: Duration, content: &str) -> Self {
        self.replies
            .insert(model.to_string(), (delay, Some(content.to_string())));
        self
    }

    pub fn with_failure(mut self, model: &str, delay: Duration) -> Self {
        self.replies.insert(model.to_string(), (delay, None));
        self
    }

    /// Models queried so far, in the order the calls started
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    async fn query(
        &self,
        model: &str,
        _messages: &[Message],
        timeout: Duration,
    ) -> Option<ModelResponse> {
        self.calls.lock().unwrap().push(model.to_string());

        let (delay, reply) = self.replies.get(model).cloned()?;
        if delay > timeout {
            tokio::time::sleep(timeout).await;
            return None;
        }
        tokio::time::sleep(delay).await;
        reply.map(ModelResponse::new)
    }
}
