use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The text a model produced for a conversation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub content: String,
}

impl ModelResponse {
    pub fn new<S: Into<String>>(content: S) -> Self {
        ModelResponse {
            content: content.into(),
        }
    }
}

/// Outcome of a batch keyed by model identifier, `None` for models that failed
pub type ResultMap = HashMap<String, Option<ModelResponse>>;

/// Outcome of a batch with one entry per requested slot, in request order
pub type ResultSlots = Vec<(String, Option<ModelResponse>)>;
