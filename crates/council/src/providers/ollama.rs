use super::base::ChatBackend;
use super::configs::OllamaClientConfig;
use super::utils::{chat_payload, chat_response_to_model_response, tags_to_model_names};
use crate::errors::{ClientError, ClientResult};
use crate::models::message::Message;
use crate::models::response::ModelResponse;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, error};

/// Client for an Ollama-compatible backend
///
/// Every call builds its own HTTP transport bounded by that call's timeout, so
/// concurrent calls share no connection state.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    config: OllamaClientConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OllamaClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.host.trim_end_matches('/'), path)
    }

    fn http_client(timeout: Duration) -> ClientResult<Client> {
        Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)
    }

    async fn read_json(response: Response) -> ClientResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let body = response.text().await.map_err(ClientError::Transport)?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Query a single model, reporting why it failed
    pub async fn try_query(
        &self,
        model: &str,
        messages: &[Message],
        timeout: Duration,
    ) -> ClientResult<ModelResponse> {
        let client = Self::http_client(timeout)?;
        let url = self.url("api/chat");
        debug!(model, %url, messages = messages.len(), "querying model");

        let response = client
            .post(&url)
            .json(&chat_payload(model, messages))
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let data = Self::read_json(response).await?;
        chat_response_to_model_response(&data)
    }

    /// Fetch the distinct base names of the models the backend has installed
    pub async fn try_list_available_models(&self) -> ClientResult<BTreeSet<String>> {
        let client = Self::http_client(self.config.discovery_timeout)?;
        let url = self.url("api/tags");
        debug!(%url, "listing available models");

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let data = Self::read_json(response).await?;
        tags_to_model_names(&data)
    }

    /// Same as [`Self::try_list_available_models`], but an empty set on any failure
    pub async fn list_available_models(&self) -> BTreeSet<String> {
        match self.try_list_available_models().await {
            Ok(models) => models,
            Err(e) => {
                error!(error = %e, "Error getting available models");
                BTreeSet::new()
            }
        }
    }
}

#[async_trait]
impl ChatBackend for OllamaClient {
    async fn query(
        &self,
        model: &str,
        messages: &[Message],
        timeout: Duration,
    ) -> Option<ModelResponse> {
        match self.try_query(model, messages, timeout).await {
            Ok(response) => Some(response),
            Err(e) => {
                error!(model, error = %e, "Error querying model");
                None
            }
        }
    }
}
