use std::time::Duration;

pub const OLLAMA_HOST: &str = "http://localhost:11434";

/// Per-call timeout used for chat queries unless overridden
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(120);

/// Timeout for the model discovery request
pub const DEFAULT_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaClientConfig {
    pub host: String,
    pub discovery_timeout: Duration,
}

impl OllamaClientConfig {
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            host: host.into(),
            discovery_timeout: DEFAULT_DISCOVERY_TIMEOUT,
        }
    }

    pub fn with_discovery_timeout(mut self, timeout: Duration) -> Self {
        self.discovery_timeout = timeout;
        self
    }
}

impl Default for OllamaClientConfig {
    fn default() -> Self {
        Self::new(OLLAMA_HOST)
    }
}
