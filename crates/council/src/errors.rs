use reqwest::StatusCode;
use thiserror::Error;

/// Ways a single call against a backend can fail
///
/// These never leave the client: they are logged against the model that caused
/// them and turned into an absent result.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Server error: {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid value for {env_var}: {reason}")]
    Invalid { env_var: String, reason: String },

    #[error(transparent)]
    Other(#[from] config::ConfigError),
}

/// Map a settings key to the environment variable that sets it
pub fn to_env_var(field: &str) -> String {
    match field {
        "api_url" => "OLLAMA_API_URL".to_string(),
        other => format!("COUNCIL_{}", other.to_uppercase()),
    }
}
