pub mod errors;
pub mod fanout;
pub mod models;
pub mod providers;
pub mod settings;

pub use fanout::Fanout;
pub use models::message::{Message, Role};
pub use models::response::{ModelResponse, ResultMap, ResultSlots};
pub use providers::base::ChatBackend;
pub use providers::configs::OllamaClientConfig;
pub use providers::ollama::OllamaClient;
pub use settings::Settings;
