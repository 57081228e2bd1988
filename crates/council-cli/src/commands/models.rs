use anyhow::Result;
use cliclack::spinner;
use console::style;
use council::{OllamaClient, Settings};

pub async fn execute(settings: &Settings) -> Result<()> {
    let client = OllamaClient::new(settings.client_config());

    let spin = spinner();
    spin.start(format!("listing models at {}", settings.api_url));
    let models = client.list_available_models().await;
    spin.stop("");

    if models.is_empty() {
        println!(
            "{}",
            style(format!(
                "No models found. Is the backend running at {}?",
                settings.api_url
            ))
            .yellow()
        );
        return Ok(());
    }

    let council = settings.council_models();
    for model in &models {
        if council.contains(model) {
            println!("{} {}", model, style("(council)").dim());
        } else {
            println!("{}", model);
        }
    }
    Ok(())
}
