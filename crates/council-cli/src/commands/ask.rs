use anyhow::{anyhow, Result};
use bat::PrettyPrinter;
use clap::Args;
use cliclack::spinner;
use console::style;
use council::{Fanout, Message, OllamaClient, ResultMap, Settings};
use std::collections::HashSet;

use super::storage::{save_run, SavedRun};

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to put to the council
    pub prompt: String,

    /// Ask these models instead of the configured council (repeatable)
    #[arg(short, long = "model")]
    pub models: Vec<String>,

    /// System prompt sent ahead of the question
    #[arg(short, long)]
    pub system: Option<String>,

    /// Print the results as JSON instead of rendered markdown
    #[arg(long)]
    pub json: bool,

    /// Save the run under the configured data directory
    #[arg(long)]
    pub save: bool,
}

pub async fn execute(settings: &Settings, args: AskArgs) -> Result<()> {
    let models = if args.models.is_empty() {
        settings.council_models()
    } else {
        args.models.clone()
    };
    let messages = build_messages(&args);

    let fanout =
        Fanout::new(OllamaClient::new(settings.client_config())).with_timeout(settings.timeout());

    let results = if args.json {
        fanout.query_all(models.as_slice(), &messages).await
    } else {
        let spin = spinner();
        spin.start(format!("asking {} models", models.len()));
        let results = fanout.query_all(models.as_slice(), &messages).await;
        spin.stop("");
        results
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        render_results(&models, &results)?;
    }

    if args.save {
        let run = SavedRun::new(&args.prompt, &models, results);
        let path = save_run(&settings.data_dir, &run)?;
        eprintln!("{} {}", style("saved to").dim(), path.display());
    }

    Ok(())
}

fn build_messages(args: &AskArgs) -> Vec<Message> {
    let mut messages = Vec::new();
    if let Some(system) = &args.system {
        messages.push(Message::system(system.as_str()));
    }
    messages.push(Message::user(args.prompt.as_str()));
    messages
}

/// Print each model once, in the order it was requested
fn render_results(models: &[String], results: &ResultMap) -> Result<()> {
    let mut seen = HashSet::new();
    for model in models {
        if !seen.insert(model.as_str()) {
            continue;
        }

        match results.get(model).and_then(Option::as_ref) {
            Some(response) => {
                println!("{}", style(format!("── {} ──", model)).bold().green());
                render(&response.content)?;
            }
            None => {
                println!("{}", style(format!("── {} ──", model)).bold().red());
                println!("{}", style("no response").dim());
            }
        }
        println!();
    }
    Ok(())
}

fn render(content: &str) -> Result<()> {
    PrettyPrinter::new()
        .input_from_bytes(content.as_bytes())
        .language("markdown")
        .print()
        .map_err(|e| anyhow!("Failed to render response: {}", e))?;
    Ok(())
}
