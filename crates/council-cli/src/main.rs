use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use council::Settings;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::ask::AskArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Show debug logs for every backend request
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List the models installed on the backend
    Models,

    /// Ask every council model the same question in parallel
    Ask(AskArgs),

    /// Print the resolved configuration
    Config,
}

fn setup_logging(verbose: bool) {
    let default_directive = if verbose { "council=debug" } else { "council=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine, the environment may already be set
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let settings = Settings::new().context("Failed to load council settings")?;

    match cli.command {
        Command::Models => commands::models::execute(&settings).await,
        Command::Ask(args) => commands::ask::execute(&settings, args).await,
        Command::Config => commands::config::execute(&settings),
    }
}
