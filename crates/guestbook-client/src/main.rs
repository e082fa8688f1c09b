//! Guestbook - command-line client for the guestbook GraphQL backend.

use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppResult;
use guestbook_client::{
    cli::{Cli, Commands},
    commands, ClientConfig, GuestbookClient,
};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed [{}]: {}", e.code(), e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = ClientConfig::from_env()?;
    tracing::debug!("Configuration loaded");

    let client = GuestbookClient::new(&config)?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::List(args) => commands::list::execute(args, &client, &mut stdout).await,
        Commands::Create(args) => commands::create::execute(args, &client, &mut stdout).await,
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
