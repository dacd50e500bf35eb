//! `BeanThere` CLI entrypoint.

use beanthere::cli::{self, Cli};
use beanthere::config;
use beanthere::errors::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // 1. Initialize tracing (as early as possible). Logs go to stderr so they
    //    never mix with command output; default level is warn for a quiet CLI.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file; non-fatal, env vars can be set externally
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Acquires the storage connection for this invocation, ensures the schema
/// exists, and dispatches the parsed command. The connection is dropped on
/// every exit path when this returns.
async fn run(cli: Cli) -> Result<()> {
    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    cli::run(&db, cli).await
}
