use anyhow::Context;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod db;
mod error;
mod models;
pub(crate) mod types;

use config::Config;
use db::Database;
pub(crate) use error::{ApiError, ApiResult};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // try to load .env, ignoring any errors
    _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = Config::load()?;

    let database = Database::connect(&config.database.url, config.database.tls)
        .await
        .context("failed to connect to database")?;

    match cli.command {
        Command::Serve => commands::serve::run(config, database).await,
    }
}
