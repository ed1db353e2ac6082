//! Pair rotation CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration**: load `.pair-rotation/config.toml` and the
//!    Trello credentials from the environment, and validate both.
//! 2. **Wire observability**: install a `tracing-subscriber` text or JSON
//!    layer. All spans and events emitted by every crate flow through it.
//! 3. **Construct infrastructure**: create the [`trello::TrelloClient`] and
//!    inject it into a [`rotation::PairingBoard`].
//! 4. **Run the command**:
//!    - `sync` reads the board and prints the reconstructed snapshot.
//!    - `publish` writes a day computed by the pairing algorithm back to the
//!      board as a new `pairing(dd/mm/yyyy)` list.

mod commands;
mod config;
mod observability;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rotation::PairingBoard;
use trello::TrelloClient;

use crate::config::{trello_config, BoardConfig, DEFAULT_CONFIG_PATH};
use crate::observability::LogFormat;

#[derive(Parser)]
#[command(name = "pair-rotation")]
#[command(about = "Synchronise a pair rotation schedule with its Trello board")]
struct Cli {
    /// Path to the board configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read the board and print the developers, tracks, and pairing history
    Sync {
        /// Fail if any pairing list has an unreadable date
        #[arg(long)]
        strict: bool,
    },
    /// Publish a computed day of pairs as a new pairing list
    Publish {
        /// JSON file holding the day's pairs
        #[arg(long)]
        day: PathBuf,

        /// Days after the day's own date to date the new list (overrides config)
        #[arg(long)]
        days_into_future: Option<u32>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    observability::init(cli.log_format)?;

    let config = BoardConfig::load(&cli.config)?;
    let client = TrelloClient::new(trello_config(&config)?)
        .context("Failed to construct Trello client")?;
    let board = PairingBoard::new(Arc::new(client), config.board_id.clone())
        .with_label_scheme(config.labels.clone());

    match cli.command {
        Command::Sync { strict } => commands::sync(&board, strict).await,
        Command::Publish {
            day,
            days_into_future,
        } => {
            let days = days_into_future.unwrap_or(config.days_into_future);
            commands::publish(&board, &day, days).await
        }
    }
}
