// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fahc: decode and watch the Folding@home client command port.

mod color;
mod commands;
mod exit_error;
mod output;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::query::Query;
use crate::commands::watch::WatchArgs;
use crate::commands::ConnectionArgs;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

#[derive(Parser, Debug)]
#[command(name = "fahc", version = VERSION, about = "Folding@home client command-port tool")]
#[command(styles = color::styles())]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a captured command-port stream ("-" reads stdin)
    Decode { file: PathBuf },

    /// Print live updates until interrupted
    Watch(WatchArgs),

    /// Send one query and print the reply
    Query {
        /// Seconds to wait for the reply
        #[arg(long, default_value_t = 10)]
        timeout: u64,

        #[command(subcommand)]
        query: Query,
    },
}

/// Log to stderr, filtered by `FAH_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("FAH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Decode { file } => commands::decode::handle(&file, cli.format),
        Commands::Watch(watch) => commands::watch::handle(&cli.connection, &watch, cli.format).await,
        Commands::Query { timeout, query } => {
            let timeout = Duration::from_secs(timeout.max(1));
            commands::query::handle(&cli.connection, query, timeout, cli.format).await
        }
    }
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        if let Some(exit) = e.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("Error: {}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
