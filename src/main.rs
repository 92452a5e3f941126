// SPDX-License-Identifier: MIT OR Apache-2.0

//! sitesearch - Incremental keyword search over a published site index
//!
//! Fetches only the prefix-tree shard a keyword needs and reports exact and
//! partial matches, with optional paragraph context from the documents.

mod cli;
mod query;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, OutputFormat};
use sitesearch::config::{Config, ConfigOutputFormat};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load();
    let format = cli.format.unwrap_or(match config.output_format() {
        Some(ConfigOutputFormat::Json) => OutputFormat::Json,
        _ => OutputFormat::Text,
    });
    let base = cli.base.as_deref();

    match cli.command {
        Commands::Search {
            term,
            context,
            entries,
        } => {
            let args = query::search::SearchArgs {
                term: &term,
                base,
                context,
                entries: entries.as_deref(),
                format,
                compact: cli.compact,
            };
            query::search::run(&args, &config)?;
        }
        Commands::Context { keyword, id, limit } => {
            query::context::run(&keyword, &id, limit, base, &config, format, cli.compact)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "sitesearch", &mut std::io::stdout());
        }
    }

    Ok(())
}
