// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// sitesearch - Incremental keyword search over a published site index
///
/// Loads only the index shard a keyword needs and reports exact and partial
/// matches. The index base is a URL or a directory produced by the site
/// generator.
#[derive(Parser, Debug)]
#[command(name = "sitesearch")]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Quickstart:\n  sitesearch --base https://example.org/search/ s python\n  sitesearch --base public/search search rust -C 2\n  sitesearch --base public/search context ownership 12 -n 3"
)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Index base: URL or directory holding the shards (overrides config)
    #[arg(short, long, global = true)]
    pub base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a keyword: exact matches and longer keywords it prefixes
    #[command(visible_aliases = ["s", "find"])]
    Search {
        /// Keyword (at least two characters, case-insensitive)
        term: String,

        /// Paragraphs of context to show for each exact match
        #[arg(short = 'C', long)]
        context: Option<usize>,

        /// Local entry list (JSON array of [permalink, title]) to label results
        #[arg(short, long)]
        entries: Option<String>,
    },

    /// Show paragraphs of one document containing a keyword
    #[command(visible_aliases = ["ctx"])]
    Context {
        /// Keyword to look for (case-insensitive substring)
        keyword: String,

        /// Document identifier as reported by search
        id: String,

        /// Maximum number of paragraphs (default: 1)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
