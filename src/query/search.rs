// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword search command

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::cli::OutputFormat;
use sitesearch::config::Config;
use sitesearch::entries::EntryList;
use sitesearch::fetch::Fetch;
use sitesearch::output::{colorize_id, colorize_match, colorize_title, print_json, use_colors};
use sitesearch::{DocumentId, QueryResult, SearchEngine};

/// Arguments of the search command after config merging
pub struct SearchArgs<'a> {
    pub term: &'a str,
    pub base: Option<&'a str>,
    pub context: Option<usize>,
    pub entries: Option<&'a str>,
    pub format: OutputFormat,
    pub compact: bool,
}

/// One matched document for JSON output
#[derive(Debug, Serialize)]
struct MatchJson<'a> {
    id: &'a DocumentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    permalink: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct SearchJson<'a> {
    term: &'a str,
    found: bool,
    exact: Vec<MatchJson<'a>>,
    partial: Vec<MatchJson<'a>>,
}

/// Run the search command
pub fn run(args: &SearchArgs<'_>, config: &Config) -> Result<()> {
    let fetcher = super::open_fetcher(args.base, config)?;
    let mut engine = SearchEngine::with_config(fetcher.clone(), config);
    if let Some(entries) = load_entries(args.entries, config, fetcher.as_ref())? {
        engine = engine.with_entries(entries);
    }

    let result = engine.search(args.term);
    // Context is shown for exact matches only; partial matches contain the
    // keyword only as a prefix of a longer word.
    let context_limit = args.context.unwrap_or(0);

    match args.format {
        OutputFormat::Json => {
            let empty = QueryResult::default();
            let found = result.as_ref().unwrap_or(&empty);
            let payload = SearchJson {
                term: args.term,
                found: result.is_some(),
                exact: found
                    .exact
                    .iter()
                    .map(|id| match_json(&engine, args.term, id, context_limit))
                    .collect(),
                partial: found
                    .partial
                    .iter()
                    .map(|id| match_json(&engine, args.term, id, 0))
                    .collect(),
            };
            print_json(&payload, args.compact)?;
        }
        OutputFormat::Text => match result {
            None => {
                println!("{} No results for: {}", "✗".red(), args.term.yellow());
            }
            Some(result) => print_text(&engine, args.term, &result, context_limit),
        },
    }

    Ok(())
}

fn match_json<'a>(
    engine: &'a SearchEngine,
    term: &str,
    id: &'a DocumentId,
    context_limit: usize,
) -> MatchJson<'a> {
    let entry = engine.entry(id);
    MatchJson {
        id,
        permalink: entry.map(|e| e.permalink.as_str()),
        title: entry.map(|e| e.title.as_str()),
        context: if context_limit > 0 {
            engine.context(term, id, context_limit)
        } else {
            None
        },
    }
}

fn print_text(engine: &SearchEngine, term: &str, result: &QueryResult, context_limit: usize) {
    let use_color = use_colors();
    if !use_color {
        colored::control::set_override(false);
    }

    println!("\n{} Results for: {}\n", "🔍".cyan(), term.yellow());

    println!("{} ({})", "Exact".bold(), result.exact.len());
    for id in &result.exact {
        print_match(engine, id);
        if context_limit > 0 {
            for chunk in engine.context(term, id, context_limit).unwrap_or_default() {
                for line in chunk.lines() {
                    println!("      {} {}", "│".dimmed(), colorize_match(line, term));
                }
            }
        }
    }

    println!("{} ({})", "Partial".bold(), result.partial.len());
    for id in &result.partial {
        print_match(engine, id);
    }

    println!(
        "\n{} {} exact, {} partial",
        "✓".green(),
        result.exact.len().to_string().cyan(),
        result.partial.len().to_string().cyan()
    );
}

fn print_match(engine: &SearchEngine, id: &DocumentId) {
    match engine.entry(id) {
        Some(entry) => println!(
            "  {} {} {}",
            colorize_id(id.as_str()),
            colorize_title(&entry.title),
            entry.permalink.dimmed()
        ),
        None => println!("  {}", colorize_id(id.as_str())),
    }
}

/// Entry list from --entries, else from config, else `entries.json` next to
/// the shards when the index publishes one.
fn load_entries(
    cli_path: Option<&str>,
    config: &Config,
    fetcher: &dyn Fetch,
) -> Result<Option<EntryList>> {
    let explicit = cli_path
        .map(Path::new)
        .or(config.entries_file.as_deref());
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read entry list {}", path.display()))?;
        let entries = EntryList::from_json(&content)
            .with_context(|| format!("failed to parse entry list {}", path.display()))?;
        return Ok(Some(entries));
    }

    match EntryList::fetch(fetcher) {
        Ok(entries) => Ok(entries),
        Err(e) => {
            tracing::debug!(error = %e, "no published entry list");
            Ok(None)
        }
    }
}
