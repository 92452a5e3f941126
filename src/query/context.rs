// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document context command

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use sitesearch::config::Config;
use sitesearch::output::{colorize_match, print_json, use_colors};
use sitesearch::{DocumentId, SearchEngine};

#[derive(Debug, Serialize)]
struct ContextJson<'a> {
    keyword: &'a str,
    id: &'a DocumentId,
    found: bool,
    paragraphs: Vec<String>,
}

/// Run the context command
pub fn run(
    keyword: &str,
    id: &str,
    limit: Option<usize>,
    base: Option<&str>,
    config: &Config,
    format: OutputFormat,
    compact: bool,
) -> Result<()> {
    let fetcher = super::open_fetcher(base, config)?;
    let engine = SearchEngine::with_config(fetcher, config);
    let id = DocumentId::new(id);
    let limit = config.merge_context_limit(limit);

    let paragraphs = engine.context(keyword, &id, limit);

    match format {
        OutputFormat::Json => {
            let payload = ContextJson {
                keyword,
                id: &id,
                found: paragraphs.is_some(),
                paragraphs: paragraphs.unwrap_or_default(),
            };
            print_json(&payload, compact)?;
        }
        OutputFormat::Text => {
            if !use_colors() {
                colored::control::set_override(false);
            }
            match paragraphs {
                None => println!(
                    "{} Document {} is unavailable",
                    "✗".red(),
                    id.as_str().yellow()
                ),
                Some(paragraphs) if paragraphs.is_empty() => println!(
                    "{} No paragraph of {} mentions: {}",
                    "✗".red(),
                    id.as_str().cyan(),
                    keyword.yellow()
                ),
                Some(paragraphs) => {
                    for (n, paragraph) in paragraphs.iter().enumerate() {
                        if n > 0 {
                            println!();
                        }
                        println!("{}", colorize_match(paragraph, keyword));
                    }
                }
            }
        }
    }

    Ok(())
}
