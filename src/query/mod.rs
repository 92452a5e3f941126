// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command runners over the search engine.

pub mod context;
pub mod search;

use anyhow::{anyhow, Result};
use std::sync::Arc;

use sitesearch::config::Config;
use sitesearch::fetch::{fetcher_for, Fetch};

/// Resolve the index base (CLI wins over config) and open a fetcher for it.
pub(crate) fn open_fetcher(base: Option<&str>, config: &Config) -> Result<Arc<dyn Fetch>> {
    let base = config.merge_base_path(base).ok_or_else(|| {
        anyhow!(
            "No index base given\n\n\
             Suggestion: pass --base with the URL or directory of the generated search index.\n\
             Example: sitesearch --base https://example.org/search/ search python\n\
             Or set base_path in .sitesearchrc.toml"
        )
    })?;
    Ok(fetcher_for(&base, config.timeout())?)
}
