// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search entry point: normalizes a query, makes sure its shard is cached and
//! walks the shard's prefix tree.

use std::sync::Arc;
use tracing::debug;

use crate::config::{Config, DEFAULT_MIN_QUERY_LEN};
use crate::context::ContextExtractor;
use crate::entries::{Entry, EntryList};
use crate::errors::{FetchError, SearchError};
use crate::fetch::{fetcher_for, Fetch};
use crate::index::{match_prefix, BucketKey, DocumentId, QueryResult, ShardLoader, ShardStore};

/// One search session over a published index.
///
/// The shard cache belongs to the engine; independent engines never share
/// cached shards.
pub struct SearchEngine {
    loader: ShardLoader,
    store: ShardStore,
    extractor: ContextExtractor,
    entries: Option<EntryList>,
    min_query_len: usize,
}

impl SearchEngine {
    pub fn new(loader: ShardLoader, store: ShardStore, extractor: ContextExtractor) -> Self {
        Self {
            loader,
            store,
            extractor,
            entries: None,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }

    /// Engine with an empty cache reading shards and sources through `fetcher`.
    pub fn open(fetcher: Arc<dyn Fetch>) -> Self {
        Self::new(
            ShardLoader::new(Arc::clone(&fetcher)),
            ShardStore::new(),
            ContextExtractor::new(fetcher),
        )
    }

    /// Engine for the index at `base` (URL or directory), tuned by `config`.
    pub fn from_config(base: &str, config: &Config) -> Result<Self, FetchError> {
        Ok(Self::with_config(fetcher_for(base, config.timeout())?, config))
    }

    /// Engine reading through `fetcher`, tuned by `config`.
    pub fn with_config(fetcher: Arc<dyn Fetch>, config: &Config) -> Self {
        Self::new(
            ShardLoader::with_extension(Arc::clone(&fetcher), config.shard_extension()),
            ShardStore::new(),
            ContextExtractor::new(fetcher),
        )
        .with_min_query_len(config.min_query_len())
    }

    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.min_query_len = min_query_len;
        self
    }

    pub fn with_entries(mut self, entries: EntryList) -> Self {
        self.entries = Some(entries);
        self
    }

    pub fn store(&self) -> &ShardStore {
        &self.store
    }

    pub fn entry(&self, id: &DocumentId) -> Option<&Entry> {
        self.entries.as_ref().and_then(|entries| entries.lookup(id))
    }
}

/// Query operations.
impl SearchEngine {
    /// Searches `term`. Absent when the term is too short, its shard cannot be
    /// loaded, or no indexed keyword starts with it.
    pub fn search(&self, term: &str) -> Option<QueryResult> {
        match self.try_search(term) {
            Ok(result) => Some(result),
            Err(e) => {
                debug!(term, reason = %e, "no result");
                None
            }
        }
    }

    /// Like [`search`](Self::search), but keeps the reason for an absent result.
    pub fn try_search(&self, term: &str) -> Result<QueryResult, SearchError> {
        let keyword = term.to_lowercase();
        let mut chars = keyword.chars();
        let first = match chars.next() {
            Some(first) if keyword.chars().count() >= self.min_query_len => first,
            _ => {
                return Err(SearchError::TooShort {
                    query: keyword,
                    min: self.min_query_len,
                })
            }
        };

        self.ensure_loaded(first)?;
        let tree = self.store.get(first).ok_or(SearchError::NoTree(first))?;
        match_prefix(chars.as_str(), &tree).ok_or(SearchError::NoPath(keyword))
    }

    /// Paragraphs of document `id` containing `keyword`, at most `limit`.
    pub fn context(&self, keyword: &str, id: &DocumentId, limit: usize) -> Option<Vec<String>> {
        self.extractor.context(keyword, id, limit)
    }

    fn ensure_loaded(&self, first: char) -> Result<(), SearchError> {
        if self.store.contains(first) {
            debug!(%first, "shard cache hit");
            return Ok(());
        }

        let bucket = BucketKey::for_char(first);
        if self.store.is_fetched(bucket) {
            return Ok(());
        }

        self.loader
            .load_into(bucket, &self.store)
            .map(|_| ())
            .map_err(|source| SearchError::BucketUnavailable {
                bucket: bucket.name(),
                source,
            })
    }
}
