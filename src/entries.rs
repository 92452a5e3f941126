// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entry list published next to the shards: the `(permalink, title)` of every
//! indexed document, in ordinal order.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::FetchError;
use crate::fetch::Fetch;
use crate::index::DocumentId;

pub const ENTRIES_RESOURCE: &str = "entries.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)")]
pub struct Entry {
    pub permalink: String,
    pub title: String,
}

impl From<(String, String)> for Entry {
    fn from((permalink, title): (String, String)) -> Self {
        Self { permalink, title }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fetches `entries.json` from the index base.
    pub fn fetch(fetcher: &dyn Fetch) -> Result<Option<Self>, FetchError> {
        let body = fetcher.fetch(ENTRIES_RESOURCE)?;
        match Self::from_json(&body) {
            Ok(entries) => Ok(Some(entries)),
            Err(e) => {
                warn!(location = %fetcher.locate(ENTRIES_RESOURCE), error = %e, "ignoring malformed entry list");
                Ok(None)
            }
        }
    }

    /// Entry of an ordinal document id.
    pub fn lookup(&self, id: &DocumentId) -> Option<&Entry> {
        id.ordinal().and_then(|n| self.entries.get(n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
