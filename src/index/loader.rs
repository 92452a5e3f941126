// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fetching and decoding shard resources.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

use super::node::TreeNode;
use super::store::{BucketKey, ShardStore};
use crate::errors::LoadError;
use crate::fetch::Fetch;

pub const DEFAULT_SHARD_EXTENSION: &str = "js";

/// Decoded contents of one shard resource.
#[derive(Debug)]
pub enum ShardPayload {
    /// Tree of a single letter bucket.
    Single(TreeNode),
    /// Sentinel shard: one tree per leading character.
    Merged(HashMap<String, TreeNode>),
}

impl ShardPayload {
    /// Trees keyed by leading character. Sentinel keys that are not exactly
    /// one character cannot be addressed by a query and are dropped.
    pub fn into_trees(self, bucket: BucketKey) -> Vec<(char, TreeNode)> {
        match (self, bucket) {
            (Self::Single(tree), BucketKey::Letter(c)) => vec![(c, tree)],
            (Self::Single(_), BucketKey::Other) => Vec::new(),
            (Self::Merged(trees), _) => trees
                .into_iter()
                .filter_map(|(key, tree)| {
                    let mut chars = key.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Some((c, tree)),
                        _ => {
                            warn!(key = %key, "skipping sentinel shard entry with multi-character key");
                            None
                        }
                    }
                })
                .collect(),
        }
    }
}

/// Loads shard resources one at a time.
///
/// Every load takes a ticket; a load whose ticket is no longer the newest when
/// its response arrives has been superseded and its response is dropped.
/// Loads are serialized through a single request slot.
pub struct ShardLoader {
    fetcher: Arc<dyn Fetch>,
    extension: String,
    generation: AtomicU64,
    slot: Mutex<()>,
}

impl ShardLoader {
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self::with_extension(fetcher, DEFAULT_SHARD_EXTENSION)
    }

    pub fn with_extension(fetcher: Arc<dyn Fetch>, extension: &str) -> Self {
        Self {
            fetcher,
            extension: extension.trim_start_matches('.').to_string(),
            generation: AtomicU64::new(0),
            slot: Mutex::new(()),
        }
    }

    /// Resource path of a bucket's shard relative to the index base.
    pub fn resource(&self, bucket: BucketKey) -> String {
        format!("{}.{}", bucket.name(), self.extension)
    }

    /// Fetches and decodes the shard of `bucket`.
    pub fn load(&self, bucket: BucketKey) -> Result<ShardPayload, LoadError> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let resource = self.resource(bucket);

        let _slot = self.slot.lock();
        if self.generation.load(Ordering::SeqCst) != ticket {
            return Err(LoadError::Superseded { resource });
        }

        debug!(bucket = %bucket, location = %self.fetcher.locate(&resource), "fetching shard");
        let body = self.fetcher.fetch(&resource)?;

        if self.generation.load(Ordering::SeqCst) != ticket {
            return Err(LoadError::Superseded { resource });
        }

        let decoded = match bucket {
            BucketKey::Letter(_) => serde_json::from_str(&body).map(ShardPayload::Single),
            BucketKey::Other => serde_json::from_str(&body).map(ShardPayload::Merged),
        };
        decoded.map_err(|source| LoadError::Decode { resource, source })
    }

    /// Loads `bucket` and stores its trees. Nothing is stored on failure.
    /// Returns the number of trees added.
    pub fn load_into(&self, bucket: BucketKey, store: &ShardStore) -> Result<usize, LoadError> {
        let payload = self.load(bucket)?;
        let added = store.insert_bucket(bucket, payload.into_trees(bucket));
        debug!(bucket = %bucket, added, "stored shard");
        Ok(added)
    }
}
