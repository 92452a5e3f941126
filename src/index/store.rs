// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-engine cache of decoded shards.

use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use super::node::TreeNode;

/// Name of the shard holding every keyword that does not start with `a..=z`.
pub const SENTINEL_BUCKET: &str = "_";

/// Partition key selecting the shard resource for a leading character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKey {
    Letter(char),
    Other,
}

impl BucketKey {
    pub fn for_char(c: char) -> Self {
        if c.is_ascii_lowercase() {
            Self::Letter(c)
        } else {
            Self::Other
        }
    }

    /// Resource stem of the shard file.
    pub fn name(&self) -> String {
        match self {
            Self::Letter(c) => c.to_string(),
            Self::Other => SENTINEL_BUCKET.to_string(),
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::Other => f.write_str(SENTINEL_BUCKET),
        }
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    trees: HashMap<char, Arc<TreeNode>>,
    fetched: HashSet<BucketKey>,
}

/// Append-only map from leading character to its prefix tree.
///
/// Trees are inserted at most once and never replaced or evicted. The store
/// also remembers which bucket resources were stored, so a sentinel bucket
/// that lacks some leading character is not fetched again for it.
#[derive(Debug, Default)]
pub struct ShardStore {
    inner: RwLock<StoreInner>,
}

impl ShardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, first: char) -> Option<Arc<TreeNode>> {
        self.inner.read().trees.get(&first).cloned()
    }

    pub fn contains(&self, first: char) -> bool {
        self.inner.read().trees.contains_key(&first)
    }

    pub fn is_fetched(&self, bucket: BucketKey) -> bool {
        self.inner.read().fetched.contains(&bucket)
    }

    /// Stores the trees of one bucket resource. Characters already present
    /// keep their existing tree. Returns how many trees were added.
    pub fn insert_bucket(
        &self,
        bucket: BucketKey,
        trees: impl IntoIterator<Item = (char, TreeNode)>,
    ) -> usize {
        let mut inner = self.inner.write();
        let mut added = 0;
        for (first, tree) in trees {
            if let std::collections::hash_map::Entry::Vacant(slot) = inner.trees.entry(first) {
                slot.insert(Arc::new(tree));
                added += 1;
            }
        }
        inner.fetched.insert(bucket);
        added
    }

    /// Leading characters with a stored tree, sorted.
    pub fn keys(&self) -> Vec<char> {
        let mut keys: Vec<char> = self.inner.read().trees.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.inner.read().trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_for_leading_character() {
        assert_eq!(BucketKey::for_char('q'), BucketKey::Letter('q'));
        assert_eq!(BucketKey::for_char('7'), BucketKey::Other);
        assert_eq!(BucketKey::for_char('-'), BucketKey::Other);
        assert_eq!(BucketKey::for_char('é'), BucketKey::Other);
        assert_eq!(BucketKey::Letter('q').name(), "q");
        assert_eq!(BucketKey::Other.name(), "_");
    }

    #[test]
    fn existing_trees_are_never_replaced() {
        let store = ShardStore::new();
        let first = TreeNode::new(Default::default(), Some(vec!["1".into()]));
        let second = TreeNode::new(Default::default(), Some(vec!["2".into()]));

        assert_eq!(store.insert_bucket(BucketKey::Letter('a'), [('a', first.clone())]), 1);
        assert_eq!(store.insert_bucket(BucketKey::Letter('a'), [('a', second)]), 0);
        assert_eq!(store.get('a').as_deref(), Some(&first));
    }

    #[test]
    fn sentinel_bucket_is_tracked_separately_from_its_characters() {
        let store = ShardStore::new();
        store.insert_bucket(
            BucketKey::Other,
            [('1', TreeNode::default()), ('2', TreeNode::default())],
        );
        assert!(store.is_fetched(BucketKey::Other));
        assert!(!store.is_fetched(BucketKey::Letter('a')));
        assert_eq!(store.keys(), vec!['1', '2']);
        assert!(!store.contains('3'));
    }
}
