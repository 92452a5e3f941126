// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compressed prefix tree nodes as published in shard files.
//!
//! On the wire a node is a JSON array: `[children]` for a pure branching
//! point, or `[children, ids]` when at least one indexed keyword ends at the
//! node. `children` maps edge labels (one or more characters) to child nodes.

use serde::de::{self, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque document token.
///
/// The generator emits the entry ordinal as a JSON integer; hand-written
/// shards may use strings. Both forms share the same textual representation,
/// which is also the file stem of the document's text source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "RawDocumentId")]
pub struct DocumentId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocumentId {
    Ordinal(u64),
    Token(String),
}

impl From<RawDocumentId> for DocumentId {
    fn from(raw: RawDocumentId) -> Self {
        match raw {
            RawDocumentId::Ordinal(n) => Self(n.to_string()),
            RawDocumentId::Token(s) => Self(s),
        }
    }
}

impl DocumentId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Entry ordinal, when the token is one.
    pub fn ordinal(&self) -> Option<usize> {
        self.0.parse().ok()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<u64> for DocumentId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// One node of a compressed prefix tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    children: BTreeMap<String, TreeNode>,
    ids: Option<Vec<DocumentId>>,
}

impl TreeNode {
    pub fn new(children: BTreeMap<String, TreeNode>, ids: Option<Vec<DocumentId>>) -> Self {
        Self { children, ids }
    }

    /// Child reached through the edge labelled exactly `label`.
    pub fn child(&self, label: &str) -> Option<&TreeNode> {
        self.children.get(label)
    }

    /// Children in label order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(label, node)| (label.as_str(), node))
    }

    /// Identifiers of keywords ending at this node, `None` at pure branching points.
    pub fn ids(&self) -> Option<&[DocumentId]> {
        self.ids.as_deref()
    }

    pub fn is_terminal(&self) -> bool {
        self.ids.is_some()
    }

    /// Appends the identifiers of every node strictly below this one,
    /// depth-first and pre-order, children in label order.
    pub fn collect_descendant_ids(&self, out: &mut Vec<DocumentId>) {
        for child in self.children.values() {
            if let Some(ids) = &child.ids {
                out.extend(ids.iter().cloned());
            }
            child.collect_descendant_ids(out);
        }
    }
}

impl<'de> Deserialize<'de> for TreeNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = TreeNode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a [children] or [children, ids] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TreeNode, A::Error> {
                let children: BTreeMap<String, TreeNode> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let ids: Option<Vec<DocumentId>> = seq.next_element()?;
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(TreeNode { children, ids })
            }
        }

        deserializer.deserialize_seq(NodeVisitor)
    }
}
