// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exact/partial keyword matching over one compressed prefix tree.

use serde::Serialize;

use super::node::{DocumentId, TreeNode};

/// Outcome of a successful prefix walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    /// Identifiers attached to the node the whole keyword leads to.
    /// Empty when that node is a pure branching point.
    pub exact: Vec<DocumentId>,
    /// Identifiers attached anywhere below that node. Not deduplicated.
    pub partial: Vec<DocumentId>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.partial.is_empty()
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.partial.len()
    }
}

/// Walks `needle` down from `root` and splits the reached subtree into exact
/// and partial matches. Returns `None` when `needle` has no path in the tree.
///
/// The scan grows a window `needle[i..=j]` one character at a time and
/// descends whenever the window labels a child edge, re-anchoring `i` after
/// the descent. The walk succeeds only if the final window was consumed, so
/// a keyword ending in the middle of a compressed edge does not match.
pub fn match_prefix(needle: &str, root: &TreeNode) -> Option<QueryResult> {
    // Byte offset of every char boundary, including the end of the string.
    let bounds: Vec<usize> = needle
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(needle.len()))
        .collect();
    let len = bounds.len() - 1;

    let mut node = root;
    let (mut i, mut j) = (0, 0);
    while j < len {
        if let Some(child) = node.child(&needle[bounds[i]..bounds[j + 1]]) {
            node = child;
            i = j + 1;
        }
        j += 1;
    }

    if i != j {
        return None;
    }

    let exact = node.ids().map(<[DocumentId]>::to_vec).unwrap_or_default();
    let mut partial = Vec::new();
    node.collect_descendant_ids(&mut partial);
    Some(QueryResult { exact, partial })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(json: &str) -> TreeNode {
        serde_json::from_str(json).expect("valid tree")
    }

    fn tokens(ids: &[DocumentId]) -> Vec<&str> {
        ids.iter().map(DocumentId::as_str).collect()
    }

    /// Bucket `c`: "cat" -> docA, "catalog" -> docB.
    fn cat_tree() -> TreeNode {
        tree(r#"[{"at": [{"alog": [{}, ["docB"]]}, ["docA"]]}]"#)
    }

    #[test]
    fn exact_match_lists_longer_keywords_as_partials() {
        let result = match_prefix("at", &cat_tree()).expect("cat matches");
        assert_eq!(tokens(&result.exact), vec!["docA"]);
        assert_eq!(tokens(&result.partial), vec!["docB"]);
    }

    #[test]
    fn deepest_keyword_has_no_partials() {
        let result = match_prefix("atalog", &cat_tree()).expect("catalog matches");
        assert_eq!(tokens(&result.exact), vec!["docB"]);
        assert!(result.partial.is_empty());
    }

    #[test]
    fn keyword_inside_compressed_edge_has_no_path() {
        assert_eq!(match_prefix("ata", &cat_tree()), None);
        assert_eq!(match_prefix("og", &cat_tree()), None);
    }

    #[test]
    fn empty_needle_matches_at_root() {
        let root = tree(r#"[{"a": [{"b": [{}, [2]]}, [1]]}, [0]]"#);
        let result = match_prefix("", &root).expect("root match");
        assert_eq!(tokens(&result.exact), vec!["0"]);
        assert_eq!(tokens(&result.partial), vec!["1", "2"]);
    }

    #[test]
    fn walks_multi_edge_paths() {
        // "javascript", "java" and "java-vm" indexed under bucket `j`.
        let root = tree(
            r#"[{"ava": [{"script": [{}, [1]], "-vm": [{}, [2]]}, [0]]}]"#,
        );

        let java = match_prefix("ava", &root).expect("java");
        assert_eq!(tokens(&java.exact), vec!["0"]);
        assert_eq!(tokens(&java.partial), vec!["2", "1"]);

        let script = match_prefix("avascript", &root).expect("javascript");
        assert_eq!(tokens(&script.exact), vec!["1"]);

        assert_eq!(match_prefix("avax", &root), None);
    }

    #[test]
    fn branching_point_has_empty_exact_set() {
        let root = tree(r#"[{"in": [{"e": [{}, [1]], "g": [{}, [2]]}]}]"#);
        let result = match_prefix("in", &root).expect("branch");
        assert!(result.exact.is_empty());
        assert_eq!(tokens(&result.partial), vec!["1", "2"]);
    }

    #[test]
    fn partials_are_not_deduplicated() {
        let root = tree(r#"[{"ne": [{"s": [{}, [1]], "t": [{}, [1, 2]]}, [1]]}]"#);
        let result = match_prefix("ne", &root).expect("match");
        assert_eq!(tokens(&result.exact), vec!["1"]);
        assert_eq!(tokens(&result.partial), vec!["1", "1", "2"]);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn multibyte_labels_are_walked_by_character() {
        let root = tree(r#"[{"ü": [{"ber": [{}, [5]]}]}]"#);
        let result = match_prefix("über", &root).expect("über");
        assert_eq!(tokens(&result.exact), vec!["5"]);
        assert_eq!(match_prefix("üb", &root), None);
    }
}
