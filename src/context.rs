// SPDX-License-Identifier: MIT OR Apache-2.0

//! Paragraph snippets around a keyword, taken from a document's text source.

use std::sync::Arc;
use tracing::debug;

use crate::errors::FetchError;
use crate::fetch::Fetch;
use crate::index::DocumentId;

pub const DEFAULT_CONTEXT_LIMIT: usize = 1;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Resource path of a document's plain-text source.
pub fn source_resource(id: &DocumentId) -> String {
    format!("src/{id}.txt")
}

/// Returns up to `limit` paragraphs of `text` containing `keyword`,
/// compared case-insensitively, in document order and with original case.
pub fn matching_paragraphs(text: &str, keyword: &str, limit: usize) -> Vec<String> {
    let needle = keyword.to_lowercase();
    text.split(PARAGRAPH_SEPARATOR)
        .filter(|chunk| chunk.to_lowercase().contains(&needle))
        .take(limit)
        .map(str::to_string)
        .collect()
}

pub struct ContextExtractor {
    fetcher: Arc<dyn Fetch>,
}

impl ContextExtractor {
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self { fetcher }
    }

    /// Fetches the text source of `id` and extracts matching paragraphs.
    pub fn extract(
        &self,
        keyword: &str,
        id: &DocumentId,
        limit: usize,
    ) -> Result<Vec<String>, FetchError> {
        let text = self.fetcher.fetch(&source_resource(id))?;
        Ok(matching_paragraphs(&text, keyword, limit))
    }

    /// Like [`extract`](Self::extract), but absent when the source cannot be fetched.
    pub fn context(&self, keyword: &str, id: &DocumentId, limit: usize) -> Option<Vec<String>> {
        match self.extract(keyword, id, limit) {
            Ok(chunks) => Some(chunks),
            Err(e) => {
                debug!(document = %id, error = %e, "no context");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::DirFetcher;
    use std::fs;

    const TEXT: &str = "alpha beta\n\ngamma keyword delta\n\nepsilon keyword";

    #[test]
    fn limit_caps_collected_paragraphs() {
        assert_eq!(matching_paragraphs(TEXT, "keyword", 1), vec!["gamma keyword delta"]);
        assert_eq!(
            matching_paragraphs(TEXT, "keyword", 2),
            vec!["gamma keyword delta", "epsilon keyword"]
        );
        assert_eq!(matching_paragraphs(TEXT, "keyword", 5).len(), 2);
        assert!(matching_paragraphs(TEXT, "keyword", 0).is_empty());
    }

    #[test]
    fn match_ignores_case_but_keeps_original_text() {
        let text = "Intro\n\nRust Ownership explained\n\nOutro";
        assert_eq!(
            matching_paragraphs(text, "OWNERSHIP", 1),
            vec!["Rust Ownership explained"]
        );
        assert!(matching_paragraphs(text, "borrow", 3).is_empty());
    }

    #[test]
    fn single_newlines_stay_inside_a_paragraph() {
        let text = "first line\nsecond keyword line\n\nother";
        assert_eq!(
            matching_paragraphs(text, "keyword", 1),
            vec!["first line\nsecond keyword line"]
        );
    }

    #[test]
    fn reads_document_source_by_id() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        fs::create_dir_all(dir.path().join("src")).expect("mkdir src");
        fs::write(dir.path().join("src/3.txt"), TEXT).expect("write source");
        let extractor = ContextExtractor::new(Arc::new(DirFetcher::new(dir.path())));

        assert_eq!(
            extractor.context("keyword", &DocumentId::from(3), 2),
            Some(vec!["gamma keyword delta".to_string(), "epsilon keyword".to_string()])
        );
        assert_eq!(extractor.context("keyword", &DocumentId::from(4), 1), None);
    }
}
