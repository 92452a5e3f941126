// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for fetching, loading and searching.
//!
//! None of these escape the public search API: `SearchEngine::search` and
//! `SearchEngine::context` report every failure as an absent result and log the
//! reason. They exist so the reason is never lost on the way there.

use thiserror::Error;

/// Failure to retrieve a resource from the published index.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server (or directory) answered, but not with success.
    #[error("request for '{resource}' failed with status {status}")]
    Status { resource: String, status: u16 },

    /// The request never produced a response.
    #[error("request for '{resource}' failed: {message}")]
    Transport { resource: String, message: String },

    #[error("failed to read '{resource}': {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// HTTP status carried by the error, if the resource answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure to turn a shard resource into trees.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("shard '{resource}' is not a valid prefix tree: {source}")]
    Decode {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    /// A newer load took the request slot before this one completed.
    #[error("load of shard '{resource}' was superseded by a newer request")]
    Superseded { resource: String },
}

/// Reason a query produced no result.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("query '{query}' is shorter than {min} characters")]
    TooShort { query: String, min: usize },

    #[error("bucket '{bucket}' is unavailable: {source}")]
    BucketUnavailable {
        bucket: String,
        #[source]
        source: LoadError,
    },

    #[error("no prefix tree for leading character '{0}'")]
    NoTree(char),

    #[error("no indexed keyword starts with '{0}'")]
    NoPath(String),
}
