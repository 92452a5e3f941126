// SPDX-License-Identifier: MIT OR Apache-2.0

//! Blocking retrieval of published index resources.
//!
//! Resources are addressed by a path relative to the index base, e.g. `a.js`
//! or `src/12.txt`. The base is either an HTTP(S) URL or a local directory
//! holding the generated files.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::errors::FetchError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocking fetch of one resource. Returns the body on success.
pub trait Fetch: Send + Sync {
    fn fetch(&self, resource: &str) -> Result<String, FetchError>;

    /// Human-readable location of `resource`, for logs and messages.
    fn locate(&self, resource: &str) -> String;
}

/// Fetches resources over HTTP with a single per-request timeout.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    base: String,
}

impl HttpFetcher {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport {
                resource: base.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            base: with_trailing_slash(base),
        })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, resource: &str) -> Result<String, FetchError> {
        let url = self.locate(resource);
        let transport = |e: reqwest::Error| FetchError::Transport {
            resource: url.clone(),
            message: e.to_string(),
        };

        let response = self.client.get(&url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                resource: url.clone(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(transport)
    }

    fn locate(&self, resource: &str) -> String {
        format!("{}{}", self.base, resource)
    }
}

/// Reads resources from a directory produced by the site generator.
///
/// A missing file is reported like an HTTP 404 so both fetchers fail the
/// same way for absent shards and documents.
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Fetch for DirFetcher {
    fn fetch(&self, resource: &str) -> Result<String, FetchError> {
        let path = self.root.join(resource);
        match fs::read_to_string(&path) {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FetchError::Status {
                resource: path.display().to_string(),
                status: 404,
            }),
            Err(source) => Err(FetchError::Io {
                resource: path.display().to_string(),
                source,
            }),
        }
    }

    fn locate(&self, resource: &str) -> String {
        self.root.join(resource).display().to_string()
    }
}

/// Picks the fetcher for `base`: HTTP for `http://`/`https://` URLs, the
/// local directory otherwise.
pub fn fetcher_for(base: &str, timeout: Duration) -> Result<Arc<dyn Fetch>, FetchError> {
    if base.starts_with("http://") || base.starts_with("https://") {
        Ok(Arc::new(HttpFetcher::new(base, timeout)?))
    } else {
        Ok(Arc::new(DirFetcher::new(base)))
    }
}

fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}
