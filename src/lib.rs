// SPDX-License-Identifier: MIT OR Apache-2.0

//! sitesearch - Incremental keyword search over a sharded prefix index
//!
//! Shared modules for the sitesearch CLI tool. A statically generated site
//! publishes one compressed prefix tree per leading letter (`a.js` .. `z.js`,
//! plus `_.js` for everything else) and the plain text of every document
//! (`src/<id>.txt`). [`SearchEngine`] fetches only the shard a query needs,
//! caches it for its own lifetime and splits matches into exact and partial.

pub mod config;
pub mod context;
pub mod engine;
pub mod entries;
pub mod errors;
pub mod fetch;
pub mod index;
pub mod output;

pub use engine::SearchEngine;
pub use index::{DocumentId, QueryResult};
