// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sharded prefix index: tree nodes, the shard cache, shard loading and
//! prefix matching.

pub mod loader;
pub mod matcher;
pub mod node;
pub mod store;

pub use loader::{ShardLoader, ShardPayload, DEFAULT_SHARD_EXTENSION};
pub use matcher::{match_prefix, QueryResult};
pub use node::{DocumentId, TreeNode};
pub use store::{BucketKey, ShardStore, SENTINEL_BUCKET};
