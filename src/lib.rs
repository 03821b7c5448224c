//! Structures - graphs and caches
//!
//! Provides a directed weighted graph with shortest-path and topological-sort
//! algorithms, and a fixed-capacity LRU cache with O(1) operations.
//!
//! Neither component is synchronized; wrap it in a lock to share it between
//! threads.

pub mod cache;
pub mod config;
pub mod error;
pub mod graph;

pub use cache::{Cache, CacheStats, LruCache};
pub use config::Config;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Path, ShortestPaths};
