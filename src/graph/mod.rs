//! Graph Module
//!
//! Directed weighted graphs with Dijkstra, Floyd-Warshall and topological
//! sorting. Vertex and weight types are chosen by the caller through the
//! [`Vertex`] and [`Weight`] capability traits.

mod digraph;
mod dijkstra;
mod edge;
mod floyd_warshall;
mod path;
mod topo;
mod weight;


// Re-export public types
pub use digraph::Graph;
pub use edge::{Edge, Edges};
pub use floyd_warshall::ShortestPaths;
pub use path::Path;
pub use weight::{Vertex, Weight};
