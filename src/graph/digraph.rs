//! Directed weighted graph storage.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::error::{Error, Result};
use crate::graph::{Edge, Edges, Vertex, Weight};

/// Directed graph with at most one weighted edge per ordered vertex pair.
///
/// The graph only grows: vertices and edges are added, edge weights can be
/// overwritten, nothing is removed.
///
/// # Examples
///
/// ```
/// use structures::graph::Graph;
///
/// let graph: Graph<u32, u32> = vec![
///     (1, 2, 7), (1, 3, 9), (1, 6, 14),
///     (2, 3, 10), (2, 4, 15), (3, 4, 11),
///     (3, 6, 2), (4, 5, 6), (6, 5, 9),
/// ].into_iter().collect();
///
/// let path = graph.shortest_path(1, 5).unwrap().unwrap();
/// assert_eq!(path.vertices(), &[1, 3, 6, 5]);
/// assert_eq!(path.weight(), 20);
/// ```
///
/// Edge iterators borrow the graph, so it cannot grow while one is alive:
///
/// ```compile_fail
/// use structures::graph::Graph;
///
/// let mut graph: Graph<u32, u32> = Graph::new();
/// graph.add_edge(1, 2, 1);
/// for edge in graph.edges() {
///     graph.add_edge(edge.to, edge.from, edge.weight);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V, W = i64> {
    /// Outgoing edges keyed by source, then destination
    adjacency: HashMap<V, HashMap<V, W>>,
    /// Every endpoint plus explicitly registered vertices
    vertices: HashSet<V>,
    edge_count: usize,
    /// Edges whose weight is currently below zero
    negative_edges: usize,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            vertices: HashSet::new(),
            edge_count: 0,
            negative_edges: 0,
        }
    }
}

impl<V: Vertex, W: Weight> Graph<V, W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `vertex` without edges. Returns false if it was already known.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    /// Adds `from -> to`, or overwrites its weight and returns the old one.
    ///
    /// Both endpoints become vertices. Self-loops are fine. Negative weights
    /// are stored, but the shortest-path algorithms refuse to run while any
    /// are present.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> Option<W> {
        self.vertices.insert(from);
        self.vertices.insert(to);

        let previous = self.adjacency.entry(from).or_default().insert(to, weight);
        match previous {
            Some(old) if old.is_negative() => self.negative_edges -= 1,
            Some(_) => {}
            None => self.edge_count += 1,
        }
        if weight.is_negative() {
            self.negative_edges += 1;
        }
        previous
    }

    /// Adds `from -> to` with the unit weight.
    pub fn add_unit_edge(&mut self, from: V, to: V) -> Option<W> {
        self.add_edge(from, to, W::ONE)
    }

    /// All known vertices, in unspecified order.
    pub fn vertices(&self) -> &HashSet<V> {
        &self.vertices
    }

    /// Vertices one outgoing edge away from `vertex`; empty for unknown vertices.
    pub fn vertices_outgoing_from(&self, vertex: V) -> HashSet<V> {
        self.outgoing(vertex).map(|(to, _)| to).collect()
    }

    /// Outgoing `(destination, weight)` pairs of `vertex`.
    pub fn outgoing(&self, vertex: V) -> impl Iterator<Item = (V, W)> + '_ {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(&to, &weight)| (to, weight)))
    }

    /// Every edge, produced lazily. Each call starts a fresh pass.
    pub fn edges(&self) -> Edges<'_, V, W> {
        Edges::new(&self.adjacency, self.edge_count)
    }

    pub fn weight(&self, from: V, to: V) -> Option<W> {
        self.adjacency.get(&from)?.get(&to).copied()
    }

    pub fn contains_vertex(&self, vertex: V) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn contains_edge(&self, from: V, to: V) -> bool {
        self.weight(from, to).is_some()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fails with [`Error::InvalidWeight`] naming the smallest negative edge.
    pub(crate) fn ensure_non_negative(&self) -> Result<()> {
        if self.negative_edges == 0 {
            return Ok(());
        }
        let offending = self
            .edges()
            .filter(|edge| edge.weight.is_negative())
            .min_by_key(|edge| (edge.from, edge.to));
        match offending {
            Some(edge) => {
                warn!(
                    "rejecting shortest-path query: edge {:?} -> {:?} has weight {:?}",
                    edge.from, edge.to, edge.weight
                );
                Err(Error::InvalidWeight {
                    from: format!("{:?}", edge.from),
                    to: format!("{:?}", edge.to),
                    weight: format!("{:?}", edge.weight),
                })
            }
            None => Ok(()),
        }
    }
}

impl<V: Vertex, W: Weight> Extend<(V, V, W)> for Graph<V, W> {
    fn extend<I: IntoIterator<Item = (V, V, W)>>(&mut self, iter: I) {
        for (from, to, weight) in iter {
            self.add_edge(from, to, weight);
        }
    }
}

impl<V: Vertex, W: Weight> Extend<Edge<V, W>> for Graph<V, W> {
    fn extend<I: IntoIterator<Item = Edge<V, W>>>(&mut self, iter: I) {
        for edge in iter {
            self.add_edge(edge.from, edge.to, edge.weight);
        }
    }
}

impl<V: Vertex, W: Weight> FromIterator<(V, V, W)> for Graph<V, W> {
    fn from_iter<I: IntoIterator<Item = (V, V, W)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<V: Vertex, W: Weight> FromIterator<Edge<V, W>> for Graph<V, W> {
    fn from_iter<I: IntoIterator<Item = Edge<V, W>>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
