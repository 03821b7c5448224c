//! Result type of the shortest-path algorithms.

/// A walk through the graph together with its total weight.
///
/// Never empty: a path from a vertex to itself is `[v]` with weight zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<V, W> {
    vertices: Vec<V>,
    weight: W,
}

impl<V: Copy, W: Copy> Path<V, W> {
    pub(crate) fn new(vertices: Vec<V>, weight: W) -> Self {
        debug_assert!(!vertices.is_empty());
        Self { vertices, weight }
    }

    /// Vertices from source to target, endpoints included.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Sum of the edge weights along the path.
    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn source(&self) -> V {
        self.vertices[0]
    }

    pub fn target(&self) -> V {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}
