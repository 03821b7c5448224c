//! Directed edges and the lazy edge iterator.

use std::collections::hash_map;
use std::collections::HashMap;
use std::iter::FusedIterator;

/// A directed, weighted connection `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<V, W> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    pub fn new(from: V, to: V, weight: W) -> Self {
        Self { from, to, weight }
    }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((from, to, weight): (V, V, W)) -> Self {
        Self::new(from, to, weight)
    }
}

impl<V, W> From<Edge<V, W>> for (V, V, W) {
    fn from(edge: Edge<V, W>) -> Self {
        (edge.from, edge.to, edge.weight)
    }
}

/// Lazily walks every edge of a [`Graph`](crate::graph::Graph) once, in
/// unspecified order.
///
/// Created by [`Graph::edges`](crate::graph::Graph::edges); call it again for
/// another pass.
pub struct Edges<'a, V, W> {
    sources: hash_map::Iter<'a, V, HashMap<V, W>>,
    current: Option<(V, hash_map::Iter<'a, V, W>)>,
    remaining: usize,
}

impl<'a, V, W> Edges<'a, V, W> {
    pub(crate) fn new(adjacency: &'a HashMap<V, HashMap<V, W>>, edge_count: usize) -> Self {
        Self {
            sources: adjacency.iter(),
            current: None,
            remaining: edge_count,
        }
    }
}

impl<V: Copy, W: Copy> Iterator for Edges<'_, V, W> {
    type Item = Edge<V, W>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((from, targets)) = self.current.as_mut() {
                if let Some((&to, &weight)) = targets.next() {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(Edge::new(*from, to, weight));
                }
            }
            let (&from, targets) = self.sources.next()?;
            self.current = Some((from, targets.iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V: Copy, W: Copy> ExactSizeIterator for Edges<'_, V, W> {}

impl<V: Copy, W: Copy> FusedIterator for Edges<'_, V, W> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_tuple_conversions() {
        let edge: Edge<u8, i32> = (1, 2, 5).into();
        assert_eq!(edge, Edge::new(1, 2, 5));
        assert_eq!(<(u8, u8, i32)>::from(edge), (1, 2, 5));
    }

    #[test]
    fn test_edges_skips_sources_without_targets() {
        let mut adjacency: HashMap<u8, HashMap<u8, i32>> = HashMap::new();
        adjacency.entry(1).or_default();
        adjacency.entry(2).or_default().insert(3, 4);
        adjacency.entry(4).or_default();

        let mut edges = Edges::new(&adjacency, 1);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges.next(), Some(Edge::new(2, 3, 4)));
        assert_eq!(edges.next(), None);
        assert_eq!(edges.next(), None);
    }
}
