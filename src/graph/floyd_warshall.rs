//! All-pairs shortest paths (Floyd-Warshall).

use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, Path, Vertex, Weight};

/// All-pairs result: dense distance and successor matrices over the graph's
/// vertices in sorted order.
///
/// Paths are rebuilt on demand by following successors from the source.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V, W> {
    order: Vec<V>,
    index: HashMap<V, usize>,
    distance: Vec<Option<W>>,
    successor: Vec<Option<usize>>,
}

impl<V: Vertex, W: Weight> ShortestPaths<V, W> {
    fn cell(&self, from: usize, to: usize) -> usize {
        from * self.order.len() + to
    }

    /// Vertices covered by the result, sorted.
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    /// Total weight of the shortest path, or `None` if unreachable.
    pub fn distance(&self, source: V, target: V) -> Option<W> {
        let (&i, &j) = (self.index.get(&source)?, self.index.get(&target)?);
        self.distance[self.cell(i, j)]
    }

    /// Rebuilds the shortest path from `source` to `target`.
    pub fn path(&self, source: V, target: V) -> Option<Path<V, W>> {
        let (&i, &j) = (self.index.get(&source)?, self.index.get(&target)?);
        let weight = self.distance[self.cell(i, j)]?;

        let mut vertices = vec![self.order[i]];
        let mut current = i;
        while current != j {
            current = self.successor[self.cell(current, j)]?;
            vertices.push(self.order[current]);
            if vertices.len() > self.order.len() {
                return None;
            }
        }
        Some(Path::new(vertices, weight))
    }

    /// Every reachable `(source, target)` pair with its path, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = ((V, V), Path<V, W>)> + '_ {
        self.order.iter().flat_map(move |&source| {
            self.order
                .iter()
                .filter_map(move |&target| Some(((source, target), self.path(source, target)?)))
        })
    }

    /// Materializes every reachable pair into a map.
    pub fn to_map(&self) -> HashMap<(V, V), Path<V, W>> {
        self.iter().collect()
    }
}

impl<V: Vertex, W: Weight> Graph<V, W> {
    /// Floyd-Warshall Algorithm
    ///
    /// Computes shortest paths between every ordered pair of vertices in
    /// `O(n³)` time and `O(n²)` memory. Ties resolve deterministically towards
    /// routes through smaller intermediate vertices.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWeight`](crate::Error::InvalidWeight) if any edge in
    /// the graph has a negative weight.
    pub fn shortest_paths(&self) -> Result<ShortestPaths<V, W>> {
        self.ensure_non_negative()?;

        let mut order: Vec<V> = self.vertices().iter().copied().collect();
        order.sort_unstable();
        let index: HashMap<V, usize> = order.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        let n = order.len();

        let mut distance = vec![None; n * n];
        let mut successor = vec![None; n * n];
        for (i, &from) in order.iter().enumerate() {
            distance[i * n + i] = Some(W::ZERO);
            successor[i * n + i] = Some(i);
            for (to, weight) in self.outgoing(from) {
                let Some(&j) = index.get(&to) else { continue };
                if i != j {
                    distance[i * n + j] = Some(weight);
                    successor[i * n + j] = Some(j);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let Some(via) = distance[i * n + k] else { continue };
                for j in 0..n {
                    let Some(rest) = distance[k * n + j] else { continue };
                    let candidate = via + rest;
                    if distance[i * n + j].map_or(true, |current| candidate < current) {
                        distance[i * n + j] = Some(candidate);
                        successor[i * n + j] = successor[i * n + k];
                    }
                }
            }
        }

        debug!(vertices = n, "floyd-warshall finished");
        Ok(ShortestPaths {
            order,
            index,
            distance,
            successor,
        })
    }
}
