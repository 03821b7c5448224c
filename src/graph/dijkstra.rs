//! Single-source shortest paths (Dijkstra's algorithm).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, Path, Vertex, Weight};

/// Distances and predecessors found by one Dijkstra run.
struct Search<V, W> {
    source: V,
    distances: HashMap<V, W>,
    previous: HashMap<V, V>,
}

impl<V: Vertex, W: Weight> Search<V, W> {
    fn path_to(&self, target: V) -> Option<Path<V, W>> {
        let weight = *self.distances.get(&target)?;
        let mut vertices = vec![target];
        let mut current = target;
        while current != self.source {
            current = *self.previous.get(&current)?;
            vertices.push(current);
        }
        vertices.reverse();
        Some(Path::new(vertices, weight))
    }
}

impl<V: Vertex, W: Weight> Graph<V, W> {
    /// Dijkstra's Algorithm
    ///
    /// Returns the minimum-weight path from `source` to `target`, or `None`
    /// when `target` is unreachable or either vertex is unknown.
    ///
    /// Among equal-weight paths the result is deterministic: vertices are
    /// settled in `(distance, vertex)` order and a predecessor is only
    /// replaced by a strictly shorter route.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWeight`](crate::Error::InvalidWeight) if any edge in
    /// the graph has a negative weight.
    pub fn shortest_path(&self, source: V, target: V) -> Result<Option<Path<V, W>>> {
        self.ensure_non_negative()?;
        if !self.contains_vertex(source) || !self.contains_vertex(target) {
            return Ok(None);
        }
        Ok(self.dijkstra(source, Some(target)).path_to(target))
    }

    /// Shortest paths from `source` to every vertex reachable from it,
    /// `source` itself included.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWeight`](crate::Error::InvalidWeight) if any edge in
    /// the graph has a negative weight.
    pub fn shortest_path_tree(&self, source: V) -> Result<HashMap<V, Path<V, W>>> {
        self.ensure_non_negative()?;
        if !self.contains_vertex(source) {
            return Ok(HashMap::new());
        }
        let search = self.dijkstra(source, None);
        Ok(search
            .distances
            .keys()
            .filter_map(|&vertex| Some((vertex, search.path_to(vertex)?)))
            .collect())
    }

    /// Runs until `target` is settled, or until the frontier is exhausted.
    fn dijkstra(&self, source: V, target: Option<V>) -> Search<V, W> {
        let mut distances = HashMap::from([(source, W::ZERO)]);
        let mut previous = HashMap::new();
        let mut settled = HashSet::new();
        let mut frontier = BinaryHeap::from([Reverse((W::ZERO, source))]);

        while let Some(Reverse((distance, vertex))) = frontier.pop() {
            if !settled.insert(vertex) {
                continue;
            }
            if Some(vertex) == target {
                break;
            }

            for (next, weight) in self.outgoing(vertex) {
                if settled.contains(&next) {
                    continue;
                }
                let candidate = distance + weight;
                let improved = distances
                    .get(&next)
                    .map_or(true, |&current| candidate < current);
                if improved {
                    distances.insert(next, candidate);
                    previous.insert(next, vertex);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        debug!(
            source = ?source,
            settled = settled.len(),
            reached = distances.len(),
            "dijkstra finished"
        );
        Search {
            source,
            distances,
            previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::test_graphs::{new_graph, new_undirected_graph};

    #[test]
    fn test_shortest_path() {
        let graph = new_graph();
        let expected = [
            (1, 0, vec![1]),
            (2, 7, vec![1, 2]),
            (3, 9, vec![1, 3]),
            (4, 20, vec![1, 3, 4]),
            (5, 20, vec![1, 3, 6, 5]),
            (6, 11, vec![1, 3, 6]),
        ];
        for (target, weight, vertices) in expected {
            let path = graph.shortest_path(1, target).unwrap().unwrap();
            assert_eq!(path.weight(), weight, "weight to {}", target);
            assert_eq!(path.vertices(), vertices.as_slice(), "path to {}", target);
        }
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let graph = new_graph();
        assert_eq!(graph.shortest_path(5, 1), Ok(None));
        assert_eq!(graph.shortest_path(1, 42), Ok(None));
        assert_eq!(graph.shortest_path(42, 1), Ok(None));
    }

    #[test]
    fn test_shortest_path_to_self() {
        let mut graph = new_graph();
        graph.add_edge(2, 2, 3);
        let path = graph.shortest_path(2, 2).unwrap().unwrap();
        assert_eq!(path.vertices(), &[2]);
        assert_eq!(path.weight(), 0);
    }

    #[test]
    fn test_shortest_path_tree() {
        let graph = new_graph();
        let tree = graph.shortest_path_tree(1).unwrap();
        assert_eq!(tree.len(), graph.vertex_count());
        assert_eq!(tree[&5].vertices(), &[1, 3, 6, 5]);
        assert_eq!(tree[&1].weight(), 0);

        let tree = graph.shortest_path_tree(4).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[&5].weight(), 6);

        assert!(graph.shortest_path_tree(42).unwrap().is_empty());
    }

    #[test]
    fn test_shortest_path_undirected() {
        let graph = new_undirected_graph();
        let path = graph.shortest_path(5, 1).unwrap().unwrap();
        assert_eq!(path.vertices(), &[5, 6, 3, 1]);
        assert_eq!(path.weight(), 20);
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        // 1 -> 2 -> 4 and 1 -> 3 -> 4 both cost 2
        let mut graph: Graph<u8, u8> = Graph::new();
        graph.add_edge(1, 3, 1);
        graph.add_edge(3, 4, 1);
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 4, 1);

        for _ in 0..10 {
            let path = graph.clone().shortest_path(1, 4).unwrap().unwrap();
            assert_eq!(path.vertices(), &[1, 2, 4]);
        }
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut graph: Graph<u8, u8> = Graph::new();
        graph.add_edge(1, 2, 0);
        graph.add_edge(2, 1, 0);
        graph.add_edge(2, 3, 0);

        let path = graph.shortest_path(1, 3).unwrap().unwrap();
        assert_eq!(path.vertices(), &[1, 2, 3]);
        assert_eq!(path.weight(), 0);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut graph: Graph<u8, i32> = Graph::new();
        graph.add_edge(1, 2, 5);
        graph.add_edge(2, 3, -2);

        let expected = Error::InvalidWeight {
            from: "2".to_string(),
            to: "3".to_string(),
            weight: "-2".to_string(),
        };
        assert_eq!(graph.shortest_path(1, 2), Err(expected.clone()));
        assert_eq!(graph.shortest_path_tree(1), Err(expected));
    }
}
