//! Topological sorting (Kahn's algorithm).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::graph::{Graph, Vertex, Weight};

impl<V: Vertex, W: Weight> Graph<V, W> {
    /// Topological Sorting
    ///
    /// Orders every vertex so that each edge points forward, or returns `None`
    /// if the graph has a cycle (a self-loop counts). When several vertices
    /// are ready at once the smallest goes first, so the order is stable.
    pub fn topo_sort(&self) -> Option<Vec<V>> {
        let mut in_degree: HashMap<V, usize> = self.vertices().iter().map(|&v| (v, 0)).collect();
        for edge in self.edges() {
            *in_degree.entry(edge.to).or_insert(0) += 1;
        }

        let mut ready: BinaryHeap<Reverse<V>> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(&vertex, _)| Reverse(vertex))
            .collect();

        let mut sorted = Vec::with_capacity(self.vertex_count());
        while let Some(Reverse(vertex)) = ready.pop() {
            sorted.push(vertex);
            for (next, _) in self.outgoing(vertex) {
                if let Some(degree) = in_degree.get_mut(&next) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push(Reverse(next));
                    }
                }
            }
        }

        if sorted.len() == self.vertex_count() {
            Some(sorted)
        } else {
            debug!(
                blocked = self.vertex_count() - sorted.len(),
                "topological sort found a cycle"
            );
            None
        }
    }

    /// True when the graph has no directed cycle.
    pub fn is_acyclic(&self) -> bool {
        self.topo_sort().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_graphs::{new_graph, new_undirected_graph};

    #[test]
    fn test_topo_sort() {
        assert_eq!(new_graph().topo_sort(), Some(vec![1, 2, 3, 4, 6, 5]));
        assert!(new_graph().is_acyclic());
    }

    #[test]
    fn test_topo_sort_cycle() {
        assert_eq!(new_undirected_graph().topo_sort(), None);
        assert!(!new_undirected_graph().is_acyclic());
    }

    #[test]
    fn test_topo_sort_self_loop() {
        let mut graph: Graph<char, u8> = Graph::new();
        graph.add_unit_edge('a', 'b');
        graph.add_unit_edge('b', 'b');
        assert_eq!(graph.topo_sort(), None);
    }

    #[test]
    fn test_topo_sort_isolated_vertices() {
        let mut graph: Graph<char, u8> = Graph::new();
        graph.add_vertex('z');
        graph.add_unit_edge('c', 'a');
        graph.add_vertex('b');
        assert_eq!(graph.topo_sort(), Some(vec!['b', 'c', 'a', 'z']));
    }

    #[test]
    fn test_topo_sort_empty() {
        let graph: Graph<u8, u8> = Graph::new();
        assert_eq!(graph.topo_sort(), Some(vec![]));
    }
}
