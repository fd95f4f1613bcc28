use std::collections::HashMap;

use crate::error::{Error, Result};

use super::{structurally_equal, Edge, EdgeLabel, Multigraph, NodeLabel};

/// Multigraph stored as a map from each node to its outgoing edges.
///
/// Child queries are a single lookup. Parent queries, label queries, and node
/// deletion visit every outgoing list.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W> {
    adjacency: HashMap<N, Vec<Edge<N, W>>>,
}

impl<N: NodeLabel, W: EdgeLabel> AdjacencyGraph<N, W> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Copy the nodes and edges of any other backend into a new adjacency graph.
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: Multigraph<N, W> + ?Sized,
    {
        let mut adjacency: HashMap<N, Vec<Edge<N, W>>> = graph
            .list_nodes()
            .into_iter()
            .map(|node| (node.clone(), Vec::new()))
            .collect();
        for edge in graph.list_edges() {
            if let Some(outgoing) = adjacency.get_mut(edge.from()) {
                outgoing.push(edge.clone());
            }
        }
        let copy = Self { adjacency };
        copy.check_rep();
        copy
    }

    /// Outgoing edges of `node` as a slice, empty when the node is absent.
    pub fn neighbours(&self, node: &N) -> &[Edge<N, W>] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn require_endpoints(&self, edge: &Edge<N, W>) -> Result<()> {
        if !self.adjacency.contains_key(edge.from()) {
            return Err(Error::node_not_found(edge.from()));
        }
        if !self.adjacency.contains_key(edge.to()) {
            return Err(Error::node_not_found(edge.to()));
        }
        Ok(())
    }

    /// Assert the representation invariant. Compiled out of release builds.
    ///
    /// Each edge must be filed under its own origin, its terminus must be a
    /// node, and no outgoing list may hold the same edge twice.
    pub fn check_rep(&self) {
        #[cfg(debug_assertions)]
        for (node, outgoing) in &self.adjacency {
            for (index, edge) in outgoing.iter().enumerate() {
                assert!(
                    edge.from() == node,
                    "edge {edge:?} is filed under {node:?}"
                );
                assert!(
                    self.adjacency.contains_key(edge.to()),
                    "edge {edge:?} references a node outside the graph"
                );
                assert!(
                    !outgoing[index + 1..].contains(edge),
                    "edge {edge:?} is stored more than once"
                );
            }
        }
    }
}

impl<N: NodeLabel, W: EdgeLabel> Default for AdjacencyGraph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeLabel, W: EdgeLabel> PartialEq for AdjacencyGraph<N, W> {
    fn eq(&self, other: &Self) -> bool {
        structurally_equal(self, other)
    }
}

impl<N: NodeLabel, W: EdgeLabel> Multigraph<N, W> for AdjacencyGraph<N, W> {
    fn size(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    fn list_nodes(&self) -> Vec<&N> {
        self.adjacency.keys().collect()
    }

    fn list_edges(&self) -> Vec<&Edge<N, W>> {
        self.adjacency.values().flatten().collect()
    }

    fn list_child_edges(&self, parent: &N) -> Result<Vec<&Edge<N, W>>> {
        self.adjacency
            .get(parent)
            .map(|outgoing| outgoing.iter().collect())
            .ok_or_else(|| Error::node_not_found(parent))
    }

    fn list_parent_edges(&self, child: &N) -> Result<Vec<&Edge<N, W>>> {
        if !self.adjacency.contains_key(child) {
            return Err(Error::node_not_found(child));
        }
        Ok(self
            .adjacency
            .values()
            .flatten()
            .filter(|edge| edge.to() == child)
            .collect())
    }

    fn contains_node(&self, label: &N) -> bool {
        self.adjacency.contains_key(label)
    }

    fn contains_edge(&self, edge: &Edge<N, W>) -> bool {
        self.neighbours(edge.from()).contains(edge)
    }

    fn contains_edge_label(&self, label: &W) -> bool {
        self.adjacency
            .values()
            .flatten()
            .any(|edge| edge.weight() == label)
    }

    fn add_node(&mut self, label: N) {
        self.adjacency.entry(label).or_default();
        self.check_rep();
    }

    fn add_edge(&mut self, edge: Edge<N, W>) -> Result<()> {
        self.require_endpoints(&edge)?;
        if let Some(outgoing) = self.adjacency.get_mut(edge.from()) {
            if !outgoing.contains(&edge) {
                outgoing.push(edge);
            }
        }
        self.check_rep();
        Ok(())
    }

    fn delete_node(&mut self, label: &N) {
        if self.adjacency.remove(label).is_none() {
            return;
        }
        for outgoing in self.adjacency.values_mut() {
            outgoing.retain(|edge| edge.to() != label);
        }
        self.check_rep();
    }

    fn delete_edge(&mut self, edge: &Edge<N, W>) -> Result<()> {
        self.require_endpoints(edge)?;
        if let Some(outgoing) = self.adjacency.get_mut(edge.from()) {
            outgoing.retain(|existing| existing != edge);
        }
        self.check_rep();
        Ok(())
    }

    fn delete_edge_label(&mut self, label: &W) {
        for outgoing in self.adjacency.values_mut() {
            outgoing.retain(|edge| edge.weight() != label);
        }
        self.check_rep();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multigraph::EdgeSetGraph;

    fn diamond() -> AdjacencyGraph<&'static str, &'static str> {
        let mut graph = AdjacencyGraph::new();
        for node in ["A", "B", "C", "D"] {
            graph.add_node(node);
        }
        for (from, to, label) in [
            ("A", "B", "ab"),
            ("A", "C", "ac"),
            ("B", "D", "bd"),
            ("C", "D", "cd"),
            ("C", "D", "cd2"),
        ] {
            graph.add_edge(Edge::new(from, to, label)).unwrap();
        }
        graph
    }

    #[test]
    fn parallel_edges_are_kept_when_labels_differ() {
        let graph = diamond();
        let children = graph.list_child_edges(&"C").unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(graph.list_parent_edges(&"D").unwrap().len(), 3);
    }

    #[test]
    fn unknown_node_queries_fail() {
        let graph = diamond();
        assert!(graph.list_child_edges(&"Z").is_err());
        assert!(graph.list_parent_edges(&"Z").is_err());
        assert!(graph.neighbours(&"Z").is_empty());
    }

    #[test]
    fn deleting_terminus_removes_edges_from_other_lists() {
        let mut graph = diamond();
        graph.delete_node(&"D");
        assert_eq!(graph.edge_count(), 2);
        assert!(graph
            .list_edges()
            .into_iter()
            .all(|edge| edge.to() != &"D" && edge.from() != &"D"));
    }

    #[test]
    fn self_loops_are_allowed() {
        let mut graph = diamond();
        graph.add_edge(Edge::new("A", "A", "loop")).unwrap();
        assert!(graph.contains_edge(&Edge::new("A", "A", "loop")));
        assert_eq!(graph.list_parent_edges(&"A").unwrap().len(), 1);
    }

    #[test]
    fn copies_across_backends_are_equal() {
        let graph = diamond();
        let edge_set = EdgeSetGraph::from_graph(&graph);
        let round_trip = AdjacencyGraph::from_graph(&edge_set);
        assert!(crate::multigraph::structurally_equal(&graph, &edge_set));
        assert_eq!(round_trip, graph);
    }

    #[test]
    fn mutating_a_clone_leaves_the_source_untouched() {
        let original = diamond();
        let mut copy = original.clone();
        copy.delete_edge_label(&"cd");
        copy.add_node("E");
        assert!(original.contains_edge_label(&"cd"));
        assert!(!original.contains_node(&"E"));

        let mut original = original;
        original.delete_node(&"A");
        assert!(copy.contains_node(&"A"));
    }
}
