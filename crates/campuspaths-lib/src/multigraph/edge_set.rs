use std::collections::HashSet;

use crate::error::{Error, Result};

use super::{structurally_equal, Edge, EdgeLabel, Multigraph, NodeLabel};

/// Multigraph stored as a flat node set plus a flat edge list.
///
/// Edges are unique under structural equality. Child and parent queries scan
/// the whole edge list.
#[derive(Debug, Clone)]
pub struct EdgeSetGraph<N, W> {
    nodes: HashSet<N>,
    edges: Vec<Edge<N, W>>,
}

impl<N: NodeLabel, W: EdgeLabel> EdgeSetGraph<N, W> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashSet::new(),
            edges: Vec::new(),
        }
    }

    /// Copy the nodes and edges of any other backend into a new edge-set graph.
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: Multigraph<N, W> + ?Sized,
    {
        let copy = Self {
            nodes: graph.list_nodes().into_iter().cloned().collect(),
            edges: graph.list_edges().into_iter().cloned().collect(),
        };
        copy.check_rep();
        copy
    }

    fn require_endpoints(&self, edge: &Edge<N, W>) -> Result<()> {
        if !self.nodes.contains(edge.from()) {
            return Err(Error::node_not_found(edge.from()));
        }
        if !self.nodes.contains(edge.to()) {
            return Err(Error::node_not_found(edge.to()));
        }
        Ok(())
    }

    /// Assert the representation invariant. Compiled out of release builds.
    ///
    /// Every edge endpoint must be a node and no edge may appear twice.
    pub fn check_rep(&self) {
        #[cfg(debug_assertions)]
        for (index, edge) in self.edges.iter().enumerate() {
            assert!(
                self.nodes.contains(edge.from()) && self.nodes.contains(edge.to()),
                "edge {edge:?} references a node outside the graph"
            );
            assert!(
                !self.edges[index + 1..].contains(edge),
                "edge {edge:?} is stored more than once"
            );
        }
    }
}

impl<N: NodeLabel, W: EdgeLabel> Default for EdgeSetGraph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeLabel, W: EdgeLabel> PartialEq for EdgeSetGraph<N, W> {
    fn eq(&self, other: &Self) -> bool {
        structurally_equal(self, other)
    }
}

impl<N: NodeLabel, W: EdgeLabel> Multigraph<N, W> for EdgeSetGraph<N, W> {
    fn size(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn list_nodes(&self) -> Vec<&N> {
        self.nodes.iter().collect()
    }

    fn list_edges(&self) -> Vec<&Edge<N, W>> {
        self.edges.iter().collect()
    }

    fn list_child_edges(&self, parent: &N) -> Result<Vec<&Edge<N, W>>> {
        if !self.nodes.contains(parent) {
            return Err(Error::node_not_found(parent));
        }
        Ok(self
            .edges
            .iter()
            .filter(|edge| edge.from() == parent)
            .collect())
    }

    fn list_parent_edges(&self, child: &N) -> Result<Vec<&Edge<N, W>>> {
        if !self.nodes.contains(child) {
            return Err(Error::node_not_found(child));
        }
        Ok(self.edges.iter().filter(|edge| edge.to() == child).collect())
    }

    fn contains_node(&self, label: &N) -> bool {
        self.nodes.contains(label)
    }

    fn contains_edge(&self, edge: &Edge<N, W>) -> bool {
        self.edges.contains(edge)
    }

    fn contains_edge_label(&self, label: &W) -> bool {
        self.edges.iter().any(|edge| edge.weight() == label)
    }

    fn add_node(&mut self, label: N) {
        self.nodes.insert(label);
        self.check_rep();
    }

    fn add_edge(&mut self, edge: Edge<N, W>) -> Result<()> {
        self.require_endpoints(&edge)?;
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
        self.check_rep();
        Ok(())
    }

    fn delete_node(&mut self, label: &N) {
        if !self.nodes.remove(label) {
            return;
        }
        self.edges
            .retain(|edge| edge.from() != label && edge.to() != label);
        self.check_rep();
    }

    fn delete_edge(&mut self, edge: &Edge<N, W>) -> Result<()> {
        self.require_endpoints(edge)?;
        self.edges.retain(|existing| existing != edge);
        self.check_rep();
        Ok(())
    }

    fn delete_edge_label(&mut self, label: &W) {
        self.edges.retain(|edge| edge.weight() != label);
        self.check_rep();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn triangle() -> EdgeSetGraph<&'static str, u32> {
        let mut graph = EdgeSetGraph::new();
        for node in ["A", "B", "C"] {
            graph.add_node(node);
        }
        graph.add_edge(Edge::new("A", "B", 1)).unwrap();
        graph.add_edge(Edge::new("B", "C", 2)).unwrap();
        graph.add_edge(Edge::new("C", "A", 3)).unwrap();
        graph
    }

    #[test]
    fn empty_graph_has_no_nodes() {
        let graph: EdgeSetGraph<&str, u32> = EdgeSetGraph::default();
        assert_eq!(graph.size(), 0);
        assert!(graph.list_nodes().is_empty());
        assert!(graph.list_edges().is_empty());
    }

    #[test]
    fn adding_node_twice_is_a_no_op() {
        let mut graph: EdgeSetGraph<&str, u32> = EdgeSetGraph::new();
        graph.add_node("A");
        graph.add_node("A");
        assert_eq!(graph.size(), 1);
    }

    #[test]
    fn duplicate_edges_are_stored_once() {
        let mut graph = triangle();
        graph.add_edge(Edge::new("A", "B", 1)).unwrap();
        assert_eq!(graph.edge_count(), 3);

        graph.add_edge(Edge::new("A", "B", 9)).unwrap();
        assert_eq!(graph.edge_count(), 4, "parallel edge with new weight");
    }

    #[test]
    fn edge_to_missing_node_is_rejected() {
        let mut graph = triangle();
        let error = graph.add_edge(Edge::new("A", "Z", 1)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn child_and_parent_queries_filter_by_endpoint() {
        let graph = triangle();
        let children = graph.list_child_edges(&"A").unwrap();
        assert_eq!(children, vec![&Edge::new("A", "B", 1)]);
        let parents = graph.list_parent_edges(&"A").unwrap();
        assert_eq!(parents, vec![&Edge::new("C", "A", 3)]);
        assert!(graph.list_child_edges(&"Z").is_err());
        assert!(graph.list_parent_edges(&"Z").is_err());
    }

    #[test]
    fn deleting_a_node_drops_incident_edges() {
        let mut graph = triangle();
        graph.add_edge(Edge::new("B", "B", 5)).unwrap();
        graph.delete_node(&"B");
        assert!(!graph.contains_node(&"B"));
        assert_eq!(graph.list_edges(), vec![&Edge::new("C", "A", 3)]);

        graph.delete_node(&"B");
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn delete_edge_checks_endpoints_even_when_edge_is_absent() {
        let mut graph = triangle();
        assert!(graph.delete_edge(&Edge::new("A", "Z", 1)).is_err());
        graph.delete_edge(&Edge::new("A", "C", 1)).unwrap();
        assert_eq!(graph.edge_count(), 3);
        graph.delete_edge(&Edge::new("A", "B", 1)).unwrap();
        assert!(!graph.contains_edge(&Edge::new("A", "B", 1)));
    }

    #[test]
    fn delete_edge_label_removes_every_match() {
        let mut graph = triangle();
        graph.add_edge(Edge::new("B", "A", 1)).unwrap();
        assert!(graph.contains_edge_label(&1));
        graph.delete_edge_label(&1);
        assert!(!graph.contains_edge_label(&1));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn clone_is_independent() {
        let original = triangle();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.delete_node(&"A");
        copy.add_node("D");
        assert_eq!(original.size(), 3);
        assert_eq!(original.edge_count(), 3);
        assert_ne!(copy, original);
    }
}
