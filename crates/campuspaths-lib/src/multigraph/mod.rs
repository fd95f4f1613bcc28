//! Directed multigraph abstraction.
//!
//! [`Multigraph`] is the capability contract shared by two independent
//! backends with identical observable behavior:
//!
//! - [`EdgeSetGraph`] keeps a flat node set and a flat edge list. Every
//!   adjacency query scans all edges, which keeps its invariant trivial to
//!   check; it serves as the reference backend.
//! - [`AdjacencyGraph`] maps each node to its outgoing edges. Child lookups
//!   are a single map access while parent lookups scan every list.
//!
//! Parallel edges between the same ordered pair are allowed as long as their
//! weights differ, and self-loops are permitted. Inserting an edge that is
//! structurally equal to an existing one is a no-op in both backends.
//!
//! Neither backend synchronizes internally. Share a graph across threads
//! behind a lock, or clone one copy per reader.

mod adjacency;
mod edge;
mod edge_set;

pub use adjacency::AdjacencyGraph;
pub use edge::Edge;
pub use edge_set::EdgeSetGraph;

use std::fmt;
use std::hash::Hash;

use crate::error::Result;

/// Bounds required of node labels.
pub trait NodeLabel: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> NodeLabel for T {}

/// Bounds required of edge labels.
///
/// Deduplication and graph equality use `PartialEq`, so a label that is not
/// equal to itself (a float `NaN`) is never recognized as a duplicate and
/// makes a graph unequal to its own clone. Keep such values out of graphs.
pub trait EdgeLabel: Clone + PartialEq + fmt::Debug {}

impl<T: Clone + PartialEq + fmt::Debug> EdgeLabel for T {}

/// Operations shared by every multigraph backend.
pub trait Multigraph<N: NodeLabel, W: EdgeLabel> {
    /// Number of nodes.
    fn size(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Every node label, without duplicates.
    fn list_nodes(&self) -> Vec<&N>;

    /// Every edge currently in the graph.
    fn list_edges(&self) -> Vec<&Edge<N, W>>;

    /// Edges whose origin is `parent`.
    ///
    /// Fails with [`Error::NodeNotFound`](crate::Error::NodeNotFound) when
    /// `parent` is not a node.
    fn list_child_edges(&self, parent: &N) -> Result<Vec<&Edge<N, W>>>;

    /// Edges whose terminus is `child`.
    ///
    /// Fails with [`Error::NodeNotFound`](crate::Error::NodeNotFound) when
    /// `child` is not a node.
    fn list_parent_edges(&self, child: &N) -> Result<Vec<&Edge<N, W>>>;

    fn contains_node(&self, label: &N) -> bool;

    /// Exact structural match on origin, terminus, and weight.
    fn contains_edge(&self, edge: &Edge<N, W>) -> bool;

    /// Whether any edge carries `label` as its weight.
    fn contains_edge_label(&self, label: &W) -> bool;

    /// Insert a node. Adding an existing label is a no-op.
    fn add_node(&mut self, label: N);

    /// Insert an edge between two existing nodes.
    ///
    /// Fails with [`Error::NodeNotFound`](crate::Error::NodeNotFound) when
    /// either endpoint is missing.
    fn add_edge(&mut self, edge: Edge<N, W>) -> Result<()>;

    /// Remove a node together with every edge incident to it. No-op when absent.
    fn delete_node(&mut self, label: &N);

    /// Remove the edge structurally equal to `edge`, if present.
    ///
    /// Both endpoints must be nodes even when the edge itself is absent.
    fn delete_edge(&mut self, edge: &Edge<N, W>) -> Result<()>;

    /// Remove every edge whose weight equals `label`.
    fn delete_edge_label(&mut self, label: &W);
}

/// Whether two graphs hold the same node set and the same edge set,
/// regardless of backend or internal ordering.
pub fn structurally_equal<N, W, A, B>(a: &A, b: &B) -> bool
where
    N: NodeLabel,
    W: EdgeLabel,
    A: Multigraph<N, W> + ?Sized,
    B: Multigraph<N, W> + ?Sized,
{
    a.size() == b.size()
        && a.edge_count() == b.edge_count()
        && a.list_nodes().into_iter().all(|node| b.contains_node(node))
        && a.list_edges().into_iter().all(|edge| b.contains_edge(edge))
}
