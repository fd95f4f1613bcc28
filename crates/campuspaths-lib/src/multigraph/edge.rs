use std::fmt;

use serde::Serialize;

/// Directed, labeled connection between two nodes.
///
/// Edges are immutable once built. Equality and hashing are structural over
/// origin, terminus, and weight, so two edges between the same pair of nodes
/// are distinct exactly when their weights differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<N, W> {
    from: N,
    to: N,
    weight: W,
}

impl<N, W> Edge<N, W> {
    /// Create an edge from `from` to `to` carrying `weight`.
    pub fn new(from: N, to: N, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Origin node.
    pub fn from(&self) -> &N {
        &self.from
    }

    /// Terminus node.
    pub fn to(&self) -> &N {
        &self.to
    }

    /// Label carried by the edge; doubles as the traversal cost when routing.
    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Whether the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.from == self.to
    }

    /// Decompose into `(from, to, weight)`.
    pub fn into_parts(self) -> (N, N, W) {
        (self.from, self.to, self.weight)
    }
}

impl<N: Clone, W: Clone> Edge<N, W> {
    /// The same connection in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight.clone(),
        }
    }
}

impl<N: fmt::Display, W: fmt::Display> fmt::Display for Edge<N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [{}]", self.from, self.to, self.weight)
    }
}
