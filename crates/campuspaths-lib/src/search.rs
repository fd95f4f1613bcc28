use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::error::{Error, Result};
use crate::multigraph::{Multigraph, NodeLabel};
use crate::path::{Cost, Path};

/// Find the lowest-cost path from `start` to `goal` with Dijkstra's algorithm.
///
/// Edge weights are the traversal costs and must be non-negative. The search
/// stops as soon as `goal` is settled. When several paths share the optimal
/// cost, ties on the frontier are broken in discovery order; only the total
/// cost is guaranteed, not which optimal path is returned.
///
/// Fails with [`Error::UnknownNode`] when either endpoint is not a node and
/// with [`Error::PathNotFound`] when `goal` cannot be reached.
pub fn shortest_path<N, C, G>(graph: &G, start: &N, goal: &N) -> Result<Path<N, C>>
where
    N: NodeLabel,
    C: Cost,
    G: Multigraph<N, C> + ?Sized,
{
    for node in [start, goal] {
        if !graph.contains_node(node) {
            return Err(Error::UnknownNode {
                node: format!("{node:?}"),
            });
        }
    }

    let mut costs: HashMap<N, C> = HashMap::new();
    let mut parents: HashMap<N, (N, C)> = HashMap::new();
    let mut settled: HashSet<N> = HashSet::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    costs.insert(start.clone(), C::zero());
    queue.push(QueueEntry::new(start.clone(), C::zero(), sequence));

    while let Some(entry) = queue.pop() {
        if !settled.insert(entry.node.clone()) {
            continue;
        }

        if &entry.node == goal {
            debug!(settled = settled.len(), "shortest path found");
            return Ok(reconstruct_path(&parents, start, goal));
        }

        for edge in graph.list_child_edges(&entry.node)? {
            let next = edge.to();
            if settled.contains(next) {
                continue;
            }

            let next_cost = entry.cost + *edge.weight();
            let improves = costs
                .get(next)
                .map_or(true, |known| next_cost.total_cmp(known) == Ordering::Less);
            if improves {
                costs.insert(next.clone(), next_cost);
                parents.insert(next.clone(), (entry.node.clone(), *edge.weight()));
                sequence += 1;
                queue.push(QueueEntry::new(next.clone(), next_cost, sequence));
            }
        }
    }

    debug!(settled = settled.len(), "frontier exhausted without reaching goal");
    Err(Error::PathNotFound {
        start: format!("{start:?}"),
        goal: format!("{goal:?}"),
    })
}

fn reconstruct_path<N, C>(parents: &HashMap<N, (N, C)>, start: &N, goal: &N) -> Path<N, C>
where
    N: NodeLabel,
    C: Cost,
{
    let mut hops = Vec::new();
    let mut current = goal;
    while current != start {
        let Some((parent, cost)) = parents.get(current) else {
            break;
        };
        hops.push((current.clone(), *cost));
        current = parent;
    }
    hops.reverse();

    let mut path = Path::new(start.clone());
    for (node, cost) in hops {
        path.push(node, cost);
    }
    path
}

#[derive(Debug, Clone)]
struct QueueEntry<N, C> {
    node: N,
    cost: C,
    sequence: u64,
}

impl<N, C> QueueEntry<N, C> {
    fn new(node: N, cost: C, sequence: u64) -> Self {
        Self {
            node,
            cost,
            sequence,
        }
    }
}

impl<N, C: Cost> PartialEq for QueueEntry<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, C: Cost> Eq for QueueEntry<N, C> {}

impl<N, C: Cost> Ord for QueueEntry<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by
        // discovery order.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<N, C: Cost> PartialOrd for QueueEntry<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
