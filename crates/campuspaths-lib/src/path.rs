//! Weighted paths built one hop at a time.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::slice;

use serde::Serialize;

/// Additive, ordered cost with a zero value.
///
/// Costs are expected to be non-negative; the shortest-path engine relies on
/// it but does not check it.
pub trait Cost: Copy + PartialOrd + Add<Output = Self> + fmt::Debug {
    /// The additive identity.
    fn zero() -> Self;

    /// Total ordering used by the search frontier.
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl Cost for f64 {
    fn zero() -> Self {
        0.0
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

impl Cost for f32 {
    fn zero() -> Self {
        0.0
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

macro_rules! integer_cost {
    ($($ty:ty),*) => {
        $(impl Cost for $ty {
            fn zero() -> Self {
                0
            }

            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })*
    };
}

integer_cost!(u8, u16, u32, u64, usize, i32, i64);

/// One hop of a [`Path`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment<N, C> {
    start: N,
    end: N,
    cost: C,
}

impl<N, C: Copy> Segment<N, C> {
    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn end(&self) -> &N {
        &self.end
    }

    /// Cost of this hop alone.
    pub fn cost(&self) -> C {
        self.cost
    }
}

/// Contiguous chain of segments anchored at a start node.
///
/// The total cost is accumulated as segments are added. A path with no
/// segments is the trivial path from its start to itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<N, C> {
    start: N,
    #[serde(rename = "cost")]
    total: C,
    segments: Vec<Segment<N, C>>,
}

impl<N: Clone, C: Cost> Path<N, C> {
    /// Zero-segment path at `start` with zero cost.
    pub fn new(start: N) -> Self {
        Self {
            start,
            total: C::zero(),
            segments: Vec::new(),
        }
    }

    /// A new path with one more hop from the current end to `next`.
    ///
    /// `self` is left untouched.
    #[must_use]
    pub fn extend(&self, next: N, cost: C) -> Self {
        let mut extended = self.clone();
        extended.push(next, cost);
        extended
    }

    /// Append a hop in place.
    pub(crate) fn push(&mut self, next: N, cost: C) {
        let start = self.end().clone();
        self.segments.push(Segment {
            start,
            end: next,
            cost,
        });
        self.total = self.total + cost;
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    /// Last node reached, or the start for a trivial path.
    pub fn end(&self) -> &N {
        self.segments
            .last()
            .map(|segment| &segment.end)
            .unwrap_or(&self.start)
    }

    /// Sum of every segment cost.
    pub fn cost(&self) -> C {
        self.total
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in start-to-end order.
    pub fn iter(&self) -> slice::Iter<'_, Segment<N, C>> {
        self.segments.iter()
    }

    /// Visited nodes in order, starting with [`Path::start`].
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        std::iter::once(&self.start).chain(self.segments.iter().map(|segment| &segment.end))
    }
}

impl<'a, N, C> IntoIterator for &'a Path<N, C> {
    type Item = &'a Segment<N, C>;
    type IntoIter = slice::Iter<'a, Segment<N, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_path_has_zero_cost() {
        let path: Path<&str, f64> = Path::new("A");
        assert!(path.is_empty());
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.end(), &"A");
        assert_eq!(path.nodes().collect::<Vec<_>>(), vec![&"A"]);
    }

    #[test]
    fn extending_accumulates_cost() {
        let path = Path::new("A").extend("B", 5).extend("C", 3);
        assert_eq!(path.cost(), 8);
        assert_eq!(path.len(), 2);

        let hops: Vec<_> = path
            .iter()
            .map(|segment| (*segment.start(), *segment.end(), segment.cost()))
            .collect();
        assert_eq!(hops, vec![("A", "B", 5), ("B", "C", 3)]);
    }

    #[test]
    fn extend_preserves_prior_instance() {
        let base = Path::new("A").extend("B", 1.5);
        let longer = base.extend("C", 2.0);
        assert_eq!(base.len(), 1);
        assert_eq!(base.cost(), 1.5);
        assert_eq!(longer.cost(), 3.5);
        assert_eq!(longer.end(), &"C");
    }

    #[test]
    fn iteration_is_restartable() {
        let path = Path::new(1).extend(2, 4u32).extend(3, 6);
        let first: Vec<_> = (&path).into_iter().cloned().collect();
        let second: Vec<_> = path.iter().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn equality_compares_start_and_segments() {
        let a = Path::new("A").extend("B", 1);
        assert_eq!(a, Path::new("A").extend("B", 1));
        assert_ne!(a, Path::new("A").extend("B", 2));
        assert_ne!(Path::<_, u32>::new("A"), Path::new("B"));
    }

    #[test]
    fn float_costs_order_totally() {
        assert_eq!(Cost::total_cmp(&1.0f64, &2.0), Ordering::Less);
        assert_eq!(Cost::total_cmp(&3u32, &3), Ordering::Equal);
    }
}
