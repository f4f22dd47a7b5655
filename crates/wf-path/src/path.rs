//! Persistent weighted paths.

use std::fmt;
use std::sync::Arc;

use wf_core::{Real, WfResult, ensure_finite, ensure_non_negative};

/// One hop of a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<N> {
    start: N,
    end: N,
    cost: Real,
}

impl<N> Segment<N> {
    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn end(&self) -> &N {
        &self.end
    }

    /// Cost of this hop alone.
    pub fn cost(&self) -> Real {
        self.cost
    }
}

struct Link<N> {
    segment: Segment<N>,
    prev: Option<Arc<Link<N>>>,
}

/// An immutable, append-only route from a fixed start point.
///
/// Segments live in an `Arc`-linked chain, newest first. `extend` allocates one
/// link and shares the rest, so any number of paths can branch off a common
/// prefix without copying it and without sharing mutable state.
pub struct Path<N> {
    start: N,
    tail: Option<Arc<Link<N>>>,
    cost: Real,
    len: usize,
}

impl<N> Path<N> {
    /// A zero-segment path sitting at `start`.
    pub fn new(start: N) -> Self {
        Self {
            start,
            tail: None,
            cost: 0.0,
            len: 0,
        }
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    /// Destination of the last segment, or the start for an empty path.
    pub fn end(&self) -> &N {
        match &self.tail {
            Some(link) => &link.segment.end,
            None => &self.start,
        }
    }

    /// Sum of all segment costs.
    pub fn cost(&self) -> Real {
        self.cost
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Segments oldest first. Each call starts over.
    ///
    /// The chain is linked newest first, so this walks it once up front and
    /// buffers `len()` references: O(n) time and memory per call, not lazy.
    pub fn segments(&self) -> Segments<'_, N> {
        let mut newest_first = Vec::with_capacity(self.len);
        let mut cursor = self.tail.as_deref();
        while let Some(link) = cursor {
            newest_first.push(&link.segment);
            cursor = link.prev.as_deref();
        }
        Segments {
            inner: newest_first.into_iter().rev(),
        }
    }

    /// Every point visited: the start, then each segment's end.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        std::iter::once(&self.start).chain(self.segments().map(Segment::end))
    }
}

impl<N: Clone> Path<N> {
    /// Append a hop to `next` costing `cost`, returning a new path.
    ///
    /// # Panics
    ///
    /// If `cost` is negative, NaN or infinite, or if the new total would
    /// overflow to infinity.
    pub fn extend(&self, next: N, cost: Real) -> Path<N> {
        assert!(
            cost.is_finite() && cost >= 0.0,
            "path segment cost must be finite and non-negative, got {cost}"
        );
        let total = self.cost + cost;
        assert!(
            total.is_finite(),
            "path cost overflows: {} + {cost}",
            self.cost
        );
        self.push(next, cost, total)
    }

    /// Like [`Path::extend`], but reports a bad cost instead of panicking.
    pub fn try_extend(&self, next: N, cost: Real) -> WfResult<Path<N>> {
        let cost = ensure_non_negative(cost, "path segment")?;
        let total = ensure_finite(self.cost + cost, "path cost")?;
        Ok(self.push(next, cost, total))
    }

    fn push(&self, next: N, cost: Real, total: Real) -> Path<N> {
        let segment = Segment {
            start: self.end().clone(),
            end: next,
            cost,
        };
        Path {
            start: self.start.clone(),
            tail: Some(Arc::new(Link {
                segment,
                prev: self.tail.clone(),
            })),
            cost: total,
            len: self.len + 1,
        }
    }
}

impl<N: Clone> Clone for Path<N> {
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            tail: self.tail.clone(),
            cost: self.cost,
            len: self.len,
        }
    }
}

// Unlink iteratively so dropping a very long chain can't blow the stack.
impl<N> Drop for Path<N> {
    fn drop(&mut self) {
        let mut next = self.tail.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut link) => next = link.prev.take(),
                Err(_) => break,
            }
        }
    }
}

impl<N: PartialEq> PartialEq for Path<N> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.len == other.len
            && self.cost == other.cost
            && self.segments().eq(other.segments())
    }
}

impl<N: fmt::Debug> fmt::Debug for Path<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("start", &self.start)
            .field("cost", &self.cost)
            .field("segments", &self.segments().collect::<Vec<_>>())
            .finish()
    }
}

impl<N: fmt::Display> fmt::Display for Path<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, " (cost {:.3})", self.cost)
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a Segment<N>;
    type IntoIter = Segments<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments()
    }
}

/// Oldest-first iterator over a path's segments.
pub struct Segments<'a, N> {
    inner: std::iter::Rev<std::vec::IntoIter<&'a Segment<N>>>,
}

impl<'a, N> Iterator for Segments<'a, N> {
    type Item = &'a Segment<N>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<N> ExactSizeIterator for Segments<'_, N> {}

impl<N> DoubleEndedIterator for Segments<'_, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_path_is_at_start() {
        let p = Path::new("A");
        assert_eq!(p.start(), &"A");
        assert_eq!(p.end(), &"A");
        assert_eq!(p.cost(), 0.0);
        assert!(p.is_empty());
        assert_eq!(p.segments().count(), 0);
    }

    #[test]
    fn extend_does_not_touch_receiver() {
        let a = Path::new("A");
        let ab = a.extend("B", 2.0);
        let abc = ab.extend("C", 3.0);

        assert_eq!(a.cost(), 0.0);
        assert_eq!(a.end(), &"A");
        assert_eq!(ab.cost(), 2.0);
        assert_eq!(ab.len(), 1);
        assert_eq!(abc.cost(), 5.0);
        assert_eq!(abc.end(), &"C");
        assert_eq!(abc.start(), &"A");
    }

    #[test]
    fn branches_share_prefix_independently() {
        let ab = Path::new("A").extend("B", 1.0);
        let abc = ab.extend("C", 1.0);
        let abd = ab.extend("D", 4.0);

        let via_c: Vec<_> = abc.nodes().copied().collect();
        let via_d: Vec<_> = abd.nodes().copied().collect();
        assert_eq!(via_c, vec!["A", "B", "C"]);
        assert_eq!(via_d, vec!["A", "B", "D"]);
        assert_eq!(abd.cost(), 5.0);
    }

    #[test]
    fn segments_are_oldest_first_and_restartable() {
        let p = Path::new(1).extend(2, 0.5).extend(3, 1.5).extend(4, 2.5);
        let first: Vec<_> = p
            .segments()
            .map(|s| (*s.start(), *s.end(), s.cost()))
            .collect();
        assert_eq!(first, vec![(1, 2, 0.5), (2, 3, 1.5), (3, 4, 2.5)]);

        let again: Vec<_> = (&p).into_iter().map(|s| *s.end()).collect();
        assert_eq!(again, vec![2, 3, 4]);
        assert_eq!(p.segments().len(), 3);
        assert_eq!(p.segments().next_back().map(|s| *s.end()), Some(4));
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_extend_panics() {
        let _ = Path::new("A").extend("B", -1.0);
    }

    #[test]
    fn try_extend_reports_bad_cost() {
        let p = Path::new("A");
        assert!(p.try_extend("B", -1.0).is_err());
        assert!(p.try_extend("B", f64::NAN).is_err());
        assert_eq!(p.try_extend("B", 1.0).unwrap().cost(), 1.0);
    }

    #[test]
    #[should_panic(expected = "path cost overflows")]
    fn overflowing_total_panics() {
        let p = Path::new("A").extend("B", f64::MAX);
        let _ = p.extend("C", f64::MAX);
    }

    #[test]
    fn try_extend_reports_overflowing_total() {
        let p = Path::new("A").extend("B", f64::MAX);
        let err = p.try_extend("C", f64::MAX).unwrap_err();
        assert!(matches!(err, wf_core::WfError::NonFinite { what: "path cost", .. }));
        // Rounding back to MAX is not an overflow
        assert_eq!(p.try_extend("C", 1.0).unwrap().cost(), f64::MAX);
    }

    #[test]
    fn display_lists_route() {
        let p = Path::new("A").extend("B", 2.0).extend("C", 3.0);
        assert_eq!(p.to_string(), "A -> B -> C (cost 5.000)");
        assert_eq!(Path::new("A").to_string(), "A (cost 0.000)");
    }

    #[test]
    fn equality_is_structural() {
        let p = Path::new("A").extend("B", 2.0);
        let q = Path::new("A").extend("B", 2.0);
        assert_eq!(p, q);
        assert_ne!(p, Path::new("A").extend("B", 3.0));
        assert_eq!(p.clone(), p);
    }

    #[test]
    fn long_chain_drops_cleanly() {
        let mut p = Path::new(0u32);
        for i in 1..200_000 {
            p = p.extend(i, 1.0);
        }
        assert_eq!(p.len(), 199_999);
        drop(p);
    }
}
