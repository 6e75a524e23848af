//! Index spans along one sheet axis
//!
//! A [`Span`] addresses a run of rows or a run of columns using 1-based
//! coordinates. Internally a span is always the canonical half-open
//! interval `[start, end)`; the constructors perform the normalization, so
//! both instance defaults and per-call overrides are canonical before any
//! walk begins.

use std::ops::Range;

/// A half-open interval `[start, end)` over 1-based indices on one axis
///
/// User-facing inputs follow the inclusive convention: a single index `n`
/// means exactly that index, and a pair `(n, m)` includes both endpoints.
/// This inclusive-upper convention is deliberate and load-bearing for
/// callers; do not change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: u32,
    end: u32,
}

impl Span {
    /// Span covering exactly one index: `[n, n+1)`
    ///
    /// The upper bound saturates at `u32::MAX`, so `single(u32::MAX)` is
    /// an empty span rather than a wrap-around.
    pub fn single(n: u32) -> Self {
        Span {
            start: n,
            end: n.saturating_add(1),
        }
    }

    /// Span covering `n..=m` inclusive of both endpoints: `[n, m+1)`
    ///
    /// `m < n` produces an empty span; walking it visits nothing (the walk
    /// is a strict ascending `start..end`, never clamped or reversed).
    /// The upper bound saturates at `u32::MAX`.
    pub fn inclusive(n: u32, m: u32) -> Self {
        Span {
            start: n,
            end: m.saturating_add(1),
        }
    }

    /// First index covered
    pub fn start(&self) -> u32 {
        self.start
    }

    /// One past the last index covered
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of indices covered
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check whether the span covers no indices
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check whether the span covers exactly one index
    pub fn is_degenerate(&self) -> bool {
        self.len() == 1
    }

    /// Iterate the covered indices in ascending order
    pub fn iter(&self) -> Range<u32> {
        self.start..self.end
    }
}

impl From<u32> for Span {
    fn from(n: u32) -> Self {
        Span::single(n)
    }
}

impl From<(u32, u32)> for Span {
    fn from((n, m): (u32, u32)) -> Self {
        Span::inclusive(n, m)
    }
}

impl From<[u32; 2]> for Span {
    fn from([n, m]: [u32; 2]) -> Self {
        Span::inclusive(n, m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_single_normalization() {
        let s = Span::single(3);
        assert_eq!((s.start(), s.end()), (3, 4));
        assert!(s.is_degenerate());
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_inclusive_normalization() {
        let s = Span::inclusive(2, 5);
        assert_eq!((s.start(), s.end()), (2, 6));
        assert_eq!(s.len(), 4);
        assert!(!s.is_degenerate());
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_reversed_pair_is_empty_walk() {
        let s = Span::inclusive(5, 3);
        assert_eq!((s.start(), s.end()), (5, 4));
        assert!(s.is_empty());
        assert_eq!(s.iter().count(), 0);
    }

    #[test]
    fn test_upper_bound_saturates() {
        let s = Span::single(u32::MAX);
        assert_eq!((s.start(), s.end()), (u32::MAX, u32::MAX));
        assert!(s.is_empty());
        assert_eq!(s.iter().count(), 0);

        let s = Span::inclusive(1, u32::MAX);
        assert_eq!(s.end(), u32::MAX);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Span::from(4), Span::single(4));
        assert_eq!(Span::from((1, 3)), Span::inclusive(1, 3));
        assert_eq!(Span::from([1, 3]), Span::inclusive(1, 3));
    }

    proptest! {
        #[test]
        fn prop_single_is_n_to_n_plus_one(n in 1u32..1_000_000) {
            let s = Span::single(n);
            prop_assert_eq!((s.start(), s.end()), (n, n + 1));
            prop_assert!(s.is_degenerate());
        }

        #[test]
        fn prop_pair_includes_both_endpoints(n in 1u32..10_000, d in 0u32..10_000) {
            let m = n + d;
            let s = Span::inclusive(n, m);
            prop_assert_eq!((s.start(), s.end()), (n, m + 1));
            prop_assert_eq!(s.len(), d + 1);
            prop_assert_eq!(s.iter().next(), Some(n));
            prop_assert_eq!(s.iter().last(), Some(m));
        }
    }
}
