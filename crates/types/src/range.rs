use serde::{Deserialize, Serialize};

/// Monotone direction of a sub-range of the mountain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Strictly increasing: the slope left of (and including) the peak.
    Ascending,
    /// Strictly decreasing: the slope right of the peak.
    Descending,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Ascending => write!(f, "ascending"),
            Orientation::Descending => write!(f, "descending"),
        }
    }
}

/// Closed index interval `[lo, hi]` tagged with its orientation.
///
/// A range with `lo > hi` is empty. Ranges are values: narrowing returns a
/// new range and leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRange {
    pub lo: usize,
    pub hi: usize,
    pub orientation: Orientation,
}

impl SearchRange {
    pub fn new(lo: usize, hi: usize, orientation: Orientation) -> Self {
        Self { lo, hi, orientation }
    }

    pub fn ascending(lo: usize, hi: usize) -> Self {
        Self::new(lo, hi, Orientation::Ascending)
    }

    pub fn descending(lo: usize, hi: usize) -> Self {
        Self::new(lo, hi, Orientation::Descending)
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Number of indices covered.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.hi - self.lo + 1
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        !self.is_empty() && self.lo <= index && index <= self.hi
    }

    /// Lower midpoint, or `None` for an empty range.
    pub fn midpoint(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.lo + (self.hi - self.lo) / 2)
        }
    }

    /// Same orientation, new bounds.
    pub fn with_bounds(&self, lo: usize, hi: usize) -> Self {
        Self::new(lo, hi, self.orientation)
    }
}

impl std::fmt::Display for SearchRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] {}", self.lo, self.hi, self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_contains() {
        let r = SearchRange::ascending(2, 5);
        assert_eq!(r.len(), 4);
        assert!(r.contains(2));
        assert!(r.contains(5));
        assert!(!r.contains(6));
        assert!(!r.contains(1));
    }

    #[test]
    fn test_single_index_range() {
        let r = SearchRange::descending(7, 7);
        assert_eq!(r.len(), 1);
        assert_eq!(r.midpoint(), Some(7));
    }

    #[test]
    fn test_empty_range() {
        let r = SearchRange::ascending(4, 3);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.midpoint(), None);
        assert!(!r.contains(3));
        assert!(!r.contains(4));
    }

    #[test]
    fn test_midpoint_rounds_down() {
        assert_eq!(SearchRange::ascending(0, 5).midpoint(), Some(2));
        assert_eq!(SearchRange::ascending(0, 6).midpoint(), Some(3));
        assert_eq!(
            SearchRange::ascending(usize::MAX - 2, usize::MAX).midpoint(),
            Some(usize::MAX - 1)
        );
    }

    #[test]
    fn test_with_bounds_keeps_orientation() {
        let r = SearchRange::descending(10, 20).with_bounds(12, 15);
        assert_eq!(r.orientation, Orientation::Descending);
        assert_eq!((r.lo, r.hi), (12, 15));
    }

    #[test]
    fn test_display() {
        assert_eq!(SearchRange::ascending(0, 3).to_string(), "[0, 3] ascending");
        assert_eq!(SearchRange::descending(4, 6).to_string(), "[4, 6] descending");
    }
}
