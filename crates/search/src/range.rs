use std::cmp::Ordering;

use summit_oracle::Oracle;
use summit_types::{Orientation, SearchError, SearchRange, SearchResult};
use tracing::trace;

use crate::memo::{Narrowed, ProbeMemo};

/// Where `target` sits relative to an index holding `value`.
///
/// `Greater`: at a higher index. `Less`: at a lower index. `Equal`: here.
pub(crate) fn toward_target(orientation: Orientation, value: i64, target: i64) -> Ordering {
    match orientation {
        Orientation::Ascending => target.cmp(&value),
        Orientation::Descending => value.cmp(&target),
    }
}

/// Binary search for `target` in a strictly monotone `range`.
///
/// Strict monotonicity means at most one index in the range matches, so a
/// hit is the minimal matching index of the range. Reads never leave
/// `[range.lo, range.hi]`; probes already in `memo` are consulted first.
pub fn search_range<O: Oracle + ?Sized>(
    oracle: &O,
    range: SearchRange,
    target: i64,
    memo: &mut ProbeMemo,
) -> Result<SearchResult, SearchError> {
    let mut range = match memo.narrow(range, target) {
        Narrowed::Hit(index) => {
            trace!(index, "Target already probed");
            return Ok(SearchResult::FoundAt(index));
        }
        Narrowed::Range(narrowed) => narrowed,
    };

    while let Some(mid) = range.midpoint() {
        let value = memo.read(oracle, mid)?;
        trace!(lo = range.lo, hi = range.hi, mid, value, "Slope probe");

        match toward_target(range.orientation, value, target) {
            Ordering::Equal => return Ok(SearchResult::FoundAt(mid)),
            Ordering::Greater => range = range.with_bounds(mid + 1, range.hi),
            Ordering::Less if mid == range.lo => break,
            Ordering::Less => range = range.with_bounds(range.lo, mid - 1),
        }
    }

    Ok(SearchResult::NotFound)
}

/// Search the strictly increasing slope `[lo, hi]`.
pub fn search_ascending<O: Oracle + ?Sized>(
    oracle: &O,
    lo: usize,
    hi: usize,
    target: i64,
    memo: &mut ProbeMemo,
) -> Result<SearchResult, SearchError> {
    search_range(oracle, SearchRange::ascending(lo, hi), target, memo)
}

/// Search the strictly decreasing slope `[lo, hi]`.
pub fn search_descending<O: Oracle + ?Sized>(
    oracle: &O,
    lo: usize,
    hi: usize,
    target: i64,
    memo: &mut ProbeMemo,
) -> Result<SearchResult, SearchError> {
    search_range(oracle, SearchRange::descending(lo, hi), target, memo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::ceil_log2;
    use summit_oracle::{ArrayOracle, WindowedOracle};

    fn ascending(values: &[i64], lo: usize, hi: usize, target: i64) -> SearchResult {
        let oracle = ArrayOracle::new(values.to_vec());
        search_ascending(&oracle, lo, hi, target, &mut ProbeMemo::new()).unwrap()
    }

    fn descending(values: &[i64], lo: usize, hi: usize, target: i64) -> SearchResult {
        let oracle = ArrayOracle::new(values.to_vec());
        search_descending(&oracle, lo, hi, target, &mut ProbeMemo::new()).unwrap()
    }

    // ══════════════════════════════════════════════
    //  Ascending slope
    // ══════════════════════════════════════════════

    #[test]
    fn test_ascending_found() {
        let values = [1, 3, 5, 7, 9];
        for (i, v) in values.iter().enumerate() {
            assert_eq!(ascending(&values, 0, 4, *v), SearchResult::FoundAt(i));
        }
    }

    #[test]
    fn test_ascending_not_found() {
        let values = [1, 3, 5, 7, 9];
        for target in [0, 2, 4, 6, 8, 10] {
            assert_eq!(ascending(&values, 0, 4, target), SearchResult::NotFound);
        }
    }

    #[test]
    fn test_ascending_sub_range_only() {
        // 5 sits at index 4, outside [0, 3].
        let values = [1, 2, 3, 4, 5, 3, 1];
        assert_eq!(ascending(&values, 0, 3, 5), SearchResult::NotFound);
        assert_eq!(ascending(&values, 0, 4, 3), SearchResult::FoundAt(2));
    }

    #[test]
    fn test_ascending_single_element() {
        assert_eq!(ascending(&[4, 9, 2], 1, 1, 9), SearchResult::FoundAt(1));
        assert_eq!(ascending(&[4, 9, 2], 1, 1, 4), SearchResult::NotFound);
    }

    // ══════════════════════════════════════════════
    //  Descending slope
    // ══════════════════════════════════════════════

    #[test]
    fn test_descending_found() {
        let values = [9, 7, 5, 3, 1];
        for (i, v) in values.iter().enumerate() {
            assert_eq!(descending(&values, 0, 4, *v), SearchResult::FoundAt(i));
        }
    }

    #[test]
    fn test_descending_not_found() {
        let values = [9, 7, 5, 3, 1];
        for target in [10, 8, 6, 4, 2, 0] {
            assert_eq!(descending(&values, 0, 4, target), SearchResult::NotFound);
        }
    }

    #[test]
    fn test_descending_right_slope_of_mountain() {
        let values = [1, 2, 3, 4, 5, 3, 1];
        assert_eq!(descending(&values, 5, 6, 3), SearchResult::FoundAt(5));
        assert_eq!(descending(&values, 5, 6, 1), SearchResult::FoundAt(6));
        assert_eq!(descending(&values, 5, 6, 2), SearchResult::NotFound);
    }

    // ══════════════════════════════════════════════
    //  Bounds and cost
    // ══════════════════════════════════════════════

    #[test]
    fn test_never_reads_outside_window() {
        let up: Vec<i64> = (0..40).map(|i| 3 * i - 20).collect();
        let down: Vec<i64> = up.iter().rev().copied().collect();

        for lo in 0..up.len() {
            for hi in lo..up.len() {
                for target in -25..=100 {
                    let window = WindowedOracle::new(ArrayOracle::new(up.clone()), lo, hi);
                    search_ascending(&window, lo, hi, target, &mut ProbeMemo::new())
                        .unwrap_or_else(|e| panic!("ascending [{lo}, {hi}] target {target}: {e}"));
                    assert_eq!(window.rejected(), 0);

                    let window = WindowedOracle::new(ArrayOracle::new(down.clone()), lo, hi);
                    search_descending(&window, lo, hi, target, &mut ProbeMemo::new())
                        .unwrap_or_else(|e| panic!("descending [{lo}, {hi}] target {target}: {e}"));
                    assert_eq!(window.rejected(), 0);
                }
            }
        }
    }

    #[test]
    fn test_read_count_is_logarithmic() {
        let values: Vec<i64> = (0..1024).collect();
        for target in [-1, 0, 511, 512, 1023, 1024] {
            let oracle = ArrayOracle::new(values.clone());
            search_ascending(&oracle, 0, 1023, target, &mut ProbeMemo::new()).unwrap();
            assert!(
                oracle.reads() <= ceil_log2(1024) + 1,
                "target {target} took {} reads",
                oracle.reads()
            );
        }
    }

    #[test]
    fn test_memo_hit_costs_nothing() {
        let oracle = ArrayOracle::new(vec![1, 3, 5, 7, 9]);
        let mut memo = ProbeMemo::new();
        memo.read(&oracle, 3).unwrap();
        let before = oracle.reads();
        let result = search_ascending(&oracle, 0, 4, 7, &mut memo).unwrap();
        assert_eq!(result, SearchResult::FoundAt(3));
        assert_eq!(oracle.reads(), before);
    }

    #[test]
    fn test_empty_range_is_not_found_without_reads() {
        let oracle = ArrayOracle::new(vec![1, 3, 5]);
        let result =
            search_range(&oracle, SearchRange::ascending(2, 1), 3, &mut ProbeMemo::new()).unwrap();
        assert_eq!(result, SearchResult::NotFound);
        assert_eq!(oracle.reads(), 0);
    }

    #[test]
    fn test_out_of_range_read_is_fatal() {
        let oracle = ArrayOracle::new(vec![1, 3, 5]);
        let err = search_ascending(&oracle, 0, 6, 100, &mut ProbeMemo::new()).unwrap_err();
        assert!(matches!(err, SearchError::IndexOutOfRange { len: 3, .. }));
    }

    #[test]
    fn test_toward_target() {
        assert_eq!(toward_target(Orientation::Ascending, 3, 5), Ordering::Greater);
        assert_eq!(toward_target(Orientation::Ascending, 7, 5), Ordering::Less);
        assert_eq!(toward_target(Orientation::Descending, 7, 5), Ordering::Greater);
        assert_eq!(toward_target(Orientation::Descending, 3, 5), Ordering::Less);
        assert_eq!(toward_target(Orientation::Descending, 5, 5), Ordering::Equal);
    }
}
