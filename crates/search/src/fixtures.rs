//! Reference implementations and mountain builders shared by tests.
//!
//! The alternates here are deliberately naive. They exist to cross-check the
//! production path, never to be called from it.

use rand::rngs::StdRng;
use rand::Rng;
use summit_oracle::Oracle;
use summit_types::{SearchError, SearchResult};

/// Leftmost index holding `target`, by full scan.
pub fn linear_first_index(values: &[i64], target: i64) -> SearchResult {
    values.iter().position(|v| *v == target).into()
}

/// Same three-phase search without a probe memo: peak bisection, then plain
/// binary search on each slope, re-reading whatever it needs.
pub fn search_without_memo<O: Oracle>(oracle: &O, target: i64) -> Result<SearchResult, SearchError> {
    let len = oracle.length();
    if len < 3 {
        return Err(SearchError::PreconditionViolation { len });
    }

    let (mut lo, mut hi) = (0, len - 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if oracle.read(mid)? < oracle.read(mid + 1)? {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    let peak = lo;

    let (mut lo, mut hi) = (0i64, peak as i64);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let value = oracle.read(mid as usize)?;
        if value == target {
            return Ok(SearchResult::FoundAt(mid as usize));
        } else if value < target {
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }

    let (mut lo, mut hi) = (peak as i64 + 1, len as i64 - 1);
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let value = oracle.read(mid as usize)?;
        if value == target {
            return Ok(SearchResult::FoundAt(mid as usize));
        } else if value > target {
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }

    Ok(SearchResult::NotFound)
}

/// Random strict mountain of `len` elements (`len >= 3`) and its peak index.
///
/// Steps of 1..=3 on both slopes make values repeat across the peak often,
/// which exercises the leftmost-match rule.
pub fn random_mountain(rng: &mut StdRng, len: usize) -> (Vec<i64>, usize) {
    let peak = rng.gen_range(1..len - 1);
    let mut values = Vec::with_capacity(len);
    let mut value = rng.gen_range(-50i64..50);
    values.push(value);
    for _ in 1..=peak {
        value += rng.gen_range(1..=3);
        values.push(value);
    }
    for _ in peak + 1..len {
        value -= rng.gen_range(1..=3);
        values.push(value);
    }
    (values, peak)
}
