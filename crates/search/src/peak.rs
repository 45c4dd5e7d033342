use summit_oracle::Oracle;
use summit_types::SearchError;
use tracing::trace;

use crate::memo::ProbeMemo;

/// Find the unique peak index `p` with `value(p−1) < value(p) > value(p+1)`.
///
/// Bisection on `[0, len−1]`: if the sequence still rises at `mid`, the peak
/// is strictly to the right; otherwise it is at `mid` or to its left. Takes at
/// most `⌈log₂len⌉` probe pairs and every probe is recorded in `memo` for the
/// slope searches that follow.
///
/// The mountain shape itself is not verified. On malformed input the result
/// is some index in `[0, len−1]`, never an out-of-range read.
pub fn locate_peak<O: Oracle + ?Sized>(
    oracle: &O,
    len: usize,
    memo: &mut ProbeMemo,
) -> Result<usize, SearchError> {
    if len < 3 {
        return Err(SearchError::PreconditionViolation { len });
    }

    let (mut lo, mut hi) = (0, len - 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let here = memo.read(oracle, mid)?;
        let next = memo.read(oracle, mid + 1)?;

        if here < next {
            lo = mid + 1;
        } else {
            hi = mid;
        }
        trace!(mid, here, next, lo, hi, "Peak bisection step");
    }

    Ok(lo)
}
