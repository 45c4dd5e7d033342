use std::cmp::Ordering;

use summit_oracle::Oracle;
use summit_types::{SearchError, SearchRange};

use crate::range::toward_target;

/// Values read during one search, in the order they were read.
///
/// A search issues O(log n) reads, so a flat list beats any map here.
#[derive(Debug, Clone, Default)]
pub struct ProbeMemo {
    probes: Vec<(usize, i64)>,
    reads_issued: u64,
}

/// Result of narrowing a monotone range with already-known values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrowed {
    /// A recorded probe inside the range holds the target.
    Hit(usize),
    /// The target, if present, lies in this (possibly empty) range.
    Range(SearchRange),
}

impl ProbeMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded value at `index`, if it was read before.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.probes
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, v)| *v)
    }

    /// Value at `index`, reading through `oracle` only on first access.
    pub fn read<O: Oracle + ?Sized>(&mut self, oracle: &O, index: usize) -> Result<i64, SearchError> {
        if let Some(value) = self.get(index) {
            return Ok(value);
        }
        self.reads_issued += 1;
        let value = oracle.read(index)?;
        self.probes.push((index, value));
        Ok(value)
    }

    /// Oracle reads issued through this memo, failed ones included.
    pub fn reads_issued(&self) -> u64 {
        self.reads_issued
    }

    /// Number of distinct indices recorded.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Shrink a strictly monotone `range` using recorded probes inside it.
    ///
    /// Costs no reads. The returned range always lies within `range`.
    pub fn narrow(&self, range: SearchRange, target: i64) -> Narrowed {
        let (mut lo, mut hi) = (range.lo, range.hi);
        if lo > hi {
            return Narrowed::Range(range);
        }

        for &(index, value) in &self.probes {
            if index < lo || index > hi {
                continue;
            }
            match toward_target(range.orientation, value, target) {
                Ordering::Equal => return Narrowed::Hit(index),
                Ordering::Greater => lo = index + 1,
                Ordering::Less if index == lo => {
                    return Narrowed::Range(range.with_bounds(index + 1, index));
                }
                Ordering::Less => hi = index - 1,
            }
            if lo > hi {
                break;
            }
        }

        Narrowed::Range(range.with_bounds(lo, hi))
    }
}
