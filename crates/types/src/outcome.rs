use serde::{Deserialize, Serialize};

/// Outcome of a search. Absence of the target is a normal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum SearchResult {
    FoundAt(usize),
    NotFound,
}

impl SearchResult {
    pub fn index(&self) -> Option<usize> {
        match self {
            SearchResult::FoundAt(i) => Some(*i),
            SearchResult::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::FoundAt(_))
    }
}

impl From<Option<usize>> for SearchResult {
    fn from(index: Option<usize>) -> Self {
        index.map_or(SearchResult::NotFound, SearchResult::FoundAt)
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchResult::FoundAt(i) => write!(f, "found at {i}"),
            SearchResult::NotFound => write!(f, "not found"),
        }
    }
}

/// Summary of one search, rendered by the demo runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Sequence length reported by the oracle.
    pub len: usize,
    pub target: i64,
    /// Peak index located during the search.
    pub peak: usize,
    pub result: SearchResult,
    /// Oracle reads issued by the search itself.
    pub reads: u64,
    /// `3·⌈log₂n⌉ + slack`.
    pub nominal_budget: u64,
    /// Proven worst case, `4·⌈log₂n⌉`.
    pub read_ceiling: u64,
}

impl SearchReport {
    pub fn within_nominal_budget(&self) -> bool {
        self.reads <= self.nominal_budget
    }

    pub fn within_ceiling(&self) -> bool {
        self.reads <= self.read_ceiling
    }
}
