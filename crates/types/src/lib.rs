pub mod config;
pub mod error;
pub mod outcome;
pub mod range;

pub use config::{Config, SequenceSource, MAX_SYNTHETIC_LEN};
pub use error::SearchError;
pub use outcome::{SearchReport, SearchResult};
pub use range::{Orientation, SearchRange};
