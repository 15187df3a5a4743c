pub(crate) mod frontier;
pub mod search;

pub use search::{Algorithm, BestFirstEngine, Route, SearchReport, SearchResult, SearchStats, Step};
