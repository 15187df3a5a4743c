pub mod dataset;
pub mod engine;
pub mod error;
pub mod graph;
pub mod heuristics;
pub mod options;
pub mod paths;

pub use dataset::Dataset;
pub use engine::{Algorithm, BestFirstEngine, Route, SearchReport, SearchResult, SearchStats, Step};
pub use error::{DatasetError, GraphError, SearchError};
pub use graph::{Node, WeightedGraph};
pub use heuristics::{GridLayout, HeuristicTable};
pub use options::SearchOptions;
pub use paths::{all_simple_paths, CostedPath};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
