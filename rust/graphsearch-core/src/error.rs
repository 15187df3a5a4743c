use std::path::PathBuf;

use thiserror::Error;

/// Rejected graph or heuristic content. Node labels are carried in their
/// `Debug` rendering so the error stays independent of the node type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight { from: String, to: String, weight: f64 },
    #[error("non-finite edge weight {weight} on {from} -> {to}")]
    NonFiniteWeight { from: String, to: String, weight: f64 },
    #[error("invalid heuristic {value} for {node}: must be finite and non-negative")]
    InvalidHeuristic { node: String, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("expansion limit {limit} reached after {expanded} expansions")]
    ExpansionLimit { limit: u64, expanded: u64 },
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
