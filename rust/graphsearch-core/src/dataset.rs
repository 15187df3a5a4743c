use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::graph::WeightedGraph;
use crate::heuristics::{GridLayout, HeuristicTable};

/// A graph plus everything needed to query it: an optional heuristic table,
/// a default start/goal and optional grid coordinates.
///
/// JSON layout:
/// `{"graph": {"A": [["B", 2]]}, "heuristics": {"A": 1}, "start": "A", "goal": "B"}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub graph: WeightedGraph<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristics: Option<HeuristicTable<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<GridLayout>,
}

impl Dataset {
    pub fn new(graph: WeightedGraph<String>) -> Self {
        Self { graph, heuristics: None, start: None, goal: None, positions: None }
    }

    pub fn from_json_str(s: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let s = std::fs::read_to_string(path).map_err(|source| DatasetError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&s)
    }

    /// Heuristic table aimed at `goal`. The explicit table estimates distance
    /// to the dataset's own goal, so it is only used when `goal` is that goal;
    /// otherwise the Manhattan table is derived from grid positions, if any.
    pub fn heuristics_for(&self, goal: &str) -> Option<HeuristicTable<String>> {
        if let Some(t) = &self.heuristics {
            if self.goal.as_deref() == Some(goal) {
                return Some(t.clone());
            }
        }
        self.positions.as_ref().and_then(|p| p.manhattan_table(goal))
    }
}

/// Built-in datasets used by the CLI demos and the scenario tests.
pub mod reference {
    use super::*;

    const WEIGHTED_EDGES: [(&str, &str, f64); 11] = [
        ("A", "B", 2.0),
        ("A", "C", 1.0),
        ("B", "D", 5.0),
        ("B", "E", 2.0),
        ("C", "D", 8.0),
        ("C", "F", 3.0),
        ("D", "G", 1.0),
        ("E", "G", 4.0),
        ("F", "G", 1.0),
        ("G", "I", 2.0),
        ("H", "I", 6.0),
    ];

    const HEURISTICS: [(&str, f64); 9] = [
        ("A", 8.0),
        ("B", 6.0),
        ("C", 7.0),
        ("D", 2.0),
        ("E", 4.0),
        ("F", 2.0),
        ("G", 2.0),
        ("H", 6.0),
        ("I", 0.0),
    ];

    const GRID_POSITIONS: [(&str, (i32, i32)); 9] = [
        ("Start", (0, 0)),
        ("A", (0, 1)),
        ("B", (0, 2)),
        ("C", (1, 0)),
        ("D", (1, 1)),
        ("E", (1, 2)),
        ("F", (2, 0)),
        ("G", (2, 1)),
        ("Goal", (2, 2)),
    ];

    const GRID_CONNECTIONS: [(&str, &[&str]); 9] = [
        ("Start", &["A", "C"]),
        ("A", &["Start", "B", "D"]),
        ("B", &["A", "E"]),
        ("C", &["Start", "D", "F"]),
        ("D", &["A", "C", "E", "G"]),
        ("E", &["B", "D", "Goal"]),
        ("F", &["C", "G"]),
        ("G", &["D", "F", "Goal"]),
        ("Goal", &["E", "G"]),
    ];

    /// Nine labelled nodes A..I with a goal-directed heuristic; query A -> I.
    pub fn weighted() -> Result<Dataset, DatasetError> {
        let mut graph = WeightedGraph::from_edges(WEIGHTED_EDGES.iter().map(|&(u, v, w)| (u.to_string(), v.to_string(), w)))?;
        graph.add_node("I".to_string());
        let heuristics = HeuristicTable::from_pairs(HEURISTICS.iter().map(|&(n, h)| (n.to_string(), h)))?;
        Ok(Dataset { heuristics: Some(heuristics), start: Some("A".into()), goal: Some("I".into()), ..Dataset::new(graph) })
    }

    /// 3x3 four-connected grid with unit steps and a Manhattan heuristic
    /// toward `Goal`; query Start -> Goal.
    pub fn grid() -> Result<Dataset, DatasetError> {
        let mut graph = WeightedGraph::new();
        for (from, tos) in GRID_CONNECTIONS {
            for to in tos {
                graph.add_edge(from.to_string(), to.to_string(), 1.0)?;
            }
        }
        let positions = GridLayout { positions: GRID_POSITIONS.iter().map(|&(n, p)| (n.to_string(), p)).collect() };
        let heuristics = positions.manhattan_table("Goal");
        Ok(Dataset {
            heuristics,
            start: Some("Start".into()),
            goal: Some("Goal".into()),
            positions: Some(positions),
            ..Dataset::new(graph)
        })
    }
}
