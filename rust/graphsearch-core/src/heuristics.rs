use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

use crate::error::GraphError;
use crate::graph::{Node, WeightedGraph};

/// Per-node estimate of remaining cost to the goal. Lookups for nodes
/// without an entry return 0.
#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicTable<N: Node> {
    values: IndexMap<N, f64>,
}

impl<N: Node> Default for HeuristicTable<N> {
    fn default() -> Self {
        Self { values: IndexMap::new() }
    }
}

impl<N: Node> HeuristicTable<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I>(pairs: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, f64)>,
    {
        let mut t = Self::new();
        for (n, v) in pairs {
            t.insert(n, v)?;
        }
        Ok(t)
    }

    /// All-zero table over the graph's keys.
    pub fn zeroed(graph: &WeightedGraph<N>) -> Self {
        Self { values: graph.nodes().map(|n| (n.clone(), 0.0)).collect() }
    }

    pub fn insert(&mut self, node: N, value: f64) -> Result<(), GraphError> {
        check_value(&node, value)?;
        self.values.insert(node, value);
        Ok(())
    }

    pub fn get(&self, node: &N) -> f64 {
        self.values.get(node).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, f64)> + '_ {
        self.values.iter().map(|(n, v)| (n, *v))
    }
}

fn check_value<N: Node>(node: &N, value: f64) -> Result<(), GraphError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidHeuristic { node: format!("{:?}", node), value })
    }
}

impl<N: Node + Serialize> Serialize for HeuristicTable<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl<'de, N: Node + Deserialize<'de>> Deserialize<'de> for HeuristicTable<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = IndexMap::<N, f64>::deserialize(deserializer)?;
        for (n, v) in &values {
            check_value(n, *v).map_err(D::Error::custom)?;
        }
        Ok(Self { values })
    }
}

pub type Cell = (i32, i32);

pub fn manhattan(a: Cell, b: Cell) -> f64 {
    f64::from((a.0 - b.0).abs() + (a.1 - b.1).abs())
}

pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dx = f64::from(a.0 - b.0);
    let dy = f64::from(a.1 - b.1);
    (dx * dx + dy * dy).sqrt()
}

/// Grid coordinates for named nodes, used to derive distance heuristics.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct GridLayout {
    pub positions: IndexMap<String, Cell>,
}

impl GridLayout {
    pub fn position(&self, node: &str) -> Option<Cell> {
        self.positions.get(node).copied()
    }

    /// Manhattan distance from every cell to `goal`; admissible for 4-connected
    /// grids with unit steps. Returns `None` when `goal` has no position.
    pub fn manhattan_table(&self, goal: &str) -> Option<HeuristicTable<String>> {
        self.table_with(goal, manhattan)
    }

    pub fn euclidean_table(&self, goal: &str) -> Option<HeuristicTable<String>> {
        self.table_with(goal, euclidean)
    }

    fn table_with(&self, goal: &str, dist: fn(Cell, Cell) -> f64) -> Option<HeuristicTable<String>> {
        let g = self.position(goal)?;
        let values = self.positions.iter().map(|(n, &p)| (n.clone(), dist(p, g))).collect();
        Some(HeuristicTable { values })
    }
}
