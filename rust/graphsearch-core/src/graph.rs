use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

use crate::error::GraphError;

/// Anything usable as a node label. Nodes are only hashed and compared for
/// equality; no ordering is required.
pub trait Node: Clone + Eq + Hash + Debug {}
impl<T: Clone + Eq + Hash + Debug> Node for T {}

pub type Edge<N> = (N, f64);

/// Directed graph with non-negative edge weights.
///
/// Keys and each node's outgoing edges keep insertion order. Nodes that only
/// appear as edge targets have no entry and therefore no successors.
/// Self-loops and parallel edges are kept as given.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedGraph<N: Node> {
    adjacency: IndexMap<N, Vec<Edge<N>>>,
}

impl<N: Node> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self { adjacency: IndexMap::new() }
    }
}

impl<N: Node> WeightedGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut g = Self::new();
        for (u, v, w) in edges {
            g.add_edge(u, v, w)?;
        }
        Ok(g)
    }

    /// Ensures `node` has an adjacency entry, possibly empty.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    pub fn add_edge(&mut self, from: N, to: N, weight: f64) -> Result<(), GraphError> {
        check_weight(&from, &to, weight)?;
        self.adjacency.entry(from).or_default().push((to, weight));
        Ok(())
    }

    /// Outgoing edges of `node`; empty when the node has no entry.
    pub fn neighbors(&self, node: &N) -> &[Edge<N>] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes with an adjacency entry, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Cheapest direct edge from `from` to `to`, if any.
    pub fn edge_weight(&self, from: &N, to: &N) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .filter(|(v, _)| v == to)
            .map(|(_, w)| *w)
            .min_by(f64::total_cmp)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, &[Edge<N>])> + '_ {
        self.adjacency.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

impl<N: Node> TryFrom<IndexMap<N, Vec<Edge<N>>>> for WeightedGraph<N> {
    type Error = GraphError;

    fn try_from(adjacency: IndexMap<N, Vec<Edge<N>>>) -> Result<Self, Self::Error> {
        for (from, edges) in &adjacency {
            for (to, w) in edges {
                check_weight(from, to, *w)?;
            }
        }
        Ok(Self { adjacency })
    }
}

fn check_weight<N: Debug>(from: &N, to: &N, weight: f64) -> Result<(), GraphError> {
    if !weight.is_finite() {
        return Err(GraphError::NonFiniteWeight { from: format!("{:?}", from), to: format!("{:?}", to), weight });
    }
    if weight < 0.0 {
        return Err(GraphError::NegativeWeight { from: format!("{:?}", from), to: format!("{:?}", to), weight });
    }
    Ok(())
}

impl<N: Node + Serialize> Serialize for WeightedGraph<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.adjacency.serialize(serializer)
    }
}

impl<'de, N: Node + Deserialize<'de>> Deserialize<'de> for WeightedGraph<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let adjacency = IndexMap::<N, Vec<Edge<N>>>::deserialize(deserializer)?;
        WeightedGraph::try_from(adjacency).map_err(D::Error::custom)
    }
}
