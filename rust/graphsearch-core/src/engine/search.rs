use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::graph::{Node, WeightedGraph};
use crate::heuristics::HeuristicTable;
use crate::options::SearchOptions;

use super::frontier::{Entry, Frontier};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "ucs")]
    UniformCost,
    #[serde(rename = "astar")]
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::UniformCost => f.write_str("ucs"),
            Algorithm::AStar => f.write_str("astar"),
        }
    }
}

/// One traversed edge of a route with the weight actually paid for it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step<N> {
    pub from: N,
    pub to: N,
    pub cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route<N> {
    pub path: Vec<N>,
    pub steps: Vec<Step<N>>,
    pub cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResult<N> {
    Found(Route<N>),
    NotFound,
}

impl<N> SearchResult<N> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn route(&self) -> Option<&Route<N>> {
        match self {
            SearchResult::Found(r) => Some(r),
            SearchResult::NotFound => None,
        }
    }

    pub fn path(&self) -> Option<&[N]> {
        self.route().map(|r| r.path.as_slice())
    }

    pub fn cost(&self) -> Option<f64> {
        self.route().map(|r| r.cost)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes finalized (popped and not stale).
    pub expanded: u64,
    pub pushed: u64,
    /// Pops discarded because the node was already finalized.
    pub stale: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchReport<N> {
    pub result: SearchResult<N>,
    pub stats: SearchStats,
}

/// Best-first search over a borrowed graph. Without a heuristic table this
/// is uniform-cost search; with one it is A*.
///
/// Edge weights are non-negative by construction of [`WeightedGraph`], which
/// the closed-set rule depends on. The returned route is optimal when the
/// heuristic is admissible and consistent; inadmissible tables are accepted
/// and give best-effort routes.
pub struct BestFirstEngine<'a, N: Node> {
    graph: &'a WeightedGraph<N>,
    heuristic: Option<&'a HeuristicTable<N>>,
}

impl<'a, N: Node> BestFirstEngine<'a, N> {
    pub fn new(graph: &'a WeightedGraph<N>) -> Self {
        Self { graph, heuristic: None }
    }

    pub fn with_heuristic(graph: &'a WeightedGraph<N>, heuristic: &'a HeuristicTable<N>) -> Self {
        Self { graph, heuristic: Some(heuristic) }
    }

    pub fn algorithm(&self) -> Algorithm {
        if self.heuristic.is_some() { Algorithm::AStar } else { Algorithm::UniformCost }
    }

    pub fn search(&self, start: &N, goal: &N) -> SearchResult<N> {
        // Unbounded runs cannot hit the expansion limit.
        self.run(start, goal, None).map(|r| r.result).unwrap_or(SearchResult::NotFound)
    }

    pub fn search_with(&self, start: &N, goal: &N, options: &SearchOptions) -> Result<SearchReport<N>, SearchError> {
        self.run(start, goal, Some(options.max_expansions))
    }

    fn h(&self, node: &N) -> f64 {
        self.heuristic.map(|t| t.get(node)).unwrap_or(0.0)
    }

    fn run(&self, start: &N, goal: &N, limit: Option<u64>) -> Result<SearchReport<N>, SearchError> {
        let mut open: Frontier<N> = Frontier::new();
        let mut closed: FxHashSet<N> = FxHashSet::default();
        let mut came_from: FxHashMap<N, (N, f64)> = FxHashMap::default();
        let mut stats = SearchStats::default();

        open.push(self.h(start), 0.0, start.clone(), None);

        while let Some(Entry { g, node, via, .. }) = open.pop() {
            // Discard stale
            if closed.contains(&node) {
                stats.stale += 1;
                continue;
            }
            if let Some(limit) = limit {
                if stats.expanded >= limit {
                    stats.pushed = open.pushed();
                    debug!(algorithm=%self.algorithm(), limit, expanded=stats.expanded, pushed=stats.pushed, "search abandoned");
                    return Err(SearchError::ExpansionLimit { limit, expanded: stats.expanded });
                }
            }
            stats.expanded += 1;
            closed.insert(node.clone());
            if let Some(link) = via {
                came_from.insert(node.clone(), link);
            }
            trace!(node=?node, g, "expand");

            if node == *goal {
                stats.pushed = open.pushed();
                let route = reconstruct(&came_from, node, g);
                debug!(algorithm=%self.algorithm(), expanded=stats.expanded, pushed=stats.pushed, stale=stats.stale, cost=route.cost, hops=route.steps.len(), "search done");
                return Ok(SearchReport { result: SearchResult::Found(route), stats });
            }

            for (next, w) in self.graph.neighbors(&node) {
                if closed.contains(next) {
                    continue;
                }
                let ng = g + w;
                open.push(ng + self.h(next), ng, next.clone(), Some((node.clone(), *w)));
            }
        }

        stats.pushed = open.pushed();
        debug!(algorithm=%self.algorithm(), expanded=stats.expanded, pushed=stats.pushed, stale=stats.stale, "search done: no path");
        Ok(SearchReport { result: SearchResult::NotFound, stats })
    }
}

fn reconstruct<N: Node>(came_from: &FxHashMap<N, (N, f64)>, goal: N, cost: f64) -> Route<N> {
    let mut path = vec![goal.clone()];
    let mut steps = Vec::new();
    let mut current = goal;
    while let Some((prev, w)) = came_from.get(&current) {
        steps.push(Step { from: prev.clone(), to: current, cost: *w });
        path.push(prev.clone());
        current = prev.clone();
    }
    path.reverse();
    steps.reverse();
    Route { path, steps, cost }
}
