use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::graph::{Node, WeightedGraph};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostedPath<N> {
    pub path: Vec<N>,
    pub cost: f64,
}

/// Every simple path from `start` to `goal`, cheapest first. Equal costs keep
/// discovery order (depth-first, edges in insertion order).
///
/// Exponential in the worst case; meant for small graphs and as an oracle.
/// The walk keeps its own stack, so path length is bounded by memory only.
pub fn all_simple_paths<N: Node>(graph: &WeightedGraph<N>, start: &N, goal: &N) -> Vec<CostedPath<N>> {
    if start == goal {
        return vec![CostedPath { path: vec![start.clone()], cost: 0.0 }];
    }

    let mut out = Vec::new();
    // Parallel per-depth stacks: node on the path, cost to reach it, next edge to try.
    let mut path = vec![start.clone()];
    let mut costs = vec![0.0];
    let mut cursors = vec![0usize];
    let mut on_path = FxHashSet::default();
    on_path.insert(start.clone());

    while let Some(depth) = cursors.len().checked_sub(1) {
        let edges = graph.neighbors(&path[depth]);
        let i = cursors[depth];
        if i == edges.len() {
            cursors.pop();
            costs.pop();
            if let Some(n) = path.pop() {
                on_path.remove(&n);
            }
            continue;
        }
        cursors[depth] += 1;

        let (next, w) = &edges[i];
        if on_path.contains(next) {
            continue;
        }
        let cost = costs[depth] + w;
        if next == goal {
            let mut found = path.clone();
            found.push(next.clone());
            out.push(CostedPath { path: found, cost });
            continue;
        }
        path.push(next.clone());
        costs.push(cost);
        cursors.push(0);
        on_path.insert(next.clone());
    }

    out.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_paths_sorted_by_cost() {
        let g = WeightedGraph::from_edges([("a", "b", 1.0), ("b", "d", 5.0), ("a", "c", 1.0), ("c", "d", 1.0), ("a", "d", 4.0)]).unwrap();
        let paths = all_simple_paths(&g, &"a", &"d");
        let costs: Vec<f64> = paths.iter().map(|p| p.cost).collect();
        assert_eq!(costs, vec![2.0, 4.0, 6.0]);
        assert_eq!(paths[0].path, vec!["a", "c", "d"]);
    }

    #[test]
    fn ignores_cycles() {
        let g = WeightedGraph::from_edges([("a", "b", 1.0), ("b", "a", 1.0), ("b", "c", 1.0), ("c", "c", 1.0)]).unwrap();
        let paths = all_simple_paths(&g, &"a", &"c");
        assert_eq!(paths, vec![CostedPath { path: vec!["a", "b", "c"], cost: 2.0 }]);
    }

    #[test]
    fn trivial_and_unreachable() {
        let g = WeightedGraph::from_edges([("a", "b", 1.0)]).unwrap();
        assert_eq!(all_simple_paths(&g, &"a", &"a"), vec![CostedPath { path: vec!["a"], cost: 0.0 }]);
        assert!(all_simple_paths(&g, &"b", &"a").is_empty());
    }

    #[test]
    fn long_chain_does_not_exhaust_the_stack() {
        let n = 200_000u32;
        let g = WeightedGraph::from_edges((0..n).map(|i| (i, i + 1, 1.0))).unwrap();
        let paths = all_simple_paths(&g, &0, &n);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].path.len(), n as usize + 1);
        assert_eq!(paths[0].cost, f64::from(n));
    }
}
