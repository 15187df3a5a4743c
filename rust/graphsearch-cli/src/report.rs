use std::io::Write;

use graphsearch_core::{Algorithm, CostedPath, Dataset, SearchReport, SearchResult};
use itertools::Itertools;
use serde::Serialize;

#[derive(Serialize)]
pub struct SearchOutput<'a> {
    pub algorithm: Algorithm,
    pub start: &'a str,
    pub goal: &'a str,
    #[serde(flatten)]
    pub report: &'a SearchReport<String>,
}

pub fn write_search_text(out: &mut impl Write, o: &SearchOutput<'_>) -> std::io::Result<()> {
    writeln!(out, "Algorithm: {}", o.algorithm)?;
    match &o.report.result {
        SearchResult::Found(route) => {
            writeln!(out, "Optimal path from {} to {}: {}", o.start, o.goal, route.path.iter().join(" -> "))?;
            writeln!(out, "Total cost: {}", route.cost)?;
            if !route.steps.is_empty() {
                writeln!(out, "Path breakdown:")?;
                for s in &route.steps {
                    writeln!(out, "  {} -> {}: cost = {}", s.from, s.to, s.cost)?;
                }
            }
        }
        SearchResult::NotFound => writeln!(out, "No path found from {} to {}", o.start, o.goal)?,
    }
    let st = &o.report.stats;
    writeln!(out, "Expanded: {} (pushed {}, stale {})", st.expanded, st.pushed, st.stale)
}

pub fn write_paths_text(out: &mut impl Write, start: &str, goal: &str, paths: &[CostedPath<String>]) -> std::io::Result<()> {
    if paths.is_empty() {
        return writeln!(out, "No path found from {} to {}", start, goal);
    }
    writeln!(out, "All simple paths from {} to {} (sorted by cost):", start, goal)?;
    for (i, p) in paths.iter().enumerate() {
        writeln!(out, "Path {}: {} - Cost: {}", i + 1, p.path.iter().join(" -> "), p.cost)?;
    }
    Ok(())
}

pub fn write_info_text(out: &mut impl Write, d: &Dataset) -> std::io::Result<()> {
    writeln!(out, "Nodes: {}  Edges: {}", d.graph.node_count(), d.graph.edge_count())?;
    if let (Some(s), Some(g)) = (&d.start, &d.goal) {
        writeln!(out, "Default query: {} -> {}", s, g)?;
    }
    writeln!(out, "Weighted graph:")?;
    for (n, edges) in d.graph.iter() {
        writeln!(out, "  {}: [{}]", n, edges.iter().map(|(v, w)| format!("{}({})", v, w)).join(", "))?;
    }
    if let Some(h) = &d.heuristics {
        writeln!(out, "Heuristics:")?;
        for (n, v) in h.iter() {
            writeln!(out, "  {}: {}", n, v)?;
        }
    }
    if let Some(p) = &d.positions {
        writeln!(out, "Positions:")?;
        for (n, (x, y)) in &p.positions {
            writeln!(out, "  {}: ({}, {})", n, x, y)?;
        }
    }
    Ok(())
}
