use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use graphsearch_core::dataset::reference;
use graphsearch_core::{all_simple_paths, BestFirstEngine, Dataset, SearchOptions};
use tracing::{info, warn};

pub mod config;
pub mod report;

use config::Config;
use report::SearchOutput;

#[derive(Parser, Debug)]
#[command(name = "graphsearch", version, about = "Uniform-cost and A* search over weighted directed graphs")]
pub struct Args {
    /// Dataset JSON file (graph, heuristics, default start/goal)
    #[arg(long, value_name = "PATH", conflicts_with = "builtin")]
    pub dataset: Option<PathBuf>,

    /// Use a built-in dataset instead of a file
    #[arg(long, value_enum)]
    pub builtin: Option<Builtin>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the cheapest path
    Search {
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Astar)]
        algorithm: AlgorithmArg,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        goal: Option<String>,
        /// Abandon the search after this many expanded nodes
        #[arg(long, value_name = "N")]
        max_expansions: Option<u64>,
    },
    /// List every simple path, cheapest first
    Paths {
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        goal: Option<String>,
    },
    /// Print the dataset
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Builtin {
    Reference,
    Grid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Ucs,
    Astar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Flag wins over config; with neither, the reference dataset is used.
pub fn load_dataset(args: &Args, cfg: &Config) -> Result<Dataset> {
    if let Some(path) = args.dataset.as_ref().or(if args.builtin.is_none() { cfg.dataset.as_ref() } else { None }) {
        info!(path = ?path, "loading dataset");
        return Dataset::load(path).with_context(|| format!("failed to load dataset {:?}", path));
    }
    let d = match args.builtin.unwrap_or(Builtin::Reference) {
        Builtin::Reference => reference::weighted(),
        Builtin::Grid => reference::grid(),
    };
    Ok(d?)
}

fn endpoints(d: &Dataset, start: Option<String>, goal: Option<String>) -> Result<(String, String)> {
    let start = start.or_else(|| d.start.clone()).context("no start node: pass --start or set \"start\" in the dataset")?;
    let goal = goal.or_else(|| d.goal.clone()).context("no goal node: pass --goal or set \"goal\" in the dataset")?;
    Ok((start, goal))
}

pub fn run(args: Args, cfg: &Config, out: &mut impl Write) -> Result<()> {
    let d = load_dataset(&args, cfg)?;
    info!(nodes = d.graph.node_count(), edges = d.graph.edge_count(), "dataset ready");

    match args.command {
        Command::Search { algorithm, start, goal, max_expansions } => {
            let (start, goal) = endpoints(&d, start, goal)?;
            let options = max_expansions
                .or(cfg.max_expansions)
                .map(SearchOptions::with_max_expansions)
                .unwrap_or_default();
            let table = match algorithm {
                AlgorithmArg::Astar => {
                    let t = d.heuristics_for(&goal);
                    if t.is_none() {
                        warn!(%goal, "no heuristics aimed at this goal; running uniform-cost search");
                    }
                    t
                }
                AlgorithmArg::Ucs => None,
            };
            let engine = match &table {
                Some(t) => BestFirstEngine::with_heuristic(&d.graph, t),
                None => BestFirstEngine::new(&d.graph),
            };
            let outcome = engine.search_with(&start, &goal, &options)?;
            info!(algorithm = %engine.algorithm(), found = outcome.result.is_found(), expanded = outcome.stats.expanded, "search finished");
            let o = SearchOutput { algorithm: engine.algorithm(), start: &start, goal: &goal, report: &outcome };
            match args.format {
                OutputFormat::Text => report::write_search_text(out, &o)?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&o)?)?,
            }
        }
        Command::Paths { start, goal } => {
            let (start, goal) = endpoints(&d, start, goal)?;
            let paths = all_simple_paths(&d.graph, &start, &goal);
            match args.format {
                OutputFormat::Text => report::write_paths_text(out, &start, &goal, &paths)?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&paths)?)?,
            }
        }
        Command::Info => match args.format {
            OutputFormat::Text => report::write_info_text(out, &d)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&d)?)?,
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Config {
        Config::from_lookup(|_| None).unwrap()
    }

    fn run_args(argv: &[&str], cfg: &Config) -> Result<String> {
        let args = Args::try_parse_from(std::iter::once("graphsearch").chain(argv.iter().copied()))?;
        let mut buf = Vec::new();
        run(args, cfg, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn default_search_uses_reference_dataset() {
        let text = run_args(&["search"], &cfg()).unwrap();
        assert!(text.starts_with("Algorithm: astar\n"));
        assert!(text.contains("A -> C -> F -> G -> I"));
    }

    #[test]
    fn ucs_on_grid_builtin() {
        let text = run_args(&["--builtin", "grid", "search", "--algorithm", "ucs"], &cfg()).unwrap();
        assert!(text.contains("Algorithm: ucs"));
        assert!(text.contains("Total cost: 4\n"));
    }

    #[test]
    fn astar_without_heuristics_falls_back_to_ucs() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(br#"{"graph": {"S": [["T", 2]]}}"#).unwrap();
        let path = f.path().to_str().unwrap();
        let text = run_args(&["--dataset", path, "search", "--start", "S", "--goal", "T"], &cfg()).unwrap();
        assert!(text.contains("Algorithm: ucs"));
        assert!(text.contains("Total cost: 2"));
    }

    #[test]
    fn goal_override_does_not_reuse_foreign_heuristics() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(
            br#"{"graph": {"S": [["X", 1], ["T", 5], ["Z", 3]], "X": [["T", 1], ["Z", 20]]},
                 "heuristics": {"S": 3, "X": 20, "T": 0, "Z": 0}, "start": "S", "goal": "Z"}"#,
        )
        .unwrap();
        let path = f.path().to_str().unwrap();

        let text = run_args(&["--dataset", path, "search", "--goal", "T"], &cfg()).unwrap();
        assert!(text.contains("Algorithm: ucs"));
        assert!(text.contains("Optimal path from S to T: S -> X -> T\n"));
        assert!(text.contains("Total cost: 2\n"));

        let text = run_args(&["--dataset", path, "search"], &cfg()).unwrap();
        assert!(text.contains("Algorithm: astar"));
        assert!(text.contains("Total cost: 3\n"));
    }

    #[test]
    fn grid_goal_override_derives_heuristic_from_positions() {
        let text = run_args(&["--builtin", "grid", "search", "--goal", "E"], &cfg()).unwrap();
        assert!(text.contains("Algorithm: astar"));
        assert!(text.contains("Total cost: 3\n"));
    }

    #[test]
    fn config_dataset_and_budget_apply() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(br#"{"graph": {"a": [["b", 1]], "b": [["c", 1]]}, "start": "a", "goal": "c"}"#).unwrap();
        let mut c = cfg();
        c.dataset = Some(f.path().to_path_buf());
        c.max_expansions = Some(1);
        let err = run_args(&["search"], &c).unwrap_err();
        assert!(err.to_string().contains("expansion limit"));
        let text = run_args(&["search", "--max-expansions", "10"], &c).unwrap();
        assert!(text.contains("Total cost: 2"));
        // --builtin overrides the configured file
        let text = run_args(&["--builtin", "reference", "info"], &c).unwrap();
        assert!(text.contains("Default query: A -> I"));
    }

    #[test]
    fn missing_endpoints_is_an_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(br#"{"graph": {"a": []}}"#).unwrap();
        let path = f.path().to_str().unwrap();
        let err = run_args(&["--dataset", path, "paths"], &cfg()).unwrap_err();
        assert!(err.to_string().contains("no start node"));
    }

    #[test]
    fn not_found_is_not_an_error() {
        let text = run_args(&["search", "--start", "A", "--goal", "H"], &cfg()).unwrap();
        assert!(text.contains("No path found from A to H"));
    }

    #[test]
    fn json_paths_output_parses() {
        let text = run_args(&["--format", "json", "paths"], &cfg()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v.as_array().unwrap().len(), 4);
        assert_eq!(v[0]["cost"], 7.0);
    }
}
