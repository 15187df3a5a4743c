use std::env;
use std::path::PathBuf;

use anyhow::Context;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_filter: String,
    pub log_format: LogFormat,
    pub dataset: Option<PathBuf>,
    pub max_expansions: Option<u64>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(get: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = get("GRAPHSEARCH_LOG").unwrap_or_else(|| "warn".to_string());
        let log_format = match get("GRAPHSEARCH_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("GRAPHSEARCH_LOG_FORMAT must be text or json, got {other:?}"),
        };
        let dataset = get("GRAPHSEARCH_DATASET").map(PathBuf::from);
        let max_expansions = get("GRAPHSEARCH_MAX_EXPANSIONS")
            .map(|s| s.parse::<u64>().with_context(|| format!("GRAPHSEARCH_MAX_EXPANSIONS={s:?} is not a number")))
            .transpose()?;

        Ok(Self { log_filter, log_format, dataset, max_expansions })
    }
}
