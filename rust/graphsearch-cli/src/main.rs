use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use graphsearch_cli::config::{Config, LogFormat};
use graphsearch_cli::{run, Args};

fn main() -> Result<()> {
    let cfg = Config::from_env()?;

    // Structured logging on stderr; stdout carries results only
    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr).with_ansi(false);
    match cfg.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }

    let args = Args::parse();
    tracing::debug!(?args, core_version = %graphsearch_core::version(), "starting graphsearch");

    let stdout = io::stdout();
    run(args, &cfg, &mut stdout.lock())
}
