//! Command-line interface for the `ag` binary

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How events are framed on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Framing {
    /// Server-Sent Events frames: `data: {json}\n\n`
    #[default]
    Sse,
    /// One JSON object per line
    Ndjson,
}

impl std::fmt::Display for Framing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sse => write!(f, "sse"),
            Self::Ndjson => write!(f, "ndjson"),
        }
    }
}

/// agui - turn a question into a dashboard, one event at a time
#[derive(Debug, Parser)]
#[command(name = "ag", version, about)]
pub struct Cli {
    /// Natural-language query, e.g. "Show my GitHub activity"
    pub query: String,

    /// Path to a config file (default: .agui.yml, then ~/.config/agui/agui.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    pub log_level: Option<String>,

    /// Data source provider, overriding the config
    #[arg(long)]
    pub source: Option<String>,

    /// GitHub user, overriding the config
    #[arg(long)]
    pub user: Option<String>,

    /// Output framing
    #[arg(long, value_enum, default_value_t)]
    pub framing: Framing,
}
