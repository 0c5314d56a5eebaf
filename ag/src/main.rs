//! agui - generative-UI agent
//!
//! CLI entry point: runs one query through the pipeline and prints the
//! event stream to stdout. Logs go to stderr so the frames stay clean.

use std::io::Write;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use agui::cli::{Cli, Framing};
use agui::config::Config;
use agui::domain::Query;
use agui::events::{Event, EventStreamer};
use agui::source::create_source;

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    let level = match cli_log_level.map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    // Load configuration and apply CLI overrides
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(source) = cli.source {
        config.source.provider = source;
    }
    if let Some(user) = cli.user {
        config.source.user = user;
    }
    config.validate()?;

    let query = Query::new(cli.query).context("Query must not be empty")?;
    let source = create_source(&config.source).context("Failed to create data source")?;
    let streamer = EventStreamer::new(source, config.stream.clone());

    debug!(provider = %config.source.provider, "main: streaming");
    let mut rx = streamer.stream(query);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failure: Option<String> = None;

    while let Some(event) = rx.recv().await {
        let frame = match cli.framing {
            Framing::Sse => event.to_sse(),
            Framing::Ndjson => event.to_ndjson(),
        }
        .context("Failed to serialize event")?;

        out.write_all(frame.as_bytes()).context("Failed to write event")?;
        out.flush().context("Failed to flush stdout")?;

        if let Event::Error { code, message } = &event {
            failure = Some(format!("{}: {}", code, message));
        }
    }

    match failure {
        Some(reason) => Err(eyre::eyre!("stream ended with error - {}", reason)),
        None => Ok(()),
    }
}
