//! Data-source collaborators
//!
//! The only outward call the core makes. A source answers a
//! [`DataRequest`](crate::domain::DataRequest) with raw fragments; it may
//! fail, and the core treats any failure as fatal to that one stream.
//! Retry and backoff policy, if any, lives behind this boundary.

use std::sync::Arc;

use tracing::debug;

mod client;
mod error;
mod github;
mod stub;

pub use client::DataSource;
pub use error::SourceError;
pub use github::GitHubSource;
pub use stub::StubSource;

#[cfg(test)]
pub use client::mock::MockSource;

use crate::config::SourceConfig;

/// Create a data source from the provider named in config
///
/// Supports "github", "stub", "stub-empty", and "stub-failing".
pub fn create_source(config: &SourceConfig) -> Result<Arc<dyn DataSource>, SourceError> {
    debug!(provider = %config.provider, "create_source: called");
    match config.provider.as_str() {
        "github" => Ok(Arc::new(GitHubSource::from_config(config)?)),
        "stub" => Ok(Arc::new(StubSource::new())),
        "stub-empty" => Ok(Arc::new(StubSource::empty())),
        "stub-failing" => Ok(Arc::new(StubSource::failing())),
        other => Err(SourceError::Unavailable(format!(
            "Unknown data source provider: '{}'. Supported: github, stub, stub-empty, stub-failing",
            other
        ))),
    }
}
