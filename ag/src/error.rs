//! Pipeline error types

use thiserror::Error;

use crate::source::SourceError;

/// Errors that end a query's stream
///
/// Everything below the consumer boundary converts into exactly one of
/// these, which the streamer surfaces as a single terminal `agent.error`
/// event. Malformed data fragments never appear here: the extractor
/// recovers from those locally.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The data-source collaborator could not deliver
    #[error("data source unavailable: {0}")]
    Source(#[from] SourceError),

    /// A structural guarantee did not hold; unreachable by construction
    #[error("internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    /// Stable wire code for the `agent.error` payload
    pub fn code(&self) -> &'static str {
        match self {
            Self::Source(_) => "DATA_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_code() {
        let err = PipelineError::Source(SourceError::Unavailable("rate limited".to_string()));
        assert_eq!(err.code(), "DATA_UNAVAILABLE");
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn test_internal_error_code() {
        let err = PipelineError::Internal("assembled dashboard has no children".to_string());
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }
}
