//! Source error types

use thiserror::Error;

/// Errors a data-source collaborator can fail with
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source cannot serve this request at all
    #[error("data unavailable: {0}")]
    Unavailable(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

impl SourceError {
    /// Whether a caller outside the core could reasonably retry
    ///
    /// The core never retries; this informs transport-level policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Unavailable(_) => false,
            Self::Api { status, .. } => matches!(status, 408 | 429) || *status >= 500,
            Self::Network(_) => true,
            Self::InvalidPayload(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert!(
            SourceError::Api {
                status: 503,
                message: "unavailable".to_string()
            }
            .is_retryable()
        );
        assert!(
            SourceError::Api {
                status: 429,
                message: "rate limited".to_string()
            }
            .is_retryable()
        );
        assert!(
            !SourceError::Api {
                status: 404,
                message: "no such user".to_string()
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_unavailable_is_not_retryable() {
        assert!(!SourceError::Unavailable("disabled".to_string()).is_retryable());
        assert!(!SourceError::InvalidPayload("bad json".to_string()).is_retryable());
    }
}
