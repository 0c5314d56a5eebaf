//! DataSource trait definition

use async_trait::async_trait;

use super::SourceError;
use crate::domain::{DataRequest, RawData};

/// Stateless data-source collaborator - each fetch is independent
///
/// The single suspension point of the pipeline. Implementations must not
/// retain per-query state; any caching or retry policy they apply is
/// invisible to the core.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the raw data described by `request`
    async fn fetch(&self, request: &DataRequest) -> Result<RawData, SourceError>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    /// Mock data source for unit tests
    ///
    /// Optionally delays before answering so cancellation behavior can
    /// be observed; counts completed fetches.
    pub struct MockSource {
        result: Result<RawData, String>,
        delay: Duration,
        completed: Arc<AtomicUsize>,
    }

    impl MockSource {
        pub fn returning(data: RawData) -> Self {
            Self {
                result: Ok(data),
                delay: Duration::ZERO,
                completed: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                result: Err(message.to_string()),
                delay: Duration::ZERO,
                completed: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        /// Number of fetches that ran to completion (not canceled mid-flight)
        pub fn completed_fetches(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.completed)
        }
    }

    #[async_trait]
    impl DataSource for MockSource {
        async fn fetch(&self, _request: &DataRequest) -> Result<RawData, SourceError> {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.completed.fetch_add(1, Ordering::SeqCst);
            match &self.result {
                Ok(data) => Ok(data.clone()),
                Err(message) => Err(SourceError::Unavailable(message.clone())),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::{DataRequest, TimeRange};

        fn request() -> DataRequest {
            DataRequest {
                metrics: vec![],
                range: TimeRange::recent(6),
                grouping: None,
            }
        }

        #[tokio::test]
        async fn test_mock_returns_data() {
            let source = MockSource::returning(RawData::default());
            let completed = source.completed_fetches();

            let data = source.fetch(&request()).await.unwrap();
            assert!(data.is_empty());
            assert_eq!(completed.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn test_mock_fails() {
            let source = MockSource::failing("nope");
            let err = source.fetch(&request()).await.unwrap_err();
            assert!(matches!(err, SourceError::Unavailable(_)));
        }
    }
}
