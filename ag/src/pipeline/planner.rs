//! Data planning
//!
//! Pure mapping from intent to the minimal data that satisfies it.
//! Retrieval, retries, and backoff are the source collaborator's problem.

use tracing::debug;

use crate::domain::{DataRequest, Grouping, Intent, MetricKind, TimeRange};

/// Default trailing window for series data
pub const DEFAULT_MONTHS: u32 = 6;

/// Decide what data an intent needs
pub fn plan(intent: Intent) -> DataRequest {
    let metrics = match intent {
        Intent::Overview => vec![
            MetricKind::Totals,
            MetricKind::ActivitySeries,
            MetricKind::TopRepositories,
            MetricKind::LanguageDistribution,
        ],
        Intent::Trend => vec![MetricKind::ActivitySeries],
        Intent::Comparison => vec![MetricKind::EngagementComparison],
        Intent::Highlight => vec![MetricKind::Totals, MetricKind::TopRepositories],
        Intent::DeepDive => vec![
            MetricKind::Totals,
            MetricKind::ActivitySeries,
            MetricKind::TopRepositories,
            MetricKind::LanguageDistribution,
            MetricKind::EngagementComparison,
        ],
    };

    let grouping = metrics
        .contains(&MetricKind::ActivitySeries)
        .then_some(Grouping::Monthly);

    debug!(%intent, metric_count = metrics.len(), "plan: built request");
    DataRequest {
        metrics,
        range: TimeRange::recent(DEFAULT_MONTHS),
        grouping,
    }
}
