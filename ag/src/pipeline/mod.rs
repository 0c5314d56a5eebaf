//! The reasoning pipeline
//!
//! Five stages, each a function: classify the query, plan the data it
//! needs, extract insights from what came back, decide which components
//! present them, assemble the dashboard. Everything except the fetch in
//! between is pure and synchronous.

use tracing::debug;

mod assembler;
mod classifier;
mod decider;
mod extractor;
mod planner;

pub use assembler::{assemble, dashboard_title};
pub use classifier::{INTENT_RULES, IntentRule, classify, classify_subject};
pub use decider::decide;
pub use extractor::{Extraction, extract};
pub use planner::plan;

use crate::domain::{Insight, InsightKind, Intent, Subject};

/// Short natural-language summary of what was found
///
/// Derived from insight counts and kinds only, never from the raw data,
/// so it stays cheap and deterministic.
pub fn summarize(intent: Intent, subject: Subject, insights: &[Insight]) -> String {
    debug!(%intent, insight_count = insights.len(), "summarize: called");
    if insights.is_empty() {
        return "No data matched your query".to_string();
    }

    let totals = insights.iter().filter(|i| i.kind() == InsightKind::Total).count();
    let focus = subject.label().to_lowercase();

    match intent {
        Intent::Overview => format!("Found {} key metrics", totals),
        Intent::Trend => format!("Identified trends in {}", focus),
        Intent::Comparison => {
            let comparisons = insights
                .iter()
                .filter(|i| i.kind() == InsightKind::Comparison)
                .count()
                .max(1);
            format!("Compared {} data series", comparisons)
        }
        Intent::Highlight => format!("Highlighted top performers in {}", focus),
        Intent::DeepDive => format!("Analyzed {} insights in {}", insights.len(), focus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a2ui::ScalarValue;

    fn total(label: &str) -> Insight {
        Insight::Total {
            label: label.to_string(),
            value: ScalarValue::Int(1),
            context: None,
        }
    }

    #[test]
    fn test_summarize_overview_counts_totals() {
        let insights = vec![
            total("Total Commits"),
            total("Repositories"),
            total("Top Language"),
            Insight::Trend {
                label: "Commits Over Time".to_string(),
                series: vec![],
            },
        ];
        let summary = summarize(Intent::Overview, Subject::GitHub, &insights);
        assert_eq!(summary, "Found 3 key metrics");
    }

    #[test]
    fn test_summarize_trend_names_subject() {
        let insights = vec![Insight::Trend {
            label: "Commits Over Time".to_string(),
            series: vec![],
        }];
        assert_eq!(
            summarize(Intent::Trend, Subject::Activity, &insights),
            "Identified trends in activity"
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(
            summarize(Intent::Overview, Subject::General, &[]),
            "No data matched your query"
        );
    }
}
