//! Extracted insights
//!
//! An insight is one typed fact the extractor found in raw data. The
//! variant set is closed; the UI decider matches it exhaustively.

use a2ui::{CategoryShare, NamedSeries, ScalarValue, SeriesPoint, TableRow};
use serde::{Deserialize, Serialize};

/// A typed, extracted fact about fetched data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    /// A single headline metric
    Total {
        label: String,
        value: ScalarValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        context: Option<String>,
    },
    /// A metric evolving over time
    Trend { label: String, series: Vec<SeriesPoint> },
    /// Ordered rows under named columns
    Ranking {
        label: String,
        columns: Vec<String>,
        rows: Vec<TableRow>,
    },
    /// Proportions across categories
    Distribution { label: String, slices: Vec<CategoryShare> },
    /// Two or more series measured against each other
    Comparison { label: String, series: Vec<NamedSeries> },
}

impl Insight {
    pub fn kind(&self) -> InsightKind {
        match self {
            Self::Total { .. } => InsightKind::Total,
            Self::Trend { .. } => InsightKind::Trend,
            Self::Ranking { .. } => InsightKind::Ranking,
            Self::Distribution { .. } => InsightKind::Distribution,
            Self::Comparison { .. } => InsightKind::Comparison,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Total { label, .. }
            | Self::Trend { label, .. }
            | Self::Ranking { label, .. }
            | Self::Distribution { label, .. }
            | Self::Comparison { label, .. } => label,
        }
    }

    /// Ordering priority; lower sorts first
    pub fn priority(&self) -> u8 {
        self.kind().rank()
    }
}

/// Discriminant of an [`Insight`], carrying the ordering priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Total,
    Trend,
    Ranking,
    Distribution,
    Comparison,
}

impl InsightKind {
    /// Fixed priority rank: Total > Trend > Ranking > Distribution > Comparison
    pub fn rank(&self) -> u8 {
        match self {
            Self::Total => 0,
            Self::Trend => 1,
            Self::Ranking => 2,
            Self::Distribution => 3,
            Self::Comparison => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Trend => "trend",
            Self::Ranking => "ranking",
            Self::Distribution => "distribution",
            Self::Comparison => "comparison",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ranks_follow_priority_order() {
        assert!(InsightKind::Total.rank() < InsightKind::Trend.rank());
        assert!(InsightKind::Trend.rank() < InsightKind::Ranking.rank());
        assert!(InsightKind::Ranking.rank() < InsightKind::Distribution.rank());
        assert!(InsightKind::Distribution.rank() < InsightKind::Comparison.rank());
    }

    #[test]
    fn test_insight_kind_and_label() {
        let insight = Insight::Total {
            label: "Total Commits".to_string(),
            value: ScalarValue::Int(312),
            context: Some("All-time contributions".to_string()),
        };
        assert_eq!(insight.kind(), InsightKind::Total);
        assert_eq!(insight.label(), "Total Commits");
        assert_eq!(insight.priority(), 0);
    }

    #[test]
    fn test_insight_serde_tag() {
        let insight = Insight::Trend {
            label: "Commits Over Time".to_string(),
            series: vec![SeriesPoint::new("2024-01", 45.0)],
        };
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["kind"], "trend");

        let parsed: Insight = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, insight);
    }
}
