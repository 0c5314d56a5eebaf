//! Data requests and raw data
//!
//! The planner describes what it needs as a [`DataRequest`]; the source
//! collaborator answers with [`RawData`]: a bag of loosely-typed JSON
//! fragments. Fragments that parse into the closed [`DataFragment`] set
//! become insights; anything else is skipped by the extractor and counted
//! as a warning. Keeping the collaborator boundary loose means a source
//! can never fail a whole request by producing one bad fragment.

use a2ui::{CategoryShare, NamedSeries, ScalarValue, SeriesPoint, TableRow};
use serde::{Deserialize, Serialize};

/// What the planner asks of the data source for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRequest {
    /// Metric families to fetch, in no particular order
    pub metrics: Vec<MetricKind>,
    pub range: TimeRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping: Option<Grouping>,
}

impl DataRequest {
    pub fn wants(&self, metric: MetricKind) -> bool {
        self.metrics.contains(&metric)
    }
}

/// Families of metrics a source knows how to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Scalar headline totals
    Totals,
    /// Activity counts over the requested range
    ActivitySeries,
    /// Repositories ranked by engagement
    TopRepositories,
    /// Share of code per language
    LanguageDistribution,
    /// Paired series for side-by-side comparison
    EngagementComparison,
}

/// Trailing window the request covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub months: u32,
}

impl TimeRange {
    pub fn recent(months: u32) -> Self {
        Self { months }
    }
}

/// How series data should be bucketed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    Monthly,
    Weekly,
}

/// Untyped data as returned by a source collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawData {
    pub fragments: Vec<serde_json::Value>,
}

impl RawData {
    /// Build raw data from well-formed fragments
    ///
    /// Sources use this; tests feed hand-built JSON through the public
    /// `fragments` field to exercise the malformed path.
    pub fn from_fragments(fragments: Vec<DataFragment>) -> Self {
        let fragments = fragments
            .into_iter()
            .map(|f| serde_json::to_value(f).unwrap_or(serde_json::Value::Null))
            .collect();
        Self { fragments }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// The closed set of data shapes the extractor recognizes
///
/// Mirrors the insight set one-to-one: scalar totals, time-indexed
/// series, ranked lists, categorical proportions, paired series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum DataFragment {
    Scalar {
        name: String,
        value: ScalarValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        context: Option<String>,
    },
    Series {
        name: String,
        points: Vec<SeriesPoint>,
    },
    Ranked {
        name: String,
        columns: Vec<String>,
        rows: Vec<TableRow>,
    },
    Categorical {
        name: String,
        shares: Vec<CategoryShare>,
    },
    Paired {
        name: String,
        series: Vec<NamedSeries>,
    },
}
