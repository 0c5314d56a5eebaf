//! Deterministic stub source
//!
//! Fixture data for demos and tests: the same answer every time, with no
//! I/O. The empty and failing modes exercise the degenerate and error
//! paths of the pipeline.

use async_trait::async_trait;
use tracing::debug;

use a2ui::{CategoryShare, NamedSeries, ScalarValue, SeriesPoint, TableRow};

use super::{DataSource, SourceError};
use crate::domain::{DataFragment, DataRequest, MetricKind, RawData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StubMode {
    Rich,
    Empty,
    Failing,
}

/// Data source serving a fixed fixture
pub struct StubSource {
    mode: StubMode,
}

impl StubSource {
    /// Stub answering every request with the full fixture
    pub fn new() -> Self {
        Self { mode: StubMode::Rich }
    }

    /// Stub answering with no fragments at all
    pub fn empty() -> Self {
        Self { mode: StubMode::Empty }
    }

    /// Stub failing every fetch with `Unavailable`
    pub fn failing() -> Self {
        Self {
            mode: StubMode::Failing,
        }
    }
}

impl Default for StubSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for StubSource {
    async fn fetch(&self, request: &DataRequest) -> Result<RawData, SourceError> {
        debug!(?self.mode, metric_count = request.metrics.len(), "StubSource::fetch");
        match self.mode {
            StubMode::Failing => Err(SourceError::Unavailable("stub source is in failing mode".to_string())),
            StubMode::Empty => Ok(RawData::default()),
            StubMode::Rich => Ok(fixture(request)),
        }
    }
}

/// The fixture fragments, filtered down to what the request asked for
fn fixture(request: &DataRequest) -> RawData {
    let mut fragments = Vec::new();

    if request.wants(MetricKind::Totals) {
        fragments.push(DataFragment::Scalar {
            name: "Total Commits".to_string(),
            value: ScalarValue::Int(312),
            context: Some("All-time contributions".to_string()),
        });
        fragments.push(DataFragment::Scalar {
            name: "Repositories".to_string(),
            value: ScalarValue::Int(18),
            context: Some("Active repositories".to_string()),
        });
        fragments.push(DataFragment::Scalar {
            name: "Top Language".to_string(),
            value: ScalarValue::from("Python"),
            context: Some("Most used programming language".to_string()),
        });
    }

    if request.wants(MetricKind::ActivitySeries) {
        fragments.push(DataFragment::Series {
            name: "Commits Over Time".to_string(),
            points: vec![
                SeriesPoint::new("2024-01", 45.0),
                SeriesPoint::new("2024-02", 52.0),
                SeriesPoint::new("2024-03", 38.0),
                SeriesPoint::new("2024-04", 61.0),
                SeriesPoint::new("2024-05", 48.0),
                SeriesPoint::new("2024-06", 68.0),
            ],
        });
    }

    if request.wants(MetricKind::TopRepositories) {
        fragments.push(DataFragment::Ranked {
            name: "Top Repositories".to_string(),
            columns: vec!["Name".to_string(), "Stars".to_string(), "Commits".to_string()],
            rows: vec![
                TableRow(vec![ScalarValue::from("dynQR"), ScalarValue::Int(124), ScalarValue::Int(87)]),
                TableRow(vec![
                    ScalarValue::from("finora-app"),
                    ScalarValue::Int(89),
                    ScalarValue::Int(56),
                ]),
                TableRow(vec![
                    ScalarValue::from("finance_ai"),
                    ScalarValue::Int(67),
                    ScalarValue::Int(43),
                ]),
                TableRow(vec![ScalarValue::from("ag-ui"), ScalarValue::Int(45), ScalarValue::Int(32)]),
                TableRow(vec![
                    ScalarValue::from("portfolio"),
                    ScalarValue::Int(23),
                    ScalarValue::Int(19),
                ]),
            ],
        });
    }

    if request.wants(MetricKind::LanguageDistribution) {
        fragments.push(DataFragment::Categorical {
            name: "Language Distribution".to_string(),
            shares: vec![
                CategoryShare::new("Python", 45.0),
                CategoryShare::new("TypeScript", 30.0),
                CategoryShare::new("JavaScript", 15.0),
                CategoryShare::new("Dart", 10.0),
            ],
        });
    }

    if request.wants(MetricKind::EngagementComparison) {
        fragments.push(DataFragment::Paired {
            name: "Stars vs Commits".to_string(),
            series: vec![
                NamedSeries {
                    name: "Stars".to_string(),
                    points: vec![
                        SeriesPoint::new("dynQR", 124.0),
                        SeriesPoint::new("finora-app", 89.0),
                        SeriesPoint::new("finance_ai", 67.0),
                    ],
                },
                NamedSeries {
                    name: "Commits".to_string(),
                    points: vec![
                        SeriesPoint::new("dynQR", 87.0),
                        SeriesPoint::new("finora-app", 56.0),
                        SeriesPoint::new("finance_ai", 43.0),
                    ],
                },
            ],
        });
    }

    RawData::from_fragments(fragments)
}
