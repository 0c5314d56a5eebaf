//! Insight extraction
//!
//! Parses each raw fragment against the closed shape set and turns the
//! recognizable ones into insights. A fragment that fails to parse, or
//! parses into a degenerate shape (empty series, a comparison with one
//! side, non-finite numbers), is skipped and counted - never fatal.

use tracing::{debug, warn};

use crate::domain::{DataFragment, Insight, RawData};

/// Result of extraction: ordered insights plus a non-fatal warning count
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Insights in descending priority, stable within a kind
    pub insights: Vec<Insight>,
    /// Number of malformed fragments that were skipped
    pub skipped: usize,
}

/// Extract every recognizable insight from raw data
pub fn extract(data: &RawData) -> Extraction {
    let mut insights = Vec::new();
    let mut skipped = 0;

    for (index, value) in data.fragments.iter().enumerate() {
        let fragment: DataFragment = match serde_json::from_value(value.clone()) {
            Ok(fragment) => fragment,
            Err(e) => {
                warn!(index, error = %e, "extract: skipping unparseable fragment");
                skipped += 1;
                continue;
            }
        };

        match insight_from(fragment) {
            Some(insight) => insights.push(insight),
            None => {
                warn!(index, "extract: skipping degenerate fragment");
                skipped += 1;
            }
        }
    }

    // Stable: equal-priority insights keep their fragment order
    insights.sort_by_key(Insight::priority);

    debug!(
        insight_count = insights.len(),
        skipped, "extract: done"
    );
    Extraction { insights, skipped }
}

/// Map one parsed fragment to an insight, or None if degenerate
fn insight_from(fragment: DataFragment) -> Option<Insight> {
    match fragment {
        DataFragment::Scalar { name, value, context } => Some(Insight::Total {
            label: name,
            value,
            context,
        }),
        DataFragment::Series { name, points } => {
            if points.is_empty() || points.iter().any(|p| !p.value.is_finite()) {
                return None;
            }
            Some(Insight::Trend {
                label: name,
                series: points,
            })
        }
        DataFragment::Ranked { name, columns, rows } => {
            if columns.is_empty() || rows.is_empty() || rows.iter().any(|r| r.0.len() != columns.len()) {
                return None;
            }
            Some(Insight::Ranking {
                label: name,
                columns,
                rows,
            })
        }
        DataFragment::Categorical { name, shares } => {
            if shares.is_empty() || shares.iter().any(|s| !s.value.is_finite()) {
                return None;
            }
            Some(Insight::Distribution {
                label: name,
                slices: shares,
            })
        }
        DataFragment::Paired { name, series } => {
            if series.len() < 2 || series.iter().any(|s| s.points.is_empty()) {
                return None;
            }
            Some(Insight::Comparison {
                label: name,
                series,
            })
        }
    }
}
