//! UI decision logic
//!
//! One rule per insight kind: Total -> card, Trend -> lineChart,
//! Ranking -> table, Distribution -> pieChart, Comparison -> barChart.
//! All totals collapse into a single KPI grid at the position of the
//! first total; everything else keeps the insight order. Zero insights
//! yield a single text node so a dashboard is never structurally empty.

use a2ui::ComponentNode;
use tracing::debug;

use crate::domain::Insight;

/// Widest KPI grid the decider will emit
const KPI_GRID_MAX_COLUMNS: usize = 3;

/// Message shown when extraction found nothing
pub const NO_DATA_MESSAGE: &str = "No data available for this query";

/// Map an ordered insight sequence to an ordered component sequence
///
/// Pure: the same insight sequence always yields the same components.
pub fn decide(insights: &[Insight]) -> Vec<ComponentNode> {
    let mut components = Vec::new();
    let mut cards = Vec::new();
    let mut grid_position = None;

    for insight in insights {
        match insight {
            Insight::Total { label, value, context } => {
                if grid_position.is_none() {
                    grid_position = Some(components.len());
                }
                cards.push(ComponentNode::Card {
                    title: label.clone(),
                    value: value.clone(),
                    subtitle: context.clone(),
                });
            }
            Insight::Trend { label, series } => components.push(ComponentNode::LineChart {
                title: label.clone(),
                series: series.clone(),
            }),
            Insight::Ranking { label, columns, rows } => components.push(ComponentNode::Table {
                title: label.clone(),
                columns: columns.clone(),
                rows: rows.clone(),
            }),
            Insight::Distribution { label, slices } => components.push(ComponentNode::PieChart {
                title: label.clone(),
                slices: slices.clone(),
            }),
            Insight::Comparison { label, series } => components.push(ComponentNode::BarChart {
                title: label.clone(),
                series: series.clone(),
            }),
        }
    }

    if let Some(position) = grid_position {
        let columns = cards.len().min(KPI_GRID_MAX_COLUMNS) as u8;
        components.insert(
            position,
            ComponentNode::Grid {
                columns,
                children: cards,
            },
        );
    }

    if components.is_empty() {
        components.push(ComponentNode::Text {
            content: NO_DATA_MESSAGE.to_string(),
        });
    }

    debug!(component_count = components.len(), "decide: done");
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use a2ui::{CategoryShare, ScalarValue, SeriesPoint, TableRow};
    use proptest::prelude::*;

    fn total(label: &str, value: i64) -> Insight {
        Insight::Total {
            label: label.to_string(),
            value: ScalarValue::Int(value),
            context: None,
        }
    }

    fn trend(label: &str) -> Insight {
        Insight::Trend {
            label: label.to_string(),
            series: vec![SeriesPoint::new("2024-01", 45.0)],
        }
    }

    fn distribution(label: &str) -> Insight {
        Insight::Distribution {
            label: label.to_string(),
            slices: vec![CategoryShare::new("Python", 45.0)],
        }
    }

    fn ranking(label: &str) -> Insight {
        Insight::Ranking {
            label: label.to_string(),
            columns: vec!["Name".to_string(), "Stars".to_string()],
            rows: vec![TableRow(vec![ScalarValue::from("dynQR"), ScalarValue::Int(124)])],
        }
    }

    #[test]
    fn test_overview_scenario() {
        // Three totals, a trend, a distribution, a ranking
        let insights = vec![
            total("Total Commits", 312),
            total("Repositories", 18),
            Insight::Total {
                label: "Top Language".to_string(),
                value: ScalarValue::from("Python"),
                context: None,
            },
            trend("Commits Over Time"),
            distribution("Language Distribution"),
            ranking("Top Repositories"),
        ];

        let components = decide(&insights);
        let kinds: Vec<&str> = components.iter().map(ComponentNode::kind).collect();
        assert_eq!(kinds, vec!["grid", "lineChart", "pieChart", "table"]);

        match &components[0] {
            ComponentNode::Grid { columns, children } => {
                assert_eq!(*columns, 3);
                assert_eq!(children.len(), 3);
                assert!(children.iter().all(|c| c.kind() == "card"));
            }
            other => panic!("expected grid, got {}", other.kind()),
        }
    }

    #[test]
    fn test_five_totals_one_grid_three_columns() {
        let insights: Vec<Insight> = (0..5).map(|i| total(&format!("Metric {}", i), i)).collect();
        let components = decide(&insights);

        assert_eq!(components.len(), 1);
        match &components[0] {
            ComponentNode::Grid { columns, children } => {
                assert_eq!(*columns, 3);
                assert_eq!(children.len(), 5);
            }
            other => panic!("expected grid, got {}", other.kind()),
        }
    }

    #[test]
    fn test_grid_columns_match_small_counts() {
        for count in 1..=3usize {
            let insights: Vec<Insight> = (0..count).map(|i| total(&format!("m{}", i), i as i64)).collect();
            match &decide(&insights)[0] {
                ComponentNode::Grid { columns, .. } => assert_eq!(*columns as usize, count),
                other => panic!("expected grid, got {}", other.kind()),
            }
        }
    }

    #[test]
    fn test_grid_sits_at_first_total_position() {
        // A trend before the totals keeps its place
        let insights = vec![trend("First"), total("A", 1), total("B", 2)];
        let kinds: Vec<&str> = decide(&insights).iter().map(ComponentNode::kind).collect();
        assert_eq!(kinds, vec!["lineChart", "grid"]);
    }

    #[test]
    fn test_non_totals_keep_relative_order() {
        let insights = vec![distribution("D"), trend("T"), ranking("R")];
        let kinds: Vec<&str> = decide(&insights).iter().map(ComponentNode::kind).collect();
        assert_eq!(kinds, vec!["pieChart", "lineChart", "table"]);
    }

    #[test]
    fn test_zero_insights_yield_text_node() {
        let components = decide(&[]);
        assert_eq!(components.len(), 1);
        match &components[0] {
            ComponentNode::Text { content } => assert_eq!(content, NO_DATA_MESSAGE),
            other => panic!("expected text, got {}", other.kind()),
        }
    }

    fn arb_insight() -> impl Strategy<Value = Insight> {
        prop_oneof![
            "[a-z]{1,8}".prop_map(|label| Insight::Total {
                label,
                value: ScalarValue::Int(1),
                context: None,
            }),
            "[a-z]{1,8}".prop_map(|label| Insight::Trend {
                label,
                series: vec![SeriesPoint::new("2024-01", 1.0)],
            }),
            "[a-z]{1,8}".prop_map(|label| Insight::Distribution {
                label,
                slices: vec![CategoryShare::new("a", 1.0)],
            }),
        ]
    }

    proptest! {
        /// Referential transparency: same input order, same output
        #[test]
        fn prop_decide_is_deterministic(insights in proptest::collection::vec(arb_insight(), 0..12)) {
            prop_assert_eq!(decide(&insights), decide(&insights));
        }

        /// The decided sequence is never empty
        #[test]
        fn prop_decide_never_empty(insights in proptest::collection::vec(arb_insight(), 0..12)) {
            prop_assert!(!decide(&insights).is_empty());
        }

        /// All totals collapse into at most one grid
        #[test]
        fn prop_at_most_one_grid(insights in proptest::collection::vec(arb_insight(), 0..12)) {
            let grids = decide(&insights).iter().filter(|c| c.kind() == "grid").count();
            prop_assert!(grids <= 1);
        }
    }
}
