//! Component node vocabulary
//!
//! The closed set of component kinds a dashboard can be built from.
//! Container variants (dashboard, section, grid) own their children
//! exclusively; every other variant is a leaf carrying its own data.

use serde::{Deserialize, Serialize};

use crate::value::{CategoryShare, NamedSeries, ScalarValue, SeriesPoint, TableRow};

/// One node of a UI specification tree
///
/// Serialized with a `type` discriminator using the camelCase wire names
/// (`dashboard`, `lineChart`, ...). Only container variants have a
/// `children` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ComponentNode {
    /// Root container for a whole dashboard
    Dashboard {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        children: Vec<ComponentNode>,
    },
    /// Grouping container with an optional heading
    Section {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        children: Vec<ComponentNode>,
    },
    /// Column-layout container, typically for KPI cards
    Grid { columns: u8, children: Vec<ComponentNode> },
    /// KPI card with a single headline value
    Card {
        title: String,
        value: ScalarValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
    },
    /// Trend visualization over a time-indexed series
    LineChart { title: String, series: Vec<SeriesPoint> },
    /// Side-by-side comparison of two or more named series
    BarChart { title: String, series: Vec<NamedSeries> },
    /// Proportional breakdown of categories
    PieChart { title: String, slices: Vec<CategoryShare> },
    /// Ranked or detailed rows under named columns
    Table {
        title: String,
        columns: Vec<String>,
        rows: Vec<TableRow>,
    },
    /// Plain text, used for messages like "no data"
    Text { content: String },
    /// Visual separator
    Divider,
}

impl ComponentNode {
    /// Wire name of this node's kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Dashboard { .. } => "dashboard",
            Self::Section { .. } => "section",
            Self::Grid { .. } => "grid",
            Self::Card { .. } => "card",
            Self::LineChart { .. } => "lineChart",
            Self::BarChart { .. } => "barChart",
            Self::PieChart { .. } => "pieChart",
            Self::Table { .. } => "table",
            Self::Text { .. } => "text",
            Self::Divider => "divider",
        }
    }

    /// Whether this variant may own children
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Dashboard { .. } | Self::Section { .. } | Self::Grid { .. })
    }

    /// Children of a container node, None for leaves
    pub fn children(&self) -> Option<&[ComponentNode]> {
        match self {
            Self::Dashboard { children, .. } | Self::Section { children, .. } | Self::Grid { children, .. } => {
                Some(children)
            }
            _ => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<ComponentNode>> {
        match self {
            Self::Dashboard { children, .. } | Self::Section { children, .. } | Self::Grid { children, .. } => {
                Some(children)
            }
            _ => None,
        }
    }

    /// Total number of nodes in this subtree, self included
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map(|c| c.iter().map(ComponentNode::node_count).sum())
            .unwrap_or(0)
    }

    /// Depth of this subtree; a leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .and_then(|c| c.iter().map(ComponentNode::depth).max())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> ComponentNode {
        ComponentNode::Card {
            title: "Total Commits".to_string(),
            value: ScalarValue::Int(312),
            subtitle: Some("All-time contributions".to_string()),
        }
    }

    #[test]
    fn test_wire_names() {
        let cases: Vec<(ComponentNode, &str)> = vec![
            (
                ComponentNode::Dashboard {
                    title: "t".to_string(),
                    subtitle: None,
                    children: vec![],
                },
                "dashboard",
            ),
            (
                ComponentNode::Section {
                    title: None,
                    children: vec![],
                },
                "section",
            ),
            (
                ComponentNode::Grid {
                    columns: 3,
                    children: vec![],
                },
                "grid",
            ),
            (sample_card(), "card"),
            (
                ComponentNode::LineChart {
                    title: "t".to_string(),
                    series: vec![],
                },
                "lineChart",
            ),
            (
                ComponentNode::BarChart {
                    title: "t".to_string(),
                    series: vec![],
                },
                "barChart",
            ),
            (
                ComponentNode::PieChart {
                    title: "t".to_string(),
                    slices: vec![],
                },
                "pieChart",
            ),
            (
                ComponentNode::Table {
                    title: "t".to_string(),
                    columns: vec![],
                    rows: vec![],
                },
                "table",
            ),
            (
                ComponentNode::Text {
                    content: "no data".to_string(),
                },
                "text",
            ),
            (ComponentNode::Divider, "divider"),
        ];

        for (node, expected) in cases {
            assert_eq!(node.kind(), expected);
            let json = serde_json::to_value(&node).unwrap();
            assert_eq!(json["type"], expected, "wire discriminator for {}", expected);
        }
    }

    #[test]
    fn test_children_only_on_containers() {
        let grid = ComponentNode::Grid {
            columns: 2,
            children: vec![sample_card()],
        };
        assert!(grid.is_container());
        assert_eq!(grid.children().unwrap().len(), 1);

        let card = sample_card();
        assert!(!card.is_container());
        assert!(card.children().is_none());
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_optional_fields_omitted() {
        let card = ComponentNode::Card {
            title: "Repos".to_string(),
            value: ScalarValue::Int(18),
            subtitle: None,
        };
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("subtitle").is_none());
    }

    #[test]
    fn test_roundtrip() {
        let node = ComponentNode::Dashboard {
            title: "GitHub Overview".to_string(),
            subtitle: None,
            children: vec![
                ComponentNode::Grid {
                    columns: 3,
                    children: vec![sample_card()],
                },
                ComponentNode::LineChart {
                    title: "Commits Over Time".to_string(),
                    series: vec![SeriesPoint::new("2024-01", 45.0), SeriesPoint::new("2024-02", 52.0)],
                },
                ComponentNode::Divider,
            ],
        };

        let json = serde_json::to_string(&node).unwrap();
        let parsed: ComponentNode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, node);
    }

    #[test]
    fn test_node_count_and_depth() {
        let node = ComponentNode::Dashboard {
            title: "d".to_string(),
            subtitle: None,
            children: vec![
                ComponentNode::Grid {
                    columns: 2,
                    children: vec![sample_card(), sample_card()],
                },
                ComponentNode::Divider,
            ],
        };
        assert_eq!(node.node_count(), 5);
        assert_eq!(node.depth(), 3);
    }
}
