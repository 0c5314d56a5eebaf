//! Classified query intent and subject

use serde::{Deserialize, Serialize};

/// The purpose a query was classified into
///
/// Exactly one per query, fixed once classified. `Overview` is the
/// fallback when no classification rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    #[default]
    Overview,
    Trend,
    Comparison,
    Highlight,
    DeepDive,
}

impl Intent {
    /// All intents, in declaration order
    pub const ALL: [Intent; 5] = [
        Intent::Overview,
        Intent::Trend,
        Intent::Comparison,
        Intent::Highlight,
        Intent::DeepDive,
    ];

    /// Noun used in the dashboard title template for this intent
    pub fn title_noun(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Trend => "Trends",
            Self::Comparison => "Comparison",
            Self::Highlight => "Highlights",
            Self::DeepDive => "Deep Dive",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overview => write!(f, "overview"),
            Self::Trend => write!(f, "trend"),
            Self::Comparison => write!(f, "comparison"),
            Self::Highlight => write!(f, "highlight"),
            Self::DeepDive => write!(f, "deep_dive"),
        }
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overview" => Ok(Self::Overview),
            "trend" => Ok(Self::Trend),
            "comparison" => Ok(Self::Comparison),
            "highlight" => Ok(Self::Highlight),
            "deep_dive" | "deepdive" => Ok(Self::DeepDive),
            _ => Err(format!("Unknown intent: {}", s)),
        }
    }
}

/// Focus area a query is about, derived from the query text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    GitHub,
    Activity,
    #[default]
    General,
}

impl Subject {
    /// Label used in dashboard titles
    pub fn label(&self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::Activity => "Activity",
            Self::General => "Data",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
