//! Intent classification
//!
//! Keyword rules over the lowercased query text. The rule table is an
//! explicit ordered structure so the tie-break logic is testable on its
//! own: the longest matching pattern wins, and on equal length the rule
//! declared first wins. No rule matching falls back to `Overview`.

use tracing::debug;

use crate::domain::{Intent, Subject};

/// One classification rule
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    /// Lowercase substring to look for in the query
    pub pattern: &'static str,
    pub intent: Intent,
}

impl IntentRule {
    /// Longer patterns are considered more specific
    pub fn specificity(&self) -> usize {
        self.pattern.len()
    }
}

/// Ordered rule table; declaration order breaks specificity ties
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        pattern: "overview",
        intent: Intent::Overview,
    },
    IntentRule {
        pattern: "summary",
        intent: Intent::Overview,
    },
    IntentRule {
        pattern: "dashboard",
        intent: Intent::Overview,
    },
    IntentRule {
        pattern: "trend",
        intent: Intent::Trend,
    },
    IntentRule {
        pattern: "over time",
        intent: Intent::Trend,
    },
    IntentRule {
        pattern: "growth",
        intent: Intent::Trend,
    },
    IntentRule {
        pattern: "progress",
        intent: Intent::Trend,
    },
    IntentRule {
        pattern: "compare",
        intent: Intent::Comparison,
    },
    IntentRule {
        pattern: "vs",
        intent: Intent::Comparison,
    },
    IntentRule {
        pattern: "versus",
        intent: Intent::Comparison,
    },
    IntentRule {
        pattern: "between",
        intent: Intent::Comparison,
    },
    IntentRule {
        pattern: "highlight",
        intent: Intent::Highlight,
    },
    IntentRule {
        pattern: "best",
        intent: Intent::Highlight,
    },
    IntentRule {
        pattern: "top",
        intent: Intent::Highlight,
    },
    IntentRule {
        pattern: "most",
        intent: Intent::Highlight,
    },
    IntentRule {
        pattern: "deep dive",
        intent: Intent::DeepDive,
    },
    IntentRule {
        pattern: "detailed",
        intent: Intent::DeepDive,
    },
    IntentRule {
        pattern: "analyze",
        intent: Intent::DeepDive,
    },
    IntentRule {
        pattern: "breakdown",
        intent: Intent::DeepDive,
    },
];

/// Classify a query into exactly one intent
///
/// Pure function of the text; never fails.
pub fn classify(query: &str) -> Intent {
    let lowered = query.to_lowercase();

    let mut best: Option<&IntentRule> = None;
    for rule in INTENT_RULES {
        if !lowered.contains(rule.pattern) {
            continue;
        }
        match best {
            Some(current) if current.specificity() >= rule.specificity() => {}
            _ => best = Some(rule),
        }
    }

    let intent = best.map(|rule| rule.intent).unwrap_or_default();
    debug!(query_len = query.len(), %intent, "classify: done");
    intent
}

/// Derive the focus area from the query text
pub fn classify_subject(query: &str) -> Subject {
    let lowered = query.to_lowercase();
    if lowered.contains("github") {
        Subject::GitHub
    } else if lowered.contains("activity") {
        Subject::Activity
    } else {
        Subject::General
    }
}
