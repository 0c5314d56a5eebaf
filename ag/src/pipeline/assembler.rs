//! Spec assembly
//!
//! Wraps decided components under a dashboard root with a title derived
//! from the intent and subject. Cannot fail: the root is built here and
//! the decider guarantees a non-empty component sequence.

use a2ui::{A2UISpec, ComponentNode};
use tracing::debug;

use crate::domain::{Intent, Subject};

/// Compose the final dashboard specification
pub fn assemble(intent: Intent, subject: Subject, components: Vec<ComponentNode>) -> A2UISpec {
    let title = dashboard_title(intent, subject);
    debug!(%title, child_count = components.len(), "assemble: done");
    A2UISpec::dashboard(title, None, components)
}

/// Fixed per-intent title template: "<Subject> <Noun>"
pub fn dashboard_title(intent: Intent, subject: Subject) -> String {
    format!("{} {}", subject.label(), intent.title_noun())
}
