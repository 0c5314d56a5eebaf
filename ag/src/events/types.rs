//! Event types for the agent protocol
//!
//! One JSON object per event: `{ "type": ..., "payload": { ... } }`.
//! Within a stream events are strictly ordered; `agent.error` is always
//! terminal and never co-occurs with `ui.render`.

use a2ui::{A2UISpec, ComponentNode};
use serde::{Deserialize, Serialize};

/// One message in a query's output stream
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Event {
    /// Processing state shown while the pipeline works
    #[serde(rename = "agent.loading")]
    Loading { message: String },

    /// Short natural-language summary of what was found
    #[serde(rename = "agent.message")]
    Message { text: String },

    /// The full dashboard specification
    #[serde(rename = "ui.render")]
    Render(A2UISpec),

    /// Partial replacement of the subtree at `path`
    #[serde(rename = "ui.update")]
    Update { path: String, node: ComponentNode },

    /// Terminal failure for this stream
    #[serde(rename = "agent.error")]
    Error { code: String, message: String },
}

impl Event {
    /// Wire name of this event's kind
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Loading { .. } => "agent.loading",
            Event::Message { .. } => "agent.message",
            Event::Render(_) => "ui.render",
            Event::Update { .. } => "ui.update",
            Event::Error { .. } => "agent.error",
        }
    }

    /// Whether the stream ends after this event
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::Error { .. })
    }

    /// Serialize to a single JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Frame for Server-Sent Events streaming
    pub fn to_sse(&self) -> serde_json::Result<String> {
        Ok(format!("data: {}\n\n", self.to_json()?))
    }

    /// Frame as one newline-delimited JSON line
    pub fn to_ndjson(&self) -> serde_json::Result<String> {
        Ok(format!("{}\n", self.to_json()?))
    }
}
