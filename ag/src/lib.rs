//! agui - generative-UI agent core
//!
//! agui turns a natural-language request into a renderer-agnostic dashboard
//! specification, delivered as an ordered stream of typed events. The
//! pipeline is a linear sequence of small, mostly pure stages:
//!
//! ```text
//! query -> classify -> plan -> fetch -> extract -> decide -> assemble -> stream
//! ```
//!
//! # Core Concepts
//!
//! - **Fresh State Always**: every query is an isolated unit of work; no
//!   caches or counters survive a stream
//! - **Closed Vocabularies**: intents, insights, components, and events are
//!   closed tagged-variant sets matched exhaustively
//! - **Pure Decisions**: classification and UI decision are deterministic
//!   functions of their input; the only suspension point is the data fetch
//! - **One Terminal Outcome**: a stream ends after `ui.render` (plus any
//!   refinements) or after a single `agent.error`, never both
//!
//! # Modules
//!
//! - [`domain`] - queries, intents, insights, data requests
//! - [`pipeline`] - the reasoning stages (classify, plan, extract, decide, assemble)
//! - [`events`] - wire protocol events and the per-query streamer
//! - [`source`] - data-source collaborator trait and implementations
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod domain;
mod error;
pub mod events;
pub mod pipeline;
pub mod source;

// Re-export commonly used types
pub use config::{Config, SourceConfig, StreamConfig};
pub use domain::{
    DataFragment, DataRequest, Grouping, Insight, InsightKind, Intent, MetricKind, Query, QueryId, RawData, Subject,
    TimeRange,
};
pub use error::PipelineError;
pub use events::{Event, EventStreamer, UpdateSender};
pub use pipeline::{Extraction, assemble, classify, classify_subject, decide, extract, plan, summarize};
pub use source::{DataSource, GitHubSource, SourceError, StubSource, create_source};
