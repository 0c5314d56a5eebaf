//! Domain types for the reasoning pipeline
//!
//! Everything here is created fresh per query and discarded when its
//! stream ends. Insights and data fragments are closed tagged-variant
//! sets; adding a kind means updating every exhaustive match.

mod data;
mod insight;
mod intent;
mod query;

pub use data::{DataFragment, DataRequest, Grouping, MetricKind, RawData, TimeRange};
pub use insight::{Insight, InsightKind};
pub use intent::{Intent, Subject};
pub use query::{EmptyQueryError, Query, QueryId};
