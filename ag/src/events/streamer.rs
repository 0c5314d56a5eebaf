//! Per-query event streaming
//!
//! Sequences the pipeline into the ordered event stream:
//!
//! ```text
//! Start -> Loading -> { Rendering -> Done } | Error
//! ```
//!
//! `Loading` goes out before any blocking work. The only suspension
//! point is the data fetch, raced against consumer disconnection; every
//! later stage is preceded by a cooperative cancellation check. A
//! canceled stream emits nothing further and drops the in-flight fetch.
//! Failures surface as exactly one terminal `agent.error`; nothing is
//! ever thrown past the stream boundary.

use std::sync::Arc;

use a2ui::{A2UISpec, ComponentNode};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::StreamConfig;
use crate::domain::{Intent, Query, QueryId, Subject};
use crate::error::PipelineError;
use crate::events::Event;
use crate::pipeline::{assemble, classify, classify_subject, decide, extract, plan, summarize};
use crate::source::DataSource;

/// Capacity of the refinement channel behind an [`UpdateSender`]
const UPDATE_CHANNEL_CAPACITY: usize = 8;

/// Why a stream stopped before rendering
enum StreamAbort {
    /// Consumer went away; emit nothing further
    Canceled,
    /// Pipeline failure; emit one terminal error event
    Failed(PipelineError),
}

/// Runs the pipeline for one query at a time and streams the events
///
/// Holds no per-query state: every call to [`stream`](Self::stream)
/// spawns an isolated unit of work.
pub struct EventStreamer {
    source: Arc<dyn DataSource>,
    config: StreamConfig,
}

impl EventStreamer {
    pub fn new(source: Arc<dyn DataSource>, config: StreamConfig) -> Self {
        Self { source, config }
    }

    /// Stream the events for one query
    ///
    /// The stream ends (channel closes) after `ui.render` or after a
    /// terminal `agent.error`. Dropping the receiver cancels the
    /// in-flight work.
    pub fn stream(&self, query: Query) -> mpsc::Receiver<Event> {
        let (events, _updates) = self.stream_with_updates(query);
        events
    }

    /// Stream the events and keep a handle for follow-up refinements
    ///
    /// Updates pushed through the [`UpdateSender`] are emitted as
    /// `ui.update` events strictly after `ui.render`. The stream stays
    /// open until the sender is dropped; a stream that ended in
    /// `agent.error` accepts no updates.
    pub fn stream_with_updates(&self, query: Query) -> (mpsc::Receiver<Event>, UpdateSender) {
        let query_id = QueryId::new();
        let (tx, rx) = mpsc::channel(self.config.channel_capacity);
        let (update_tx, update_rx) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);

        info!(%query_id, query = %query, "stream: starting");
        let source = Arc::clone(&self.source);
        let loading_message = self.config.loading_message.clone();
        tokio::spawn(run(source, query, query_id, loading_message, tx, update_rx));

        (rx, UpdateSender { tx: update_tx })
    }
}

/// Handle for pushing `ui.update` refinements into a live stream
#[derive(Clone)]
pub struct UpdateSender {
    tx: mpsc::Sender<(String, ComponentNode)>,
}

impl UpdateSender {
    /// Push one subtree replacement; returns false if the stream is gone
    pub async fn push(&self, path: impl Into<String>, node: ComponentNode) -> bool {
        self.tx.send((path.into(), node)).await.is_ok()
    }
}

async fn run(
    source: Arc<dyn DataSource>,
    query: Query,
    query_id: QueryId,
    loading_message: String,
    tx: mpsc::Sender<Event>,
    mut update_rx: mpsc::Receiver<(String, ComponentNode)>,
) {
    // Loading goes out before any blocking work begins
    if tx
        .send(Event::Loading {
            message: loading_message,
        })
        .await
        .is_err()
    {
        debug!(%query_id, "stream: consumer gone before loading");
        return;
    }

    match run_pipeline(source.as_ref(), &query, query_id, &tx).await {
        Ok((summary, spec)) => {
            if tx.send(Event::Message { text: summary }).await.is_err() {
                debug!(%query_id, "stream: canceled before message");
                return;
            }
            if tx.send(Event::Render(spec)).await.is_err() {
                debug!(%query_id, "stream: canceled before render");
                return;
            }
            info!(%query_id, "stream: rendered");

            // Refinement phase: forward pushed updates until the handle drops
            while let Some((path, node)) = update_rx.recv().await {
                if tx.send(Event::Update { path, node }).await.is_err() {
                    debug!(%query_id, "stream: canceled during updates");
                    return;
                }
            }
        }
        Err(StreamAbort::Canceled) => {
            debug!(%query_id, "stream: canceled, emitting nothing further");
        }
        Err(StreamAbort::Failed(error)) => {
            warn!(%query_id, %error, "stream: pipeline failed");
            let _ = tx
                .send(Event::Error {
                    code: error.code().to_string(),
                    message: error.to_string(),
                })
                .await;
        }
    }
}

/// The linear pipeline, up to (but not including) event emission
async fn run_pipeline(
    source: &dyn DataSource,
    query: &Query,
    query_id: QueryId,
    tx: &mpsc::Sender<Event>,
) -> Result<(String, A2UISpec), StreamAbort> {
    let intent = classify(query.text());
    let subject = classify_subject(query.text());
    info!(%query_id, %intent, %subject, "pipeline: classified");

    let request = plan(intent);

    // The single suspension point, raced against consumer disconnect so
    // cancellation never leaks an in-flight fetch
    let raw = tokio::select! {
        biased;
        _ = tx.closed() => return Err(StreamAbort::Canceled),
        result = source.fetch(&request) => result.map_err(|e| StreamAbort::Failed(e.into()))?,
    };

    if tx.is_closed() {
        return Err(StreamAbort::Canceled);
    }
    let extraction = extract(&raw);
    if extraction.skipped > 0 {
        info!(%query_id, skipped = extraction.skipped, "pipeline: skipped malformed fragments");
    }

    if tx.is_closed() {
        return Err(StreamAbort::Canceled);
    }
    let summary = summarize(intent, subject, &extraction.insights);
    let components = decide(&extraction.insights);
    let spec = assemble_checked(intent, subject, components)?;

    Ok((summary, spec))
}

/// Assemble and verify the structural guarantees hold
fn assemble_checked(intent: Intent, subject: Subject, components: Vec<ComponentNode>) -> Result<A2UISpec, StreamAbort> {
    let spec = assemble(intent, subject, components);
    // Unreachable by construction; fatal internal error if it ever trips
    if spec.root().children().is_none_or(|children| children.is_empty()) {
        return Err(StreamAbort::Failed(PipelineError::Internal(
            "assembled dashboard has no children".to_string(),
        )));
    }
    Ok(spec)
}
