//! Wire protocol events and the per-query streamer
//!
//! One query produces one ordered stream of events. The vocabulary and
//! framing live in [`types`]; the state machine that sequences the
//! pipeline into a stream lives in [`streamer`].

mod streamer;
mod types;

pub use streamer::{EventStreamer, UpdateSender};
pub use types::Event;
