//! Asynchronous request execution for the event loop.
//!
//! All network I/O happens off the main loop: the event handler emits
//! [`ApiRequest`] messages as actions, the worker runs each as its own task
//! against the remote client, and every task reports exactly one
//! [`ApiOutcome`] back over a channel, where the main loop feeds it to the
//! event handler like any other event.
//!
//! # Architecture
//!
//! - `messages`: the request/outcome protocol between loop and worker
//! - `handler`: task spawning and request dispatch

pub mod handler;
pub mod messages;

pub use handler::ApiWorker;
pub use messages::{ApiOutcome, ApiRequest};
