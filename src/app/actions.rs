//! Actions representing side effects to be executed by the terminal runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! request outcomes. Actions bridge pure state transformations and effectful
//! operations like network calls and credential persistence.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The runtime
//! executes them in sequence.

use crate::worker::ApiRequest;

/// Commands representing side effects to be executed by the terminal runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Exits the application, restoring the terminal.
    Quit,

    /// Submits a backend request to the request worker.
    ///
    /// The outcome comes back later as an [`Event::Api`] event
    /// (see [`crate::app::handler::Event`]).
    Call(ApiRequest),

    /// Persists a freshly issued credential token: sets the shared session
    /// cell and writes the slot file. Emitted once per successful login.
    StoreToken(String),

    /// Clears the shared session cell and removes the persisted slot.
    /// Emitted at logout.
    ClearSession,
}
