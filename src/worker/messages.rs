//! Request/outcome protocol between the event loop and the request worker.
//!
//! Each [`ApiRequest`] corresponds to one backend exchange; each produces
//! exactly one [`ApiOutcome`]. Outcomes carry enough context (identifier,
//! fetch sequence) for the event handler to apply them to state without
//! consulting anything else, or to discard them when they are stale.

use crate::api::models::UserFields;
use crate::domain::User;

/// A backend operation the event handler wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Authenticate with the backend.
    Login { email: String, password: String },

    /// Fetch one 1-indexed listing page.
    ///
    /// `seq` is the fetch sequence issued by the listing controller. The
    /// matching outcome echoes it so superseded responses can be discarded.
    FetchPage { page: u32, seq: u64 },

    /// Overwrite the given fields of one record.
    UpdateUser { id: u64, fields: UserFields },

    /// Delete one record. Issued immediately, with no confirmation step.
    DeleteUser { id: u64 },
}

/// The result of one completed backend operation.
///
/// Failure variants carry a generic display message; the underlying cause is
/// logged at the worker, never distinguished for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    /// Authentication succeeded; the caller is responsible for persisting
    /// the token.
    LoginSucceeded { token: String },

    /// Authentication failed (bad credentials or unreachable backend).
    LoginFailed { message: String },

    /// A listing page arrived. `seq` echoes the originating request.
    PageLoaded {
        seq: u64,
        page: u32,
        total_pages: u32,
        users: Vec<User>,
    },

    /// A listing fetch failed. `seq` echoes the originating request.
    PageFailed { seq: u64, message: String },

    /// An update succeeded; `fields` are the backend's echoed fields, merged
    /// optimistically into the local record set.
    UserUpdated { id: u64, fields: UserFields },

    /// An update failed; the edit form stays open for correction.
    UpdateFailed { id: u64, message: String },

    /// A delete succeeded; the record leaves the local set.
    UserDeleted { id: u64 },

    /// A delete failed; the record remains, since backend state is
    /// unchanged.
    DeleteFailed { id: u64, message: String },
}
