//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like highlight ranges and
//! selection state.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

use crate::app::{DialogField, LoginField};

/// Top-level view model matching the active screen.
#[derive(Debug, Clone)]
pub enum ScreenView {
    /// Credential entry form.
    Login(LoginView),
    /// Authenticated user directory.
    Directory(DirectoryView),
}

/// View model for the login screen.
#[derive(Debug, Clone)]
pub struct LoginView {
    /// Email field contents.
    pub email: String,

    /// Number of characters in the password field (rendered masked).
    pub password_len: usize,

    /// Which field holds the input cursor.
    pub focus: LoginField,

    /// Whether a login request is in flight.
    pub submitting: bool,

    /// Failure message from the most recent rejected attempt.
    pub error: Option<String>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Complete view model for the directory screen.
///
/// Contains all display information needed to render the user table. Includes
/// pre-processed rows, selection state, and optional UI elements like the
/// search bar, edit dialog, and empty state.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    /// Whether a page fetch is in flight (renders a loading indicator).
    pub loading: bool,

    /// Fetch failure message, when the current page could not be loaded.
    pub error: Option<String>,

    /// List of user rows to display in the table.
    pub rows: Vec<UserRow>,

    /// Index of the selected row within `rows` (window-relative).
    pub selected_index: usize,

    /// Header information (title, record count).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Optional pagination controls (hidden while a query is active).
    pub pagination: Option<PaginationInfo>,

    /// Optional empty state message (when no records are displayable).
    pub empty_state: Option<EmptyState>,

    /// Optional modal edit dialog, rendered over the table.
    pub dialog: Option<DialogView>,

    /// Optional transient status message.
    pub notice: Option<NoticeView>,
}

/// Display information for a single user row.
///
/// Represents one row in the table view. Contains pre-computed highlight
/// ranges for substring match rendering.
#[derive(Debug, Clone)]
pub struct UserRow {
    /// Record identifier, shown in the ID column.
    pub id: u64,

    /// Full display name ("first last").
    pub name: String,

    /// Email address.
    pub email: String,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges of the name matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub name_highlights: Vec<(usize, usize)>,

    /// Character ranges of the email matching the search query.
    pub email_highlights: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: navigate  /: search  q: quit").
    pub keybindings: String,
}

/// Pagination display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// One-based page number currently displayed.
    pub page: u32,
    /// Total page count reported by the backend.
    pub total_pages: u32,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
    /// Whether the search input holds the cursor (typing focus).
    pub focus_typing: bool,
}

/// Empty state message display information.
///
/// Shown when the current page holds no displayable records.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No users on this page").
    pub message: String,

    /// Secondary explanatory text (e.g., "Press ESC to clear the search").
    pub subtitle: String,
}

/// View model for the modal edit dialog.
#[derive(Debug, Clone)]
pub struct DialogView {
    /// Dialog title naming the record being edited.
    pub title: String,
    /// First-name field contents.
    pub first_name: String,
    /// Last-name field contents.
    pub last_name: String,
    /// Email field contents.
    pub email: String,
    /// Which field holds the input cursor.
    pub focus: DialogField,
    /// Whether an update request is in flight.
    pub submitting: bool,
    /// Failure message from the most recent rejected submission.
    pub error: Option<String>,
}

/// Transient status message display information.
#[derive(Debug, Clone)]
pub struct NoticeView {
    /// Message text shown in the status row.
    pub message: String,
    /// Whether the message reports a failure (rendered in the error color).
    pub is_error: bool,
}
