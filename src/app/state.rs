//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! client, along with the per-screen state types ([`LoginForm`], [`Directory`],
//! [`EditDialog`]) and methods for filtering, selection management, and UI
//! view model generation. It serves as the single source of truth for all
//! transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the fetched user page, the session store)
//! from derived state (filtered users, selected index) to maintain consistency
//! and simplify state transitions. View models are computed on-demand from
//! state snapshots.
//!
//! # State Components
//!
//! - **Screen**: Which surface is active (login form or user directory)
//! - **Users**: The records of the most recently fetched page
//! - **Filtered Users**: Subset after applying the search query
//! - **Selection**: Current cursor position within filtered results
//! - **Input Mode**: Controls keybinding interpretation and UI layout
//! - **Fetch Sequence**: Monotonic counter used to discard stale page responses
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation, handling windowing, substring match highlighting, and
//! responsive layout adjustments based on terminal dimensions.

use super::modes::{DialogField, InputMode, LoginField, SearchFocus};
use crate::api::UserFields;
use crate::domain::User;
use crate::session::SessionStore;
use crate::ui::helpers::substring_ranges;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DialogView, DirectoryView, EmptyState, FooterInfo, HeaderInfo, LoginView, NoticeView,
    PaginationInfo, ScreenView, SearchBarInfo, UserRow,
};

/// Load state of the directory screen's user page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// A page fetch is in flight and no records are displayable yet.
    Loading,
    /// The current page has been fetched and its records are displayable.
    Ready,
    /// The most recent page fetch failed.
    Error(String),
}

/// Severity of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient status message shown in the status row.
///
/// Notices report the outcome of mutations (update, delete) and are cleared
/// by the next user-originated event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Creates an informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// State of the login screen's credential form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    /// Email field contents.
    pub email: String,
    /// Password field contents (rendered masked).
    pub password: String,
    /// Which field currently receives typed characters.
    pub focus: LoginField,
    /// True while a login request is in flight; submission is suppressed.
    pub submitting: bool,
    /// Failure message from the most recent rejected attempt.
    pub error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focus: LoginField::Email,
            submitting: false,
            error: None,
        }
    }
}

impl LoginForm {
    /// Returns a mutable reference to the focused field's buffer.
    pub fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Whether both fields are non-empty and no request is in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.email.is_empty() && !self.password.is_empty()
    }
}

/// State of the modal edit dialog over a single user record.
///
/// Holds the original record alongside editable field buffers so that
/// submission can send only the fields that actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDialog {
    /// Snapshot of the record as it was when the dialog opened.
    pub original: User,
    /// Editable first-name buffer.
    pub first_name: String,
    /// Editable last-name buffer.
    pub last_name: String,
    /// Editable email buffer.
    pub email: String,
    /// Which field currently receives typed characters.
    pub focus: DialogField,
    /// True while an update request is in flight; submission is suppressed.
    pub submitting: bool,
    /// Failure message from the most recent rejected submission.
    pub error: Option<String>,
}

impl EditDialog {
    /// Opens a dialog seeded from an existing record.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            original: user.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            focus: DialogField::FirstName,
            submitting: false,
            error: None,
        }
    }

    /// Returns a mutable reference to the focused field's buffer.
    pub fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            DialogField::FirstName => &mut self.first_name,
            DialogField::LastName => &mut self.last_name,
            DialogField::Email => &mut self.email,
        }
    }

    /// Computes the set of fields that differ from the original record.
    ///
    /// Unchanged fields stay `None` so the update request carries only the
    /// edits the user actually made.
    #[must_use]
    pub fn changes(&self) -> UserFields {
        let mut fields = UserFields::default();
        if self.first_name != self.original.first_name {
            fields.first_name = Some(self.first_name.clone());
        }
        if self.last_name != self.original.last_name {
            fields.last_name = Some(self.last_name.clone());
        }
        if self.email != self.original.email {
            fields.email = Some(self.email.clone());
        }
        fields
    }

    /// Whether any field differs from the original record.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.first_name != self.original.first_name
            || self.last_name != self.original.last_name
            || self.email != self.original.email
    }
}

/// State of the user directory screen.
///
/// Holds the current page of records, the search filter, selection, and the
/// fetch sequence counter that protects against out-of-order page responses.
#[derive(Debug, Clone)]
pub struct Directory {
    /// Load state of the current page.
    pub phase: Phase,

    /// Records of the most recently completed page fetch.
    ///
    /// Cleared when a new fetch begins so records from the previous page are
    /// never displayed alongside the next page's loading indicator.
    pub users: Vec<User>,

    /// Users matching the current search query.
    ///
    /// Recomputed by `apply_search_filter()` after state changes. Used for
    /// rendering and selection bounds checking.
    pub filtered: Vec<User>,

    /// One-based page number currently displayed (or being fetched).
    pub page: u32,

    /// Total page count reported by the most recent page response.
    pub total_pages: u32,

    /// Current search query string.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace` events, cleared
    /// by `ExitSearch` and `Escape` events.
    pub search_query: String,

    /// Zero-based index of the selected user within `filtered`.
    ///
    /// Clamped to valid bounds by `apply_search_filter()`. Wraps around during
    /// navigation via `move_selection_up/down()`.
    pub selected_index: usize,

    /// Current input handling mode.
    ///
    /// Determines active keybindings and UI layout (search bar visibility,
    /// footer text). Changed by mode switching events.
    pub input_mode: InputMode,

    /// Modal edit dialog, when open. Captures all keyboard input.
    pub dialog: Option<EditDialog>,

    /// Monotonic fetch sequence counter.
    ///
    /// Bumped by `begin_fetch()`. Page responses carrying an older sequence
    /// number are discarded, so a slow response for a page the user has
    /// already navigated away from can never overwrite newer data.
    pub fetch_seq: u64,
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            users: vec![],
            filtered: vec![],
            page: 1,
            total_pages: 1,
            search_query: String::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            dialog: None,
            fetch_seq: 0,
        }
    }
}

impl Directory {
    /// Prepares the directory for a fresh page fetch and returns the sequence
    /// number the outcome must echo to be accepted.
    ///
    /// Clears the displayed records, resets selection, and enters the loading
    /// phase. The search query is preserved so re-fetching the same page does
    /// not discard an in-progress search.
    ///
    /// # Parameters
    ///
    /// * `page` - One-based page number about to be requested
    ///
    /// # Returns
    ///
    /// The sequence number to attach to the fetch request.
    pub fn begin_fetch(&mut self, page: u32) -> u64 {
        self.fetch_seq += 1;
        self.phase = Phase::Loading;
        self.page = page;
        self.users.clear();
        self.filtered.clear();
        self.selected_index = 0;
        tracing::debug!(page, seq = self.fetch_seq, "page fetch started");
        self.fetch_seq
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    ///
    /// No-op if the filtered user list is empty.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    ///
    /// No-op if the filtered user list is empty.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns a reference to the currently selected user, if any.
    ///
    /// Returns `None` if the filtered list is empty.
    #[must_use]
    pub fn selected_user(&self) -> Option<&User> {
        self.filtered.get(self.selected_index)
    }

    /// Applies the search query to the current page's records.
    ///
    /// Filters by case-insensitive substring match over first name, last name,
    /// and email (see [`User::matches`]). Updates `filtered` and clamps
    /// `selected_index` to valid bounds. An empty query passes every record
    /// through unchanged.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with total users and query length.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_users = self.users.len(),
            query_len = self.search_query.len()
        )
        .entered();

        self.filtered = self
            .users
            .iter()
            .filter(|user| user.matches(&self.search_query))
            .cloned()
            .collect();

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }

        tracing::debug!(filtered_count = self.filtered.len(), "search filter applied");
    }

    /// Merges updated fields into the record with the given id.
    ///
    /// Applies to the master list and recomputes the filtered view, so the
    /// edit is visible immediately without a re-fetch and a record edited out
    /// of an active query drops out of the results. No-op if the id is not on
    /// the current page.
    pub fn merge_updated(&mut self, id: u64, fields: &UserFields) {
        for user in self.users.iter_mut() {
            if user.id == id {
                fields.apply_to(user);
            }
        }
        self.apply_search_filter();
    }

    /// Removes the record with the given id from the current page.
    ///
    /// The relative order of the remaining records is preserved. Selection is
    /// clamped to the shrunken filtered list.
    pub fn remove_user(&mut self, id: u64) {
        self.users.retain(|user| user.id != id);
        self.filtered.retain(|user| user.id != id);
        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }
    }
}

/// The active top-level surface.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Credential entry form, shown to unauthenticated users.
    Login(LoginForm),
    /// Authenticated user directory.
    Directory(Directory),
}

/// Central application state container.
///
/// Holds the active screen, the shared session store, the color theme, and
/// any transient notice. Mutated by the event handler in response to user
/// input and request outcomes. View models are computed on-demand from state
/// snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The active surface and its screen-local state.
    pub screen: Screen,

    /// Shared credential cell, also read by the request worker.
    ///
    /// The event handler consults it to enforce the authentication guard and
    /// never writes it directly; token changes flow through actions so the
    /// runtime can persist them.
    pub session: SessionStore,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Transient status message, cleared on the next user-originated event.
    pub notice: Option<Notice>,
}

impl AppState {
    /// Creates a new application state on the login screen.
    ///
    /// The `Started` event applies the authentication guard and moves to the
    /// directory when the session already holds a token.
    ///
    /// # Parameters
    ///
    /// * `session` - Shared credential cell (possibly pre-loaded from disk)
    /// * `theme` - Color scheme for UI rendering
    #[must_use]
    pub fn new(session: SessionStore, theme: Theme) -> Self {
        Self {
            screen: Screen::Login(LoginForm::default()),
            session,
            theme,
            notice: None,
        }
    }

    /// Returns the directory state, if the directory screen is active.
    #[must_use]
    pub fn directory(&self) -> Option<&Directory> {
        match &self.screen {
            Screen::Directory(directory) => Some(directory),
            Screen::Login(_) => None,
        }
    }

    /// Returns the directory state mutably, if the directory screen is active.
    pub fn directory_mut(&mut self) -> Option<&mut Directory> {
        match &mut self.screen {
            Screen::Directory(directory) => Some(directory),
            Screen::Login(_) => None,
        }
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// Transforms application state into a structured representation optimized
    /// for rendering. Handles windowing (showing a subset of results),
    /// substring match highlighting, and empty state handling.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Returns
    ///
    /// A [`ScreenView`] matching the active screen.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> ScreenView {
        match &self.screen {
            Screen::Login(form) => ScreenView::Login(Self::compute_login_view(form)),
            Screen::Directory(directory) => {
                ScreenView::Directory(self.compute_directory_view(directory, rows))
            }
        }
    }

    fn compute_login_view(form: &LoginForm) -> LoginView {
        LoginView {
            email: form.email.clone(),
            password_len: form.password.chars().count(),
            focus: form.focus,
            submitting: form.submitting,
            error: form.error.clone(),
            footer: FooterInfo {
                keybindings: "Tab: next field  Enter: sign in  Ctrl+c: quit".to_string(),
            },
        }
    }

    fn compute_directory_view(&self, directory: &Directory, rows: usize) -> DirectoryView {
        let loading = matches!(directory.phase, Phase::Loading);
        let error = match &directory.phase {
            Phase::Error(message) => Some(message.clone()),
            _ => None,
        };

        let available_rows = Self::calculate_available_rows(directory.input_mode, rows);

        let mut visible_start = directory.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(directory.filtered.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && directory.filtered.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let highlight_query = if matches!(directory.input_mode, InputMode::Search(_)) {
            Some(directory.search_query.as_str()).filter(|query| !query.is_empty())
        } else {
            None
        };

        let user_rows: Vec<UserRow> = directory.filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, user)| {
                let absolute_idx = visible_start + relative_idx;
                Self::compute_user_row(
                    user,
                    absolute_idx == directory.selected_index,
                    highlight_query,
                )
            })
            .collect();

        let selected_display_index = directory.selected_index.saturating_sub(visible_start);

        DirectoryView {
            loading,
            error,
            rows: user_rows,
            selected_index: selected_display_index,
            header: Self::compute_header(directory),
            footer: Self::compute_footer(directory),
            search_bar: Self::compute_search_bar(directory),
            pagination: Self::compute_pagination(directory),
            empty_state: Self::compute_empty_state(directory),
            dialog: directory.dialog.as_ref().map(Self::compute_dialog_view),
            notice: self.notice.as_ref().map(|notice| NoticeView {
                message: notice.message.clone(),
                is_error: notice.kind == NoticeKind::Error,
            }),
        }
    }

    fn compute_user_row(user: &User, is_selected: bool, query: Option<&str>) -> UserRow {
        let name = user.full_name();
        let name_highlights = query.map_or_else(Vec::new, |q| substring_ranges(&name, q));
        let email_highlights = query.map_or_else(Vec::new, |q| substring_ranges(&user.email, q));

        UserRow {
            id: user.id,
            name,
            email: user.email.clone(),
            is_selected,
            name_highlights,
            email_highlights,
        }
    }

    fn compute_header(directory: &Directory) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Users ({}) ", directory.filtered.len()),
        }
    }

    fn compute_footer(directory: &Directory) -> FooterInfo {
        let keybindings = if directory.dialog.is_some() {
            "Tab: next field  Enter: save  ESC: cancel".to_string()
        } else {
            match directory.input_mode {
                InputMode::Search(SearchFocus::Typing) => {
                    "ESC: exit search  Ctrl+n/p: navigate  Enter: results  Type to filter"
                        .to_string()
                }
                InputMode::Search(SearchFocus::Navigating) => {
                    "ESC: exit search  /: edit query  j/k: navigate  e: edit  d: delete"
                        .to_string()
                }
                InputMode::Normal => {
                    "j/k: navigate  h/l: page  /: search  e: edit  d: delete  r: reload  L: logout  q: quit"
                        .to_string()
                }
            }
        };

        FooterInfo { keybindings }
    }

    fn compute_search_bar(directory: &Directory) -> Option<SearchBarInfo> {
        match directory.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: directory.search_query.clone(),
                focus_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    /// Pagination controls apply to the remote page sequence, not to the
    /// locally filtered view, so they are hidden whenever a query is active.
    fn compute_pagination(directory: &Directory) -> Option<PaginationInfo> {
        if directory.search_query.is_empty() {
            Some(PaginationInfo {
                page: directory.page,
                total_pages: directory.total_pages,
            })
        } else {
            None
        }
    }

    fn compute_empty_state(directory: &Directory) -> Option<EmptyState> {
        if !matches!(directory.phase, Phase::Ready) || !directory.filtered.is_empty() {
            return None;
        }
        let (message, subtitle) = if directory.search_query.is_empty() {
            (
                "No users on this page".to_string(),
                "Press h/l to change page or r to reload".to_string(),
            )
        } else {
            (
                format!("No users match \"{}\"", directory.search_query),
                "Press ESC to clear the search".to_string(),
            )
        };
        Some(EmptyState { message, subtitle })
    }

    fn compute_dialog_view(dialog: &EditDialog) -> DialogView {
        DialogView {
            title: format!(" Edit {} ", dialog.original.full_name()),
            first_name: dialog.first_name.clone(),
            last_name: dialog.last_name.clone(),
            email: dialog.email.clone(),
            focus: dialog.focus,
            submitting: dialog.submitting,
            error: dialog.error.clone(),
        }
    }

    /// Calculates available rows for the user table after subtracting UI
    /// chrome.
    ///
    /// Accounts for the header block (4 rows), the bottom block (status row,
    /// border, footer, final spare row), and the search bar (3 rows when
    /// active).
    const fn calculate_available_rows(input_mode: InputMode, total_rows: usize) -> usize {
        match input_mode {
            InputMode::Normal => total_rows.saturating_sub(8),
            InputMode::Search(_) => total_rows.saturating_sub(11),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_users() -> Vec<User> {
        vec![
            User {
                id: 1,
                email: "george.bluth@reqres.in".to_string(),
                first_name: "George".to_string(),
                last_name: "Bluth".to_string(),
                avatar: String::new(),
            },
            User {
                id: 2,
                email: "janet.weaver@reqres.in".to_string(),
                first_name: "Janet".to_string(),
                last_name: "Weaver".to_string(),
                avatar: String::new(),
            },
            User {
                id: 3,
                email: "emma.wong@reqres.in".to_string(),
                first_name: "Emma".to_string(),
                last_name: "Wong".to_string(),
                avatar: String::new(),
            },
        ]
    }

    fn ready_directory() -> Directory {
        let mut directory = Directory::default();
        directory.phase = Phase::Ready;
        directory.users = sample_users();
        directory.total_pages = 2;
        directory.apply_search_filter();
        directory
    }

    #[test]
    fn begin_fetch_clears_records_and_bumps_sequence() {
        let mut directory = ready_directory();
        let first = directory.begin_fetch(2);
        assert_eq!(directory.phase, Phase::Loading);
        assert!(directory.users.is_empty());
        assert!(directory.filtered.is_empty());
        assert_eq!(directory.page, 2);
        let second = directory.begin_fetch(1);
        assert!(second > first);
    }

    #[test]
    fn filter_is_pure_and_idempotent() {
        let mut directory = ready_directory();
        directory.search_query = "weav".to_string();
        directory.apply_search_filter();
        assert_eq!(directory.filtered.len(), 1);
        assert_eq!(directory.users.len(), 3);

        directory.apply_search_filter();
        assert_eq!(directory.filtered.len(), 1);

        directory.search_query.clear();
        directory.apply_search_filter();
        assert_eq!(directory.filtered.len(), 3);
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let mut directory = ready_directory();
        directory.move_selection_up();
        assert_eq!(directory.selected_index, 2);
        directory.move_selection_down();
        assert_eq!(directory.selected_index, 0);

        directory.selected_index = 2;
        directory.search_query = "janet".to_string();
        directory.apply_search_filter();
        assert_eq!(directory.selected_index, 0);
        assert_eq!(directory.selected_user().map(|u| u.id), Some(2));
    }

    #[test]
    fn merge_updated_touches_only_matching_record() {
        let mut directory = ready_directory();
        let fields = UserFields {
            last_name: Some("Surname".to_string()),
            ..UserFields::default()
        };
        directory.merge_updated(2, &fields);
        assert_eq!(directory.users[1].last_name, "Surname");
        assert_eq!(directory.users[1].first_name, "Janet");
        assert_eq!(directory.users[0].last_name, "Bluth");
        assert_eq!(directory.filtered[1].last_name, "Surname");
    }

    #[test]
    fn merge_updated_refilters_under_active_query() {
        let mut directory = ready_directory();
        directory.search_query = "weaver".to_string();
        directory.apply_search_filter();
        assert_eq!(directory.filtered.len(), 1);

        let fields = UserFields {
            last_name: Some("Smith".to_string()),
            ..UserFields::default()
        };
        directory.merge_updated(2, &fields);

        assert_eq!(directory.users[1].last_name, "Smith");
        assert!(directory.filtered.is_empty());
        assert_eq!(directory.selected_index, 0);

        directory.search_query = "smith".to_string();
        directory.apply_search_filter();
        assert_eq!(directory.filtered.len(), 1);
        assert_eq!(directory.filtered[0].id, 2);
    }

    #[test]
    fn remove_user_preserves_order() {
        let mut directory = ready_directory();
        directory.remove_user(2);
        let ids: Vec<u64> = directory.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_last_user_resets_selection() {
        let mut directory = ready_directory();
        directory.selected_index = 2;
        directory.remove_user(3);
        assert_eq!(directory.selected_index, 1);
    }

    #[test]
    fn dialog_changes_carry_only_edited_fields() {
        let users = sample_users();
        let mut dialog = EditDialog::from_user(&users[0]);
        assert!(!dialog.is_dirty());
        assert_eq!(dialog.changes(), UserFields::default());

        dialog.last_name = "Lucas".to_string();
        assert!(dialog.is_dirty());
        let changes = dialog.changes();
        assert_eq!(changes.last_name.as_deref(), Some("Lucas"));
        assert!(changes.first_name.is_none());
        assert!(changes.email.is_none());
    }

    #[test]
    fn pagination_hidden_while_query_active() {
        let session = SessionStore::new(Some("tok".to_string()));
        let mut state = AppState::new(session, Theme::default());
        let mut directory = ready_directory();
        directory.search_query = "em".to_string();
        directory.apply_search_filter();
        state.screen = Screen::Directory(directory);

        let ScreenView::Directory(view) = state.compute_viewmodel(24, 80) else {
            panic!("expected directory view");
        };
        assert!(view.pagination.is_none());

        if let Screen::Directory(directory) = &mut state.screen {
            directory.search_query.clear();
            directory.apply_search_filter();
        }
        let ScreenView::Directory(view) = state.compute_viewmodel(24, 80) else {
            panic!("expected directory view");
        };
        assert_eq!(
            view.pagination,
            Some(PaginationInfo {
                page: 1,
                total_pages: 2
            })
        );
    }

    #[test]
    fn empty_state_reflects_query() {
        let session = SessionStore::new(None);
        let mut state = AppState::new(session, Theme::default());
        let mut directory = ready_directory();
        directory.search_query = "zzz".to_string();
        directory.apply_search_filter();
        state.screen = Screen::Directory(directory);

        let ScreenView::Directory(view) = state.compute_viewmodel(24, 80) else {
            panic!("expected directory view");
        };
        let empty = view.empty_state.expect("empty state");
        assert!(empty.message.contains("zzz"));
    }

    #[test]
    fn windowing_keeps_selection_visible() {
        let session = SessionStore::new(None);
        let mut state = AppState::new(session, Theme::default());
        let mut directory = Directory::default();
        directory.phase = Phase::Ready;
        directory.users = (1..=30)
            .map(|id| User {
                id,
                email: format!("user{id}@example.com"),
                first_name: format!("User{id}"),
                last_name: "Example".to_string(),
                avatar: String::new(),
            })
            .collect();
        directory.apply_search_filter();
        directory.selected_index = 29;
        state.screen = Screen::Directory(directory);

        let ScreenView::Directory(view) = state.compute_viewmodel(12, 80) else {
            panic!("expected directory view");
        };
        assert_eq!(view.rows.len(), 4);
        assert!(view.rows[view.selected_index].is_selected);
        assert_eq!(view.rows[view.selected_index].id, 30);
    }
}
