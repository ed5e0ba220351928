//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! system events, and request outcomes, translating them into state changes
//! and action sequences. It serves as the primary control flow coordinator
//! for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal runtime or the request worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and screen-state methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `MoveDown`, `MoveUp`, `NextPage`, `PrevPage`
//! - **Input**: `Char`, `Backspace`, `Submit`, `Escape`, `NextField`, `PrevField`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Record Operations**: `EditSelected`, `DeleteSelected`, `Reload`
//! - **Session**: `Started`, `Logout`
//! - **Worker**: `Api` wrapping a typed request outcome
//!
//! # Authentication Guard
//!
//! Events that would trigger a backend fetch (`Started`, `NextPage`,
//! `PrevPage`, `Reload`) re-check the session store first. Without a token
//! the handler redirects to the login screen and emits no request, so an
//! unauthenticated state can never reach the directory or the network.

use super::modes::{InputMode, LoginField, SearchFocus};
use super::state::{Directory, EditDialog, LoginForm, Notice, Phase, Screen};
use crate::app::{Action, AppState};
use crate::domain::Result;
use crate::worker::{ApiOutcome, ApiRequest};

/// Events triggered by user input, terminal changes, or request outcomes.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Fired once at startup, after the persisted token (if any) has been
    /// loaded into the session store. Applies the authentication guard.
    Started,

    /// Moves selection cursor down by one position (wraps to top).
    MoveDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    MoveUp,
    /// Appends a character to the focused text buffer.
    Char(char),
    /// Removes the last character from the focused text buffer.
    Backspace,
    /// Submits the focused form (login credentials or edit dialog).
    Submit,
    /// Cancels the current context: closes the dialog or exits search.
    Escape,
    /// Moves focus to the next form field.
    NextField,
    /// Moves focus to the previous form field.
    PrevField,

    /// Enters search mode with typing focus and an empty query.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the search results list (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,

    /// Requests the next page of users. Ignored while a query is active.
    NextPage,
    /// Requests the previous page of users. Ignored while a query is active.
    PrevPage,
    /// Re-fetches the current page.
    Reload,
    /// Opens the edit dialog over the selected user.
    EditSelected,
    /// Deletes the selected user.
    DeleteSelected,

    /// Clears the session and returns to the login screen.
    Logout,
    /// Exits the application.
    Quit,
    /// Forces a redraw (terminal resize).
    Redraw,

    /// Wraps an outcome from the request worker.
    ///
    /// Processed by matching on the inner [`ApiOutcome`] variant. May cause
    /// screen changes, record updates, or error surfacing.
    Api(ApiOutcome),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// This is the primary event handler that coordinates all state transitions
/// and side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the terminal runtime.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of (render needed, actions to execute in sequence). The action
/// list may be empty if the event requires no side effects.
///
/// # Errors
///
/// Returns errors from state mutation methods. The current transitions are
/// infallible; the `Result` keeps the signature stable as operations grow.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    // Notices report the previous operation; any fresh user input retires them.
    if !matches!(event, Event::Api(_) | Event::Redraw) && state.notice.is_some() {
        state.notice = None;
    }

    match event {
        Event::Started => {
            if state.session.is_authenticated() {
                let mut directory = Directory::default();
                let seq = directory.begin_fetch(1);
                state.screen = Screen::Directory(directory);
                Ok((true, vec![Action::Call(ApiRequest::FetchPage { page: 1, seq })]))
            } else {
                tracing::debug!("no session token, showing login");
                state.screen = Screen::Login(LoginForm::default());
                Ok((true, vec![]))
            }
        }

        Event::MoveDown => {
            if let Some(directory) = state.directory_mut() {
                if directory.dialog.is_none() {
                    directory.move_selection_down();
                    return Ok((true, vec![]));
                }
            }
            Ok((false, vec![]))
        }
        Event::MoveUp => {
            if let Some(directory) = state.directory_mut() {
                if directory.dialog.is_none() {
                    directory.move_selection_up();
                    return Ok((true, vec![]));
                }
            }
            Ok((false, vec![]))
        }

        Event::Char(c) => match &mut state.screen {
            Screen::Login(form) => {
                form.error = None;
                form.focused_field_mut().push(*c);
                Ok((true, vec![]))
            }
            Screen::Directory(directory) => {
                if let Some(dialog) = &mut directory.dialog {
                    dialog.error = None;
                    dialog.focused_field_mut().push(*c);
                    return Ok((true, vec![]));
                }
                if matches!(directory.input_mode, InputMode::Search(SearchFocus::Typing)) {
                    directory.search_query.push(*c);
                    directory.apply_search_filter();
                    return Ok((true, vec![]));
                }
                Ok((false, vec![]))
            }
        },
        Event::Backspace => match &mut state.screen {
            Screen::Login(form) => {
                form.focused_field_mut().pop();
                Ok((true, vec![]))
            }
            Screen::Directory(directory) => {
                if let Some(dialog) = &mut directory.dialog {
                    dialog.focused_field_mut().pop();
                    return Ok((true, vec![]));
                }
                if matches!(directory.input_mode, InputMode::Search(SearchFocus::Typing)) {
                    directory.search_query.pop();
                    directory.apply_search_filter();
                    return Ok((true, vec![]));
                }
                Ok((false, vec![]))
            }
        },

        Event::NextField | Event::PrevField => match &mut state.screen {
            Screen::Login(form) => {
                form.focus = match form.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
                Ok((true, vec![]))
            }
            Screen::Directory(directory) => {
                if let Some(dialog) = &mut directory.dialog {
                    dialog.focus = if matches!(event, Event::NextField) {
                        dialog.focus.next()
                    } else {
                        dialog.focus.prev()
                    };
                    return Ok((true, vec![]));
                }
                Ok((false, vec![]))
            }
        },

        Event::Submit => match &mut state.screen {
            Screen::Login(form) => {
                if !form.can_submit() {
                    tracing::debug!("login submission suppressed");
                    return Ok((false, vec![]));
                }
                form.submitting = true;
                form.error = None;
                Ok((
                    true,
                    vec![Action::Call(ApiRequest::Login {
                        email: form.email.clone(),
                        password: form.password.clone(),
                    })],
                ))
            }
            Screen::Directory(directory) => {
                let Some(dialog) = &mut directory.dialog else {
                    return Ok((false, vec![]));
                };
                if dialog.submitting {
                    return Ok((false, vec![]));
                }
                if !dialog.is_dirty() {
                    directory.dialog = None;
                    return Ok((true, vec![]));
                }
                dialog.submitting = true;
                dialog.error = None;
                let request = ApiRequest::UpdateUser {
                    id: dialog.original.id,
                    fields: dialog.changes(),
                };
                Ok((true, vec![Action::Call(request)]))
            }
        },

        Event::Escape => {
            if let Some(directory) = state.directory_mut() {
                if directory.dialog.is_some() {
                    directory.dialog = None;
                    return Ok((true, vec![]));
                }
                if matches!(directory.input_mode, InputMode::Search(_)) {
                    directory.input_mode = InputMode::Normal;
                    directory.search_query = String::new();
                    directory.apply_search_filter();
                    return Ok((true, vec![]));
                }
            }
            Ok((false, vec![]))
        }

        Event::SearchMode => {
            if let Some(directory) = state.directory_mut() {
                if directory.dialog.is_none() {
                    tracing::debug!("entering search mode");
                    directory.input_mode = InputMode::Search(SearchFocus::Typing);
                    directory.search_query = String::new();
                    directory.apply_search_filter();
                    return Ok((true, vec![]));
                }
            }
            Ok((false, vec![]))
        }
        Event::FocusSearchBar => {
            if let Some(directory) = state.directory_mut() {
                directory.input_mode = InputMode::Search(SearchFocus::Typing);
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::FocusResults => {
            if let Some(directory) = state.directory_mut() {
                if directory.search_query.is_empty() {
                    directory.input_mode = InputMode::Normal;
                } else {
                    directory.input_mode = InputMode::Search(SearchFocus::Navigating);
                }
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::ExitSearch => {
            if let Some(directory) = state.directory_mut() {
                tracing::debug!(query = %directory.search_query, "exiting search mode");
                directory.input_mode = InputMode::Normal;
                directory.search_query = String::new();
                directory.apply_search_filter();
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }

        Event::NextPage => change_page(state, PageMove::Forward),
        Event::PrevPage => change_page(state, PageMove::Backward),
        Event::Reload => {
            if !guard(state) {
                return Ok((true, vec![]));
            }
            if let Some(directory) = state.directory_mut() {
                if directory.dialog.is_none() {
                    let page = directory.page;
                    let seq = directory.begin_fetch(page);
                    return Ok((true, vec![Action::Call(ApiRequest::FetchPage { page, seq })]));
                }
            }
            Ok((false, vec![]))
        }

        Event::EditSelected => {
            if let Some(directory) = state.directory_mut() {
                if directory.dialog.is_none() {
                    if let Some(user) = directory.selected_user() {
                        tracing::debug!(user_id = user.id, "opening edit dialog");
                        directory.dialog = Some(EditDialog::from_user(user));
                        return Ok((true, vec![]));
                    }
                }
            }
            Ok((false, vec![]))
        }
        Event::DeleteSelected => {
            if let Some(directory) = state.directory_mut() {
                if directory.dialog.is_none() {
                    if let Some(user) = directory.selected_user() {
                        let id = user.id;
                        tracing::debug!(user_id = id, "delete requested");
                        return Ok((true, vec![Action::Call(ApiRequest::DeleteUser { id })]));
                    }
                }
            }
            Ok((false, vec![]))
        }

        Event::Logout => {
            tracing::debug!("logging out");
            state.screen = Screen::Login(LoginForm::default());
            Ok((true, vec![Action::ClearSession]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::Redraw => Ok((true, vec![])),

        Event::Api(outcome) => handle_outcome(state, outcome),
    }
}

enum PageMove {
    Forward,
    Backward,
}

/// Redirects to the login screen when the session holds no token.
///
/// Returns true when the caller may proceed with a fetch.
fn guard(state: &mut AppState) -> bool {
    if state.session.is_authenticated() {
        return true;
    }
    tracing::warn!("session token missing, redirecting to login");
    state.screen = Screen::Login(LoginForm::default());
    false
}

fn change_page(state: &mut AppState, direction: PageMove) -> Result<(bool, Vec<Action>)> {
    if !guard(state) {
        return Ok((true, vec![]));
    }
    let Some(directory) = state.directory_mut() else {
        return Ok((false, vec![]));
    };
    if directory.dialog.is_some() || !directory.search_query.is_empty() {
        return Ok((false, vec![]));
    }
    let target = match direction {
        PageMove::Forward if directory.page < directory.total_pages => directory.page + 1,
        PageMove::Backward if directory.page > 1 => directory.page - 1,
        _ => return Ok((false, vec![])),
    };
    let seq = directory.begin_fetch(target);
    Ok((
        true,
        vec![Action::Call(ApiRequest::FetchPage { page: target, seq })],
    ))
}

/// Applies a request outcome delivered by the worker.
fn handle_outcome(state: &mut AppState, outcome: &ApiOutcome) -> Result<(bool, Vec<Action>)> {
    match outcome {
        ApiOutcome::LoginSucceeded { token } => {
            tracing::debug!("login succeeded");
            let mut directory = Directory::default();
            let seq = directory.begin_fetch(1);
            state.screen = Screen::Directory(directory);
            Ok((
                true,
                vec![
                    Action::StoreToken(token.clone()),
                    Action::Call(ApiRequest::FetchPage { page: 1, seq }),
                ],
            ))
        }
        ApiOutcome::LoginFailed { message } => {
            if let Screen::Login(form) = &mut state.screen {
                form.submitting = false;
                form.error = Some(message.clone());
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }

        ApiOutcome::PageLoaded {
            seq,
            page,
            total_pages,
            users,
        } => {
            let Some(directory) = state.directory_mut() else {
                return Ok((false, vec![]));
            };
            if *seq != directory.fetch_seq {
                tracing::debug!(seq, current = directory.fetch_seq, "stale page response discarded");
                return Ok((false, vec![]));
            }
            directory.phase = Phase::Ready;
            directory.page = *page;
            directory.total_pages = (*total_pages).max(1);
            directory.users = users.clone();
            directory.apply_search_filter();
            Ok((true, vec![]))
        }
        ApiOutcome::PageFailed { seq, message } => {
            let Some(directory) = state.directory_mut() else {
                return Ok((false, vec![]));
            };
            if *seq != directory.fetch_seq {
                tracing::debug!(seq, current = directory.fetch_seq, "stale page failure discarded");
                return Ok((false, vec![]));
            }
            directory.phase = Phase::Error(message.clone());
            Ok((true, vec![]))
        }

        ApiOutcome::UserUpdated { id, fields } => {
            let Some(directory) = state.directory_mut() else {
                return Ok((false, vec![]));
            };
            directory.merge_updated(*id, fields);
            directory.dialog = None;
            state.notice = Some(Notice::info("User updated"));
            Ok((true, vec![]))
        }
        ApiOutcome::UpdateFailed { id, message } => {
            let Some(directory) = state.directory_mut() else {
                return Ok((false, vec![]));
            };
            match &mut directory.dialog {
                Some(dialog) if dialog.original.id == *id => {
                    dialog.submitting = false;
                    dialog.error = Some(message.clone());
                }
                _ => state.notice = Some(Notice::error(message.clone())),
            }
            Ok((true, vec![]))
        }

        ApiOutcome::UserDeleted { id } => {
            let Some(directory) = state.directory_mut() else {
                return Ok((false, vec![]));
            };
            directory.remove_user(*id);
            state.notice = Some(Notice::info("User deleted"));
            Ok((true, vec![]))
        }
        ApiOutcome::DeleteFailed { id, message } => {
            tracing::debug!(user_id = id, "delete failed");
            state.notice = Some(Notice::error(message.clone()));
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserFields;
    use crate::domain::User;
    use crate::session::SessionStore;
    use crate::ui::theme::Theme;

    fn user(id: u64, first: &str, last: &str) -> User {
        User {
            id,
            email: format!(
                "{}.{}@reqres.in",
                first.to_lowercase(),
                last.to_lowercase()
            ),
            first_name: first.to_string(),
            last_name: last.to_string(),
            avatar: String::new(),
        }
    }

    fn authenticated_state() -> AppState {
        AppState::new(SessionStore::new(Some("tok".to_string())), Theme::default())
    }

    fn anonymous_state() -> AppState {
        AppState::new(SessionStore::new(None), Theme::default())
    }

    /// Drives the state to a ready directory holding the given users.
    fn directory_state(users: Vec<User>) -> AppState {
        let mut state = authenticated_state();
        let (_, actions) = handle_event(&mut state, &Event::Started).unwrap();
        let seq = match &actions[0] {
            Action::Call(ApiRequest::FetchPage { seq, .. }) => *seq,
            other => panic!("expected fetch action, got {other:?}"),
        };
        handle_event(
            &mut state,
            &Event::Api(ApiOutcome::PageLoaded {
                seq,
                page: 1,
                total_pages: 2,
                users,
            }),
        )
        .unwrap();
        state
    }

    fn directory(state: &AppState) -> &Directory {
        state.directory().expect("directory screen")
    }

    #[test]
    fn started_without_token_stays_on_login_and_makes_no_request() {
        let mut state = anonymous_state();
        let (render, actions) = handle_event(&mut state, &Event::Started).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(matches!(state.screen, Screen::Login(_)));
    }

    #[test]
    fn started_with_token_fetches_first_page() {
        let mut state = authenticated_state();
        let (_, actions) = handle_event(&mut state, &Event::Started).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::Call(ApiRequest::FetchPage { page: 1, .. })]
        ));
        assert!(matches!(directory(&state).phase, Phase::Loading));
    }

    #[test]
    fn login_submission_requires_both_fields() {
        let mut state = anonymous_state();
        handle_event(&mut state, &Event::Char('a')).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::NextField).unwrap();
        handle_event(&mut state, &Event::Char('p')).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::Call(ApiRequest::Login { .. })]
        ));
        let Screen::Login(form) = &state.screen else {
            panic!("expected login screen");
        };
        assert!(form.submitting);
    }

    #[test]
    fn login_success_stores_token_and_fetches_directory() {
        let mut state = anonymous_state();
        let (_, actions) = handle_event(
            &mut state,
            &Event::Api(ApiOutcome::LoginSucceeded {
                token: "QpwL5tke4Pnpja7X4".to_string(),
            }),
        )
        .unwrap();
        assert!(matches!(
            actions.as_slice(),
            [
                Action::StoreToken(_),
                Action::Call(ApiRequest::FetchPage { page: 1, .. })
            ]
        ));
        assert!(state.directory().is_some());
    }

    #[test]
    fn login_failure_re_enables_form_with_error() {
        let mut state = anonymous_state();
        handle_event(&mut state, &Event::Char('a')).unwrap();
        handle_event(&mut state, &Event::NextField).unwrap();
        handle_event(&mut state, &Event::Char('p')).unwrap();
        handle_event(&mut state, &Event::Submit).unwrap();

        handle_event(
            &mut state,
            &Event::Api(ApiOutcome::LoginFailed {
                message: "Login failed".to_string(),
            }),
        )
        .unwrap();
        let Screen::Login(form) = &state.screen else {
            panic!("expected login screen");
        };
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("Login failed"));
    }

    #[test]
    fn page_change_clears_records_until_response_arrives() {
        let mut state = directory_state(vec![user(1, "George", "Bluth")]);
        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::Call(ApiRequest::FetchPage { page: 2, .. })]
        ));
        assert!(directory(&state).users.is_empty());
        assert!(matches!(directory(&state).phase, Phase::Loading));
    }

    #[test]
    fn page_bounds_are_enforced() {
        let mut state = directory_state(vec![user(1, "George", "Bluth")]);
        let (_, actions) = handle_event(&mut state, &Event::PrevPage).unwrap();
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::NextPage).unwrap();
        let seq = directory(&state).fetch_seq;
        handle_event(
            &mut state,
            &Event::Api(ApiOutcome::PageLoaded {
                seq,
                page: 2,
                total_pages: 2,
                users: vec![],
            }),
        )
        .unwrap();
        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn stale_page_response_is_discarded() {
        let mut state = directory_state(vec![user(1, "George", "Bluth")]);
        let stale_seq = directory(&state).fetch_seq;
        handle_event(&mut state, &Event::NextPage).unwrap();

        // The slow response for page 1 lands after the user moved to page 2.
        let (render, _) = handle_event(
            &mut state,
            &Event::Api(ApiOutcome::PageLoaded {
                seq: stale_seq,
                page: 1,
                total_pages: 2,
                users: vec![user(99, "Stale", "Record")],
            }),
        )
        .unwrap();
        assert!(!render);
        assert!(directory(&state).users.is_empty());
        assert!(matches!(directory(&state).phase, Phase::Loading));

        let current_seq = directory(&state).fetch_seq;
        handle_event(
            &mut state,
            &Event::Api(ApiOutcome::PageLoaded {
                seq: current_seq,
                page: 2,
                total_pages: 2,
                users: vec![user(7, "Michael", "Lawson")],
            }),
        )
        .unwrap();
        assert_eq!(directory(&state).users.len(), 1);
        assert_eq!(directory(&state).users[0].id, 7);
    }

    #[test]
    fn stale_failure_does_not_clobber_newer_fetch() {
        let mut state = directory_state(vec![user(1, "George", "Bluth")]);
        let stale_seq = directory(&state).fetch_seq;
        handle_event(&mut state, &Event::Reload).unwrap();

        handle_event(
            &mut state,
            &Event::Api(ApiOutcome::PageFailed {
                seq: stale_seq,
                message: "Failed to fetch users".to_string(),
            }),
        )
        .unwrap();
        assert!(matches!(directory(&state).phase, Phase::Loading));
    }

    #[test]
    fn page_change_without_token_redirects_to_login() {
        let mut state = directory_state(vec![user(1, "George", "Bluth")]);
        state.session.clear();
        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(actions.is_empty());
        assert!(matches!(state.screen, Screen::Login(_)));
    }

    #[test]
    fn edit_submit_sends_only_changed_fields() {
        let mut state = directory_state(vec![user(2, "Janet", "Weaver")]);
        handle_event(&mut state, &Event::EditSelected).unwrap();
        handle_event(&mut state, &Event::NextField).unwrap();
        for _ in 0.."Weaver".len() {
            handle_event(&mut state, &Event::Backspace).unwrap();
        }
        for c in "Smith".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let [Action::Call(ApiRequest::UpdateUser { id, fields })] = actions.as_slice() else {
            panic!("expected update action, got {actions:?}");
        };
        assert_eq!(*id, 2);
        assert_eq!(fields.last_name.as_deref(), Some("Smith"));
        assert!(fields.first_name.is_none());
        assert!(fields.email.is_none());
    }

    #[test]
    fn update_outcome_merges_record_and_closes_dialog() {
        let mut state = directory_state(vec![user(1, "George", "Bluth"), user(2, "Janet", "Weaver")]);
        handle_event(&mut state, &Event::MoveDown).unwrap();
        handle_event(&mut state, &Event::EditSelected).unwrap();

        handle_event(
            &mut state,
            &Event::Api(ApiOutcome::UserUpdated {
                id: 2,
                fields: UserFields {
                    last_name: Some("Smith".to_string()),
                    ..UserFields::default()
                },
            }),
        )
        .unwrap();
        assert!(directory(&state).dialog.is_none());
        assert_eq!(directory(&state).users[1].last_name, "Smith");
        assert_eq!(directory(&state).users[0].last_name, "Bluth");
        assert_eq!(state.notice.as_ref().map(|n| n.message.as_str()), Some("User updated"));
    }

    #[test]
    fn update_failure_keeps_dialog_open_with_error() {
        let mut state = directory_state(vec![user(2, "Janet", "Weaver")]);
        handle_event(&mut state, &Event::EditSelected).unwrap();
        for c in "x".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::Submit).unwrap();

        handle_event(
            &mut state,
            &Event::Api(ApiOutcome::UpdateFailed {
                id: 2,
                message: "Failed to update user".to_string(),
            }),
        )
        .unwrap();
        let dialog = directory(&state).dialog.as_ref().expect("dialog open");
        assert!(!dialog.submitting);
        assert_eq!(dialog.error.as_deref(), Some("Failed to update user"));
        assert_eq!(directory(&state).users[0].last_name, "Weaver");
    }

    #[test]
    fn clean_dialog_submit_closes_without_request() {
        let mut state = directory_state(vec![user(2, "Janet", "Weaver")]);
        handle_event(&mut state, &Event::EditSelected).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(actions.is_empty());
        assert!(directory(&state).dialog.is_none());
    }

    #[test]
    fn delete_removes_record_preserving_order() {
        let mut state = directory_state(vec![
            user(1, "George", "Bluth"),
            user(2, "Janet", "Weaver"),
            user(3, "Emma", "Wong"),
        ]);
        handle_event(&mut state, &Event::MoveDown).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::Call(ApiRequest::DeleteUser { id: 2 })]
        ));

        handle_event(&mut state, &Event::Api(ApiOutcome::UserDeleted { id: 2 })).unwrap();
        let ids: Vec<u64> = directory(&state).users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn delete_failure_keeps_record_and_surfaces_notice() {
        let mut state = directory_state(vec![user(1, "George", "Bluth")]);
        handle_event(&mut state, &Event::DeleteSelected).unwrap();
        handle_event(
            &mut state,
            &Event::Api(ApiOutcome::DeleteFailed {
                id: 1,
                message: "Failed to delete user".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(directory(&state).users.len(), 1);
        let notice = state.notice.as_ref().expect("notice");
        assert_eq!(notice.kind, crate::app::state::NoticeKind::Error);

        // The next keystroke retires the notice.
        handle_event(&mut state, &Event::MoveDown).unwrap();
        assert!(state.notice.is_none());
    }

    #[test]
    fn search_typing_filters_current_page_only() {
        let mut state = directory_state(vec![
            user(1, "George", "Bluth"),
            user(2, "Janet", "Weaver"),
        ]);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "janet".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(directory(&state).filtered.len(), 1);

        // Page navigation is disabled while a query is active.
        let (_, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(directory(&state).filtered.len(), 2);
        assert!(directory(&state).search_query.is_empty());
    }

    #[test]
    fn focus_results_with_empty_query_returns_to_normal() {
        let mut state = directory_state(vec![user(1, "George", "Bluth")]);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(directory(&state).input_mode, InputMode::Normal);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('g')).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(
            directory(&state).input_mode,
            InputMode::Search(SearchFocus::Navigating)
        );
    }

    #[test]
    fn logout_clears_session_and_returns_to_login() {
        let mut state = directory_state(vec![user(1, "George", "Bluth")]);
        let (_, actions) = handle_event(&mut state, &Event::Logout).unwrap();
        assert_eq!(actions, vec![Action::ClearSession]);
        assert!(matches!(state.screen, Screen::Login(_)));
    }

    #[test]
    fn escape_closes_dialog_before_exiting_search() {
        let mut state = directory_state(vec![user(1, "George", "Bluth")]);
        handle_event(&mut state, &Event::EditSelected).unwrap();
        handle_event(&mut state, &Event::Escape).unwrap();
        assert!(directory(&state).dialog.is_none());
        assert!(state.directory().is_some());
    }
}
