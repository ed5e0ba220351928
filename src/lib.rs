#![allow(clippy::multiple_crate_versions)]

//! Roster: a terminal client for browsing and editing a remote user directory.
//!
//! Roster signs in against a reqres-style REST backend, then lists, searches,
//! edits, and deletes paginated user records from the terminal:
//! - Token-based authentication with a persisted credential slot
//! - Paginated user listing with client-side substring search
//! - In-place record editing via a modal dialog, deletion with a keystroke
//! - Asynchronous request handling that never blocks the UI
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Session Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (session/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Token cell  │   │ - API calls   │
//! │ - Theming     │   │ - Slot file   │   │ - Outcomes    │
//! │ - Components  │   │               │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - User model (domain/user)                         │
//! │  - HTTP client (api/)                               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - Structured logging                               │
//! │  - File-based output                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`api`]: HTTP client for the user directory backend
//! - [`domain`]: Core domain types (User, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`session`]: Shared token cell and persisted credential slot
//! - [`worker`]: Asynchronous request execution and typed outcomes
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Structured logging to file
//!
//! # Configuration
//!
//! The client is configured via environment variables:
//!
//! | Variable            | Purpose                                |
//! |---------------------|----------------------------------------|
//! | `ROSTER_BASE_URL`   | Backend base URL                       |
//! | `ROSTER_THEME`      | Built-in theme name                    |
//! | `ROSTER_THEME_FILE` | Path to a custom TOML theme            |
//! | `ROSTER_LOG`        | Log filter (e.g. `debug`)              |
//! | `ROSTER_DATA_DIR`   | Override for the data directory        |
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Read configuration from the environment
//!    - Initialize tracing (optional)
//!    - Load the persisted token into the session store
//!    - Create `AppState` with theme and enter raw mode
//!    - Dispatch the `Started` event (authentication guard)
//!
//! 2. **Event Loop**:
//!    - Terminal keys are mapped to semantic events
//!    - `handle_event` mutates state and emits actions
//!    - `Call` actions are submitted to the request worker
//!    - Worker outcomes come back as `Event::Api` and re-enter the handler
//!
//! 3. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, table, status, footer)
//!
//! # Key Design Decisions
//!
//! ## Fetch Sequencing
//!
//! Every page fetch carries a monotonically increasing sequence number.
//! Responses echo it back, and the handler discards any response whose
//! sequence is not the latest, so a slow response for an abandoned page can
//! never overwrite newer data.
//!
//! ## Local Mutation
//!
//! Successful edits and deletions are applied to the in-memory page directly
//! instead of re-fetching, keeping the UI responsive and the displayed page
//! stable.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes expensive operations (match highlighting, windowing)

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod session;
pub mod worker;

pub mod ui;

pub mod observability;

pub use api::ApiClient;
pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Result, RosterError, User};
pub use session::{SessionStore, TokenFile};
pub use ui::Theme;

/// Backend used when `ROSTER_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Client configuration read from the environment.
///
/// # Example
///
/// ```rust
/// use roster::Config;
///
/// let config = Config::from_env();
/// assert!(!config.base_url.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the user directory backend.
    ///
    /// Endpoint paths (`/login`, `/users`) are appended to it. Default:
    /// [`DEFAULT_BASE_URL`].
    pub base_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log filter for the file-backed subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme_name: None,
            theme_file: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Reads configuration from `ROSTER_*` environment variables.
    ///
    /// Unset or empty variables fall back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        Self {
            base_url: non_empty("ROSTER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            theme_name: non_empty("ROSTER_THEME"),
            theme_file: non_empty("ROSTER_THEME_FILE"),
            log_level: non_empty("ROSTER_LOG"),
        }
    }
}

/// Creates the initial application state.
///
/// Resolves the theme (custom file, then built-in name, then default) and
/// builds an `AppState` on the login screen. The `Started` event applies the
/// authentication guard and moves to the directory when the session already
/// holds a token.
///
/// # Parameters
///
/// * `config` - Client configuration
/// * `session` - Shared credential cell, typically pre-loaded from the slot file
///
/// # Returns
///
/// An initialized `AppState` ready for event processing.
#[must_use]
pub fn initialize(config: &Config, session: SessionStore) -> AppState {
    tracing::debug!(base_url = %config.base_url, "initializing roster");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(session, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_starts_on_login_screen() {
        let state = initialize(&Config::default(), SessionStore::new(None));
        assert!(matches!(state.screen, app::Screen::Login(_)));
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }

    #[test]
    fn unknown_theme_name_falls_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config, SessionStore::new(None));
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
