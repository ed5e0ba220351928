//! Terminal wrapper and entry point.
//!
//! This module provides the thin integration layer between the roster library
//! and the terminal. It owns the raw-mode lifecycle, maps key presses to
//! semantic events, runs the async event loop, and executes the actions the
//! handler emits.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │   Terminal (main thread)     │
//! │  ┌────────────────────────┐  │
//! │  │ AppState + handler     │  │  ← UI state, event handling
//! │  └────────────────────────┘  │
//! │          │                   │
//! │          │ mpsc              │
//! │          ▼                   │
//! │  ┌────────────────────────┐  │
//! │  │ ApiWorker (tasks)      │  │  ← HTTP requests
//! │  └────────────────────────┘  │
//! └──────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Startup**: Read env config, initialize tracing, load the persisted
//!    token into the session store
//! 2. **Terminal**: Install panic hook, enable raw mode, enter the alternate
//!    screen
//! 3. **Guard**: Dispatch `Started`, which routes to login or directory
//! 4. **Loop**: `select!` over terminal events and worker outcomes
//! 5. **Shutdown**: Restore the terminal on quit, panic, or Ctrl+C
//!
//! # Keybindings
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `h`/`Left`, `l`/`Right`: Previous/next page
//! - `/`: Enter search mode
//! - `e`/`Enter`: Edit selected user
//! - `d`: Delete selected user
//! - `r`: Reload current page
//! - `L` (shift): Log out
//! - `q`: Quit
//!
//! In search mode (typing):
//! - Printable keys: Type into the query
//! - `Ctrl+n`/`Ctrl+p`: Move selection
//! - `Enter`/`Tab`: Focus results
//! - `Esc`: Exit search
//!
//! In forms (login, edit dialog):
//! - `Tab`/`BackTab`: Cycle fields
//! - `Enter`: Submit
//! - `Esc`: Cancel (dialog only)
//!
//! `Ctrl+c` quits from anywhere.

#![allow(clippy::multiple_crate_versions)]

use std::io;

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use roster::app::Screen;
use roster::worker::{ApiOutcome, ApiWorker};
use roster::{
    handle_event, infrastructure, Action, ApiClient, AppState, Config, Event, InputMode, Result,
    SearchFocus, SessionStore, TokenFile,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();
    roster::observability::init_tracing(&config);

    let token_file = TokenFile::new(infrastructure::token_path());
    let stored_token = token_file.load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load persisted token, starting unauthenticated");
        None
    });
    let session = SessionStore::new(stored_token);

    let client = ApiClient::new(config.base_url.clone(), session.clone());
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    let worker = ApiWorker::new(client, outcome_tx);

    let mut state = roster::initialize(&config, session);

    install_panic_hook();
    setup_terminal()?;
    let result = run(&mut state, &worker, outcome_rx, &token_file).await;
    restore_terminal()?;
    result
}

/// Runs the main event loop until the user quits or input ends.
async fn run(
    state: &mut AppState,
    worker: &ApiWorker,
    mut outcomes: mpsc::UnboundedReceiver<ApiOutcome>,
    token_file: &TokenFile,
) -> Result<()> {
    let (cols, rows) = crossterm::terminal::size()?;
    let mut cols = cols as usize;
    let mut rows = rows as usize;

    let mut events = EventStream::new();

    if dispatch(state, &Event::Started, worker, token_file, rows, cols)? {
        return Ok(());
    }

    loop {
        tokio::select! {
            terminal_event = events.next() => {
                match terminal_event {
                    Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        let Some(event) = map_key(state, &key) else {
                            continue;
                        };
                        if dispatch(state, &event, worker, token_file, rows, cols)? {
                            return Ok(());
                        }
                    }
                    Some(Ok(TermEvent::Resize(new_cols, new_rows))) => {
                        cols = new_cols as usize;
                        rows = new_rows as usize;
                        dispatch(state, &Event::Redraw, worker, token_file, rows, cols)?;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event stream error");
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }
            Some(outcome) = outcomes.recv() => {
                if dispatch(state, &Event::Api(outcome), worker, token_file, rows, cols)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Feeds one event through the handler, executes the resulting actions, and
/// re-renders if needed.
///
/// Returns `true` when the application should exit.
fn dispatch(
    state: &mut AppState,
    event: &Event,
    worker: &ApiWorker,
    token_file: &TokenFile,
    rows: usize,
    cols: usize,
) -> Result<bool> {
    let (should_render, actions) = handle_event(state, event)?;

    let mut quit = false;
    for action in actions {
        match action {
            Action::Quit => quit = true,
            Action::Call(request) => worker.submit(request),
            Action::StoreToken(token) => {
                state.session.set(token.clone());
                if let Err(e) = token_file.store(&token) {
                    tracing::warn!(error = %e, "failed to persist token");
                }
            }
            Action::ClearSession => {
                state.session.clear();
                if let Err(e) = token_file.clear() {
                    tracing::warn!(error = %e, "failed to remove persisted token");
                }
            }
        }
    }

    if should_render && !quit {
        roster::ui::render(state, rows, cols);
    }

    Ok(quit)
}

/// Maps a key press to a semantic event based on the current screen and mode.
///
/// Returns `None` for keys with no meaning in the current context.
fn map_key(state: &AppState, key: &KeyEvent) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Event::Quit),
            KeyCode::Char('n') => Some(Event::MoveDown),
            KeyCode::Char('p') => Some(Event::MoveUp),
            _ => None,
        };
    }

    let directory = match &state.screen {
        Screen::Login(_) => {
            return Some(match key.code {
                KeyCode::Enter => Event::Submit,
                KeyCode::Tab | KeyCode::Down => Event::NextField,
                KeyCode::BackTab | KeyCode::Up => Event::PrevField,
                KeyCode::Backspace => Event::Backspace,
                KeyCode::Char(c) => Event::Char(c),
                _ => return None,
            });
        }
        Screen::Directory(directory) => directory,
    };

    if directory.dialog.is_some() {
        return Some(match key.code {
            KeyCode::Enter => Event::Submit,
            KeyCode::Tab | KeyCode::Down => Event::NextField,
            KeyCode::BackTab | KeyCode::Up => Event::PrevField,
            KeyCode::Esc => Event::Escape,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        });
    }

    match directory.input_mode {
        InputMode::Search(SearchFocus::Typing) => Some(match key.code {
            KeyCode::Esc => Event::ExitSearch,
            KeyCode::Enter | KeyCode::Tab => Event::FocusResults,
            KeyCode::Down => Event::MoveDown,
            KeyCode::Up => Event::MoveUp,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Char(c) => Event::Char(c),
            _ => return None,
        }),
        InputMode::Search(SearchFocus::Navigating) => Some(match key.code {
            KeyCode::Esc => Event::ExitSearch,
            KeyCode::Char('/') => Event::FocusSearchBar,
            KeyCode::Down | KeyCode::Char('j') => Event::MoveDown,
            KeyCode::Up | KeyCode::Char('k') => Event::MoveUp,
            KeyCode::Enter | KeyCode::Char('e') => Event::EditSelected,
            KeyCode::Char('d') => Event::DeleteSelected,
            KeyCode::Char('q') => Event::Quit,
            _ => return None,
        }),
        InputMode::Normal => Some(match key.code {
            KeyCode::Down | KeyCode::Char('j') => Event::MoveDown,
            KeyCode::Up | KeyCode::Char('k') => Event::MoveUp,
            KeyCode::Left | KeyCode::Char('h') => Event::PrevPage,
            KeyCode::Right | KeyCode::Char('l') => Event::NextPage,
            KeyCode::Char('/') => Event::SearchMode,
            KeyCode::Enter | KeyCode::Char('e') => Event::EditSelected,
            KeyCode::Char('d') => Event::DeleteSelected,
            KeyCode::Char('r') => Event::Reload,
            KeyCode::Char('L') => Event::Logout,
            KeyCode::Char('q') => Event::Quit,
            KeyCode::Esc => Event::Escape,
            _ => return None,
        }),
    }
}

/// Enables raw mode, enters the alternate screen, and hides the cursor.
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
    Ok(())
}

/// Restores terminal state.
///
/// Idempotent and safe to call multiple times; also invoked from the panic
/// hook so a crash never leaves the terminal in raw mode.
fn restore_terminal() -> Result<()> {
    let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the
/// panic. Call before `setup_terminal()`.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}
