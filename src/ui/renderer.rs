//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. It handles screen
//! switching (login vs. directory) and mode switching (normal, search,
//! loading, error) and ensures proper layout filling.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into a `ScreenView`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use std::io::Write;

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DirectoryView, ScreenView};

/// Renders the full UI to stdout.
///
/// Clears the screen, computes the view model from application state, and
/// delegates to the appropriate rendering mode. Flushes stdout when done so
/// the frame appears atomically under raw mode.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("\u{1b}[2J\u{1b}[H");

    match state.compute_viewmodel(rows, cols) {
        ScreenView::Login(view) => components::render_login(&view, &state.theme, cols, rows),
        ScreenView::Directory(view) => render_directory(&view, &state.theme, rows, cols),
    }

    let _ = std::io::stdout().flush();
}

/// Renders the directory screen with mode-specific layout.
///
/// Chooses rendering strategy based on view model state:
/// - Loading / fetch error: centered message between header and footer
/// - Search mode: header, search bar, table, status, footer
/// - Normal mode: header, table, status, footer
///
/// The edit dialog, when open, is drawn last so it overlays the table.
fn render_directory(vm: &DirectoryView, theme: &Theme, rows: usize, cols: usize) {
    if vm.loading {
        components::render_message_mode(
            vm,
            "Loading users...",
            &theme.colors.empty_state_fg,
            theme,
            cols,
            rows,
        );
        return;
    }

    if let Some(error) = &vm.error {
        components::render_message_mode(vm, error, &theme.colors.error_fg, theme, cols, rows);
        return;
    }

    if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, cols, rows);
    }

    if let Some(dialog) = &vm.dialog {
        components::render_dialog(dialog, theme, cols, rows);
    }
}
