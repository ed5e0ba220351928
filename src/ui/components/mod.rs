//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with record count
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`table`]: User list with columns (ID, NAME, EMAIL)
//! - [`status`]: Status row with pagination and transient notices
//! - [`empty`]: Empty state message for pages with no displayable records
//! - [`login`]: Credential entry form
//! - [`dialog`]: Modal edit dialog drawn over the table
//!
//! # Layout Modes
//!
//! The module provides the high-level layout functions consumed by the
//! renderer:
//!
//! - [`render_normal_mode`]: Header + Table + Status + Footer
//! - [`render_search_mode`]: Header + `SearchBar` + Table + Status + Footer
//! - [`render_message_mode`]: Header + centered message + Footer (loading and
//!   fetch-error states)
//! - [`render_login`]: Centered credential form

mod dialog;
mod empty;
mod footer;
mod header;
mod login;
mod search;
mod status;
mod table;

pub use dialog::render_dialog;
pub use empty::render_empty_state;
pub use login::render_login;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DirectoryView, SearchBarInfo};

use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use status::render_status_row;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/table, table/footer).
///
/// # Parameters
///
/// * `row` - Row position to render the border (1-indexed)
/// * `color` - Hex color for the border
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the bottom chrome shared by every directory layout: status row,
/// border, and footer.
fn render_bottom(vm: &DirectoryView, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let status_row = border_row.saturating_sub(1);

    render_status_row(status_row, vm, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the normal mode layout (no search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Table Headers]
/// [Table Rows]
/// [Blank padding to fill screen]
/// [Status Row]
/// [Border]
/// [Footer]
/// ```
///
/// # Parameters
///
/// * `vm` - View model with user rows and metadata
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_normal_mode(vm: &DirectoryView, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_table_headers(current_row, theme);
    let table_start = current_row;
    let _current_row = render_table_rows(current_row, &vm.rows, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(table_start + 1, empty, theme, cols);
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders the search mode layout (with search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Table Headers]
/// [Table Rows]
/// [Blank padding to fill screen]
/// [Status Row]
/// [Border]
/// [Footer]
/// ```
///
/// # Parameters
///
/// * `vm` - View model with user rows and metadata
/// * `search` - Search bar information (query text, focus)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_search_mode(
    vm: &DirectoryView,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    current_row = render_table_headers(current_row, theme);
    let table_start = current_row;
    let _current_row = render_table_rows(current_row, &vm.rows, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(table_start + 1, empty, theme, cols);
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders a centered single-line message between the header and footer.
///
/// Used for the loading indicator and for fetch failures, where no table is
/// displayable.
///
/// # Parameters
///
/// * `vm` - View model (header, footer)
/// * `message` - Text to center vertically and horizontally
/// * `color` - Hex color for the message
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_message_mode(
    vm: &DirectoryView,
    message: &str,
    color: &str,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    let _current_row = render_border(current_row, &theme.colors.border, cols);

    let msg_len = message.chars().count().min(cols);
    let padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(rows / 2, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{message}");
    print!("{}", Theme::reset());

    render_bottom(vm, theme, cols, rows);
}
