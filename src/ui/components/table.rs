//! Table component renderer.
//!
//! This module renders the user list as a three-column table with ID, NAME,
//! and EMAIL columns. It supports selection highlighting and search match
//! highlighting.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UserRow;

/// Fixed width of the ID column, including trailing gap.
const ID_COLUMN_WIDTH: usize = 6;

/// Fixed width of the NAME column, including trailing gap.
const NAME_COLUMN_WIDTH: usize = 28;

/// Renders the table column headers at the specified row.
///
/// Displays "ID", "NAME", and "EMAIL" column headers with bold styling and
/// theme colors.
///
/// # Parameters
///
/// * `row` - Row position to render the headers (1-indexed)
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<id_width$}{:<name_width$}{}",
        "ID",
        "NAME",
        "EMAIL",
        id_width = ID_COLUMN_WIDTH,
        name_width = NAME_COLUMN_WIDTH
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Parameters
///
/// * `row` - Starting row position for the table (1-indexed)
/// * `items` - List of user rows to render
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns (for padding)
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(row: usize, items: &[UserRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single table row at the specified row position.
///
/// Displays one user with:
/// - ID column (fixed width, left-aligned)
/// - NAME column (fixed width, left-aligned, truncated with ellipsis)
/// - EMAIL column (remaining width, left-aligned)
/// - Selection highlighting (full row background)
/// - Search match highlighting (character ranges)
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Normal text color
///
/// The row is padded to fill the entire terminal width to ensure consistent
/// selection background rendering.
fn render_table_row(row: usize, item: &UserRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let id_text = item.id.to_string();
    print!("{id_text}");
    print!(
        "{}",
        " ".repeat(ID_COLUMN_WIDTH.saturating_sub(id_text.chars().count()))
    );

    let name = truncate(&item.name, NAME_COLUMN_WIDTH.saturating_sub(2));
    // Highlight ranges were computed on the untruncated name; drop any that
    // no longer fit.
    let name_len = name.chars().count();
    let name_highlights: Vec<(usize, usize)> = item
        .name_highlights
        .iter()
        .copied()
        .filter(|&(_, end)| end <= name_len)
        .collect();
    helpers::render_highlighted_text(&name, &name_highlights, theme, item.is_selected);
    restore_row_style(item.is_selected, theme);
    print!("{}", " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(name_len)));

    helpers::render_highlighted_text(&item.email, &item.email_highlights, theme, item.is_selected);
    restore_row_style(item.is_selected, theme);

    let line_len = ID_COLUMN_WIDTH + NAME_COLUMN_WIDTH + item.email.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Re-applies the row's base styling after a highlight reset the attributes.
fn restore_row_style(is_selected: bool, theme: &Theme) {
    if is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
}

/// Truncates text to the given character budget, appending an ellipsis when
/// anything was cut.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("Janet", 10), "Janet");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("Rachel Howell-Winterbottom", 10), "Rachel ...");
    }
}
