//! Status row component renderer.
//!
//! This module renders the single status line above the footer, combining
//! pagination information (left-aligned) with transient operation notices
//! (right-aligned).

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DirectoryView;

/// Renders the status row at the specified row.
///
/// The left side shows "Page {n}/{total}" when pagination applies; it is
/// blank while a search query is active, since the remote page sequence is
/// not navigable then. The right side shows the latest operation notice,
/// colored by severity.
///
/// # Parameters
///
/// * `row` - Row position to render the status line (1-indexed)
/// * `vm` - View model (pagination, notice)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_status_row(row: usize, vm: &DirectoryView, theme: &Theme, cols: usize) -> usize {
    let left = vm
        .pagination
        .as_ref()
        .map_or_else(String::new, |p| format!(" Page {}/{}", p.page, p.total_pages));

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{left}");

    let mut used = left.chars().count();

    if let Some(notice) = &vm.notice {
        let text: String = notice.message.chars().take(cols.saturating_sub(used + 2)).collect();
        let text_len = text.chars().count();
        let gap = cols.saturating_sub(used + text_len + 1);
        print!("{}", " ".repeat(gap));
        let color = if notice.is_error {
            &theme.colors.error_fg
        } else {
            &theme.colors.success_fg
        };
        print!("{}", Theme::fg(color));
        print!("{text}");
        used += gap + text_len;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
