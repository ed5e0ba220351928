//! Edit dialog component renderer.
//!
//! This module renders the modal edit dialog as a centered bordered box drawn
//! over the table, with one line per editable field, a focus indicator, and
//! an error line for rejected submissions.

use crate::app::DialogField;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DialogView;

/// Width of the dialog box, clamped to the terminal width.
const BOX_WIDTH: usize = 52;

/// Renders the modal edit dialog.
///
/// Drawn last so it overlays whatever the table rendered underneath. Layout
/// structure:
/// ```text
/// ┌─ Edit Janet Weaver ─────────┐
/// │ > First name: Janet▌        │
/// │   Last name:  Weaver        │
/// │   Email:      janet@...     │
/// │                             │
/// │ [error or progress line]    │
/// └─────────────────────────────┘
/// ```
///
/// # Parameters
///
/// * `dialog` - Dialog view model
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_dialog(dialog: &DialogView, theme: &Theme, cols: usize, rows: usize) {
    let box_width = BOX_WIDTH.min(cols.saturating_sub(2));
    let inner_width = box_width.saturating_sub(2);
    let left = (cols.saturating_sub(box_width)) / 2;
    let top = (rows / 2).saturating_sub(3).max(2);

    let border = Theme::fg(&theme.colors.search_bar_border);

    let title: String = dialog.title.chars().take(inner_width.saturating_sub(2)).collect();
    let fill = inner_width.saturating_sub(title.chars().count() + 1);
    position_cursor(top, left + 1);
    print!("{border}┌─{title}{}┐{}", "─".repeat(fill), Theme::reset());

    render_field_line(top + 1, left, inner_width, DialogField::FirstName, "First name:", &dialog.first_name, dialog, theme);
    render_field_line(top + 2, left, inner_width, DialogField::LastName, "Last name: ", &dialog.last_name, dialog, theme);
    render_field_line(top + 3, left, inner_width, DialogField::Email, "Email:     ", &dialog.email, dialog, theme);
    render_plain_line(top + 4, left, inner_width, "", &theme.colors.text_normal, theme);

    let (status_line, status_color) = if dialog.submitting {
        ("Saving...".to_string(), &theme.colors.text_dim)
    } else if let Some(error) = &dialog.error {
        (error.clone(), &theme.colors.error_fg)
    } else {
        (String::new(), &theme.colors.text_dim)
    };
    render_plain_line(top + 5, left, inner_width, &status_line, status_color, theme);

    position_cursor(top + 6, left + 1);
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());
}

/// Renders one editable field line with focus marker and cursor.
#[allow(clippy::too_many_arguments)]
fn render_field_line(
    row: usize,
    left: usize,
    inner_width: usize,
    field: DialogField,
    label: &str,
    value: &str,
    dialog: &DialogView,
    theme: &Theme,
) {
    let focused = dialog.focus == field;
    let marker = if focused { ">" } else { " " };
    let cursor = if focused { "▌" } else { "" };
    let text = format!("{marker} {label} {value}{cursor}");
    render_plain_line(row, left, inner_width, &text, &theme.colors.text_normal, theme);
}

/// Renders one bordered content line of the dialog box.
fn render_plain_line(
    row: usize,
    left: usize,
    inner_width: usize,
    text: &str,
    color: &str,
    theme: &Theme,
) {
    let border = Theme::fg(&theme.colors.search_bar_border);
    let clipped: String = text.chars().take(inner_width.saturating_sub(1)).collect();
    let padding = inner_width.saturating_sub(clipped.chars().count() + 1);

    position_cursor(row, left + 1);
    print!("{border}│");
    print!("{}", Theme::fg(color));
    print!(" {clipped}");
    print!("{}", " ".repeat(padding));
    print!("{border}│{}", Theme::reset());
}
