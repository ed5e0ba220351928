//! Login form component renderer.
//!
//! This module renders the credential entry screen: a centered bordered box
//! with email and password fields, a focus indicator, and an error line for
//! rejected attempts.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LoginView;

use super::footer::render_footer;

/// Width of the credential box, clamped to the terminal width.
const BOX_WIDTH: usize = 46;

/// Renders the login screen.
///
/// Layout structure:
/// ```text
/// [Title]
/// ┌────────────────────┐
/// │ Email:    ...      │
/// │ Password: ***      │
/// │                    │
/// │ [error line]       │
/// └────────────────────┘
/// [Footer]
/// ```
///
/// The focused field carries a `>` marker and a block cursor. The password is
/// rendered as one `*` per character. While a login request is in flight the
/// error line shows "Signing in...".
///
/// # Parameters
///
/// * `view` - Login view model
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
pub fn render_login(view: &LoginView, theme: &Theme, cols: usize, rows: usize) {
    let box_width = BOX_WIDTH.min(cols.saturating_sub(2));
    let inner_width = box_width.saturating_sub(2);
    let left = (cols.saturating_sub(box_width)) / 2;
    let top = (rows / 2).saturating_sub(4).max(2);

    let title = " roster ";
    let title_padding = (cols.saturating_sub(title.len())) / 2;
    position_cursor(top, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}{title}", " ".repeat(title_padding));
    print!("{}", Theme::reset());

    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(top + 2, left + 1);
    print!("{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let email_cursor = if view.focus == crate::app::LoginField::Email {
        "▌"
    } else {
        ""
    };
    let password_cursor = if view.focus == crate::app::LoginField::Password {
        "▌"
    } else {
        ""
    };
    let email_marker = if view.focus == crate::app::LoginField::Email {
        ">"
    } else {
        " "
    };
    let password_marker = if view.focus == crate::app::LoginField::Password {
        ">"
    } else {
        " "
    };

    let email_line = format!("{email_marker} Email:    {}{email_cursor}", view.email);
    let password_line = format!(
        "{password_marker} Password: {}{password_cursor}",
        "*".repeat(view.password_len)
    );

    render_box_line(top + 3, left, inner_width, &email_line, &theme.colors.text_normal, theme);
    render_box_line(
        top + 4,
        left,
        inner_width,
        &password_line,
        &theme.colors.text_normal,
        theme,
    );
    render_box_line(top + 5, left, inner_width, "", &theme.colors.text_normal, theme);

    let (status_line, status_color) = if view.submitting {
        ("Signing in...".to_string(), &theme.colors.text_dim)
    } else if let Some(error) = &view.error {
        (error.clone(), &theme.colors.error_fg)
    } else {
        (String::new(), &theme.colors.text_dim)
    };
    render_box_line(top + 6, left, inner_width, &status_line, status_color, theme);

    position_cursor(top + 7, left + 1);
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    render_footer(rows.saturating_sub(1), &view.footer, theme, cols);
}

/// Renders one bordered content line of the credential box.
fn render_box_line(
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
