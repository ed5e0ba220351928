//! Input mode and field focus state types for the application.
//!
//! These enums determine which keybindings are active, how character input is
//! routed, and which form field receives edits.
//!
//! # State Machine
//!
//! On the directory screen the application operates in one of two primary
//! input modes:
//! - **Normal**: navigation and command mode
//! - **Search**: live filtering with typing or result-navigation focus
//!
//! The login form and the edit dialog route input by their own focused-field
//! enums rather than by input mode.

/// Focus state within search mode.
///
/// Determines whether search input is being typed or filtered results are
/// being navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to
    /// Navigating).
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts j/k for movement, enter to edit, d to delete, and / to return
    /// to Typing.
    Navigating,
}

/// Current input handling mode on the directory screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), enter/e (edit),
    /// d (delete), h/l (page), r (reload), L (log out), q (quit).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing or navigating results.
    Search(SearchFocus),
}

/// Focused field on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Focused field in the edit dialog.
///
/// Cycled with Tab/Shift+Tab in the declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    FirstName,
    LastName,
    Email,
}

impl DialogField {
    /// The next field in cycle order.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::FirstName => Self::LastName,
            Self::LastName => Self::Email,
            Self::Email => Self::FirstName,
        }
    }

    /// The previous field in cycle order.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::FirstName => Self::Email,
            Self::LastName => Self::FirstName,
            Self::Email => Self::LastName,
        }
    }
}
