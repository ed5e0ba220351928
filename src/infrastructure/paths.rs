//! Platform path resolution for roster's on-disk state.
//!
//! Everything the application persists lives under one data directory: the
//! credential slot file and the log file. Resolution follows the XDG
//! convention with an environment override for tests and unusual setups.

use std::path::PathBuf;

/// Returns the data directory for roster's persisted state.
///
/// Resolution order:
///
/// 1. `ROSTER_DATA_DIR`, taken verbatim
/// 2. `$XDG_DATA_HOME/roster`
/// 3. `$HOME/.local/share/roster`
/// 4. `.roster` relative to the working directory, as a last resort
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ROSTER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("roster");
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("roster");
        }
    }

    PathBuf::from(".roster")
}

/// Returns the path of the persisted credential slot file.
#[must_use]
pub fn token_path() -> PathBuf {
    data_dir().join("token.json")
}

/// Returns the path of the log file.
///
/// Logs go to a file because stdout belongs to the raw-mode UI.
#[must_use]
pub fn log_path() -> PathBuf {
    data_dir().join("roster.log")
}
