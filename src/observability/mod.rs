//! Structured logging with file-based output.
//!
//! This module provides the tracing infrastructure for the client. Because
//! stdout is owned by the raw-mode UI, log lines are written to a file under
//! the data directory instead of the terminal.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer (no ANSI) → roster.log
//! ```
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `ROSTER_LOG` environment variable (e.g., `debug`, `roster=trace`)
//! 2. Default: `"info"`
//!
//! # File Location
//!
//! Logs are written to `<data_dir>/roster.log` (typically
//! `~/.local/share/roster/roster.log`).
//!
//! # Usage
//!
//! Initialize tracing early in the process lifecycle, before the terminal is
//! put into raw mode:
//!
//! ```ignore
//! let config = Config::from_env();
//! roster::observability::init_tracing(&config);
//! tracing::debug!("client initialized");
//! ```

mod init;

pub use init::init_tracing;
