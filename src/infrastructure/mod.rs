//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for locating the application's on-disk
//! footprint: the data directory, the persisted credential slot, and the
//! log file.

pub mod paths;

pub use paths::{data_dir, log_path, token_path};
