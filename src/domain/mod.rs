//! Domain layer for roster.
//!
//! This module contains the core domain types and business logic for the
//! application, independent of HTTP or terminal concerns. It follows
//! domain-driven design principles by keeping business rules isolated from
//! external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: User record domain model and search matching

pub mod error;
pub mod user;

pub use error::{Result, RosterError};
pub use user::User;
