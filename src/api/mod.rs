//! Remote client for the directory backend.
//!
//! This module is the only place that talks HTTP. It centralizes the base
//! endpoint, attaches the stored bearer token to every outgoing call, and
//! exposes the four backend operations: authenticate, list (paginated),
//! update, and delete.
//!
//! # Backend contract
//!
//! - `POST /login` with `{email, password}` → `{token}` on success
//! - `GET /users?page={n}` → `{data: [...], total_pages: n, ...}`
//! - `PUT /users/{id}` with partial record fields → echoed fields
//! - `DELETE /users/{id}` → empty success body
//!
//! Any non-2xx status or transport failure is reported as one uniform
//! failure class; callers do not distinguish network-level from
//! application-level causes.

pub mod client;
pub mod models;

pub use client::ApiClient;
pub use models::{LoginRequest, LoginResponse, UserFields, UserPage};
