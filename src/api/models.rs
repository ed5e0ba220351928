//! Wire types for the directory backend contract.
//!
//! These structs mirror the backend's JSON shapes exactly; everything else in
//! the application works with domain types. Unknown response fields are
//! ignored rather than rejected, since the backend is free to add metadata.

use serde::{Deserialize, Serialize};

use crate::domain::User;

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful response of `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Response of `GET /users?page={n}`.
///
/// `page` and `total_pages` are 1-indexed as reported by the backend. An
/// out-of-range request comes back with an empty `data` array, which is
/// surfaced as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPage {
    pub page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub data: Vec<User>,
}

/// Mutable fields of a user record, sent with `PUT /users/{id}` and echoed
/// back in its response.
///
/// Fields left `None` are omitted from the request body; what the backend
/// does with omitted fields is its own business.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserFields {
    /// Applies these fields onto an existing record, overwriting only the
    /// fields that are present. The identifier is never touched.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(first_name) = &self.first_name {
            user.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &self.last_name {
            user.last_name.clone_from(last_name);
        }
        if let Some(email) = &self.email {
            user.email.clone_from(email);
        }
    }
}
