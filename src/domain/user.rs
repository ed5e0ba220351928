//! User record domain model and search matching.
//!
//! This module defines the core `User` type representing one account from the
//! remote directory, along with the substring matching used by the
//! client-side search filter.

use serde::{Deserialize, Serialize};

/// A single user account loaded from the directory backend.
///
/// Records live in memory for the duration of one listing page: they are
/// instantiated when a page is fetched, mutated in place after a successful
/// update, removed after a successful delete, and discarded entirely when the
/// page changes.
///
/// # Fields
///
/// - `id`: backend-assigned identifier, unique and immutable once loaded
/// - `email`, `first_name`, `last_name`: mutable via the update operation
/// - `avatar`: URI of the account's avatar image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub avatar: String,
}

impl User {
    /// Returns the display name, `"{first_name} {last_name}"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Reports whether this record matches a search query.
    ///
    /// A record matches when the query is a case-insensitive substring of the
    /// first name, last name, or email. The empty query matches everything,
    /// so filtering with it is the identity.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }

        let query = query.to_lowercase();
        self.first_name.to_lowercase().contains(&query)
            || self.last_name.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::User;

    fn sample() -> User {
        User {
            id: 3,
            email: "emma.wong@reqres.in".to_string(),
            first_name: "Emma".to_string(),
            last_name: "Wong".to_string(),
            avatar: "https://reqres.in/img/faces/3-image.jpg".to_string(),
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(sample().matches(""));
    }

    #[test]
    fn matching_is_case_insensitive_across_fields() {
        let user = sample();
        assert!(user.matches("emma"));
        assert!(user.matches("WONG"));
        assert!(user.matches("reqres.in"));
        assert!(user.matches("mA.wO"));
    }

    #[test]
    fn non_substring_queries_do_not_match() {
        let user = sample();
        assert!(!user.matches("emmaw"));
        assert!(!user.matches("smith"));
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(sample().full_name(), "Emma Wong");
    }
}
