//! Case-insensitive substring search over user fields.

use crate::domain::User;
use serde::{Deserialize, Serialize};

/// User fields the search box can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Name,
    Username,
    Email,
    Phone,
    Website,
}

impl SearchField {
    /// Fields searched unless configured otherwise.
    pub const DEFAULT: [Self; 3] = [Self::Name, Self::Email, Self::Username];

    fn value(self, user: &User) -> Option<&str> {
        match self {
            Self::Name => Some(&user.name),
            Self::Username => Some(&user.username),
            Self::Email => Some(&user.email),
            Self::Phone => Some(&user.phone),
            Self::Website => user.website.as_deref(),
        }
    }
}

/// Returns `true` if any of `fields` contains `needle_lower`.
///
/// `needle_lower` must already be lowercased.
fn matches(user: &User, needle_lower: &str, fields: &[SearchField]) -> bool {
    fields.iter().any(|field| {
        field
            .value(user)
            .is_some_and(|value| value.to_lowercase().contains(needle_lower))
    })
}

/// Filters users whose configured fields contain `query`.
///
/// The query is trimmed; an empty or whitespace-only query returns the full
/// list. Matching is case-insensitive and succeeds if any one field matches.
///
/// # Example
///
/// ```rust
/// use userdeck::query::{filter_users, SearchField};
///
/// let users = vec![];
/// assert!(filter_users(&users, "john", &SearchField::DEFAULT).is_empty());
/// ```
#[must_use]
pub fn filter_users(users: &[User], query: &str, fields: &[SearchField]) -> Vec<User> {
    let _span = tracing::debug_span!("filter_users",
        total_users = users.len(),
        query_len = query.len()
    ).entered();

    let needle = query.trim();
    if needle.is_empty() {
        return users.to_vec();
    }

    let needle_lower = needle.to_lowercase();
    let filtered: Vec<User> = users
        .iter()
        .filter(|user| matches(user, &needle_lower, fields))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "search filter applied");
    filtered
}

/// Summary of a search over a user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats {
    pub total: usize,
    pub filtered: usize,
    pub has_results: bool,
    pub has_search_term: bool,
    pub search_term: String,
}

impl SearchStats {
    #[must_use]
    pub fn new(total: usize, filtered: usize, search_term: &str) -> Self {
        Self {
            total,
            filtered,
            has_results: filtered > 0,
            has_search_term: !search_term.trim().is_empty(),
            search_term: search_term.to_string(),
        }
    }
}
