//! Pure state transition function for the user store.
//!
//! [`reduce`] is the only code that writes to [`UserState`]. It is synchronous,
//! performs no I/O, and enforces the loading/error invariants:
//!
//! - starting a loading phase clears the error
//! - recording an error ends the loading phase
//! - replacing the user list ends loading and clears the error
//!
//! # Example
//!
//! ```rust
//! use userdeck::app::{reduce, Action, UserState};
//!
//! let mut state = UserState::default();
//! reduce(&mut state, Action::SetLoading(true));
//! reduce(&mut state, Action::SetUsers(vec![]));
//! assert!(!state.loading);
//! assert!(state.error.is_none());
//! ```

use super::{Action, UserState};

/// Applies `action` to `state`.
pub fn reduce(state: &mut UserState, action: Action) {
    match action {
        Action::SetUsers(users) => {
            tracing::debug!(user_count = users.len(), "users replaced");
            state.users = users;
            state.loading = false;
            state.error = None;
        }
        Action::SetLoading(loading) => {
            state.loading = loading;
            if loading {
                state.error = None;
            }
        }
        Action::SetError(error) => {
            state.error = error;
            state.loading = false;
        }
        Action::SelectUser(user) => {
            state.selected_user = user;
        }
        Action::SetSearchTerm(term) => {
            state.search_term = term;
        }
        Action::SetSortConfig(config) => {
            state.sort_config = config;
        }
        Action::AddUser(user) => {
            tracing::debug!(user_id = user.id, "user prepended");
            state.users.insert(0, user);
        }
        Action::ClearError => {
            state.error = None;
        }
        Action::SetHasFetchedUsers(fetched) => {
            state.has_fetched_users = fetched;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::sample_user;
    use crate::query::{SortConfig, SortDirection, SortKey};

    #[test]
    fn loading_clears_error() {
        let mut state = UserState {
            error: Some("old".to_string()),
            ..UserState::default()
        };
        reduce(&mut state, Action::SetLoading(true));
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn ending_loading_keeps_error() {
        let mut state = UserState {
            error: Some("kept".to_string()),
            ..UserState::default()
        };
        reduce(&mut state, Action::SetLoading(false));
        assert_eq!(state.error.as_deref(), Some("kept"));
    }

    #[test]
    fn error_ends_loading() {
        let mut state = UserState::default();
        reduce(&mut state, Action::SetLoading(true));
        reduce(&mut state, Action::set_error("boom"));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn set_users_resets_loading_and_error() {
        let mut state = UserState {
            loading: true,
            error: Some("stale".to_string()),
            ..UserState::default()
        };
        reduce(&mut state, Action::SetUsers(vec![sample_user(1, "Alice")]));
        assert_eq!(state.users.len(), 1);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn add_user_prepends_and_touches_nothing_else() {
        let mut state = UserState {
            users: vec![sample_user(1, "Alice")],
            loading: true,
            error: Some("kept".to_string()),
            search_term: "al".to_string(),
            ..UserState::default()
        };
        reduce(&mut state, Action::AddUser(sample_user(2, "Bob")));

        let ids: Vec<i64> = state.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(state.loading);
        assert_eq!(state.error.as_deref(), Some("kept"));
        assert_eq!(state.search_term, "al");
    }

    #[test]
    fn simple_setters() {
        let mut state = UserState::default();
        let config = SortConfig::new(SortKey::Email, SortDirection::Desc);

        reduce(&mut state, Action::set_search_term("jo"));
        reduce(&mut state, Action::SetSortConfig(Some(config)));
        reduce(&mut state, Action::SelectUser(Some(sample_user(5, "Eve"))));
        reduce(&mut state, Action::SetHasFetchedUsers(true));

        assert_eq!(state.search_term, "jo");
        assert_eq!(state.sort_config, Some(config));
        assert_eq!(state.selected_user.as_ref().map(|u| u.id), Some(5));
        assert!(state.has_fetched_users);

        reduce(&mut state, Action::set_error("x"));
        reduce(&mut state, Action::ClearError);
        assert!(state.error.is_none());
    }
}
