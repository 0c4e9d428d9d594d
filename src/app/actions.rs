//! Actions accepted by the user store.
//!
//! This module defines the [`Action`] type, the closed set of state transitions
//! the store understands. Every mutation of [`UserState`](super::UserState) goes
//! through one of these variants via [`UserStore::dispatch`](super::UserStore::dispatch),
//! which keeps the transition table in one place ([`reduce`](super::reduce)).
//!
//! # Example
//!
//! ```rust
//! use userdeck::app::{Action, UserStore};
//!
//! let mut store = UserStore::new();
//! store.dispatch(Action::set_loading(true));
//! store.dispatch(Action::set_error("boom"));
//! assert!(!store.state().loading);
//! ```

use crate::domain::User;
use crate::query::SortConfig;

/// State transitions understood by the user store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces the user list.
    ///
    /// Also ends any loading phase and clears the error.
    SetUsers(Vec<User>),

    /// Starts or ends a loading phase. Starting one clears the error.
    SetLoading(bool),

    /// Records (or clears) the error message. Always ends the loading phase.
    SetError(Option<String>),

    /// Selects a user for detail display.
    SelectUser(Option<User>),

    /// Stores the search box value.
    SetSearchTerm(String),

    /// Sets the active sort column, or clears sorting with `None`.
    SetSortConfig(Option<SortConfig>),

    /// Prepends a newly created user. Touches nothing else.
    AddUser(User),

    /// Clears the error message.
    ClearError,

    /// Marks whether the initial fetch has completed.
    SetHasFetchedUsers(bool),
}

impl Action {
    #[must_use]
    pub const fn set_users(users: Vec<User>) -> Self {
        Self::SetUsers(users)
    }

    #[must_use]
    pub const fn set_loading(loading: bool) -> Self {
        Self::SetLoading(loading)
    }

    pub fn set_error(message: impl Into<String>) -> Self {
        Self::SetError(Some(message.into()))
    }

    #[must_use]
    pub const fn select_user(user: Option<User>) -> Self {
        Self::SelectUser(user)
    }

    pub fn set_search_term(term: impl Into<String>) -> Self {
        Self::SetSearchTerm(term.into())
    }

    #[must_use]
    pub const fn set_sort_config(config: Option<SortConfig>) -> Self {
        Self::SetSortConfig(config)
    }

    #[must_use]
    pub const fn add_user(user: User) -> Self {
        Self::AddUser(user)
    }

    #[must_use]
    pub const fn clear_error() -> Self {
        Self::ClearError
    }

    #[must_use]
    pub const fn set_has_fetched_users(fetched: bool) -> Self {
        Self::SetHasFetchedUsers(fetched)
    }

    /// Short variant name used in tracing spans.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SetUsers(_) => "SET_USERS",
            Self::SetLoading(_) => "SET_LOADING",
            Self::SetError(_) => "SET_ERROR",
            Self::SelectUser(_) => "SELECT_USER",
            Self::SetSearchTerm(_) => "SET_SEARCH_TERM",
            Self::SetSortConfig(_) => "SET_SORT_CONFIG",
            Self::AddUser(_) => "ADD_USER",
            Self::ClearError => "CLEAR_ERROR",
            Self::SetHasFetchedUsers(_) => "SET_HAS_FETCHED_USERS",
        }
    }
}
