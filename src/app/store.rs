//! Explicitly owned user store.
//!
//! [`UserStore`] wraps [`UserState`] and exposes [`UserStore::dispatch`] as the
//! only way to change it. The store also owns the initial fetch lifecycle: it
//! asks a [`UserGateway`] for users once per session, falling back to the
//! secondary transport when the primary fails.
//!
//! # Fetch Lifecycle
//!
//! ```text
//! load_users ──▶ has_fetched_users? ──yes──▶ no-op
//!                     │ no
//!                     ▼
//!               SET_LOADING(true)
//!                     │
//!               primary ──ok──┐
//!                 │ err       │
//!               fallback ─ok──┤
//!                 │ err       ▼
//!               SET_ERROR   SET_USERS + SET_HAS_FETCHED_USERS(true)
//! ```

use super::{reduce, Action, UserState};
use crate::domain::{User, UserdeckError, FETCH_UNAVAILABLE_MESSAGE};
use crate::gateway::UserGateway;

/// State container for one dashboard session.
///
/// # Example
///
/// ```rust
/// use userdeck::app::{Action, UserStore};
///
/// let mut store = UserStore::new();
/// store.dispatch(Action::set_search_term("john"));
/// assert_eq!(store.state().search_term, "john");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    state: UserState,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `state`.
    #[must_use]
    pub const fn with_state(state: UserState) -> Self {
        Self { state }
    }

    /// Read-only view of the current state.
    #[must_use]
    pub const fn state(&self) -> &UserState {
        &self.state
    }

    /// Applies `action` synchronously.
    pub fn dispatch(&mut self, action: Action) {
        let _span = tracing::debug_span!("dispatch", action = action.kind()).entered();
        reduce(&mut self.state, action);
    }

    /// Runs the initial user fetch unless it already succeeded.
    ///
    /// On failure of both transports the store holds the error message
    /// `"Unable to fetch users from API"`, `loading` is `false`, and the user
    /// list is left as it was. A failed load may be retried by calling this
    /// again.
    pub async fn load_users<G>(&mut self, gateway: &G)
    where
        G: UserGateway + ?Sized,
    {
        if self.state.has_fetched_users {
            tracing::debug!("users already fetched, skipping load");
            return;
        }

        self.dispatch(Action::SetLoading(true));

        match fetch_with_fallback(gateway).await {
            Ok(users) => {
                tracing::info!(user_count = users.len(), "users loaded");
                self.dispatch(Action::SetUsers(users));
                self.dispatch(Action::SetHasFetchedUsers(true));
            }
            Err(err) => {
                tracing::error!(error = %err, "all fetch transports failed");
                self.dispatch(Action::set_error(FETCH_UNAVAILABLE_MESSAGE));
            }
        }
    }
}

async fn fetch_with_fallback<G>(gateway: &G) -> Result<Vec<User>, UserdeckError>
where
    G: UserGateway + ?Sized,
{
    match gateway.fetch_users().await {
        Ok(users) => return Ok(users),
        Err(err) => tracing::warn!(error = %err, "primary fetch failed, trying fallback"),
    }

    gateway.fetch_users_fallback().await.map_err(|err| {
        tracing::warn!(error = %err, "fallback fetch failed");
        UserdeckError::Unavailable
    })
}
