//! Application layer: user store, form controller and table controller.
//!
//! This module sits between the binary (main.rs) and the domain, query and
//! gateway layers. All session state lives in one explicitly owned
//! [`UserStore`] that callers pass by reference.
//!
//! # Architecture
//!
//! The store follows a unidirectional data flow pattern:
//!
//! ```text
//! Input → Controller (form / table) → Action → dispatch → reduce → UserState
//!                                                                     ↓
//!                                     Render ← TableViewModel ← compute_viewmodel
//! ```
//!
//! # Modules
//!
//! - [`actions`]: The closed set of state transitions
//! - [`reducer`]: Pure transition function enforcing the loading/error invariants
//! - [`state`]: State container and view model computation
//! - [`store`]: Owned store with the once-only initial fetch
//! - [`form`]: Add-user form controller
//! - [`table`]: Debounced search and sort toggles for the table
//!
//! # Example
//!
//! ```rust
//! use userdeck::app::{Action, UserStore};
//!
//! let mut store = UserStore::new();
//! store.dispatch(Action::SetLoading(true));
//! assert!(store.state().loading);
//! ```

pub mod actions;
pub mod form;
pub mod reducer;
pub mod state;
pub mod store;
pub mod table;

pub use actions::Action;
pub use form::{FormOptions, FormState, UserForm};
pub use reducer::reduce;
pub use state::{TableOptions, UserState};
pub use store::UserStore;
pub use table::UserTableView;
