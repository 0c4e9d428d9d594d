//! Domain layer for the userdeck dashboard.
//!
//! This module contains the core domain types, independent of transport or
//! rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: User record, form data and new-user synthesis
//!
//! # Examples
//!
//! ```
//! use userdeck::domain::{Result, UserFormData, User};
//!
//! fn create_user(form: UserFormData) -> Result<User> {
//!     Ok(form.into_new_user())
//! }
//! ```

pub mod error;
pub mod user;

pub use error::{Result, UserdeckError, FETCH_UNAVAILABLE_MESSAGE};
pub use user::{
    generate_geo, generate_user_id, Address, AddressFormData, Company, CompanyFormData, Geo,
    User, UserFormData,
};
