//! Data-fetch gateway for the remote user API.
//!
//! The store depends on the [`UserGateway`] trait rather than on HTTP, so tests
//! can inject a scripted gateway. [`HttpUserGateway`] is the production
//! implementation.
//!
//! # Transports
//!
//! - [`UserGateway::fetch_users`]: primary transport
//! - [`UserGateway::fetch_users_fallback`]: secondary transport, tried by the
//!   store only after the primary fails
//!
//! Both return the same error shapes ([`UserdeckError::Http`],
//! [`UserdeckError::Timeout`], [`UserdeckError::Network`],
//! [`UserdeckError::Parse`]).
//!
//! [`UserdeckError::Http`]: crate::domain::UserdeckError::Http
//! [`UserdeckError::Timeout`]: crate::domain::UserdeckError::Timeout
//! [`UserdeckError::Network`]: crate::domain::UserdeckError::Network
//! [`UserdeckError::Parse`]: crate::domain::UserdeckError::Parse

pub mod http;

use crate::domain::{Result, User};
use async_trait::async_trait;

pub use http::HttpUserGateway;

/// Source of the user list.
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Fetches users over the primary transport.
    async fn fetch_users(&self) -> Result<Vec<User>>;

    /// Fetches users over the secondary transport.
    async fn fetch_users_fallback(&self) -> Result<Vec<User>>;
}
