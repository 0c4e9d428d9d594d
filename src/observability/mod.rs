//! Structured logging setup.
//!
//! All crate code logs through `tracing` macros and spans; this module installs
//! the subscriber that turns them into lines on stderr, keeping stdout free for
//! the rendered table.
//!
//! # Configuration
//!
//! The log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `USERDECK_ENABLE_DEBUG_LOGGING=true` selects `debug`
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early in the program:
//!
//! ```rust
//! use userdeck::observability::init_tracing;
//! use userdeck::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("dashboard initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup and level resolution

mod init;

pub use init::{default_directive, init_tracing};
