//! Userdeck: the core of a user-management dashboard.
//!
//! Userdeck provides:
//! - A one-shot user fetch over HTTP with a fallback transport
//! - A reducer-based user store with explicit ownership
//! - Debounced, case-insensitive search and stable, type-aware sorting
//! - A validated add-user form that synthesizes new users client-side
//! - ANSI table rendering with TOML themes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State container
//! │  - Actions and reducer                              │
//! │  - Store with once-only fetch                       │
//! │  - Add-user form controller                         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │   │ Gateway       │
//! │ (ui/)         │   │ (query/)      │   │ (gateway/)    │
//! │ - Rendering   │   │ - Search      │   │ - async HTTP  │
//! │ - Theming     │   │ - Sort        │   │ - blocking    │
//! │ - Components  │   │ - Debounce    │   │   fallback    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Validation Layers                         │
//! │  - User model and synthesis (domain/user)           │
//! │  - Error types (domain/error)                       │
//! │  - Declarative form rules (validation/)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: User store, reducer, form controller and view model computation
//! - [`domain`]: Core domain types (User, errors)
//! - [`gateway`]: HTTP data-fetch gateway
//! - [`query`]: Search, sort and debounce
//! - [`validation`]: Add-user form validation
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Configuration
//!
//! Configuration is read from environment variables; every API value has a
//! `_FALLBACK` twin consulted when the primary is unset:
//!
//! ```text
//! USERDECK_API_BASE_URL=https://jsonplaceholder.typicode.com
//! USERDECK_API_TIMEOUT=5000
//! USERDECK_USERS_ENDPOINT=/users
//! USERDECK_ENABLE_DEBUG_LOGGING=true
//! USERDECK_THEME=default-light
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use userdeck::{Config, HttpUserGateway, UserStore};
//!
//! # async fn run() -> userdeck::Result<()> {
//! let config = Config::from_env();
//! let gateway = HttpUserGateway::new(&config)?;
//!
//! let mut store = UserStore::new();
//! store.load_users(&gateway).await;
//!
//! let vm = store.state().compute_viewmodel("", 100);
//! print!("{}", userdeck::ui::render(&vm, &userdeck::load_theme(&config), 100));
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod gateway;
pub mod query;
pub mod validation;

pub mod ui;

pub mod observability;

pub use app::{reduce, Action, FormOptions, UserForm, UserState, UserStore, UserTableView};
pub use domain::{Result, User, UserFormData, UserdeckError};
pub use gateway::{HttpUserGateway, UserGateway};
pub use ui::Theme;

use domain::UserdeckError as Error;
use std::collections::BTreeMap;
use std::time::Duration;

const API_BASE_URL: &str = "USERDECK_API_BASE_URL";
const API_TIMEOUT: &str = "USERDECK_API_TIMEOUT";
const USERS_ENDPOINT: &str = "USERDECK_USERS_ENDPOINT";
const ENABLE_DEBUG_LOGGING: &str = "USERDECK_ENABLE_DEBUG_LOGGING";
const THEME: &str = "USERDECK_THEME";
const THEME_FILE: &str = "USERDECK_THEME_FILE";

/// Dashboard configuration resolved from environment-style key/value pairs.
///
/// Missing API values are kept as `None` here; the accessors
/// ([`Config::api_url`], [`Config::api_timeout`], [`Config::users_endpoint`])
/// fail with a [`UserdeckError::Config`] naming the variables involved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the user API, e.g. `https://jsonplaceholder.typicode.com`.
    pub api_base_url: Option<String>,

    /// Request timeout in milliseconds. Only positive values are accepted.
    pub api_timeout_ms: Option<u64>,

    /// Path of the users resource, appended to the base URL.
    pub users_endpoint: Option<String>,

    /// Enables debug-level logging when `RUST_LOG` is not set.
    pub debug_logging: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,
}

impl Config {
    /// Resolves configuration from a key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - API values: the primary key wins when set and non-empty, else `{KEY}_FALLBACK`
    /// - Timeout: the first of the two keys holding a positive integer
    /// - Debug logging: enabled only by the exact string `"true"`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use userdeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("USERDECK_API_BASE_URL_FALLBACK".to_string(), "http://api".to_string());
    /// map.insert("USERDECK_API_TIMEOUT".to_string(), "5000".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_base_url.as_deref(), Some("http://api"));
    /// assert_eq!(config.api_timeout_ms, Some(5000));
    /// assert!(!config.debug_logging);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            map.get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };
        let with_fallback = |key: &str| get(key).or_else(|| get(format!("{key}_FALLBACK").as_str()));

        let api_timeout_ms = [API_TIMEOUT.to_string(), format!("{API_TIMEOUT}_FALLBACK")]
            .iter()
            .filter_map(|key| get(key.as_str()))
            .find_map(|value| value.parse::<u64>().ok().filter(|ms| *ms > 0));

        Self {
            api_base_url: with_fallback(API_BASE_URL),
            api_timeout_ms,
            users_endpoint: with_fallback(USERS_ENDPOINT),
            debug_logging: map.get(ENABLE_DEBUG_LOGGING).is_some_and(|v| v == "true"),
            theme_name: get(THEME),
            theme_file: get(THEME_FILE),
        }
    }

    /// Resolves configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let map: BTreeMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with("USERDECK_"))
            .collect();
        Self::from_map(&map)
    }

    /// Joins the base URL with `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`UserdeckError::Config`] if no base URL is configured.
    pub fn api_url(&self, endpoint: &str) -> Result<String> {
        let base = self.api_base_url.as_deref().ok_or_else(|| {
            Error::Config(format!("{API_BASE_URL} or {API_BASE_URL}_FALLBACK is not set"))
        })?;
        Ok(format!("{base}{endpoint}"))
    }

    /// Request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`UserdeckError::Config`] if no positive timeout is configured.
    pub fn api_timeout(&self) -> Result<Duration> {
        self.api_timeout_ms.map(Duration::from_millis).ok_or_else(|| {
            Error::Config(format!("{API_TIMEOUT} or {API_TIMEOUT}_FALLBACK is not set"))
        })
    }

    /// Path of the users resource.
    ///
    /// # Errors
    ///
    /// Returns [`UserdeckError::Config`] if no endpoint is configured.
    pub fn users_endpoint(&self) -> Result<&str> {
        self.users_endpoint.as_deref().ok_or_else(|| {
            Error::Config(format!("{USERS_ENDPOINT} or {USERS_ENDPOINT}_FALLBACK is not set"))
        })
    }

    /// Lists every configuration problem; empty when the API settings are usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.api_base_url.is_none() {
            problems.push(format!("{API_BASE_URL} or {API_BASE_URL}_FALLBACK is not set"));
        }
        if self.api_timeout_ms.is_none() {
            problems.push(format!(
                "{API_TIMEOUT} or {API_TIMEOUT}_FALLBACK must be a positive number"
            ));
        }
        problems
    }
}

/// Resolves the render theme from configuration.
///
/// A theme file takes precedence over a theme name; anything that fails to load
/// falls back to the default theme with a debug log.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    )
}
