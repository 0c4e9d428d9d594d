//! User interface rendering layer with component-based architecture.
//!
//! This module turns table view models into ANSI-styled text through
//! composable rendering components. It provides theme support and
//! width-aware layout.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! UserState → compute_viewmodel → TableViewModel → render → ANSI String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable table state
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Character-width padding utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeColors};
pub use viewmodel::{
    Column, ColumnHeader, DisplayRow, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo,
    TableStatus, TableViewModel, MAX_COLUMNS, SKELETON_ROWS,
};
