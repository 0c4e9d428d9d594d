//! View model types representing renderable table state.
//!
//! View models are computed from a [`UserState`](crate::app::UserState)
//! snapshot by `compute_viewmodel` and consumed by the renderer. They contain no
//! business logic, only display-ready data: truncated cell text, sort
//! indicators, and the status that decides which body is drawn.
//!
//! # Example
//!
//! ```rust
//! use userdeck::app::UserState;
//! use userdeck::ui::TableStatus;
//!
//! let state = UserState { loading: true, ..UserState::default() };
//! let vm = state.compute_viewmodel("", 80);
//! assert!(matches!(vm.status, TableStatus::Loading { skeleton_rows: 5 }));
//! ```

use crate::domain::User;
use crate::query::{SearchStats, SortDirection, SortKey};

/// Number of placeholder rows drawn while users are loading.
pub const SKELETON_ROWS: usize = 5;

/// Widest table laid out or drawn; larger widths are clamped to this.
pub const MAX_COLUMNS: usize = 1000;

/// Complete view model for the user table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel {
    /// Title bar information.
    pub header: HeaderInfo,

    /// Column headers, in display order.
    pub columns: Vec<ColumnHeader>,

    /// Visible rows after search and sort. Empty unless status is `Ready`.
    pub rows: Vec<DisplayRow>,

    /// Which body the renderer draws.
    pub status: TableStatus,

    /// Search box contents.
    pub search_bar: SearchBarInfo,

    /// Results summary shown under the table.
    pub footer: FooterInfo,

    /// Raw counts behind the footer text.
    pub stats: SearchStats,
}

/// Body state of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableStatus {
    /// The initial fetch is in flight; draw placeholder rows.
    Loading {
        /// Number of placeholder rows.
        skeleton_rows: usize,
    },
    /// The fetch failed; the message replaces the table body.
    Error(String),
    /// Nothing to show, either because there are no users or nothing matched.
    Empty(EmptyState),
    /// Rows are available.
    Ready,
}

/// A table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Username,
    Email,
    Phone,
    Company,
    City,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Username,
        Self::Email,
        Self::Phone,
        Self::Company,
        Self::City,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Company => "Company",
            Self::City => "City",
        }
    }

    /// Sort key applied when this column's header is activated.
    #[must_use]
    pub const fn sort_key(self) -> SortKey {
        match self {
            Self::Name => SortKey::Name,
            Self::Username => SortKey::Username,
            Self::Email => SortKey::Email,
            Self::Phone => SortKey::Phone,
            Self::Company => SortKey::Company,
            Self::City => SortKey::Address,
        }
    }

    /// Cell text of `user` in this column.
    #[must_use]
    pub fn cell(self, user: &User) -> &str {
        match self {
            Self::Name => &user.name,
            Self::Username => &user.username,
            Self::Email => &user.email,
            Self::Phone => &user.phone,
            Self::Company => &user.company.name,
            Self::City => &user.address.city,
        }
    }
}

/// Header cell of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub column: Column,
    /// Column label with the sort indicator appended when active.
    pub label: String,
    /// Whether activating this header changes the sort.
    pub sortable: bool,
    /// Direction if this column drives the current sort.
    pub direction: Option<SortDirection>,
    /// Display width in characters.
    pub width: usize,
}

/// One rendered user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub user_id: i64,
    /// Cell text per column, already truncated to the column width.
    pub cells: Vec<String>,
    /// Whether this row is the store's selected user.
    pub is_selected: bool,
}

/// Title bar text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Results summary, e.g. "Showing 3 of 10 users".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub summary: String,
}

/// Message shown instead of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search box contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: String,
}
