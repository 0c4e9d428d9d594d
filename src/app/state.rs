//! User store state and table view model computation.
//!
//! This module defines [`UserState`], the single source of truth for the
//! dashboard session, along with the view model computation that turns a state
//! snapshot into a renderable table.
//!
//! # State Components
//!
//! - **Users**: Master list as fetched, with locally added users prepended
//! - **Loading / Error**: Lifecycle of the initial fetch (mutually exclusive)
//! - **Selection**: User picked for detail display
//! - **Search Term / Sort Config**: Table query settings
//! - **Fetch Guard**: `has_fetched_users`, set once the initial fetch succeeds
//!
//! # View Model Computation
//!
//! `compute_viewmodel` applies search with the given (debounced) term, then the
//! stored sort configuration, and sizes columns to the available width. The
//! state itself is never modified by view computation.
//!
//! # Example
//!
//! ```rust
//! use userdeck::app::UserState;
//!
//! let state = UserState::default();
//! let vm = state.compute_viewmodel("", 80);
//! assert_eq!(vm.footer.summary, "Showing 0 of 0 users");
//! ```

use crate::domain::User;
use crate::query::{
    apply_sort, filter_users, is_sortable, SearchField, SearchStats, SortConfig, SortDirection,
    SortKey,
};
use crate::ui::viewmodel::{
    Column, ColumnHeader, DisplayRow, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo,
    TableStatus, TableViewModel, MAX_COLUMNS, SKELETON_ROWS,
};

/// Relative column widths, matching [`Column::ALL`] order.
const COLUMN_WEIGHTS: [usize; 6] = [4, 3, 5, 4, 4, 3];

/// Columns never shrink below this many characters.
const MIN_COLUMN_WIDTH: usize = 6;

/// Central state of a dashboard session.
///
/// Mutated only by [`reduce`](super::reduce) through
/// [`UserStore::dispatch`](super::UserStore::dispatch).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserState {
    /// All known users, newest additions first.
    pub users: Vec<User>,

    /// `true` while the initial fetch is in flight. Never set together with `error`.
    pub loading: bool,

    /// Message describing the last fetch failure.
    pub error: Option<String>,

    /// User picked for detail display.
    pub selected_user: Option<User>,

    /// Search box value as last committed to the store.
    pub search_term: String,

    /// Active sort, or `None` for fetch order.
    pub sort_config: Option<SortConfig>,

    /// Guards the initial fetch so it runs at most once per session.
    pub has_fetched_users: bool,
}

/// Query settings for the table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub search_fields: Vec<SearchField>,
    pub sortable: Vec<SortKey>,
    /// Sort installed by [`UserTableView::seed_sort`](super::UserTableView::seed_sort).
    pub initial_sort: Option<SortConfig>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            search_fields: SearchField::DEFAULT.to_vec(),
            sortable: SortKey::DEFAULT_SORTABLE.to_vec(),
            initial_sort: None,
        }
    }
}

impl UserState {
    /// Returns the users matching `search_term`, ordered by the active sort.
    #[must_use]
    pub fn visible_users(&self, search_term: &str, fields: &[SearchField]) -> Vec<User> {
        let filtered = filter_users(&self.users, search_term, fields);
        apply_sort(&filtered, self.sort_config)
    }

    /// Computes the table view model with default search fields and sortable columns.
    ///
    /// # Parameters
    ///
    /// * `search_term` - Debounced search box value
    /// * `cols` - Available width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, search_term: &str, cols: usize) -> TableViewModel {
        self.compute_viewmodel_with(search_term, cols, &TableOptions::default())
    }

    /// Computes the table view model.
    ///
    /// # Status Precedence
    ///
    /// 1. `Loading` while the fetch is in flight
    /// 2. `Error` when the fetch failed
    /// 3. `Empty` when there are no users, or none match the search
    /// 4. `Ready` otherwise
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with the user count and query length.
    #[must_use]
    pub fn compute_viewmodel_with(
        &self,
        search_term: &str,
        cols: usize,
        options: &TableOptions,
    ) -> TableViewModel {
        let _span = tracing::debug_span!("compute_viewmodel",
            total_users = self.users.len(),
            query_len = search_term.len()
        ).entered();

        let visible = self.visible_users(search_term, &options.search_fields);
        let stats = SearchStats::new(self.users.len(), visible.len(), search_term);
        let widths = column_widths(cols);

        let columns = Column::ALL
            .iter()
            .zip(&widths)
            .map(|(&column, &width)| self.compute_column_header(column, width, &options.sortable))
            .collect();

        let status = self.compute_status(&stats);
        let rows = if status == TableStatus::Ready {
            visible
                .iter()
                .map(|user| self.compute_display_row(user, &widths))
                .collect()
        } else {
            vec![]
        };

        TableViewModel {
            header: HeaderInfo {
                title: format!(" Users ({}) ", self.users.len()),
            },
            columns,
            rows,
            status,
            search_bar: SearchBarInfo {
                query: search_term.to_string(),
                placeholder: "Search by name, email, or username...".to_string(),
            },
            footer: FooterInfo {
                summary: format!("Showing {} of {} users", stats.filtered, stats.total),
            },
            stats,
        }
    }

    fn compute_status(&self, stats: &SearchStats) -> TableStatus {
        if self.loading {
            return TableStatus::Loading { skeleton_rows: SKELETON_ROWS };
        }
        if let Some(error) = &self.error {
            return TableStatus::Error(error.clone());
        }
        if self.users.is_empty() {
            return TableStatus::Empty(EmptyState {
                message: "No users available.".to_string(),
                subtitle: "Add a user to get started".to_string(),
            });
        }
        if !stats.has_results {
            return TableStatus::Empty(EmptyState {
                message: "No users found matching your search.".to_string(),
                subtitle: format!("No results for \"{}\"", stats.search_term.trim()),
            });
        }
        TableStatus::Ready
    }

    fn compute_column_header(&self, column: Column, width: usize, sortable: &[SortKey]) -> ColumnHeader {
        let key = column.sort_key();
        let direction = SortConfig::direction_for(self.sort_config, key);
        let label = match direction {
            Some(SortDirection::Asc) => format!("{} ▲", column.label()),
            Some(SortDirection::Desc) => format!("{} ▼", column.label()),
            None => column.label().to_string(),
        };

        ColumnHeader {
            column,
            label,
            sortable: is_sortable(sortable, key),
            direction,
            width,
        }
    }

    fn compute_display_row(&self, user: &User, widths: &[usize]) -> DisplayRow {
        let cells = Column::ALL
            .iter()
            .zip(widths)
            .map(|(column, &width)| truncate(column.cell(user), width.saturating_sub(1)))
            .collect();

        DisplayRow {
            user_id: user.id,
            cells,
            is_selected: self.selected_user.as_ref().is_some_and(|s| s.id == user.id),
        }
    }
}

/// Splits `cols` (at most [`MAX_COLUMNS`]) across the columns by weight.
fn column_widths(cols: usize) -> Vec<usize> {
    let cols = cols.min(MAX_COLUMNS);
    let total: usize = COLUMN_WEIGHTS.iter().sum();
    COLUMN_WEIGHTS
        .iter()
        .map(|weight| (cols * weight / total).max(MIN_COLUMN_WIDTH))
        .collect()
}

/// Shortens `text` to at most `max` characters, marking the cut with "...".
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
