//! Interactive table controller.
//!
//! [`UserTableView`] owns the search box's [`Debouncer`] and the table's query
//! options. Keystrokes go into the debouncer; once the input has been quiet for
//! the delay window, [`UserTableView::sync_search_term`] commits the debounced
//! value to the store. Header activation toggles the store's sort configuration
//! for sortable columns only.

use std::time::Duration;

use tokio::sync::watch;

use super::{Action, TableOptions, UserStore};
use crate::query::{Debouncer, SortConfig, DEFAULT_DEBOUNCE};
use crate::ui::viewmodel::{Column, TableViewModel};

/// Search and sort controls of the user table.
///
/// Must be created inside a tokio runtime.
///
/// # Example
///
/// ```rust
/// use userdeck::app::{UserStore, UserTableView};
/// use userdeck::ui::Column;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut store = UserStore::new();
/// let table = UserTableView::default();
///
/// assert!(table.toggle_sort(&mut store, Column::Name));
/// assert!(!table.toggle_sort(&mut store, Column::City));
/// # }
/// ```
#[derive(Debug)]
pub struct UserTableView {
    search: Debouncer<String>,
    options: TableOptions,
}

impl Default for UserTableView {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE, TableOptions::default())
    }
}

impl UserTableView {
    #[must_use]
    pub fn new(delay: Duration, options: TableOptions) -> Self {
        Self {
            search: Debouncer::new(String::new(), delay),
            options,
        }
    }

    /// Records a new search box value; the store sees it after the delay window.
    pub fn set_search(&mut self, value: impl Into<String>) {
        self.search.set(value.into());
    }

    /// Empties the search box and the store's term immediately.
    pub fn clear_search(&mut self, store: &mut UserStore) {
        self.search.flush(String::new());
        store.dispatch(Action::SetSearchTerm(String::new()));
    }

    /// Raw search box contents.
    #[must_use]
    pub fn search_input(&self) -> &str {
        self.search.raw()
    }

    /// Receiver notified when the debounced search term changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.search.subscribe()
    }

    /// Commits the debounced term to the store if it changed.
    ///
    /// Returns `true` if an action was dispatched.
    pub fn sync_search_term(&self, store: &mut UserStore) -> bool {
        let term = self.search.current();
        if term == store.state().search_term {
            return false;
        }
        store.dispatch(Action::SetSearchTerm(term));
        true
    }

    /// Applies a click on `column`'s header.
    ///
    /// Returns `false` and leaves the sort untouched for non-sortable columns.
    pub fn toggle_sort(&self, store: &mut UserStore, column: Column) -> bool {
        let key = column.sort_key();
        if !self.options.sortable.contains(&key) {
            tracing::debug!(column = column.label(), "column is not sortable");
            return false;
        }
        let next = SortConfig::toggle(store.state().sort_config, key);
        store.dispatch(Action::SetSortConfig(Some(next)));
        true
    }

    /// Returns the table to fetch order.
    pub fn clear_sort(&self, store: &mut UserStore) {
        store.dispatch(Action::SetSortConfig(None));
    }

    /// Installs the configured initial sort if the store has none yet.
    ///
    /// Returns `true` if an action was dispatched.
    pub fn seed_sort(&self, store: &mut UserStore) -> bool {
        match self.options.initial_sort {
            Some(initial) if store.state().sort_config.is_none() => {
                store.dispatch(Action::SetSortConfig(Some(initial)));
                true
            }
            _ => false,
        }
    }

    /// Clears the search box and the sort in one step.
    pub fn clear_all(&mut self, store: &mut UserStore) {
        self.clear_search(store);
        self.clear_sort(store);
    }

    /// Computes the view model from the store's committed search term.
    ///
    /// The search bar shows the raw input, which may be ahead of the filter.
    #[must_use]
    pub fn viewmodel(&self, store: &UserStore, cols: usize) -> TableViewModel {
        let state = store.state();
        let mut vm = state.compute_viewmodel_with(&state.search_term, cols, &self.options);
        self.search.raw().clone_into(&mut vm.search_bar.query);
        vm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::sample_user;
    use crate::query::{SortDirection, SortKey};
    use tokio::time::advance;

    fn store() -> UserStore {
        let mut store = UserStore::new();
        store.dispatch(Action::SetUsers(vec![
            sample_user(1, "John Doe"),
            sample_user(2, "Jane Smith"),
        ]));
        store
    }

    #[tokio::test(start_paused = true)]
    async fn search_reaches_store_after_window() {
        let mut store = store();
        let mut table = UserTableView::default();
        let mut rx = table.subscribe();

        table.set_search("jo");
        table.set_search("john");
        assert!(!table.sync_search_term(&mut store));
        assert_eq!(table.viewmodel(&store, 100).rows.len(), 2);
        assert_eq!(table.viewmodel(&store, 100).search_bar.query, "john");

        advance(Duration::from_millis(299)).await;
        rx.changed().await.unwrap();
        assert!(table.sync_search_term(&mut store));
        assert_eq!(store.state().search_term, "john");

        let vm = table.viewmodel(&store, 100);
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].user_id, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_search_is_immediate() {
        let mut store = store();
        let mut table = UserTableView::default();
        table.set_search("jane");
        table.clear_search(&mut store);

        assert_eq!(table.search_input(), "");
        assert_eq!(store.state().search_term, "");
        advance(Duration::from_secs(1)).await;
        assert!(!table.sync_search_term(&mut store));
    }

    #[tokio::test]
    async fn header_clicks_cycle_direction() {
        let mut store = store();
        let table = UserTableView::default();

        table.toggle_sort(&mut store, Column::Email);
        assert_eq!(
            store.state().sort_config,
            Some(SortConfig::new(SortKey::Email, SortDirection::Asc))
        );
        table.toggle_sort(&mut store, Column::Email);
        assert_eq!(
            store.state().sort_config,
            Some(SortConfig::new(SortKey::Email, SortDirection::Desc))
        );
        table.toggle_sort(&mut store, Column::Name);
        assert_eq!(
            store.state().sort_config,
            Some(SortConfig::new(SortKey::Name, SortDirection::Asc))
        );

        table.clear_sort(&mut store);
        assert_eq!(store.state().sort_config, None);
    }

    #[tokio::test]
    async fn initial_sort_seeds_only_an_unsorted_store() {
        let mut store = store();
        let table = UserTableView::new(
            DEFAULT_DEBOUNCE,
            TableOptions {
                initial_sort: Some(SortConfig::new(SortKey::Name, SortDirection::Desc)),
                ..TableOptions::default()
            },
        );

        assert!(table.seed_sort(&mut store));
        let ids: Vec<i64> = table.viewmodel(&store, 100).rows.iter().map(|r| r.user_id).collect();
        assert_eq!(ids, vec![1, 2]);

        table.toggle_sort(&mut store, Column::Email);
        assert!(!table.seed_sort(&mut store));
        assert_eq!(
            store.state().sort_config,
            Some(SortConfig::new(SortKey::Email, SortDirection::Asc))
        );
        assert!(!UserTableView::default().seed_sort(&mut store));
    }

    #[tokio::test(start_paused = true)]
    async fn clear_all_resets_search_and_sort() {
        let mut store = store();
        let mut table = UserTableView::default();
        table.toggle_sort(&mut store, Column::Name);
        table.set_search("jane");
        advance(Duration::from_millis(300)).await;
        tokio::task::yield_now().await;
        table.sync_search_term(&mut store);

        table.clear_all(&mut store);

        assert_eq!(table.search_input(), "");
        assert_eq!(store.state().search_term, "");
        assert_eq!(store.state().sort_config, None);
        assert_eq!(table.viewmodel(&store, 100).rows.len(), 2);
    }

    #[tokio::test]
    async fn unsortable_column_is_ignored() {
        let mut store = store();
        let table = UserTableView::default();
        assert!(!table.toggle_sort(&mut store, Column::Phone));
        assert_eq!(store.state().sort_config, None);
    }
}
