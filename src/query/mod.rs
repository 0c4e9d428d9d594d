//! List query pipeline: debounce, search and sort.
//!
//! The table view feeds the raw search box value through a [`Debouncer`], filters
//! the user list with [`filter_users`], then orders the result with
//! [`sort_users`]. Each stage is a pure function of its inputs except the
//! debouncer, which owns a tokio timer task.
//!
//! # Modules
//!
//! - [`debounce`]: Cancel-on-drop delayed propagation of a value
//! - [`search`]: Case-insensitive substring filtering
//! - [`sort`]: Stable type-aware sorting and column toggle rules

pub mod debounce;
pub mod search;
pub mod sort;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use search::{filter_users, SearchField, SearchStats};
pub use sort::{
    apply_sort, compare_values, is_sortable, locale_compare, sort_users, SortConfig,
    SortDirection, SortKey, SortValue,
};
