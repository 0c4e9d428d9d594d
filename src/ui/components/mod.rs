//! Composable UI component renderers.
//!
//! Each component appends its lines to a shared `String` buffer.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`search`]: Search input box
//! - [`table`]: Column headers, user rows and loading skeleton
//! - [`empty`]: Empty and error states
//! - [`footer`]: Results summary
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Table Headers]
//! [Border]
//! [Rows | Skeleton | Error | Empty State]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TableStatus, TableViewModel};

use empty::{render_empty_state, render_error};
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_skeleton, render_table_headers, render_table_rows};

/// Appends a horizontal border line.
fn render_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends the full table layout for `vm`.
///
/// The body depends on [`TableStatus`]: placeholder rows while loading, the
/// error or empty message when there is nothing to list, rows otherwise.
pub fn render_table_view(out: &mut String, vm: &TableViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.header, theme, cols);
    render_border(out, &theme.colors.border, cols);
    render_search_bar(out, &vm.search_bar, theme, cols);
    render_table_headers(out, &vm.columns, theme);
    render_border(out, &theme.colors.border, cols);

    match &vm.status {
        TableStatus::Loading { skeleton_rows } => {
            render_skeleton(out, *skeleton_rows, &vm.columns, theme);
        }
        TableStatus::Error(message) => render_error(out, message, theme, cols),
        TableStatus::Empty(empty) => render_empty_state(out, empty, theme, cols),
        TableStatus::Ready => render_table_rows(out, &vm.rows, &vm.columns, theme, cols),
    }

    render_border(out, &theme.colors.border, cols);
    render_footer(out, &vm.footer, theme, cols);
}
