//! Table component renderer.
//!
//! Renders the column header row with sort indicators, the user rows with
//! selection highlighting, and the placeholder rows shown while loading.

use crate::query::SortDirection;
use crate::ui::helpers::push_padded;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeader, DisplayRow};

/// Appends the column header row.
///
/// Sortable columns are bold; the active sort column carries a ▲ or ▼ in the
/// theme's indicator color.
pub fn render_table_headers(out: &mut String, columns: &[ColumnHeader], theme: &Theme) {
    for column in columns {
        if column.sortable {
            out.push_str(Theme::bold());
        }
        out.push_str(&Theme::fg(&theme.colors.header_fg));

        let label = column.column.label();
        out.push_str(label);
        let mut used = label.chars().count();

        if let Some(direction) = column.direction {
            let arrow = match direction {
                SortDirection::Asc => " ▲",
                SortDirection::Desc => " ▼",
            };
            out.push_str(&Theme::fg(&theme.colors.sort_indicator_fg));
            out.push_str(arrow);
            used += 2;
        }

        out.push_str(&" ".repeat(column.width.saturating_sub(used)));
        out.push_str(Theme::reset());
    }
    out.push('\n');
}

/// Appends one line per row.
///
/// The selected row is drawn with the selection colors across the full width.
pub fn render_table_rows(
    out: &mut String,
    rows: &[DisplayRow],
    columns: &[ColumnHeader],
    theme: &Theme,
    cols: usize,
) {
    for row in rows {
        if row.is_selected {
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(&theme.colors.selection_bg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
        }

        let mut line_len = 0;
        for (cell, column) in row.cells.iter().zip(columns) {
            push_padded(out, cell, column.width);
            line_len += column.width.max(cell.chars().count());
        }
        out.push_str(&" ".repeat(cols.saturating_sub(line_len)));

        out.push_str(Theme::reset());
        out.push('\n');
    }
}

/// Appends `count` placeholder rows of dimmed bars.
pub fn render_skeleton(out: &mut String, count: usize, columns: &[ColumnHeader], theme: &Theme) {
    for _ in 0..count {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.skeleton_fg));
        for column in columns {
            let bar = "░".repeat(column.width.saturating_sub(2).max(1));
            push_padded(out, &bar, column.width);
        }
        out.push_str(Theme::reset());
        out.push('\n');
    }
}
