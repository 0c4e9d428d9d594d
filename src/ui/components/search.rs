//! Search bar component renderer.

use crate::ui::helpers::push_padded;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Appends the 3-line search box.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐
/// [margin] │ Search: ... │
/// [margin] └─────────────┘
/// ```
///
/// An empty query shows the placeholder text, dimmed.
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());
    out.push('\n');

    let (text, color) = if search.query.is_empty() {
        (format!(" {}", search.placeholder), &theme.colors.text_dim)
    } else {
        (format!(" Search: {}", search.query), &theme.colors.text_normal)
    };

    out.push_str(&margin);
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(color));
    push_padded(out, &text, inner_width);
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());
    out.push('\n');
}
