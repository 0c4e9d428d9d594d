//! Empty and error state renderers.
//!
//! Both replace the table body with a centered message.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Appends the two-line empty state message.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// [blank line]
/// ```
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    out.push('\n');

    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    push_centered(out, &empty.message, cols);
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());
    out.push('\n');

    out.push('\n');
}

/// Appends the fetch error message.
pub fn render_error(out: &mut String, message: &str, theme: &Theme, cols: usize) {
    out.push('\n');
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.error_fg));
    push_centered(out, &format!("Error: {message}"), cols);
    out.push_str(Theme::reset());
    out.push('\n');
    out.push('\n');
}
