//! Footer component renderer.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Appends the results summary, dimmed and centered.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &footer.summary, cols);
    out.push_str(Theme::reset());
    out.push('\n');
}
