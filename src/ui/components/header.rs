//! Header component renderer.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Appends the title bar, centered across `cols` characters.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    push_centered(out, &header.title, cols);

    out.push_str(Theme::reset());
    out.push('\n');
}
