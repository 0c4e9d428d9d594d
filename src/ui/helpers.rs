//! Shared rendering utilities.
//!
//! Widths here are measured in characters, not bytes, so multi-byte names pad
//! and truncate on character boundaries.

/// Appends `text` left-aligned in a field of `width` characters.
///
/// Text longer than the field is written as-is.
pub fn push_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    out.push_str(&" ".repeat(width.saturating_sub(text.chars().count())));
}

/// Appends `text` centered in a line of `cols` characters.
///
/// If the width cannot be split evenly the extra space goes on the right.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let len = text.chars().count().min(cols);
    let padding = cols.saturating_sub(len) / 2;
    out.push_str(&" ".repeat(padding));
    out.push_str(text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
}
