//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the table renderer,
//! supporting both built-in themes and custom themes loaded from TOML files.
//! It provides utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `default-dark`: Light text on a dark terminal (default)
//! - `default-light`: Dark text on a light terminal
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e5e7eb"
//! selection_fg = "#111827"
//! selection_bg = "#93c5fd"
//! text_normal = "#d1d5db"
//! text_dim = "#6b7280"
//! border = "#374151"
//! search_bar_border = "#3b82f6"
//! sort_indicator_fg = "#60a5fa"
//! empty_state_fg = "#9ca3af"
//! error_fg = "#f87171"
//! skeleton_fg = "#4b5563"
//! ```
//!
//! # Example
//!
//! ```rust
//! use userdeck::ui::Theme;
//!
//! let theme = Theme::from_name("default-light").unwrap();
//! let styled = format!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! assert!(styled.starts_with("\u{1b}[1m"));
//! ```

use crate::domain::{Result, UserdeckError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#e5e7eb").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,

    /// Color of the ▲/▼ marker on the sorted column.
    pub sort_indicator_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Fetch error message color.
    pub error_fg: String,

    /// Placeholder bar color while loading.
    pub skeleton_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `default-dark`, `default-light`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "default-dark" => include_str!("../../themes/default-dark.toml"),
            "default-light" => include_str!("../../themes/default-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`UserdeckError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| UserdeckError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| UserdeckError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, falling back to white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use userdeck::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`default-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("default-dark")
            .expect("Built-in default-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::from_name("default-dark").unwrap().name, "default-dark");
        let light = Theme::from_name("default-light").unwrap();
        assert_eq!(light.colors.header_bg.as_deref(), Some("#f9fafb"));
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn loads_theme_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let body = include_str!("../../themes/default-dark.toml").replace("default-dark", "custom");
        file.write_all(body.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors, Theme::default().colors);
    }

    #[test]
    fn bad_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 42").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(UserdeckError::Theme(_))));

        let missing = tempfile::tempdir().unwrap().path().join("nope.toml");
        assert!(matches!(Theme::from_file(missing), Err(UserdeckError::Theme(_))));
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#zzz"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("123456"), "\u{1b}[48;2;18;52;86m");
    }
}
