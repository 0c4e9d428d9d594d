//! Top-level rendering entry point.
//!
//! # Example
//!
//! ```rust
//! use userdeck::app::UserState;
//! use userdeck::ui::{render, Theme};
//!
//! let state = UserState::default();
//! let vm = state.compute_viewmodel("", 80);
//! let screen = render(&vm, &Theme::default(), 80);
//! assert!(screen.contains("No users available."));
//! ```

use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TableViewModel, MAX_COLUMNS};

/// Renders a view model to ANSI-styled text, one terminal line per `\n`.
///
/// Does not clear the screen or manage cursor position.
#[must_use]
pub fn render(vm: &TableViewModel, theme: &Theme, cols: usize) -> String {
    let cols = cols.min(MAX_COLUMNS);
    let _span = tracing::trace_span!("render", rows = vm.rows.len(), cols).entered();

    let mut out = String::new();
    components::render_table_view(&mut out, vm, theme, cols);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::sample_user;
    use crate::app::UserState;
    use crate::query::{SortConfig, SortDirection, SortKey};

    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn ready_table_lists_rows_and_summary() {
        let state = UserState {
            users: vec![sample_user(1, "Leanne Graham"), sample_user(2, "Ervin Howell")],
            sort_config: Some(SortConfig::new(SortKey::Name, SortDirection::Asc)),
            ..UserState::default()
        };
        let screen = strip_ansi(&render(&state.compute_viewmodel("", 120), &Theme::default(), 120));

        assert!(screen.contains("Users (2)"));
        assert!(screen.contains("Name ▲"));
        assert!(screen.contains("Showing 2 of 2 users"));
        let ervin = screen.find("Ervin Howell").unwrap();
        let leanne = screen.find("Leanne Graham").unwrap();
        assert!(ervin < leanne);
    }

    #[test]
    fn loading_draws_skeleton_rows() {
        let state = UserState { loading: true, ..UserState::default() };
        let screen = strip_ansi(&render(&state.compute_viewmodel("", 60), &Theme::default(), 60));
        let skeleton_lines = screen.lines().filter(|line| line.starts_with('░')).count();
        assert_eq!(skeleton_lines, 5);
    }

    #[test]
    fn error_replaces_body() {
        let state = UserState {
            error: Some("Unable to fetch users from API".to_string()),
            ..UserState::default()
        };
        let screen = strip_ansi(&render(&state.compute_viewmodel("", 80), &Theme::default(), 80));
        assert!(screen.contains("Error: Unable to fetch users from API"));
    }

    #[test]
    fn oversized_width_is_capped() {
        let state = UserState::default();
        let screen = render(&state.compute_viewmodel("", usize::MAX), &Theme::default(), usize::MAX);
        let widest = strip_ansi(&screen).lines().map(|l| l.chars().count()).max().unwrap();
        assert_eq!(widest, MAX_COLUMNS);
    }

    #[test]
    fn search_without_matches_shows_message() {
        let state = UserState {
            users: vec![sample_user(1, "Leanne Graham")],
            ..UserState::default()
        };
        let screen = strip_ansi(&render(&state.compute_viewmodel("zzz", 80), &Theme::default(), 80));
        assert!(screen.contains("No users found matching your search."));
        assert!(screen.contains("Search: zzz"));
    }
}
