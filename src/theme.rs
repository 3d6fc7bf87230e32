//! Colors and styles for the survey screens.
//!
//! ```rust
//! use promptpath::theme::{Colors, Styles};
//!
//! let heading = Styles::category();
//! assert_eq!(heading.fg, Some(Colors::CATEGORY));
//! ```

use ratatui::style::{Color, Modifier, Style};

/// Survey palette
pub struct Colors;

impl Colors {
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::Gray;
    pub const HINT: Color = Color::DarkGray;

    /// Step titles, answer labels, focused borders and key hints
    pub const ACCENT: Color = Color::Cyan;

    /// Result category headings and warnings
    pub const CATEGORY: Color = Color::Yellow;

    pub const OK: Color = Color::Green;
    pub const FAIL: Color = Color::Red;

    /// Unfilled part of the progress gauge
    pub const GAUGE_TRACK: Color = Color::Rgb(40, 40, 50);
}

/// Styles shared by the screens
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::TEXT)
    }

    /// Unfocused inputs and informational lines
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::TEXT_DIM)
    }

    /// Navigation bar action names
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::HINT)
    }

    pub fn title() -> Style {
        Style::default().fg(Colors::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn category() -> Style {
        Style::default().fg(Colors::CATEGORY).add_modifier(Modifier::BOLD)
    }

    /// Field border; highlighted while the field has focus
    pub fn border(focused: bool) -> Style {
        let color = if focused { Colors::ACCENT } else { Colors::HINT };
        Style::default().fg(color)
    }

    /// Cursor row of an option list
    pub fn cursor() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint() -> Style {
        Self::title()
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::OK)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::CATEGORY)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::FAIL)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Colors::OK).bg(Colors::GAUGE_TRACK)
    }
}
