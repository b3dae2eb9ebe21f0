//! Mode indicator widget for the title bar.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::mode::Mode;

/// Displays the current interaction mode, colour coded:
/// - Normal: Blue
/// - Insert: Green
/// - Command: Magenta
pub struct ModeIndicator {
    mode: Mode,
}

impl ModeIndicator {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Get the display color for a mode.
    pub fn mode_color(mode: Mode) -> Color {
        match mode {
            Mode::Normal => Color::Blue,
            Mode::Insert => Color::Green,
            Mode::Command => Color::Magenta,
        }
    }

    /// Render as a styled span for the title bar.
    pub fn as_span(&self) -> Span<'static> {
        Span::styled(format!("[{}]", self.mode.short_code()), self.style())
    }

    fn style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::mode_color(self.mode))
            .add_modifier(Modifier::BOLD)
    }
}
