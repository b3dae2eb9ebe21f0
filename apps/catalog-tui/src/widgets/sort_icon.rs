//! Sort indicator glyph shown next to each column header.

use catalog_core::SortIndicator;
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Glyph for one header's sort state
pub struct SortIcon {
    indicator: SortIndicator,
}

impl SortIcon {
    pub fn new(indicator: SortIndicator) -> Self {
        Self { indicator }
    }

    pub fn glyph(indicator: SortIndicator) -> &'static str {
        match indicator {
            SortIndicator::Neutral => "↕",
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
        }
    }

    pub fn as_span(&self) -> Span<'static> {
        let style = match self.indicator {
            SortIndicator::Neutral => Style::default().fg(Color::DarkGray),
            _ => Style::default().fg(Color::Yellow),
        };
        Span::styled(Self::glyph(self.indicator), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(SortIcon::glyph(SortIndicator::Neutral), "↕");
        assert_eq!(SortIcon::glyph(SortIndicator::Ascending), "▲");
        assert_eq!(SortIcon::glyph(SortIndicator::Descending), "▼");
    }
}
