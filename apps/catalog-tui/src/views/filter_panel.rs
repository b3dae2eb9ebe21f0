//! Filter panel
//!
//! Three stacked controls:
//! - Owner tabs (`All` plus one tab per user)
//! - Search box
//! - Category toggles (`All` clears the selection)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use catalog_core::{Catalog, FilterSelection};

/// Filter panel renderer
pub struct FilterPanel;

impl FilterPanel {
    pub fn new() -> Self {
        Self
    }

    /// Total height the panel wants
    pub fn height() -> u16 {
        9
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        catalog: &Catalog,
        filters: &FilterSelection,
        search: &TextArea<'_>,
        category_cursor: usize,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Owner tabs
                Constraint::Length(3), // Search
                Constraint::Length(3), // Categories
            ])
            .split(area);

        self.render_owner_tabs(frame, chunks[0], catalog, filters);
        frame.render_widget(search, chunks[1]);
        self.render_categories(frame, chunks[2], catalog, filters, category_cursor);
    }

    fn render_owner_tabs(
        &self,
        frame: &mut Frame,
        area: Rect,
        catalog: &Catalog,
        filters: &FilterSelection,
    ) {
        let titles: Vec<Line> = std::iter::once("All")
            .chain(catalog.users().iter().map(|u| u.name.as_str()))
            .map(|name| Line::from(name.to_string()))
            .collect();

        let tabs = Tabs::new(titles)
            .select(owner_tab_index(catalog, filters))
            .block(Block::default().title("Owner [h/l]").borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }

    fn render_categories(
        &self,
        frame: &mut Frame,
        area: Rect,
        catalog: &Catalog,
        filters: &FilterSelection,
        category_cursor: usize,
    ) {
        let all_style = if filters.categories().is_empty() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };

        let mut spans = vec![Span::styled(" All ", all_style), Span::raw("  ")];
        for (i, category) in catalog.categories().iter().enumerate() {
            let mut style = if filters.is_category_selected(category.id) {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            if i == category_cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(format!(" {} ", category.title), style));
            spans.push(Span::raw(" "));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Categories [Tab/Space, a: all]")
                    .borders(Borders::ALL),
            );
        frame.render_widget(paragraph, area);
    }
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the active owner tab; `All` is tab 0
pub fn owner_tab_index(catalog: &Catalog, filters: &FilterSelection) -> usize {
    filters
        .owner()
        .and_then(|owner| catalog.users().iter().position(|u| u.id == owner))
        .map_or(0, |i| i + 1)
}
