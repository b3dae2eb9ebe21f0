//! Product table view
//!
//! Draws a [`TableView`] from catalog-core: the no-matches message, or the
//! header row with sort icons and one line per product.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use catalog_core::{TableView, UserTone, NO_MATCHES_MESSAGE};

use crate::widgets::SortIcon;

/// Product table renderer
pub struct ProductTable;

impl ProductTable {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, table: &TableView, selected_row: usize) {
        let (headers, rows) = match table {
            TableView::NoMatches => {
                let paragraph = Paragraph::new(NO_MATCHES_MESSAGE)
                    .alignment(Alignment::Center)
                    .block(Block::default().title("Products").borders(Borders::ALL));
                frame.render_widget(paragraph, area);
                return;
            }
            TableView::Table { headers, rows } => (headers, rows),
        };

        let header = Row::new(headers.iter().enumerate().map(|(i, h)| {
            Cell::from(Line::from(vec![
                Span::styled(h.label, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                SortIcon::new(h.indicator).as_span(),
                Span::styled(format!(" [{}]", i + 1), Style::default().fg(Color::DarkGray)),
            ]))
        }))
        .bottom_margin(1);

        let body: Vec<Row> = rows
            .iter()
            .map(|row| {
                let mut cells = vec![
                    Cell::from(row.id.to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
                    Cell::from(row.name.clone()),
                ];
                // Unresolved relations drop their cell instead of leaving a blank.
                if let Some(category) = &row.category {
                    cells.push(Cell::from(category.text.clone()));
                }
                if let Some(user) = &row.user {
                    cells.push(
                        Cell::from(user.name.clone()).style(Style::default().fg(tone_color(user.tone))),
                    );
                }
                Row::new(cells)
            })
            .collect();

        let widths = [
            Constraint::Length(8),
            Constraint::Min(16),
            Constraint::Min(20),
            Constraint::Min(12),
        ];

        let title = format!("Products ({})", rows.len());
        let table = Table::new(body, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL))
            .row_highlight_style(Style::default().bg(Color::DarkGray));

        let selected = selected_row.min(rows.len().saturating_sub(1));
        let mut state = TableState::default().with_selected(Some(selected));
        frame.render_stateful_widget(table, area, &mut state);
    }
}

impl Default for ProductTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Foreground colour for a user cell
pub fn tone_color(tone: UserTone) -> Color {
    match tone {
        UserTone::Link => Color::Blue,
        UserTone::Danger => Color::Red,
        UserTone::Neutral => Color::Reset,
    }
}
