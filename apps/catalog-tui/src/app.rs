//! Application state and main render loop

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_textarea::{CursorMove, TextArea};

use catalog_core::{SortDirective, SortField, UserId, ViewState};

use crate::keybindings::{normal_mode_action, Action};
use crate::mode::Mode;
use crate::views::{FilterPanel, ProductTable};
use crate::widgets::ModeIndicator;

/// Main application state
pub struct App {
    /// Current mode (NORMAL, INSERT, COMMAND)
    pub mode: Mode,
    /// Filter/sort controller and the visible rows
    pub view: ViewState,
    /// Search box contents; mirrors the name filter
    pub search: TextArea<'static>,
    /// Command input buffer
    pub command_buffer: String,
    /// Status message
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Category toggle under the cursor
    pub category_cursor: usize,
    /// Highlighted table row
    pub selected_row: usize,
    filter_panel: FilterPanel,
    product_table: ProductTable,
}

impl App {
    /// Create a new application instance
    pub fn new(view: ViewState) -> Self {
        let mut app = Self {
            mode: Mode::Normal,
            view,
            search: TextArea::default(),
            command_buffer: String::new(),
            status_message: None,
            show_help: false,
            category_cursor: 0,
            selected_row: 0,
            filter_panel: FilterPanel::new(),
            product_table: ProductTable::new(),
        };
        app.replace_search("");
        app
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                     // Title bar
                Constraint::Length(FilterPanel::height()), // Filters
                Constraint::Min(0),                        // Table
                Constraint::Length(1),                     // Command line
            ])
            .split(size);

        self.render_title_bar(frame, chunks[0]);

        self.filter_panel.render(
            frame,
            chunks[1],
            self.view.catalog(),
            self.view.filters(),
            &self.search,
            self.category_cursor,
        );

        self.product_table
            .render(frame, chunks[2], &self.view.table(), self.selected_row);

        self.render_command_line(frame, chunks[3]);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let total = self.view.catalog().products().len();
        let visible = self.view.visible().len();
        let sort_desc = describe_sort(self.view.sort());

        let mut spans = vec![
            ModeIndicator::new(self.mode).as_span(),
            Span::styled(
                " Product Categories ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("| {visible}/{total} products | {sort_desc} ")),
        ];
        if self.view.filters().is_active() {
            spans.push(Span::styled(
                format!("| {} ", self.filter_summary()),
                Style::default().fg(Color::Yellow),
            ));
        }

        let line = Line::from(spans);

        let bar = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(bar, area);
    }

    /// Short description of the active filters, e.g. `owner Anna, "mi", Fruits`
    fn filter_summary(&self) -> String {
        let catalog = self.view.catalog();
        let filters = self.view.filters();
        let mut parts = Vec::new();

        if let Some(user) = filters.owner().and_then(|id| catalog.user(id)) {
            parts.push(format!("owner {}", user.name));
        }
        if !filters.name_query().is_empty() {
            parts.push(format!("\"{}\"", filters.name_query()));
        }
        parts.extend(
            filters
                .categories()
                .iter()
                .filter_map(|&id| catalog.category(id))
                .map(|c| c.title.clone()),
        );

        parts.join(", ")
    }

    fn render_command_line(&self, frame: &mut Frame, area: Rect) {
        let content = match self.mode {
            Mode::Command => format!(":{}", self.command_buffer),
            Mode::Insert => "Type to filter by name | Enter/Esc to leave search".to_string(),
            Mode::Normal => self.status_message.clone().unwrap_or_else(|| {
                let mut hint = "/ search".to_string();
                if !self.view.filters().name_query().is_empty() {
                    hint.push_str(" | x clear search");
                }
                hint.push_str(" | r reset filters | 1-4 sort | ? help");
                hint
            }),
        };

        frame.render_widget(Paragraph::new(content), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
Product Categories - Help

Owner:
  h/l, Left/Right  - Previous/next owner tab
  0                - All owners

Search:
  / or i  - Focus search box (Enter/Esc to leave)
  x       - Clear search

Categories:
  Tab/Shift-Tab  - Move category cursor
  Space          - Toggle category under cursor
  a              - All categories (clear selection)

  r       - Reset owner and search (categories are kept)

Sorting (ascending -> descending -> off):
  1 ID   2 Product   3 Category   4 User

Commands (: to enter command mode):
  :owner <name|all>    :search <text>
  :category <title>    :categories
  :sort <field|none>   :reset
  :q                   - Quit

Other:
  j/k     - Move up/down in the table
  ?       - Toggle this help
  q       - Quit
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(70, 85, area);
        frame.render_widget(Clear, help_area);
        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, help_area);
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        // A status message lasts until the next key press.
        self.status_message = None;
        let quit = match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Insert => self.handle_insert_key(code, modifiers),
            Mode::Command => self.handle_command_key(code),
        };
        self.clamp_cursors();
        quit
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        let Some(action) = normal_mode_action(code) else {
            return false;
        };

        match action {
            Action::Quit => return true,
            Action::EnterCommandMode => {
                self.mode = Mode::Command;
                self.command_buffer.clear();
            }
            Action::FocusSearch => self.set_mode(Mode::Insert),
            Action::ClearSearch => {
                self.view.clear_name_query();
                self.replace_search("");
            }
            Action::PrevOwner => self.step_owner(false),
            Action::NextOwner => self.step_owner(true),
            Action::AllOwners => {
                self.view.select_owner(None);
            }
            Action::PrevCategory => self.step_category_cursor(false),
            Action::NextCategory => self.step_category_cursor(true),
            Action::ToggleCategory => {
                let id = self
                    .view
                    .catalog()
                    .categories()
                    .get(self.category_cursor)
                    .map(|c| c.id);
                if let Some(id) = id {
                    self.view.toggle_category(id);
                }
            }
            Action::ClearCategories => {
                self.view.clear_categories();
            }
            Action::ResetFilters => {
                self.view.reset_filters();
                self.replace_search("");
                self.status_message = Some("Owner and search filters reset".to_string());
            }
            Action::Sort(field) => {
                self.view.activate_sort(field);
            }
            Action::MoveUp => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            Action::MoveDown => {
                self.selected_row += 1;
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            Action::Cancel => {
                self.show_help = false;
            }
        }
        false
    }

    fn handle_insert_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Enter => self.set_mode(Mode::Normal),
            // The query is a single line.
            KeyCode::Tab => {}
            KeyCode::Char('m' | 'j') if modifiers.contains(KeyModifiers::CONTROL) => {}
            _ => {
                if self.search.input(KeyEvent::new(code, modifiers)) {
                    let query = self.search.lines().join("");
                    if self.search.lines().len() > 1 {
                        self.replace_search(&query);
                    }
                    self.view.set_name_query(query);
                }
            }
        }
        false
    }

    fn handle_command_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let should_quit = self.execute_command();
                self.mode = Mode::Normal;
                self.command_buffer.clear();
                if should_quit {
                    return true;
                }
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
            }
            _ => {}
        }
        false
    }

    fn execute_command(&mut self) -> bool {
        let buffer = self.command_buffer.trim().to_string();
        let (name, arg) = match buffer.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (buffer.as_str(), ""),
        };

        match name {
            "" => {}
            "q" | "quit" => return true,
            "reset" => {
                self.view.reset_filters();
                self.replace_search("");
                self.status_message = Some("Owner and search filters reset".to_string());
            }
            "sort" => match arg.parse::<SortField>() {
                Ok(field) => {
                    self.view.activate_sort(field);
                    self.status_message =
                        Some(format!("Sort: {}", describe_sort(self.view.sort())));
                }
                Err(e) => self.status_message = Some(e.to_string()),
            },
            "owner" => {
                if arg.is_empty() || arg.eq_ignore_ascii_case("all") {
                    self.view.select_owner(None);
                    self.status_message = Some("All owners".to_string());
                } else {
                    let owner = self.view.catalog().user_by_name(arg).map(|u| u.id);
                    match owner {
                        Some(id) => {
                            self.view.select_owner(Some(id));
                            self.status_message = Some(format!("Owner: {}", arg));
                        }
                        None => self.status_message = Some(format!("Unknown owner: {}", arg)),
                    }
                }
            }
            "category" | "cat" => {
                let category = self.view.catalog().category_by_title(arg).map(|c| c.id);
                match category {
                    Some(id) => {
                        self.view.toggle_category(id);
                    }
                    None => {
                        self.status_message = Some(format!("Unknown category: {}", arg));
                    }
                }
            }
            "categories" => {
                self.view.clear_categories();
            }
            "search" => {
                self.view.set_name_query(arg);
                self.replace_search(arg);
            }
            "help" => {
                self.show_help = true;
            }
            other => {
                self.status_message = Some(format!("Unknown command: {}", other));
            }
        }
        false
    }

    fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.style_search();
    }

    /// Move to the previous/next owner tab, wrapping; `All` is the first tab
    fn step_owner(&mut self, forward: bool) {
        let options: Vec<Option<UserId>> = std::iter::once(None)
            .chain(self.view.catalog().users().iter().map(|u| Some(u.id)))
            .collect();
        let current = options
            .iter()
            .position(|o| *o == self.view.filters().owner())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else if current == 0 {
            options.len() - 1
        } else {
            current - 1
        };
        self.view.select_owner(options[next]);
    }

    fn step_category_cursor(&mut self, forward: bool) {
        let count = self.view.catalog().categories().len();
        if count == 0 {
            return;
        }
        self.category_cursor = if forward {
            (self.category_cursor + 1) % count
        } else if self.category_cursor == 0 {
            count - 1
        } else {
            self.category_cursor - 1
        };
    }

    fn clamp_cursors(&mut self) {
        let rows = self.view.visible().len();
        self.selected_row = self.selected_row.min(rows.saturating_sub(1));
    }

    /// Replace the search box contents, cursor at the end
    fn replace_search(&mut self, text: &str) {
        self.search = TextArea::new(vec![text.to_string()]);
        self.search.move_cursor(CursorMove::End);
        self.search.set_placeholder_text("Search");
        self.search.set_cursor_line_style(Style::default());
        self.style_search();
    }

    fn style_search(&mut self) {
        let focused = self.mode == Mode::Insert;
        let border = if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        let cursor = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.search.set_block(
            Block::default()
                .title("Search [/]")
                .borders(Borders::ALL)
                .border_style(border),
        );
        self.search.set_cursor_style(cursor);
    }
}

/// Human-readable sort state, e.g. `Product desc`
fn describe_sort(sort: SortDirective) -> String {
    match sort.field() {
        SortField::None => "unsorted".to_string(),
        field if sort.is_reversed() => format!("{} desc", field.label()),
        field => format!("{} asc", field.label()),
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
