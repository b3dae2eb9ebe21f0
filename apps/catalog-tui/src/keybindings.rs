//! Keybinding definitions

use catalog_core::SortField;
use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Enter command mode
    EnterCommandMode,
    /// Move focus into the search box
    FocusSearch,
    /// Empty the search box
    ClearSearch,
    /// Select the previous owner tab
    PrevOwner,
    /// Select the next owner tab
    NextOwner,
    /// Select the "All" owner tab
    AllOwners,
    /// Move the category cursor left
    PrevCategory,
    /// Move the category cursor right
    NextCategory,
    /// Toggle the category under the cursor
    ToggleCategory,
    /// Clear the category selection
    ClearCategories,
    /// Reset owner and name filters
    ResetFilters,
    /// Activate the sort control of a column
    Sort(SortField),
    /// Move up in the table
    MoveUp,
    /// Move down in the table
    MoveDown,
    /// Toggle help
    ToggleHelp,
    /// Close overlays
    Cancel,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::EnterCommandMode),
        KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::FocusSearch),
        KeyCode::Char('x') => Some(Action::ClearSearch),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevOwner),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::NextOwner),
        KeyCode::Char('0') => Some(Action::AllOwners),
        KeyCode::BackTab => Some(Action::PrevCategory),
        KeyCode::Tab => Some(Action::NextCategory),
        KeyCode::Char(' ') => Some(Action::ToggleCategory),
        KeyCode::Char('a') => Some(Action::ClearCategories),
        KeyCode::Char('r') => Some(Action::ResetFilters),
        KeyCode::Char('1') => Some(Action::Sort(SortField::Id)),
        KeyCode::Char('2') => Some(Action::Sort(SortField::Name)),
        KeyCode::Char('3') => Some(Action::Sort(SortField::Category)),
        KeyCode::Char('4') => Some(Action::Sort(SortField::Owner)),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}
