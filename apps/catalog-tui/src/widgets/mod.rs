//! TUI widgets

mod mode_indicator;
mod sort_icon;

pub use mode_indicator::ModeIndicator;
pub use sort_icon::SortIcon;
