//! TUI views

mod filter_panel;
mod product_table;

pub use filter_panel::FilterPanel;
pub use product_table::ProductTable;
