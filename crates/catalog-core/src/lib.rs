//! Catalog Core - product catalog filtering and sorting
//!
//! This crate provides everything the catalog viewer needs below the screen:
//!
//! - **Model**: Users, categories, products, and the enriched product join
//! - **Dataset**: Built-in JSON fixtures and directory loading
//! - **Join**: Resolves product -> category -> owner once at startup
//! - **Filter**: Owner, name, and category predicates (AND semantics)
//! - **Sort**: Sort directive with the ascending/descending/cleared cycle
//! - **Collate**: Locale-aware string ordering
//! - **Reconcile**: Full re-derivation of the visible rows
//! - **View**: The view-state controller that owns filters and sort
//! - **Table**: Render model with sort indicators and optional cells
//! - **Config**: TOML/JSON configuration
//!
//! # Data flow
//!
//! ```text
//! Dataset -> Catalog -> ViewState -> TableView
//!  (raw)     (join)    (filters,    (headers,
//!                       sort)        rows)
//! ```

pub mod collate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod join;
pub mod model;
pub mod reconcile;
pub mod sort;
pub mod table;
pub mod view;

pub use collate::locale_cmp;
pub use config::{CatalogConfig, DataConfig, DisplayConfig, LoggingConfig};
pub use dataset::Dataset;
pub use error::{CatalogError, ConfigError, Result};
pub use filter::FilterSelection;
pub use join::Catalog;
pub use model::{Category, CategoryId, EnrichedProduct, Product, ProductId, Sex, User, UserId};
pub use reconcile::reconcile;
pub use sort::{SortDirective, SortField, SortIndicator, UnknownSortField};
pub use table::{
    CategoryCell, HeaderCell, RowView, TableOptions, TableView, UserCell, UserTone,
    NO_MATCHES_MESSAGE,
};
pub use view::ViewState;
