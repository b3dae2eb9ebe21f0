//! Table render model
//!
//! A pure function from visible rows and the sort directive to what the
//! front end draws: either the no-matches message or a header row with sort
//! indicators plus one row per product.

use serde::{Deserialize, Serialize};

use crate::model::{Category, EnrichedProduct, ProductId, Sex, User};
use crate::sort::{SortDirective, SortField, SortIndicator};

/// Shown in place of the table when nothing matches
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

/// Rendering switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Prefix category titles with their icon glyph
    pub show_icons: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self { show_icons: true }
    }
}

/// Visual treatment of the owner cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserTone {
    /// Male marker
    Link,
    /// Female marker
    Danger,
    /// Anything else: no colour
    Neutral,
}

impl UserTone {
    pub fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Male => UserTone::Link,
            Sex::Female => UserTone::Danger,
            Sex::Unspecified => UserTone::Neutral,
        }
    }
}

/// A sortable column header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub field: SortField,
    pub label: &'static str,
    pub indicator: SortIndicator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCell {
    pub text: String,
}

impl CategoryCell {
    fn new(category: &Category, options: TableOptions) -> Self {
        let text = if options.show_icons {
            format!("{} - {}", category.icon, category.title)
        } else {
            category.title.clone()
        };
        Self { text }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCell {
    pub name: String,
    pub tone: UserTone,
}

impl UserCell {
    fn new(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            tone: UserTone::for_sex(user.sex),
        }
    }
}

/// One product row. Unresolved relations omit their cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: ProductId,
    pub name: String,
    pub category: Option<CategoryCell>,
    pub user: Option<UserCell>,
}

/// What to draw for the current view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    NoMatches,
    Table {
        headers: Vec<HeaderCell>,
        rows: Vec<RowView>,
    },
}

impl TableView {
    pub fn build<'a>(
        rows: impl IntoIterator<Item = &'a EnrichedProduct>,
        sort: &SortDirective,
        options: TableOptions,
    ) -> Self {
        let rows: Vec<RowView> = rows
            .into_iter()
            .map(|product| RowView {
                id: product.id,
                name: product.name.clone(),
                category: product
                    .category
                    .as_ref()
                    .map(|c| CategoryCell::new(c, options)),
                user: product.owner.as_ref().map(UserCell::new),
            })
            .collect();

        if rows.is_empty() {
            return TableView::NoMatches;
        }

        TableView::Table {
            headers: headers(sort),
            rows,
        }
    }
}

/// Header cells for the four sortable columns
pub fn headers(sort: &SortDirective) -> Vec<HeaderCell> {
    SortField::COLUMNS
        .iter()
        .map(|&field| HeaderCell {
            field,
            label: field.label(),
            indicator: sort.indicator(field),
        })
        .collect()
}
