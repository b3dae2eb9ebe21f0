//! Sort directive and the per-column sort cycle
//!
//! Activating a column cycles it through three states:
//!
//! ```text
//! (other, _) --F--> (F, asc) --F--> (F, desc) --F--> (None, asc)
//! ```

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collate::locale_cmp;
use crate::model::EnrichedProduct;

/// Field the visible rows are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortField {
    /// Keep the filtered order
    #[default]
    None,
    Id,
    Name,
    Category,
    Owner,
}

impl SortField {
    /// The sortable columns, in header order
    pub const COLUMNS: [SortField; 4] = [
        SortField::Id,
        SortField::Name,
        SortField::Category,
        SortField::Owner,
    ];

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            SortField::None => "",
            SortField::Id => "ID",
            SortField::Name => "Product",
            SortField::Category => "Category",
            SortField::Owner => "User",
        }
    }

    /// Compare two products by this field
    pub fn compare(&self, a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
        match self {
            SortField::None => Ordering::Equal,
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => locale_cmp(&a.name, &b.name),
            SortField::Category => locale_cmp(a.category_title(), b.category_title()),
            SortField::Owner => locale_cmp(a.owner_name(), b.owner_name()),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::None => write!(f, "none"),
            SortField::Id => write!(f, "id"),
            SortField::Name => write!(f, "name"),
            SortField::Category => write!(f, "category"),
            SortField::Owner => write!(f, "owner"),
        }
    }
}

/// Error for unrecognised sort field names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort field: {0}")]
pub struct UnknownSortField(pub String);

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(SortField::None),
            "id" => Ok(SortField::Id),
            "name" | "product" => Ok(SortField::Name),
            "category" | "cat" => Ok(SortField::Category),
            "owner" | "user" => Ok(SortField::Owner),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

/// Per-column indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortIndicator {
    Neutral,
    Ascending,
    Descending,
}

/// The active sort field plus the reversed flag.
///
/// `reversed` is never set while the field is [`SortField::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortDirective {
    field: SortField,
    reversed: bool,
}

impl SortDirective {
    pub fn new(field: SortField, reversed: bool) -> Self {
        Self {
            field,
            reversed: reversed && field != SortField::None,
        }
    }

    pub fn field(&self) -> SortField {
        self.field
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Advance the sort cycle for `field`.
    ///
    /// A different column starts ascending, the same column flips to
    /// descending, and a descending column clears. Activating
    /// [`SortField::None`] clears the directive.
    pub fn activate(&mut self, field: SortField) {
        *self = if field == SortField::None {
            Self::default()
        } else if field != self.field {
            Self::new(field, false)
        } else if !self.reversed {
            Self::new(field, true)
        } else {
            Self::default()
        };
    }

    /// Indicator for a column header
    pub fn indicator(&self, column: SortField) -> SortIndicator {
        if column == SortField::None || column != self.field {
            SortIndicator::Neutral
        } else if self.reversed {
            SortIndicator::Descending
        } else {
            SortIndicator::Ascending
        }
    }

    /// Stable sort by the field, then reverse the whole sequence when the
    /// reversed flag is set.
    ///
    /// Reversal happens after sorting, so ties come out in the exact reverse
    /// of their ascending order.
    pub fn apply(&self, rows: &mut [&EnrichedProduct]) {
        if self.field != SortField::None {
            rows.sort_by(|a, b| self.field.compare(a, b));
        }
        if self.reversed {
            rows.reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_cycle_on_one_column() {
        let mut sort = SortDirective::default();

        sort.activate(SortField::Name);
        assert_eq!(sort, SortDirective::new(SortField::Name, false));

        sort.activate(SortField::Name);
        assert_eq!(sort, SortDirective::new(SortField::Name, true));

        sort.activate(SortField::Name);
        assert_eq!(sort, SortDirective::default());

        sort.activate(SortField::Name);
        assert_eq!(sort, SortDirective::new(SortField::Name, false));
    }

    #[test]
    fn test_new_column_starts_ascending() {
        let mut sort = SortDirective::new(SortField::Name, true);
        sort.activate(SortField::Id);
        assert_eq!(sort.field(), SortField::Id);
        assert!(!sort.is_reversed());
    }

    #[test]
    fn test_none_is_never_reversed() {
        assert!(!SortDirective::new(SortField::None, true).is_reversed());

        let mut sort = SortDirective::default();
        sort.activate(SortField::None);
        sort.activate(SortField::None);
        assert_eq!(sort, SortDirective::default());
    }

    #[test]
    fn test_indicators() {
        let sort = SortDirective::new(SortField::Category, true);
        assert_eq!(sort.indicator(SortField::Category), SortIndicator::Descending);
        assert_eq!(sort.indicator(SortField::Id), SortIndicator::Neutral);

        let sort = SortDirective::new(SortField::Category, false);
        assert_eq!(sort.indicator(SortField::Category), SortIndicator::Ascending);

        let sort = SortDirective::default();
        assert!(SortField::COLUMNS
            .iter()
            .all(|&c| sort.indicator(c) == SortIndicator::Neutral));
    }

    #[test]
    fn test_parse_field() {
        assert_eq!("product".parse::<SortField>(), Ok(SortField::Name));
        assert_eq!(" User ".parse::<SortField>(), Ok(SortField::Owner));
        assert_eq!("ID".parse::<SortField>(), Ok(SortField::Id));
        assert!("price".parse::<SortField>().is_err());
    }

    #[test]
    fn test_labels_follow_header_order() {
        let labels: Vec<&str> = SortField::COLUMNS.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["ID", "Product", "Category", "User"]);
    }
}
