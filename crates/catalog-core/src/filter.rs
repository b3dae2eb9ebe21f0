//! Filter selection for narrowing the visible products.
//!
//! Three independent predicates, combined with AND:
//! - owner: single-select, `None` means every owner
//! - name: case-insensitive substring, empty means every name
//! - categories: multi-select membership, empty means every category

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{CategoryId, EnrichedProduct, UserId};

/// The current filter selections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    owner: Option<UserId>,
    name_query: String,
    categories: BTreeSet<CategoryId>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self) -> Option<UserId> {
        self.owner
    }

    pub fn name_query(&self) -> &str {
        &self.name_query
    }

    pub fn categories(&self) -> &BTreeSet<CategoryId> {
        &self.categories
    }

    pub fn is_category_selected(&self, id: CategoryId) -> bool {
        self.categories.contains(&id)
    }

    /// Whether any filter narrows the set
    pub fn is_active(&self) -> bool {
        self.owner.is_some() || !self.name_query.is_empty() || !self.categories.is_empty()
    }

    /// Replace the owner selection. Returns false when nothing changed.
    pub fn select_owner(&mut self, owner: Option<UserId>) -> bool {
        if self.owner == owner {
            return false;
        }
        self.owner = owner;
        true
    }

    /// Replace the name query wholesale. Returns false when nothing changed.
    pub fn set_name_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if self.name_query == query {
            return false;
        }
        self.name_query = query;
        true
    }

    pub fn clear_name_query(&mut self) -> bool {
        self.set_name_query(String::new())
    }

    /// Add the category if absent, remove it if present
    pub fn toggle_category(&mut self, id: CategoryId) {
        if !self.categories.remove(&id) {
            self.categories.insert(id);
        }
    }

    /// Empty the category selection. Returns false when it was already empty.
    pub fn clear_categories(&mut self) -> bool {
        if self.categories.is_empty() {
            return false;
        }
        self.categories.clear();
        true
    }

    /// Clear the owner and name filters.
    ///
    /// The category selection is left untouched.
    pub fn reset(&mut self) -> bool {
        let owner_changed = self.select_owner(None);
        let name_changed = self.clear_name_query();
        owner_changed || name_changed
    }

    /// Owner predicate. A product without a resolved owner never matches a
    /// selected owner.
    pub fn matches_owner(&self, product: &EnrichedProduct) -> bool {
        match self.owner {
            None => true,
            Some(owner) => product.owner_id() == Some(owner),
        }
    }

    /// Case-insensitive substring predicate on the product name
    pub fn matches_name(&self, product: &EnrichedProduct) -> bool {
        if self.name_query.is_empty() {
            return true;
        }
        product
            .name
            .to_lowercase()
            .contains(&self.name_query.to_lowercase())
    }

    /// Category membership predicate on the product's category identity
    pub fn matches_categories(&self, product: &EnrichedProduct) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category_id)
    }

    /// All three predicates
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        self.matches_owner(product) && self.matches_name(product) && self.matches_categories(product)
    }
}
