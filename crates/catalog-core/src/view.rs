//! View-state controller
//!
//! Owns the filter selection and sort directive, and keeps the visible rows in
//! sync with them. State changes only through the named transitions below;
//! every transition that changes state runs one full reconciliation before
//! returning.

use crate::filter::FilterSelection;
use crate::join::Catalog;
use crate::model::{CategoryId, EnrichedProduct, UserId};
use crate::reconcile::reconcile;
use crate::sort::{SortDirective, SortField};
use crate::table::{TableOptions, TableView};

/// The single owner of mutable view state
#[derive(Debug, Clone)]
pub struct ViewState {
    catalog: Catalog,
    filters: FilterSelection,
    sort: SortDirective,
    options: TableOptions,
    visible: Vec<EnrichedProduct>,
}

impl ViewState {
    /// Initial view: no filters, no sort, every product visible
    pub fn new(catalog: Catalog) -> Self {
        Self::with_options(catalog, TableOptions::default())
    }

    pub fn with_options(catalog: Catalog, options: TableOptions) -> Self {
        let visible = catalog.products().to_vec();
        Self {
            catalog,
            filters: FilterSelection::default(),
            sort: SortDirective::default(),
            options,
            visible,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn sort(&self) -> SortDirective {
        self.sort
    }

    /// The rows to display, in display order
    pub fn visible(&self) -> &[EnrichedProduct] {
        &self.visible
    }

    /// Render model for the current rows and sort directive
    pub fn table(&self) -> TableView {
        TableView::build(&self.visible, &self.sort, self.options)
    }

    // === Transitions ===

    /// Select a single owner, or `None` for all owners
    pub fn select_owner(&mut self, owner: Option<UserId>) -> bool {
        let changed = self.filters.select_owner(owner);
        self.reconcile_if(changed)
    }

    /// Replace the name filter wholesale
    pub fn set_name_query(&mut self, query: impl Into<String>) -> bool {
        let changed = self.filters.set_name_query(query);
        self.reconcile_if(changed)
    }

    pub fn clear_name_query(&mut self) -> bool {
        let changed = self.filters.clear_name_query();
        self.reconcile_if(changed)
    }

    /// Flip membership of one category in the selection
    pub fn toggle_category(&mut self, id: CategoryId) -> bool {
        self.filters.toggle_category(id);
        self.reconcile_if(true)
    }

    pub fn clear_categories(&mut self) -> bool {
        let changed = self.filters.clear_categories();
        self.reconcile_if(changed)
    }

    /// Clear the owner and name filters; the category selection is kept
    pub fn reset_filters(&mut self) -> bool {
        let changed = self.filters.reset();
        self.reconcile_if(changed)
    }

    /// Advance the sort cycle for a column
    pub fn activate_sort(&mut self, field: SortField) -> bool {
        let before = self.sort;
        self.sort.activate(field);
        let changed = self.sort != before;
        self.reconcile_if(changed)
    }

    fn reconcile_if(&mut self, changed: bool) -> bool {
        if changed {
            self.reconcile();
        }
        changed
    }

    /// Re-derive the visible rows from the full product set
    fn reconcile(&mut self) {
        self.visible = reconcile(self.catalog.products(), &self.filters, &self.sort)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            owner = ?self.filters.owner(),
            name = self.filters.name_query(),
            categories = self.filters.categories().len(),
            sort = %self.sort.field(),
            reversed = self.sort.is_reversed(),
            "Reconciled {} of {} products",
            self.visible.len(),
            self.catalog.products().len()
        );
    }
}
