//! Property tests for reconciliation and the sort cycle

mod common;

use std::cmp::Ordering;

use catalog_core::{reconcile, EnrichedProduct, FilterSelection, SortDirective, SortField};
use common::fixtures::{arb_catalog, arb_filters, ids};
use proptest::prelude::*;

fn arb_column() -> impl Strategy<Value = SortField> {
    proptest::sample::select(SortField::COLUMNS.to_vec())
}

type Predicate = fn(&FilterSelection, &EnrichedProduct) -> bool;

fn apply_in_order<'a>(
    products: &'a [EnrichedProduct],
    filters: &FilterSelection,
    order: &[Predicate],
) -> Vec<&'a EnrichedProduct> {
    let mut rows: Vec<&EnrichedProduct> = products.iter().collect();
    for predicate in order {
        rows.retain(|p| predicate(filters, p));
    }
    rows
}

proptest! {
    #[test]
    fn test_visible_rows_are_a_subset(catalog in arb_catalog(), filters in arb_filters()) {
        let rows = reconcile(catalog.products(), &filters, &SortDirective::default());
        prop_assert!(rows.len() <= catalog.products().len());
        for row in &rows {
            prop_assert!(catalog.products().iter().any(|p| std::ptr::eq(p, *row)));
            prop_assert!(filters.matches(row));
        }
    }

    #[test]
    fn test_filter_order_does_not_matter(catalog in arb_catalog(), filters in arb_filters()) {
        let owner: Predicate = FilterSelection::matches_owner;
        let name: Predicate = FilterSelection::matches_name;
        let category: Predicate = FilterSelection::matches_categories;

        let expected = ids(reconcile(catalog.products(), &filters, &SortDirective::default()));
        for order in [
            [owner, name, category],
            [owner, category, name],
            [name, owner, category],
            [name, category, owner],
            [category, owner, name],
            [category, name, owner],
        ] {
            let rows = apply_in_order(catalog.products(), &filters, &order);
            prop_assert_eq!(ids(rows), expected.clone());
        }
    }

    #[test]
    fn test_reconcile_is_idempotent(
        catalog in arb_catalog(),
        filters in arb_filters(),
        field in arb_column(),
        reversed in any::<bool>(),
    ) {
        let sort = SortDirective::new(field, reversed);
        let first = ids(reconcile(catalog.products(), &filters, &sort));
        let second = ids(reconcile(catalog.products(), &filters, &sort));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_sorted_rows_are_ordered(
        catalog in arb_catalog(),
        filters in arb_filters(),
        field in arb_column(),
    ) {
        let rows = reconcile(catalog.products(), &filters, &SortDirective::new(field, false));
        for pair in rows.windows(2) {
            prop_assert_ne!(field.compare(pair[0], pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn test_reversal_mirrors_ascending_order(
        catalog in arb_catalog(),
        filters in arb_filters(),
        field in arb_column(),
    ) {
        let ascending = ids(reconcile(catalog.products(), &filters, &SortDirective::new(field, false)));
        let mut descending = ids(reconcile(catalog.products(), &filters, &SortDirective::new(field, true)));
        descending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn test_three_activations_clear(field in arb_column()) {
        let mut sort = SortDirective::default();
        sort.activate(field);
        prop_assert_eq!(sort, SortDirective::new(field, false));
        sort.activate(field);
        prop_assert_eq!(sort, SortDirective::new(field, true));
        sort.activate(field);
        prop_assert_eq!(sort, SortDirective::default());
    }

    #[test]
    fn test_reversed_implies_field(fields in proptest::collection::vec(arb_column(), 0..12)) {
        let mut sort = SortDirective::default();
        for field in fields {
            sort.activate(field);
            prop_assert!(!sort.is_reversed() || sort.field() != SortField::None);
        }
    }
}
