//! Reconciliation: derive the visible rows from the full product set.

use crate::filter::FilterSelection;
use crate::model::EnrichedProduct;
use crate::sort::SortDirective;

/// Filter, sort and (optionally) reverse the products.
///
/// Filtering keeps the original order; sorting is stable; reversal is applied
/// to the sorted output as a whole. The result borrows from `products`.
pub fn reconcile<'a>(
    products: &'a [EnrichedProduct],
    filters: &FilterSelection,
    sort: &SortDirective,
) -> Vec<&'a EnrichedProduct> {
    let mut rows: Vec<&EnrichedProduct> = products.iter().filter(|p| filters.matches(p)).collect();
    sort.apply(&mut rows);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::join::Catalog;
    use crate::model::{Category, CategoryId, Product, ProductId, Sex, User, UserId};
    use crate::sort::SortField;

    fn ids(rows: &[&EnrichedProduct]) -> Vec<u32> {
        rows.iter().map(|p| p.id.value()).collect()
    }

    fn same_title_catalog() -> Catalog {
        Catalog::join(Dataset::new(
            vec![User::new(1, "Roma", Sex::Male), User::new(2, "Anna", Sex::Female)],
            vec![
                Category::new(1, "Fruit", "F", 1),
                Category::new(2, "Fruit", "F", 2),
            ],
            vec![Product::new(1, "Apple", 1), Product::new(2, "Banana", 2)],
        ))
    }

    #[test]
    fn test_no_filters_no_sort_is_identity() {
        let catalog = Catalog::join(Dataset::builtin().unwrap());
        let rows = reconcile(
            catalog.products(),
            &FilterSelection::new(),
            &SortDirective::default(),
        );
        assert_eq!(rows.len(), catalog.products().len());
        assert_eq!(ids(&rows), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let catalog = same_title_catalog();
        let sort = SortDirective::new(SortField::Category, false);
        let rows = reconcile(catalog.products(), &FilterSelection::new(), &sort);
        assert_eq!(ids(&rows), vec![1, 2]);
    }

    #[test]
    fn test_reversal_reverses_ties() {
        let catalog = same_title_catalog();
        let sort = SortDirective::new(SortField::Category, true);
        let rows = reconcile(catalog.products(), &FilterSelection::new(), &sort);
        assert_eq!(ids(&rows), vec![2, 1]);
    }

    #[test]
    fn test_filters_compose() {
        let catalog = Catalog::join(Dataset::builtin().unwrap());
        let mut filters = FilterSelection::new();
        filters.select_owner(Some(UserId(2)));
        filters.set_name_query("AN");
        filters.toggle_category(CategoryId(3));

        let rows = reconcile(catalog.products(), &filters, &SortDirective::default());
        let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Banana", "Orange"]);
    }

    #[test]
    fn test_absent_relations_sort_as_empty() {
        let catalog = Catalog::join(Dataset::new(
            vec![User::new(1, "Roma", Sex::Male)],
            vec![Category::new(1, "Drinks", "D", 1)],
            vec![Product::new(1, "Milk", 1), Product::new(2, "Ghost", 99)],
        ));

        let sort = SortDirective::new(SortField::Owner, false);
        let rows = reconcile(catalog.products(), &FilterSelection::new(), &sort);
        assert_eq!(rows[0].id, ProductId(2));

        let sort = SortDirective::new(SortField::Category, true);
        let rows = reconcile(catalog.products(), &FilterSelection::new(), &sort);
        assert_eq!(rows[1].id, ProductId(2));
    }

    #[test]
    fn test_unowned_products_never_match_owner() {
        let catalog = Catalog::join(Dataset::new(
            vec![User::new(1, "Roma", Sex::Male)],
            vec![Category::new(1, "Drinks", "D", 7)],
            vec![Product::new(1, "Milk", 1)],
        ));
        let mut filters = FilterSelection::new();
        filters.select_owner(Some(UserId(7)));

        let rows = reconcile(catalog.products(), &filters, &SortDirective::default());
        assert!(rows.is_empty());
    }
}
