//! Shared catalog fixtures and generators

use catalog_core::{
    Catalog, Category, CategoryId, Dataset, EnrichedProduct, FilterSelection, Product, Sex, User,
    UserId,
};
use proptest::prelude::*;

/// The demo catalog bundled with the crate
#[allow(dead_code)]
pub fn builtin_catalog() -> Catalog {
    Catalog::join(Dataset::builtin().expect("bundled fixtures parse"))
}

/// Two products whose categories share a title
#[allow(dead_code)]
pub fn tied_catalog() -> Catalog {
    Catalog::join(Dataset::new(
        vec![User::new(1, "Roma", Sex::Male), User::new(2, "Anna", Sex::Female)],
        vec![
            Category::new(1, "Fruit", "F", 1),
            Category::new(2, "Fruit", "F", 2),
        ],
        vec![Product::new(1, "Apple", 1), Product::new(2, "Banana", 2)],
    ))
}

/// Product ids in display order
#[allow(dead_code)]
pub fn ids<'a>(rows: impl IntoIterator<Item = &'a EnrichedProduct>) -> Vec<u32> {
    rows.into_iter().map(|p| p.id.value()).collect()
}

const NAMES: &[&str] = &[
    "Apple", "apple", "Banana", "Orange", "Mango", "mango", "Éclair", "Eclair", "Bread",
    "Cabbage", "Anchovy", "",
];
const TITLES: &[&str] = &["Fruit", "fruit", "Bakery", "Fruit"];
const OWNERS: &[&str] = &["Roma", "Anna", "anna"];

/// A catalog with small alphabets so sort keys tie often. Category 5 and
/// owner 4 are referenced but never defined.
#[allow(dead_code)]
pub fn arb_catalog() -> impl Strategy<Value = Catalog> {
    let categories = proptest::collection::vec(1u32..=4, TITLES.len()).prop_map(|owners| {
        owners
            .into_iter()
            .enumerate()
            .map(|(i, owner)| Category::new(i as u32 + 1, TITLES[i], "*", owner))
            .collect::<Vec<_>>()
    });
    let products = proptest::collection::vec((0..NAMES.len(), 1u32..=5), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, category))| Product::new(i as u32 + 1, NAMES[name], category))
            .collect::<Vec<_>>()
    });

    (categories, products).prop_map(|(categories, products)| {
        let users = OWNERS
            .iter()
            .enumerate()
            .map(|(i, name)| User::new(i as u32 + 1, *name, Sex::Unspecified))
            .collect();
        Catalog::join(Dataset::new(users, categories, products))
    })
}

/// Any combination of the three filters
#[allow(dead_code)]
pub fn arb_filters() -> impl Strategy<Value = FilterSelection> {
    (
        proptest::option::of(1u32..=4),
        "[aAnNeE]{0,2}",
        proptest::collection::btree_set(1u32..=5, 0..3),
    )
        .prop_map(|(owner, query, categories)| {
            let mut filters = FilterSelection::new();
            filters.select_owner(owner.map(UserId));
            filters.set_name_query(query);
            for id in categories {
                filters.toggle_category(CategoryId(id));
            }
            filters
        })
}
