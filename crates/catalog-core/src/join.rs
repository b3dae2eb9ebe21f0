//! Data joiner
//!
//! Resolves each product's category and, through it, the category owner.
//! Runs once at startup; the resulting [`Catalog`] is never mutated.

use std::collections::HashMap;
use std::hash::Hash;

use crate::dataset::Dataset;
use crate::model::{Category, CategoryId, EnrichedProduct, User, UserId};

/// The joined, read-only catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<EnrichedProduct>,
    user_index: HashMap<UserId, usize>,
    category_index: HashMap<CategoryId, usize>,
}

impl Catalog {
    /// Join a dataset into enriched products, keeping product order
    pub fn join(dataset: Dataset) -> Self {
        let Dataset {
            users,
            categories,
            products,
        } = dataset;

        let user_index = first_index(users.iter().map(|u| u.id), "user");
        let category_index = first_index(categories.iter().map(|c| c.id), "category");

        let resolve_category =
            |id: CategoryId| category_index.get(&id).map(|&i| categories[i].clone());
        let resolve_user = |id: UserId| user_index.get(&id).map(|&i| users[i].clone());

        let products: Vec<EnrichedProduct> = products
            .into_iter()
            .map(|product| {
                let category = resolve_category(product.category_id);
                if category.is_none() {
                    tracing::debug!(
                        "Product {} references unknown category {}",
                        product.id,
                        product.category_id
                    );
                }

                let owner = category.as_ref().and_then(|c| {
                    let owner = resolve_user(c.owner_id);
                    if owner.is_none() {
                        tracing::debug!("Category {} references unknown owner {}", c.id, c.owner_id);
                    }
                    owner
                });

                EnrichedProduct {
                    id: product.id,
                    name: product.name,
                    category_id: product.category_id,
                    category,
                    owner,
                }
            })
            .collect();

        Self {
            users,
            categories,
            products,
            user_index,
            category_index,
        }
    }

    /// All users, in dataset order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All categories, in dataset order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All enriched products, in their fixed original order
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.user_index.get(&id).map(|&i| &self.users[i])
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.category_index.get(&id).map(|&i| &self.categories[i])
    }

    /// Find a user by display name, ignoring case
    pub fn user_by_name(&self, name: &str) -> Option<&User> {
        let name = name.to_lowercase();
        self.users.iter().find(|u| u.name.to_lowercase() == name)
    }

    /// Find a category by title, ignoring case
    pub fn category_by_title(&self, title: &str) -> Option<&Category> {
        let title = title.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.title.to_lowercase() == title)
    }
}

/// Map each identity to the position of its first record.
///
/// Later records with the same identity are shadowed, matching a linear
/// first-match lookup.
fn first_index<K>(ids: impl Iterator<Item = K>, kind: &str) -> HashMap<K, usize>
where
    K: Eq + Hash + Copy + std::fmt::Display,
{
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.contains_key(&id) {
            tracing::warn!("Duplicate {} id {}; keeping the first record", kind, id);
            continue;
        }
        index.insert(id, position);
    }
    index
}
