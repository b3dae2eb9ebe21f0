//! Static datasets
//!
//! The viewer starts from three read-only collections. They either come from
//! the fixtures bundled with this crate or from a directory holding
//! `users.json`, `categories.json` and `products.json`.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CatalogError, Result};
use crate::model::{Category, Product, User};

const BUILTIN_USERS: &str = include_str!("../data/users.json");
const BUILTIN_CATEGORIES: &str = include_str!("../data/categories.json");
const BUILTIN_PRODUCTS: &str = include_str!("../data/products.json");

/// File names looked up by [`Dataset::load_dir`]
pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

/// The three raw collections, before joining
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Dataset {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    /// The demo records shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_USERS, BUILTIN_CATEGORIES, BUILTIN_PRODUCTS)
    }

    /// Parse the three collections from JSON documents
    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self> {
        Ok(Self {
            users: parse("users", users)?,
            categories: parse("categories", categories)?,
            products: parse("products", products)?,
        })
    }

    /// Read the three collections from a directory
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path)
                .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))
        };

        let dataset = Self::from_json(
            &read(USERS_FILE)?,
            &read(CATEGORIES_FILE)?,
            &read(PRODUCTS_FILE)?,
        )?;

        tracing::info!(
            "Loaded dataset from {:?}: {} users, {} categories, {} products",
            dir,
            dataset.users.len(),
            dataset.categories.len(),
            dataset.products.len()
        );
        Ok(dataset)
    }
}

fn parse<T: DeserializeOwned>(dataset: &str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|e| CatalogError::Parse {
        dataset: dataset.to_string(),
        message: e.to_string(),
    })
}
