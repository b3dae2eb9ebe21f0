//! Catalog domain model
//!
//! Three static record kinds (users, categories, products) and the enriched
//! product produced by joining them:
//!
//! Product -> Category -> User (owner)

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// The raw numeric identity
            pub fn value(&self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identity of a user
    UserId
);
define_id!(
    /// Identity of a category
    CategoryId
);
define_id!(
    /// Identity of a product
    ProductId
);

/// Sex marker used only to colour-code the owner cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
    /// Any other marker, or none at all
    #[default]
    #[serde(other)]
    Unspecified,
}

/// A catalog user (category owner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub sex: Sex,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: UserId(id),
            name: name.into(),
            sex,
        }
    }
}

/// A product category, owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
}

impl Category {
    pub fn new(id: u32, title: impl Into<String>, icon: impl Into<String>, owner_id: u32) -> Self {
        Self {
            id: CategoryId(id),
            title: title.into(),
            icon: icon.into(),
            owner_id: UserId(owner_id),
        }
    }
}

/// A raw product record as supplied by the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, category_id: u32) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category_id: CategoryId(category_id),
        }
    }
}

/// A product joined with its category and, through the category, its owner.
///
/// Relations that do not resolve are `None`; they are never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub category: Option<Category>,
    pub owner: Option<User>,
}

impl EnrichedProduct {
    /// Identity of the resolved owner, if any
    pub fn owner_id(&self) -> Option<UserId> {
        self.owner.as_ref().map(|u| u.id)
    }

    /// Resolved category title, or the empty string when unresolved
    pub fn category_title(&self) -> &str {
        self.category.as_ref().map_or("", |c| c.title.as_str())
    }

    /// Resolved owner name, or the empty string when unresolved
    pub fn owner_name(&self) -> &str {
        self.owner.as_ref().map_or("", |u| u.name.as_str())
    }
}
