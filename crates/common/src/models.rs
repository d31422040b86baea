//! Catalogue and account records exchanged with the storefront's collaborators.
//!
//! These types are handed to the view layer as JSON, so field names are part
//! of the template contract.

use serde::{Deserialize, Serialize};

/// A product category as listed in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier assigned by the directory.
    pub id: String,
    /// Display title; the navigation menu is ordered by it.
    pub title: String,
    /// URL-safe name used under `/products/<slug>`.
    pub slug: String,
}

impl Category {
    /// Construct a [`Category`].
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
        }
    }
}

/// An authenticated shopper, as stored in their session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_new() {
        let c = Category::new("1", "Backpacks", "backpacks");
        assert_eq!(c.title, "Backpacks");
        assert_eq!(c.slug, "backpacks");
    }

    #[test]
    fn categories_deserialize_from_seed_json() {
        let json = r#"[{"id":"1","title":"Tents","slug":"tents"}]"#;
        let cats: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(cats, vec![Category::new("1", "Tents", "tents")]);
    }
}
