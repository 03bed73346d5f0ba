//! Category model and the fixed category registry
//!
//! The registry is an immutable, ordered list known at build time. A draft
//! that has not picked a category yet holds the sentinel category, which is
//! never part of the registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key used by the "no category chosen yet" placeholder
pub const SENTINEL_CATEGORY_KEY: &str = "category";

/// Display label of the placeholder, shown on the category button
const SENTINEL_CATEGORY_NAME: &str = "Category";

/// A selectable transaction category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier, emitted in the final record
    pub key: String,

    /// Display label
    pub name: String,
}

impl Category {
    /// Create a new category
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }

    /// The placeholder category a fresh draft starts with
    pub fn sentinel() -> Self {
        Self::new(SENTINEL_CATEGORY_KEY, SENTINEL_CATEGORY_NAME)
    }

    /// Whether this is the placeholder rather than a real choice
    pub fn is_sentinel(&self) -> bool {
        self.key == SENTINEL_CATEGORY_KEY
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::sentinel()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Built-in categories, in display order
const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("purchases", "Purchases"),
    ("food", "Food"),
    ("salary", "Salary"),
    ("car", "Car"),
    ("leisure", "Leisure"),
    ("studies", "Studies"),
];

/// Ordered, read-only collection of selectable categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Build a registry from an explicit list
    ///
    /// Sentinel entries are dropped so the placeholder can never be chosen.
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories
                .into_iter()
                .filter(|c| !c.is_sentinel())
                .collect(),
        }
    }

    /// All categories in display order
    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the registry has no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category at a display position
    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Look up a category by key
    pub fn find(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Display position of a category, if it is registered
    pub fn position_of(&self, category: &Category) -> Option<usize> {
        self.categories.iter().position(|c| c.key == category.key)
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(key, name)| Category::new(*key, *name)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        let sentinel = Category::sentinel();
        assert_eq!(sentinel.key, "category");
        assert!(sentinel.is_sentinel());
        assert_eq!(Category::default(), sentinel);
        assert!(!Category::new("food", "Food").is_sentinel());
    }

    #[test]
    fn test_default_registry_order() {
        let registry = CategoryRegistry::default();
        let keys: Vec<_> = registry.all().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["purchases", "food", "salary", "car", "leisure", "studies"]
        );
    }

    #[test]
    fn test_registry_excludes_sentinel() {
        let registry =
            CategoryRegistry::new(vec![Category::sentinel(), Category::new("food", "Food")]);
        assert_eq!(registry.len(), 1);
        assert!(registry.find(SENTINEL_CATEGORY_KEY).is_none());
    }

    #[test]
    fn test_find_and_position() {
        let registry = CategoryRegistry::default();
        let food = registry.find("food").unwrap();
        assert_eq!(food.name, "Food");
        assert_eq!(registry.position_of(food), Some(1));
        assert_eq!(registry.position_of(&Category::sentinel()), None);
        assert!(registry.find("unknown").is_none());
    }
}
