//! Category display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::CategoryRegistry;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
}

/// Format the registry as a table, in display order
pub fn format_category_table(registry: &CategoryRegistry) -> String {
    if registry.is_empty() {
        return "No categories available.".to_string();
    }

    let rows = registry
        .all()
        .iter()
        .enumerate()
        .map(|(i, c)| CategoryRow {
            position: i + 1,
            key: c.key.clone(),
            name: c.name.clone(),
        });

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_table_lists_every_category() {
        let table = format_category_table(&CategoryRegistry::default());
        for key in ["purchases", "food", "salary", "car", "leisure", "studies"] {
            assert!(table.contains(key), "missing {}", key);
        }
        assert!(table.contains("Key"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = CategoryRegistry::new(Vec::<Category>::new());
        assert_eq!(format_category_table(&registry), "No categories available.");
    }
}
