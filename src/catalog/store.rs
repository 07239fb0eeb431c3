use std::collections::HashSet;

use anyhow::{Result, bail};

use super::builtin::builtin_items;
use crate::filters::FilterGroup;
use crate::models::{Item, ItemId};

/// Lower bound for the price ceiling control's range
const MIN_CEILING_MAX: f64 = 20.0;
/// Range used when the catalog has no finite price at all
const DEFAULT_CEILING_MAX: f64 = 100.0;

/// Read-only, ordered item list for the lifetime of a session
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    price_ceiling_max: f64,
}

impl Catalog {
    /// Freeze a list of items into a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if two items share a name.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                bail!("Duplicate item name in catalog: '{}'", item.name);
            }
        }

        let price_ceiling_max = compute_ceiling_max(&items);
        Ok(Self { items, price_ceiling_max })
    }

    /// The built-in demo catalog (names are unique by construction)
    pub fn builtin() -> Self {
        let items = builtin_items();
        let price_ceiling_max = compute_ceiling_max(&items);
        Self { items, price_ceiling_max }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    pub fn find_by_name(&self, name: &str) -> Option<ItemId> {
        self.items.iter().position(|item| item.name == name).map(ItemId)
    }

    /// Top of the price ceiling control's range
    ///
    /// The largest finite price rounded up, never below 20. Computed once at construction.
    pub fn price_ceiling_max(&self) -> f64 {
        self.price_ceiling_max
    }

    /// Distinct option values for a filter group, in first-seen catalog order
    pub fn options(&self, group: FilterGroup) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for item in &self.items {
            for value in group.values_of(item) {
                if seen.insert(value.as_str()) {
                    options.push(value.clone());
                }
            }
        }
        options
    }

    /// Number of lifetime-priced items
    pub fn lifetime_count(&self) -> usize {
        self.items.iter().filter(|item| item.price.is_lifetime()).count()
    }

    /// Smallest and largest finite price, if any
    pub fn finite_price_range(&self) -> Option<(f64, f64)> {
        self.items.iter().filter_map(|item| item.price.finite()).fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
    }
}

fn compute_ceiling_max(items: &[Item]) -> f64 {
    let max_finite = items.iter().filter_map(|item| item.price.finite()).reduce(f64::max);
    let max = match max_finite {
        Some(max) => max.ceil(),
        None => DEFAULT_CEILING_MAX,
    };
    max.max(MIN_CEILING_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DurationDays, Price};

    fn create_test_item(name: &str, platforms: &[&str], price: Price) -> Item {
        Item {
            name: name.to_string(),
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            category: "Internal".to_string(),
            access_mode: "Keyless".to_string(),
            status_tags: vec![],
            feature_tags: vec![],
            quality_score: 50,
            summary: String::new(),
            details: String::new(),
            known_issues: vec![],
            price_label: String::new(),
            price,
            duration: DurationDays::Unlimited,
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let items = vec![
            create_test_item("A", &[], Price::Finite(1.0)),
            create_test_item("A", &[], Price::Finite(2.0)),
        ];
        let err = Catalog::new(items).unwrap_err();
        assert!(err.to_string().contains("Duplicate item name"));
    }

    #[test]
    fn test_ceiling_max_floors_at_twenty() {
        let catalog = Catalog::new(vec![create_test_item("A", &[], Price::Finite(3.99))]).unwrap();
        assert_eq!(catalog.price_ceiling_max(), 20.0);
    }

    #[test]
    fn test_ceiling_max_rounds_up() {
        let catalog = Catalog::new(vec![
            create_test_item("A", &[], Price::Finite(3.99)),
            create_test_item("B", &[], Price::Finite(42.10)),
        ])
        .unwrap();
        assert_eq!(catalog.price_ceiling_max(), 43.0);
    }

    #[test]
    fn test_ceiling_max_ignores_lifetime() {
        let catalog = Catalog::new(vec![
            create_test_item("A", &[], Price::Lifetime),
            create_test_item("B", &[], Price::Finite(25.0)),
        ])
        .unwrap();
        assert_eq!(catalog.price_ceiling_max(), 25.0);
    }

    #[test]
    fn test_ceiling_max_without_finite_prices() {
        let empty = Catalog::new(vec![]).unwrap();
        assert_eq!(empty.price_ceiling_max(), 100.0);

        let lifetime_only =
            Catalog::new(vec![create_test_item("A", &[], Price::Lifetime)]).unwrap();
        assert_eq!(lifetime_only.price_ceiling_max(), 100.0);
    }

    #[test]
    fn test_options_first_seen_order() {
        let catalog = Catalog::new(vec![
            create_test_item("A", &["Windows", "macOS"], Price::Finite(1.0)),
            create_test_item("B", &["Android", "Windows"], Price::Finite(1.0)),
        ])
        .unwrap();
        assert_eq!(catalog.options(FilterGroup::Platform), vec!["Windows", "macOS", "Android"]);
        assert_eq!(catalog.options(FilterGroup::Category), vec!["Internal"]);
        assert!(catalog.options(FilterGroup::Tag).is_empty());
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(vec![
            create_test_item("A", &[], Price::Finite(1.0)),
            create_test_item("B", &[], Price::Lifetime),
        ])
        .unwrap();
        assert_eq!(catalog.find_by_name("B"), Some(ItemId(1)));
        assert_eq!(catalog.find_by_name("Z"), None);
        assert_eq!(catalog.get(ItemId(0)).map(|i| i.name.as_str()), Some("A"));
        assert!(catalog.get(ItemId(5)).is_none());
        assert_eq!(catalog.lifetime_count(), 1);
        assert_eq!(catalog.finite_price_range(), Some((1.0, 1.0)));
    }
}
