use std::collections::BTreeSet;

use super::state::{FilterState, PriceBucket};
use crate::models::{Item, Price};

/// Evaluate the filter state against the catalog, returning matching items in catalog order
///
/// Filter logic:
/// - Within a multi-select group: item matches if it carries any selected option
/// - Across groups, search, bucket and ceiling: every check must pass
/// - Empty selections and empty search impose no constraint
///
/// The evaluation is a stable filter; it never reorders or mutates the catalog.
pub fn evaluate<'a>(catalog: &'a [Item], state: &FilterState) -> Vec<&'a Item> {
    let search = state.normalized_search();
    catalog.iter().filter(|item| matches_item(item, state, &search)).collect()
}

/// Same as [`evaluate`] but returns catalog positions instead of references
pub fn evaluate_indices(catalog: &[Item], state: &FilterState) -> Vec<usize> {
    let search = state.normalized_search();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, item)| matches_item(item, state, &search))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check a single item against every predicate (short-circuits on first failure)
///
/// `search` must already be trimmed and lowercased.
fn matches_item(item: &Item, state: &FilterState, search: &str) -> bool {
    match_search(item, search)
        && match_any(&item.platforms, &state.platforms)
        && match_any(&item.status_tags, &state.tags)
        && match_one(&item.category, &state.categories)
        && match_one(&item.access_mode, &state.access_modes)
        && match_bucket(item.price, state.price_bucket)
        && match_ceiling(item.price, state.price_ceiling, state.include_lifetime)
}

/// Case-insensitive substring match on the item name
fn match_search(item: &Item, search: &str) -> bool {
    search.is_empty() || item.name.to_lowercase().contains(search)
}

/// Multi-valued item field: any overlap with the selection
fn match_any(values: &[String], selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || values.iter().any(|v| selected.contains(v))
}

/// Single-valued item field: exact membership in the selection
fn match_one(value: &str, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Quick price filter; the lifetime sentinel only passes `Any` and `LifetimeOnly`
fn match_bucket(price: Price, bucket: PriceBucket) -> bool {
    match bucket {
        PriceBucket::Any => true,
        PriceBucket::Under5 => price.finite().is_some_and(|p| p < 5.0),
        PriceBucket::Under10 => price.finite().is_some_and(|p| p < 10.0),
        PriceBucket::Under20 => price.finite().is_some_and(|p| p < 20.0),
        PriceBucket::TwentyPlus => price.finite().is_some_and(|p| p >= 20.0),
        PriceBucket::LifetimeOnly => price.is_lifetime(),
    }
}

/// Continuous ceiling; lifetime items bypass the bound and depend on the toggle alone
fn match_ceiling(price: Price, ceiling: f64, include_lifetime: bool) -> bool {
    match price {
        Price::Lifetime => include_lifetime,
        Price::Finite(p) => p <= ceiling,
    }
}
