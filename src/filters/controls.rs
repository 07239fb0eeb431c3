//! Mutable filter control values owned by the UI layer.
//!
//! [`FilterControls`] is the single writer of filter state. Every UI event mutates it
//! and the engine then reads a fresh [`FilterState`] snapshot. Coupling between controls
//! lives here, never in the engine:
//!
//! - Choosing the lifetime price bucket also turns on "include lifetime". Leaving the
//!   bucket does not turn the toggle back off.
//! - Reset clears selections and search, puts the ceiling back to its maximum, sets the
//!   bucket to "any" and turns "include lifetime" off.

use super::state::{FilterGroup, FilterState, PriceBucket};

/// Maximum search text length accepted from interactive input
const MAX_SEARCH_LEN: usize = 256;

#[derive(Debug, Clone)]
pub struct FilterControls {
    state: FilterState,
    price_ceiling_max: f64,
}

impl FilterControls {
    /// Controls in their initial position: ceiling at `price_ceiling_max`, nothing selected,
    /// lifetime items excluded
    pub fn new(price_ceiling_max: f64) -> Self {
        let mut controls = Self { state: FilterState::unconstrained(), price_ceiling_max };
        controls.reset();
        controls
    }

    /// Take an immutable snapshot for one evaluation
    pub fn snapshot(&self) -> FilterState {
        self.state.clone()
    }

    pub fn search_text(&self) -> &str {
        &self.state.search_text
    }

    pub fn set_search(&mut self, text: &str) {
        self.state.search_text = text.chars().take(MAX_SEARCH_LEN).collect();
    }

    /// Append a character to the search text; returns false when the text is at its limit
    pub fn push_search_char(&mut self, c: char) -> bool {
        if self.state.search_text.chars().count() >= MAX_SEARCH_LEN {
            return false;
        }
        self.state.search_text.push(c);
        true
    }

    /// Remove the last search character; returns false when the text was already empty
    pub fn pop_search_char(&mut self) -> bool {
        self.state.search_text.pop().is_some()
    }

    pub fn is_selected(&self, group: FilterGroup, value: &str) -> bool {
        self.state.selected(group).contains(value)
    }

    /// Check or uncheck one option of a group
    pub fn set_option(&mut self, group: FilterGroup, value: &str, checked: bool) {
        let selected = self.state.selected_mut(group);
        if checked {
            selected.insert(value.to_string());
        } else {
            selected.remove(value);
        }
    }

    /// Flip one option; returns its new checked state
    pub fn toggle_option(&mut self, group: FilterGroup, value: &str) -> bool {
        let checked = !self.is_selected(group, value);
        self.set_option(group, value, checked);
        checked
    }

    pub fn price_ceiling(&self) -> f64 {
        self.state.price_ceiling
    }

    pub fn price_ceiling_max(&self) -> f64 {
        self.price_ceiling_max
    }

    /// Move the ceiling, clamped to `[0, price_ceiling_max]`
    pub fn set_price_ceiling(&mut self, value: f64) {
        let value = if value.is_nan() { self.price_ceiling_max } else { value };
        self.state.price_ceiling = value.clamp(0.0, self.price_ceiling_max);
    }

    /// Move the ceiling by `delta`, snapped to whole dollars; returns false when the clamp
    /// left it where it was
    pub fn step_price_ceiling(&mut self, delta: f64) -> bool {
        let before = self.state.price_ceiling;
        self.set_price_ceiling((before + delta).round());
        self.state.price_ceiling != before
    }

    pub fn price_bucket(&self) -> PriceBucket {
        self.state.price_bucket
    }

    pub fn set_price_bucket(&mut self, bucket: PriceBucket) {
        self.state.price_bucket = bucket;
        if bucket == PriceBucket::LifetimeOnly {
            self.state.include_lifetime = true;
        }
    }

    pub fn include_lifetime(&self) -> bool {
        self.state.include_lifetime
    }

    pub fn set_include_lifetime(&mut self, include: bool) {
        self.state.include_lifetime = include;
    }

    /// Put every control back in its reset position
    pub fn reset(&mut self) {
        self.state.search_text.clear();
        for group in FilterGroup::ALL {
            self.state.selected_mut(group).clear();
        }
        self.state.price_ceiling = self.price_ceiling_max;
        self.state.price_bucket = PriceBucket::Any;
        self.state.include_lifetime = false;
    }

    /// Whether any control differs from its reset position
    pub fn is_active(&self) -> bool {
        !self.state.search_text.trim().is_empty()
            || FilterGroup::ALL.iter().any(|g| !self.state.selected(*g).is_empty())
            || self.state.price_ceiling < self.price_ceiling_max
            || self.state.price_bucket != PriceBucket::Any
            || self.state.include_lifetime
    }
}
