use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};

use crate::models::Item;

/// Multi-select filter groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterGroup {
    /// Item platforms (multi-valued on the item)
    Platform,
    /// Status tags (multi-valued on the item)
    Tag,
    /// Item category (single-valued on the item)
    Category,
    /// Access mode (single-valued on the item)
    AccessMode,
}

impl FilterGroup {
    pub const ALL: [FilterGroup; 4] =
        [FilterGroup::Platform, FilterGroup::Tag, FilterGroup::Category, FilterGroup::AccessMode];

    /// Human-readable group title
    pub fn label(self) -> &'static str {
        match self {
            FilterGroup::Platform => "Platform",
            FilterGroup::Tag => "Status",
            FilterGroup::Category => "Category",
            FilterGroup::AccessMode => "Access",
        }
    }

    /// Stable key used in rendered markup (`data-filter-group`)
    pub fn key(self) -> &'static str {
        match self {
            FilterGroup::Platform => "platform",
            FilterGroup::Tag => "tags",
            FilterGroup::Category => "category",
            FilterGroup::AccessMode => "access",
        }
    }

    /// Values an item carries for this group
    pub fn values_of(self, item: &Item) -> &[String] {
        match self {
            FilterGroup::Platform => &item.platforms,
            FilterGroup::Tag => &item.status_tags,
            FilterGroup::Category => std::slice::from_ref(&item.category),
            FilterGroup::AccessMode => std::slice::from_ref(&item.access_mode),
        }
    }
}

/// Quick price filter, mutually exclusive choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBucket {
    #[default]
    Any,
    Under5,
    Under10,
    Under20,
    TwentyPlus,
    LifetimeOnly,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 6] = [
        PriceBucket::Any,
        PriceBucket::Under5,
        PriceBucket::Under10,
        PriceBucket::Under20,
        PriceBucket::TwentyPlus,
        PriceBucket::LifetimeOnly,
    ];

    /// Control value (`all`, `lt5`, `lt10`, `lt20`, `20plus`, `lifetime`)
    pub fn as_str(self) -> &'static str {
        match self {
            PriceBucket::Any => "all",
            PriceBucket::Under5 => "lt5",
            PriceBucket::Under10 => "lt10",
            PriceBucket::Under20 => "lt20",
            PriceBucket::TwentyPlus => "20plus",
            PriceBucket::LifetimeOnly => "lifetime",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceBucket::Any => "Any price",
            PriceBucket::Under5 => "Under $5",
            PriceBucket::Under10 => "Under $10",
            PriceBucket::Under20 => "Under $20",
            PriceBucket::TwentyPlus => "$20+",
            PriceBucket::LifetimeOnly => "Lifetime",
        }
    }

    /// Next bucket in control order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|b| *b == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceBucket {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        PriceBucket::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow!(
                    "Invalid price bucket: '{}' (valid: all, lt5, lt10, lt20, 20plus, lifetime)",
                    s
                )
            })
    }
}

/// Immutable snapshot of every filter control, taken once per evaluation
///
/// Empty selection sets and empty search text impose no constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search_text: String,
    pub platforms: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub access_modes: BTreeSet<String>,
    /// Inclusive upper bound for finite prices
    pub price_ceiling: f64,
    pub price_bucket: PriceBucket,
    /// Whether lifetime-priced items pass the ceiling rule
    pub include_lifetime: bool,
}

impl FilterState {
    /// State that admits every item: no selections, unbounded ceiling, lifetime included
    pub fn unconstrained() -> Self {
        Self {
            search_text: String::new(),
            platforms: BTreeSet::new(),
            tags: BTreeSet::new(),
            categories: BTreeSet::new(),
            access_modes: BTreeSet::new(),
            price_ceiling: f64::INFINITY,
            price_bucket: PriceBucket::Any,
            include_lifetime: true,
        }
    }

    /// Selected options for a group
    pub fn selected(&self, group: FilterGroup) -> &BTreeSet<String> {
        match group {
            FilterGroup::Platform => &self.platforms,
            FilterGroup::Tag => &self.tags,
            FilterGroup::Category => &self.categories,
            FilterGroup::AccessMode => &self.access_modes,
        }
    }

    pub fn selected_mut(&mut self, group: FilterGroup) -> &mut BTreeSet<String> {
        match group {
            FilterGroup::Platform => &mut self.platforms,
            FilterGroup::Tag => &mut self.tags,
            FilterGroup::Category => &mut self.categories,
            FilterGroup::AccessMode => &mut self.access_modes,
        }
    }

    /// Search text as matched: trimmed and lowercased
    pub fn normalized_search(&self) -> String {
        self.search_text.trim().to_lowercase()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::unconstrained()
    }
}
