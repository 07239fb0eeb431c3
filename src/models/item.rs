use serde::{Deserialize, Serialize};

use super::price::{DurationDays, Price};

/// Position of an item in its catalog. Stable for the catalog's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub category: String,
    pub access_mode: String,
    #[serde(default)]
    pub status_tags: Vec<String>,
    #[serde(default)]
    pub feature_tags: Vec<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_quality_score")]
    pub quality_score: u8,
    pub summary: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub known_issues: Vec<String>,
    pub price_label: String,
    #[serde(
        rename = "priceAmount",
        deserialize_with = "crate::parsers::deserializers::deserialize_price"
    )]
    pub price: Price,
    #[serde(
        rename = "durationDays",
        deserialize_with = "crate::parsers::deserializers::deserialize_duration"
    )]
    pub duration: DurationDays,
}

impl Item {
    /// Platforms joined for display, "—" when there are none
    pub fn platforms_display(&self) -> String {
        if self.platforms.is_empty() { "—".to_string() } else { self.platforms.join(", ") }
    }

    /// Price label for display, "—" when the label is blank
    pub fn price_display(&self) -> &str {
        if self.price_label.trim().is_empty() { "—" } else { &self.price_label }
    }

    /// Metadata line shown at the bottom of the detail panel
    pub fn metadata_line(&self) -> String {
        format!(
            "Platforms: {} • Category: {} • Access: {} • Quality {}%",
            self.platforms_display(),
            self.category,
            self.access_mode,
            self.quality_score
        )
    }

    /// Plain-text rendition of the full record (used for clipboard export)
    pub fn detail_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n\n{}\n", self.name, self.summary, self.details);
        if !self.feature_tags.is_empty() {
            out.push_str("\nFeatures:\n");
            for feature in &self.feature_tags {
                out.push_str(&format!("  - {}\n", feature));
            }
        }
        out.push_str("\nKnown issues:\n");
        for issue in &self.known_issues {
            out.push_str(&format!("  - {}\n", issue));
        }
        out.push_str(&format!("\nPricing: {}\n{}\n", self.price_display(), self.metadata_line()));
        out
    }
}
