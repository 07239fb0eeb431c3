//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a single catalog item as JSON
#[derive(Clone)]
pub struct ItemBuilder {
    value: Value,
}

impl ItemBuilder {
    /// Item with a finite price and sensible defaults for every other field
    pub fn new(name: &str, price: f64) -> Self {
        Self {
            value: json!({
                "name": name,
                "platforms": ["Windows"],
                "category": "Internal",
                "accessMode": "Keyless",
                "statusTags": [],
                "featureTags": [],
                "qualityScore": 80,
                "summary": format!("{} summary", name),
                "details": format!("{} details", name),
                "knownIssues": [],
                "priceLabel": format!("${:.2} • 7 days", price),
                "priceAmount": price,
                "durationDays": 7
            }),
        }
    }

    /// Item priced with the lifetime sentinel
    pub fn lifetime(name: &str) -> Self {
        let mut builder = Self::new(name, 0.0);
        builder.value["priceAmount"] = Value::Null;
        builder.value["durationDays"] = Value::Null;
        builder.value["priceLabel"] = json!("Lifetime");
        builder
    }

    pub fn platforms(mut self, platforms: &[&str]) -> Self {
        self.value["platforms"] = json!(platforms);
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.value["statusTags"] = json!(tags);
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.value["category"] = json!(category);
        self
    }

    pub fn access(mut self, access: &str) -> Self {
        self.value["accessMode"] = json!(access);
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.value["summary"] = json!(summary);
        self
    }

    /// Drop a field entirely (for malformed-entry tests)
    pub fn without(mut self, field: &str) -> Self {
        if let Value::Object(map) = &mut self.value {
            map.remove(field);
        }
        self
    }

    pub fn to_json(&self) -> Value {
        self.value.clone()
    }
}

/// Builder for a catalog file inside a temporary directory
pub struct CatalogFileBuilder {
    temp_dir: TempDir,
    entries: Vec<Value>,
}

impl CatalogFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, entries: Vec::new() }
    }

    pub fn with_item(mut self, item: ItemBuilder) -> Self {
        self.entries.push(item.to_json());
        self
    }

    /// Add a raw JSON entry, valid or not
    pub fn with_raw(mut self, entry: Value) -> Self {
        self.entries.push(entry);
        self
    }

    /// Write `catalog.json` and return the directory (keep it alive) plus the file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("catalog.json");
        let content =
            serde_json::to_string_pretty(&Value::Array(self.entries)).expect("Failed to serialize");
        fs::write(&path, content).expect("Failed to write catalog.json");
        (self.temp_dir, path)
    }
}

/// Write arbitrary content as a catalog file
pub fn write_catalog(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("catalog.json");
    fs::write(&path, content).expect("Failed to write catalog file");
    path
}

/// The five-item catalog used by the pricing scenarios: 5.99, 19.99, lifetime, 3.99, 12.00
pub fn scenario_catalog() -> CatalogFileBuilder {
    CatalogFileBuilder::new()
        .with_item(
            ItemBuilder::new("Aether Decompiler", 5.99)
                .platforms(&["Windows", "macOS"])
                .tags(&["Internal", "Trending"]),
        )
        .with_item(
            ItemBuilder::new("KernelForge", 19.99)
                .category("External")
                .access("Keyed")
                .tags(&["Kernel"]),
        )
        .with_item(
            ItemBuilder::lifetime("Nebula AI Runner")
                .platforms(&["Android", "iOS"])
                .category("External"),
        )
        .with_item(ItemBuilder::new("MiniCore", 3.99).platforms(&["Windows", "Android"]))
        .with_item(
            ItemBuilder::new("Sigma Suite", 12.0)
                .platforms(&["macOS"])
                .category("External")
                .access("Keyed")
                .tags(&["Warning"]),
        )
}
