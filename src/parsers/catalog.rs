use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::models::Item;
use crate::utils::validate_file_size;

/// Parse a catalog file (JSON array of items) and return the accepted items in file order
///
/// Malformed entries and entries whose name repeats an earlier one are logged and skipped.
/// Returns an error if the top level is not an array or more than 50% of entries are rejected.
pub fn parse_catalog_file(path: &Path) -> Result<Vec<Item>> {
    // Open file and validate size to avoid TOCTOU race condition
    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse catalog file as JSON: {}", path.display()))?;

    parse_catalog_value(value).with_context(|| format!("Invalid catalog: {}", path.display()))
}

/// Parse an already-decoded JSON document into catalog items
pub fn parse_catalog_value(value: Value) -> Result<Vec<Item>> {
    let Value::Array(entries) = value else {
        bail!("Catalog must be a JSON array of items");
    };

    let total = entries.len();
    let mut items = Vec::with_capacity(total);
    let mut seen_names = HashSet::new();
    let mut skipped_count = 0;

    for (idx, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Item>(entry) {
            Ok(item) => {
                if !seen_names.insert(item.name.clone()) {
                    log::warn!(
                        "Skipping catalog entry {}: duplicate name '{}'",
                        idx + 1,
                        item.name
                    );
                    skipped_count += 1;
                    continue;
                }
                items.push(item);
            }
            Err(e) => {
                log::warn!("Skipping catalog entry {}: {}", idx + 1, e);
                skipped_count += 1;
            }
        }
    }

    if total > 0 {
        let failure_rate = (skipped_count as f64) / (total as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many invalid catalog entries: {} of {} rejected ({:.1}%)",
                skipped_count,
                total,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        log::info!("Parsed catalog: {} items ({} skipped)", items.len(), skipped_count);
    }

    Ok(items)
}
