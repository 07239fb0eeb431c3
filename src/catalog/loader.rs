use anyhow::{Context, Result};

use super::builtin::builtin_items;
use super::store::Catalog;
use crate::parsers::parse_catalog_file;
use crate::utils::CatalogSource;

/// Load the catalog from its resolved source
///
/// # Errors
///
/// Returns an error if the catalog file cannot be read or parsed, or if more than half
/// of its entries are rejected. See [`crate::parsers`] for the skipping rules.
pub fn load_catalog(source: &CatalogSource) -> Result<Catalog> {
    let items = match source {
        CatalogSource::File(path) => parse_catalog_file(path)?,
        CatalogSource::Builtin => builtin_items(),
    };

    let catalog =
        Catalog::new(items).with_context(|| format!("Failed to build catalog from {}", source))?;
    log::debug!(
        "Loaded {} items from {} (price ceiling max ${})",
        catalog.len(),
        source,
        catalog.price_ceiling_max()
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_builtin() {
        let catalog = load_catalog(&CatalogSource::Builtin).unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.price_ceiling_max(), 20.0);
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        let content = r#"[{
            "name": "Solo",
            "category": "Internal",
            "accessMode": "Keyed",
            "qualityScore": 10,
            "summary": "s",
            "priceLabel": "$99",
            "priceAmount": 99,
            "durationDays": 365
        }]"#;
        file.write_all(content.as_bytes()).unwrap();

        let catalog = load_catalog(&CatalogSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.price_ceiling_max(), 99.0);
    }

    #[test]
    fn test_load_missing_file() {
        let source = CatalogSource::File(PathBuf::from("/nonexistent/catalog.json"));
        assert!(load_catalog(&source).is_err());
    }
}
