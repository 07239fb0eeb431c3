use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming a catalog file
pub const CATALOG_ENV_VAR: &str = "CATALOG_EXPLORER_CATALOG";

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Builtin,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Builtin => write!(f, "built-in demo catalog"),
        }
    }
}

/// Default catalog location (`<config dir>/catalog-explorer/catalog.json`)
pub fn get_config_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("catalog-explorer").join("catalog.json"))
}

/// Resolve the catalog source: explicit flag, then environment, then config file, then built-in
pub fn resolve_catalog_source(flag: Option<&Path>) -> CatalogSource {
    resolve_catalog_source_with(flag, env::var(CATALOG_ENV_VAR).ok(), get_config_catalog_path())
}

fn resolve_catalog_source_with(
    flag: Option<&Path>,
    env_value: Option<String>,
    config_path: Option<PathBuf>,
) -> CatalogSource {
    if let Some(path) = flag {
        return CatalogSource::File(path.to_path_buf());
    }

    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return CatalogSource::File(PathBuf::from(value));
    }

    match config_path {
        Some(path) if path.is_file() => CatalogSource::File(path),
        _ => CatalogSource::Builtin,
    }
}
