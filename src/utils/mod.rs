pub mod environment;
pub mod files;
pub mod terminal;

pub use environment::{
    CATALOG_ENV_VAR, CatalogSource, get_config_catalog_path, resolve_catalog_source,
};
pub use files::validate_file_size;
pub use terminal::{sanitize_for_terminal, truncate_for_terminal};
