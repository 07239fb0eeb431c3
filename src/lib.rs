//! Catalog Explorer - Filter and browse a catalog of priced items
//!
//! This library loads a static catalog and narrows it with independent filters:
//!
//! - Free-text search over item names
//! - Multi-select groups (platform, status tag, category, access mode): OR within a
//!   group, AND across groups
//! - A numeric price ceiling and a price-bucket quick filter
//! - A "lifetime" price sentinel that only the lifetime controls can admit
//!
//! Results are pushed to a renderer through the [`view::View`] trait: an interactive
//! terminal browser ([`tui`]) or a static HTML page ([`view::html`]).
//!
//! # Example
//!
//! ```
//! use catalog_explorer::{Catalog, FilterControls, evaluate};
//!
//! let catalog = Catalog::builtin();
//! let mut controls = FilterControls::new(catalog.price_ceiling_max());
//! controls.set_search("forge");
//!
//! let results = evaluate(catalog.items(), &controls.snapshot());
//! assert_eq!(results[0].name, "KernelForge");
//! ```

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod tui;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, load_catalog};
pub use filters::{FilterControls, FilterGroup, FilterState, PriceBucket, evaluate};
pub use models::{Item, ItemId, Price};
pub use parsers::parse_catalog_file;
pub use view::{Session, UiEvent, View};
