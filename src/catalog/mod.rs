//! Catalog store: the static, ordered item list everything else reads
//!
//! # Error Handling Strategy
//!
//! - **Loading**: delegated to [`crate::parsers`], which skips bad entries with warnings
//!   and fails only when the file is systematically broken.
//!
//! - **Construction**: [`Catalog::new`] rejects duplicate names, since names are both the
//!   display key and the search key.
//!
//! - **After load**: the catalog is immutable and every accessor is infallible.

pub mod builtin;
pub mod loader;
pub mod store;

pub use builtin::builtin_items;
pub use loader::load_catalog;
pub use store::Catalog;
