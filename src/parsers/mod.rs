//! Catalog file parsers
//!
//! # Error Handling Strategy
//!
//! Loading follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Individual entry failures**: Malformed items and duplicate names are logged as
//!   warnings and skipped, so one bad record does not hide the rest of the catalog.
//!
//! - **Catastrophic failure detection**: If more than 50% of entries are rejected, or the
//!   document is not a JSON array, loading fails. This prevents accepting a file that is
//!   not a catalog at all.
//!
//! - **Error propagation**: Uses `anyhow::Result` with context. Consumers don't match on
//!   error types, they report them.

pub mod catalog;
pub mod deserializers;

pub use catalog::{parse_catalog_file, parse_catalog_value};
