//! Data models for the item catalog.
//!
//! - [`Item`] - One immutable catalog record
//! - [`ItemId`] - Position of an item inside its catalog
//! - [`Price`] - Finite amount or the lifetime sentinel
//! - [`DurationDays`] - Access duration, parallel to the price
//!
//! Items are deserialized from camelCase JSON; the price and duration fields
//! use custom deserializers from the `parsers::deserializers` module so that
//! `null` maps to the sentinel and an omitted field is rejected.

pub mod item;
pub mod price;

pub use item::{Item, ItemId};
pub use price::{DurationDays, Price};
