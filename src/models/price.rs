use std::fmt;

use serde::{Serialize, Serializer};

/// Numeric price of an item, or the lifetime sentinel.
///
/// `Lifetime` is its own variant so it can never be mistaken for `0.0` or
/// compared against a real amount. Every numeric comparison goes through
/// [`Price::finite`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Finite(f64),
    Lifetime,
}

impl Price {
    /// The amount when the price is finite, `None` for the sentinel
    pub fn finite(self) -> Option<f64> {
        match self {
            Price::Finite(amount) => Some(amount),
            Price::Lifetime => None,
        }
    }

    pub fn is_lifetime(self) -> bool {
        matches!(self, Price::Lifetime)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Finite(amount) => write!(f, "${:.2}", amount),
            Price::Lifetime => write!(f, "Lifetime"),
        }
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Price::Finite(amount) => serializer.serialize_f64(*amount),
            Price::Lifetime => serializer.serialize_none(),
        }
    }
}

/// Access duration in days, parallel to [`Price`]. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationDays {
    Days(u32),
    Unlimited,
}

impl fmt::Display for DurationDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationDays::Days(1) => write!(f, "1 day"),
            DurationDays::Days(days) => write!(f, "{} days", days),
            DurationDays::Unlimited => write!(f, "unlimited"),
        }
    }
}

impl Serialize for DurationDays {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DurationDays::Days(days) => serializer.serialize_u32(*days),
            DurationDays::Unlimited => serializer.serialize_none(),
        }
    }
}
