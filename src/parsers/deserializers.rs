use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{DurationDays, Price};

/// Custom deserializer for `priceAmount`: a non-negative number, or `null` for lifetime
pub fn deserialize_price<'de, D>(deserializer: D) -> Result<Price, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(Price::Lifetime),
        Value::Number(n) => {
            let amount = n.as_f64().ok_or_else(|| Error::custom("invalid price amount"))?;
            if !amount.is_finite() || amount < 0.0 {
                return Err(Error::custom(format!("price must be non-negative, got {}", amount)));
            }
            Ok(Price::Finite(amount))
        }
        _ => Err(Error::custom("priceAmount must be a number or null")),
    }
}

/// Custom deserializer for `durationDays`: a whole number of days, or `null` for unlimited
pub fn deserialize_duration<'de, D>(deserializer: D) -> Result<DurationDays, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(DurationDays::Unlimited),
        Value::Number(n) => {
            let days = n
                .as_u64()
                .and_then(|d| u32::try_from(d).ok())
                .ok_or_else(|| Error::custom(format!("invalid duration in days: {}", n)))?;
            Ok(DurationDays::Days(days))
        }
        _ => Err(Error::custom("durationDays must be a number or null")),
    }
}

/// Custom deserializer for `qualityScore`, a percentage in 0..=100
pub fn deserialize_quality_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let score = u64::deserialize(deserializer)?;
    if score > 100 {
        return Err(Error::custom(format!("quality score must be 0-100, got {}", score)));
    }
    Ok(score as u8)
}

#[cfg(test)]
mod tests {
    use crate::models::{DurationDays, Item, Price};

    fn item_json(price: &str, duration: &str) -> String {
        format!(
            r#"{{
                "name": "MiniCore",
                "platforms": ["Windows", "Android"],
                "category": "Internal",
                "accessMode": "Keyless",
                "statusTags": ["Internal"],
                "featureTags": ["Multi-instance"],
                "qualityScore": 71,
                "summary": "Compact executor.",
                "details": "Low footprint.",
                "knownIssues": [],
                "priceLabel": "$3.99 • 3 days"
                {}{}
            }}"#,
            price, duration
        )
    }

    #[test]
    fn test_item_finite_price() {
        let json = item_json(r#", "priceAmount": 3.99"#, r#", "durationDays": 3"#);
        let item: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item.price, Price::Finite(3.99));
        assert_eq!(item.duration, DurationDays::Days(3));
        assert_eq!(item.access_mode, "Keyless");
    }

    #[test]
    fn test_item_null_price_is_lifetime() {
        let json = item_json(r#", "priceAmount": null"#, r#", "durationDays": null"#);
        let item: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item.price, Price::Lifetime);
        assert_eq!(item.duration, DurationDays::Unlimited);
    }

    #[test]
    fn test_item_missing_price_rejected() {
        let json = item_json("", r#", "durationDays": null"#);
        let result: Result<Item, _> = serde_json::from_str(&json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("priceAmount"));
    }

    #[test]
    fn test_item_negative_price_rejected() {
        let json = item_json(r#", "priceAmount": -1.0"#, r#", "durationDays": 3"#);
        let result: Result<Item, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_string_price_rejected() {
        let json = item_json(r#", "priceAmount": "5.99""#, r#", "durationDays": 3"#);
        let result: Result<Item, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_fractional_duration_rejected() {
        let json = item_json(r#", "priceAmount": 1.0"#, r#", "durationDays": 2.5"#);
        let result: Result<Item, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_quality_score_out_of_range() {
        let json = item_json(r#", "priceAmount": 1.0"#, r#", "durationDays": 2"#)
            .replace("\"qualityScore\": 71", "\"qualityScore\": 150");
        let result: Result<Item, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_optional_collections_default() {
        let json = r#"{
            "name": "Bare",
            "category": "Internal",
            "accessMode": "Keyed",
            "qualityScore": 50,
            "summary": "s",
            "priceLabel": "Lifetime",
            "priceAmount": null,
            "durationDays": null
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.platforms.is_empty());
        assert!(item.status_tags.is_empty());
        assert!(item.known_issues.is_empty());
        assert_eq!(item.details, "");
    }
}
