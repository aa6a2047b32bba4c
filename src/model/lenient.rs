//! Tolerant field decoders for payloads produced by the results service.
//!
//! The service omits fields, sends `null`, and mixes numbers and strings for
//! identifiers. None of that should fail a whole payload.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treat a missing or `null` field as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a string or number as text. Empty strings become `None`.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_from_value(&Value::deserialize(deserializer)?))
}

/// Same as [`optional_text`] but falls back to an empty string.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

/// Parse a strum-backed enum, mapping unknown or missing text to `None`.
pub(crate) fn optional_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(optional_text(deserializer)?.and_then(|s| T::from_str(&s).ok()))
}

/// Parse a strum-backed enum, mapping unknown or missing text to the default.
pub(crate) fn enum_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    Ok(optional_enum(deserializer)?.unwrap_or_default())
}

/// A list whose elements are decoded one at a time. Elements that do not
/// decode are skipped; anything that is not an array reads as empty.
pub(crate) fn lossy_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(items)
}

/// A positive whole number, read from a JSON number or numeric string.
pub(crate) fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_from_value(&Value::deserialize(deserializer)?))
}

/// A `race name -> position` map. Entries that are not a positive whole
/// number are dropped, as is anything that is not an object.
pub(crate) fn position_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let positions = match Value::deserialize(deserializer)? {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(race, value)| count_from_value(&value).map(|p| (race, p)))
            .collect(),
        _ => BTreeMap::new(),
    };
    Ok(positions)
}

pub(crate) fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn count_from_value(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    u32::try_from(n).ok().filter(|n| *n > 0)
}

pub(crate) fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_count_from_value() {
        assert_eq!(count_from_value(&json!(7)), Some(7));
        assert_eq!(count_from_value(&json!(7.0)), Some(7));
        assert_eq!(count_from_value(&json!("12")), Some(12));
        assert_eq!(count_from_value(&json!(0)), None);
        assert_eq!(count_from_value(&json!(-3)), None);
        assert_eq!(count_from_value(&json!(2.5)), None);
        assert_eq!(count_from_value(&json!(null)), None);
        assert_eq!(count_from_value(&json!({"rank": 1})), None);
    }

    #[test]
    fn test_lossy_vec_skips_bad_elements() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "lossy_vec")]
            items: Vec<u32>,
        }

        let wrapper: Wrapper =
            serde_json::from_value(json!({"items": [1, "x", 3, null]})).unwrap();
        assert_eq!(wrapper.items, vec![1, 3]);
        let wrapper: Wrapper = serde_json::from_value(json!({"items": "nope"})).unwrap();
        assert!(wrapper.items.is_empty());
    }

    #[test]
    fn test_text_from_value() {
        assert_eq!(text_from_value(&json!("A123456")), Some("A123456".into()));
        assert_eq!(text_from_value(&json!(2024)), Some("2024".into()));
        assert_eq!(text_from_value(&json!("  ")), None);
        assert_eq!(text_from_value(&json!(false)), None);
    }
}
