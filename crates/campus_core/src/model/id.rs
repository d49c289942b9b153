//! Canonical item identifier.
//!
//! # Invariants
//! - `"5"`, `"05"` and `5` normalize to the same `ItemId`.
//! - A parsed `ItemId` is never empty.

use super::de::RawScalar;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier shared by resources and articles.
///
/// Documents carry ids either as JSON numbers or strings, and URL query
/// parameters always deliver strings. Both collapse to this one form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Parses raw id text into canonical form.
    ///
    /// Returns `None` for blank input. Purely decimal ids drop leading zeros.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let stripped = trimmed.trim_start_matches('0');
            let canonical = if stripped.is_empty() { "0" } else { stripped };
            return Some(Self(canonical.to_string()));
        }

        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id can never match a loaded item.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

// Lookup conversions: blank text maps to the empty id, which the catalog
// never contains.
impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| Self(String::new()))
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::from(value.to_string())
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawScalar::deserialize(deserializer)?;
        let text = raw.into_text();
        Self::parse(&text).ok_or_else(|| serde::de::Error::custom("item id must not be empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::ItemId;

    #[test]
    fn numeric_and_string_forms_collapse() {
        assert_eq!(ItemId::from(5u64), ItemId::from("5"));
        assert_eq!(ItemId::from("05"), ItemId::from(5));
        assert_eq!(ItemId::from(" 5 "), ItemId::from(5u32));
    }

    #[test]
    fn zero_keeps_one_digit() {
        assert_eq!(ItemId::parse("000").unwrap().as_str(), "0");
    }

    #[test]
    fn non_numeric_ids_are_only_trimmed() {
        assert_eq!(ItemId::parse(" cs-101 ").unwrap().as_str(), "cs-101");
        assert!(ItemId::parse("   ").is_none());
        assert!(ItemId::from("").is_blank());
    }

    #[test]
    fn deserializes_from_number_or_string() {
        let from_number: ItemId = serde_json::from_str("7").unwrap();
        let from_string: ItemId = serde_json::from_str("\"007\"").unwrap();
        assert_eq!(from_number, from_string);
        assert!(serde_json::from_str::<ItemId>("\"  \"").is_err());
    }
}
