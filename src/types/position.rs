use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a column or row in the position index.
///
/// Columns use their `colKey` (or positional index), rows use the value
/// resolved by the row-key accessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionKey {
    Index(u64),
    Name(String),
}

impl From<usize> for PositionKey {
    fn from(index: usize) -> Self {
        Self::Index(u64::try_from(index).unwrap_or(u64::MAX))
    }
}

impl From<&str> for PositionKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for PositionKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Computed sticky offsets for one column or row (pixels).
///
/// Offsets stay `None` until the solver that owns them has run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    /// Last measured width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Last measured height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Arena slot of the enclosing group, if any (non-owning)
    #[serde(skip)]
    pub parent: Option<usize>,
    pub is_last_left_fixed: bool,
    pub is_first_right_fixed: bool,
}

impl PositionRecord {
    pub fn left_or_zero(&self) -> f64 {
        self.left.unwrap_or(0.0)
    }

    pub fn right_or_zero(&self) -> f64 {
        self.right.unwrap_or(0.0)
    }

    pub fn width_or_zero(&self) -> f64 {
        self.width.unwrap_or(0.0)
    }

    pub fn height_or_zero(&self) -> f64 {
        self.height.unwrap_or(0.0)
    }
}

/// Keyed map from column/row identity to computed offsets.
///
/// Columns and rows live in separate namespaces so a numeric row id can
/// never shadow a positional column key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PositionIndex {
    pub columns: HashMap<PositionKey, PositionRecord>,
    pub rows: HashMap<PositionKey, PositionRecord>,
}

impl PositionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a column record by key
    pub fn column(&self, key: &PositionKey) -> Option<&PositionRecord> {
        self.columns.get(key)
    }

    /// Look up a row record by resolved row key
    pub fn row(&self, key: &PositionKey) -> Option<&PositionRecord> {
        self.rows.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len() + self.rows.len()
    }

    pub fn clear(&mut self) {
        self.columns.clear();
        self.rows.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_key_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&PositionKey::from("name")).unwrap(),
            "\"name\""
        );
        assert_eq!(serde_json::to_string(&PositionKey::from(2usize)).unwrap(), "2");
        let key: PositionKey = serde_json::from_str("7").unwrap();
        assert_eq!(key, PositionKey::Index(7));
    }

    #[test]
    fn test_record_omits_unset_offsets() {
        let record = PositionRecord {
            left: Some(12.0),
            ..PositionRecord::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["left"], 12.0);
        assert!(json.get("right").is_none());
        assert_eq!(json["isLastLeftFixed"], false);
    }
}
