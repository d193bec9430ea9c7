use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PositionKey;

/// Default field used to identify data rows
pub const DEFAULT_ROW_KEY: &str = "id";

/// Number of leading rows pinned to the top and trailing rows pinned to
/// the bottom of the body.
///
/// Deserializes from the `[top, bottom]` pair used by table props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "[usize; 2]")]
pub struct FixedRowSpec {
    pub top: usize,
    pub bottom: usize,
}

impl FixedRowSpec {
    pub fn new(top: usize, bottom: usize) -> Self {
        Self { top, bottom }
    }

    /// True when no row is pinned
    pub fn is_empty(&self) -> bool {
        self.top == 0 && self.bottom == 0
    }

    /// Whether the row at `index` is pinned to the top
    pub fn is_top(&self, index: usize) -> bool {
        index < self.top
    }

    /// Whether the row at `index` (of `len` rows) is pinned to the bottom
    pub fn is_bottom(&self, index: usize, len: usize) -> bool {
        self.bottom > 0 && index >= len.saturating_sub(self.bottom)
    }
}

impl From<Vec<usize>> for FixedRowSpec {
    fn from(pair: Vec<usize>) -> Self {
        Self {
            top: pair.first().copied().unwrap_or(0),
            bottom: pair.get(1).copied().unwrap_or(0),
        }
    }
}

impl From<FixedRowSpec> for [usize; 2] {
    fn from(spec: FixedRowSpec) -> Self {
        [spec.top, spec.bottom]
    }
}

/// Accessor resolving a data row to its identity.
///
/// Holds a dotted path (`"id"`, `"meta.uid"`); array segments accept
/// numeric indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowKeyPath(String);

impl Default for RowKeyPath {
    fn default() -> Self {
        Self(DEFAULT_ROW_KEY.to_string())
    }
}

impl RowKeyPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the row's key. Strings and non-negative integers are
    /// accepted; anything else (missing, null, objects, floats) is `None`.
    pub fn resolve(&self, row: &Value) -> Option<PositionKey> {
        let mut current = row;
        for segment in self.0.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        match current {
            Value::String(s) => Some(PositionKey::Name(s.clone())),
            Value::Number(n) => n.as_u64().map(PositionKey::Index),
            _ => None,
        }
    }
}
