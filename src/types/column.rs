use serde::{Deserialize, Serialize};

use super::{CssLength, PositionKey};

/// Edge a column is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedSide {
    /// Scrolls with the content (default)
    #[default]
    None,
    /// Pinned to the left edge
    Left,
    /// Pinned to the right edge
    Right,
}

impl FixedSide {
    /// True for `Left` and `Right`
    pub fn is_fixed(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One column definition, possibly a group with nested children
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnNode {
    /// Explicit column key; matched against `data-colkey` on rendered cells
    pub col_key: Option<String>,
    /// Edge this column is pinned to
    pub fixed: FixedSide,
    /// Header text (informational, used in diagnostics)
    pub title: Option<String>,
    /// Declared width, a pixel number or CSS string
    pub width: Option<CssLength>,
    /// Child columns (empty for leaves)
    pub children: Vec<ColumnNode>,
}

impl ColumnNode {
    /// Create a leaf column with an explicit key
    pub fn new(col_key: impl Into<String>) -> Self {
        Self {
            col_key: Some(col_key.into()),
            ..Self::default()
        }
    }

    /// Create a leaf column without a key (positional fallback applies)
    pub fn unkeyed() -> Self {
        Self::default()
    }

    /// Pin this column to the left edge
    #[must_use]
    pub fn fixed_left(mut self) -> Self {
        self.fixed = FixedSide::Left;
        self
    }

    /// Pin this column to the right edge
    #[must_use]
    pub fn fixed_right(mut self) -> Self {
        self.fixed = FixedSide::Right;
        self
    }

    /// Set the header title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the declared width
    #[must_use]
    pub fn with_width(mut self, width: impl Into<CssLength>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Replace the children of this column, turning it into a group
    #[must_use]
    pub fn with_children(mut self, children: Vec<ColumnNode>) -> Self {
        self.children = children;
        self
    }

    /// True if this column has nested children
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Key used in the position index: the explicit key, or the column's
    /// index within its sibling list when no key was given.
    ///
    /// Positional keys collide across sibling groups at the same position.
    pub fn key_at(&self, sibling_index: usize) -> PositionKey {
        match self.col_key.as_deref() {
            Some(key) if !key.is_empty() => PositionKey::Name(key.to_string()),
            _ => PositionKey::from(sibling_index),
        }
    }

    /// Label for diagnostics: title, then key, then a placeholder
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.col_key.as_deref())
            .unwrap_or("<untitled>")
    }
}

/// Flatten a column tree into its leaf columns, in declaration order.
pub fn flat_columns(columns: &[ColumnNode]) -> Vec<&ColumnNode> {
    let mut result = Vec::new();
    for column in columns {
        if column.is_group() {
            result.extend(flat_columns(&column.children));
        } else {
            result.push(column);
        }
    }
    result
}
