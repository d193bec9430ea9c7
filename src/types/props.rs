use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

use super::{ColumnNode, CssLength, FixedRowSpec, RowKeyPath};

/// Scrollbar width assumed until the platform value is measured (CSS sets 6px)
pub const DEFAULT_SCROLLBAR_WIDTH: f64 = 6.0;

/// Table layout algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLayoutMode {
    #[default]
    Fixed,
    Auto,
}

/// Body scrolling strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollType {
    #[default]
    None,
    Lazy,
    /// Virtual scrolling; the header cannot rely on CSS sticky
    Virtual,
}

/// Table configuration consumed by the layout engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableProps {
    pub columns: Vec<ColumnNode>,
    pub data: Vec<Value>,
    pub row_key: RowKeyPath,
    pub fixed_rows: Option<FixedRowSpec>,
    pub bordered: bool,
    pub table_layout: TableLayoutMode,
    pub table_content_width: Option<CssLength>,
    pub max_height: Option<CssLength>,
    pub header_affixed_top: bool,
    pub scroll_type: ScrollType,
    pub first_full_row: bool,
    pub last_full_row: bool,
    /// Reject fixed columns without a unique explicit `colKey`
    pub strict_column_keys: bool,
}

impl TableProps {
    /// Parse props from a JSON document
    ///
    /// # Errors
    /// Returns `FixedTableError::Json` if the document is malformed or does
    /// not match the props shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fixed rows, treating an empty spec as absent
    pub fn fixed_rows(&self) -> Option<FixedRowSpec> {
        self.fixed_rows.filter(|spec| !spec.is_empty())
    }

    /// Header widths are only needed for an affixed header or virtual scroll
    pub fn needs_header_widths(&self) -> bool {
        self.header_affixed_top || self.scroll_type == ScrollType::Virtual
    }

    /// True if any input that affects fixed positions differs
    pub fn layout_changed(&self, other: &TableProps) -> bool {
        self.data != other.data
            || self.columns != other.columns
            || self.row_key != other.row_key
            || self.bordered != other.bordered
            || self.table_layout != other.table_layout
            || self.table_content_width != other.table_content_width
            || self.fixed_rows != other.fixed_rows
            || self.first_full_row != other.first_full_row
            || self.last_full_row != other.last_full_row
    }

    /// True if any input that affects header overflow differs
    pub fn overflow_changed(&self, other: &TableProps) -> bool {
        self.max_height != other.max_height
            || self.data != other.data
            || self.columns != other.columns
            || self.bordered != other.bordered
    }

    /// True if any input that affects header cell widths differs
    pub fn header_widths_changed(&self, other: &TableProps) -> bool {
        self.data != other.data
            || self.columns != other.columns
            || self.bordered != other.bordered
            || self.table_layout != other.table_layout
            || self.fixed_rows != other.fixed_rows
            || self.header_affixed_top != other.header_affixed_top
            || self.table_content_width != other.table_content_width
    }
}
