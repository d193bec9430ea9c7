//! Inline sticky styles and boundary flags for header, body and footer
//! cells.
//!
//! Class names themselves belong to the renderer; these helpers only report
//! which fixed-position classes apply.

use std::fmt::Write;

use serde::Serialize;

use crate::types::{ColumnNode, FixedRowSpec, FixedSide, PositionIndex, PositionKey};

/// Which fixed-position classes apply to a cell or row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedCellClasses {
    pub fixed_left: bool,
    pub fixed_right: bool,
    pub last_left: bool,
    pub first_right: bool,
    pub fixed_top: bool,
    pub fixed_bottom: bool,
    pub first_bottom: bool,
    pub without_border_bottom: bool,
}

/// Sticky offsets and classes for one cell or row
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FixedCellStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    pub classes: FixedCellClasses,
}

impl FixedCellStyle {
    /// Inline CSS declarations, e.g. `left: 40px;`
    pub fn css(&self) -> String {
        let mut css = String::new();
        for (prop, value) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if let Some(px) = value {
                let _ = write!(css, "{prop}: {px}px;");
            }
        }
        css
    }
}

/// Style for a column's header/body/footer cells.
///
/// `index` is the column's position among its siblings, used when the
/// column has no key. Returns `None` when the column has no record.
pub fn column_fixed_style(
    column: &ColumnNode,
    index: usize,
    positions: &PositionIndex,
) -> Option<FixedCellStyle> {
    let record = positions.column(&column.key_at(index))?;
    let left = column.fixed == FixedSide::Left;
    let right = column.fixed == FixedSide::Right;
    Some(FixedCellStyle {
        left: if left { record.left } else { None },
        right: if right { record.right } else { None },
        classes: FixedCellClasses {
            fixed_left: left,
            fixed_right: right,
            last_left: left && record.is_last_left_fixed,
            first_right: right && record.is_first_right_fixed,
            ..FixedCellClasses::default()
        },
        ..FixedCellStyle::default()
    })
}

/// Style for a body row.
///
/// Returns `None` when no row is fixed.
pub fn row_fixed_style(
    row_key: &PositionKey,
    row_index: usize,
    row_count: usize,
    fixed_rows: Option<FixedRowSpec>,
    positions: &PositionIndex,
) -> Option<FixedCellStyle> {
    let spec = fixed_rows.filter(|s| !s.is_empty())?;
    let fixed_top = spec.is_top(row_index);
    let fixed_bottom = spec.is_bottom(row_index, row_count);
    let first_bottom_row = row_count.checked_sub(spec.bottom);
    let record = positions.row(row_key);

    Some(FixedCellStyle {
        top: record.and_then(|r| r.top).filter(|_| fixed_top),
        bottom: record.and_then(|r| r.bottom).filter(|_| fixed_bottom),
        classes: FixedCellClasses {
            fixed_top,
            fixed_bottom,
            first_bottom: spec.bottom > 0 && first_bottom_row == Some(row_index),
            without_border_bottom: spec.bottom > 0
                && first_bottom_row.and_then(|r| r.checked_sub(1)) == Some(row_index),
            ..FixedCellClasses::default()
        },
        ..FixedCellStyle::default()
    })
}
