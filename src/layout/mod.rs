//! Layout engine for fixed columns and fixed rows.
//!
//! This module handles:
//! - Flattening the (possibly grouped) column tree into per-level lists
//! - Matching measured header widths back to fixed columns
//! - Solving sticky `left`/`right` offsets for fixed columns
//! - Solving sticky `top`/`bottom` offsets for fixed rows
//! - Marking the boundary columns where scroll shadows are drawn

mod boundary;
mod column_map;
mod column_offsets;
mod diagnostics;
mod engine;
mod measure;
mod row_offsets;
mod styles;

pub use boundary::classify_boundaries;
pub use column_map::{flatten, has_fixed_columns, ColumnMap, ColumnSlot};
pub use column_offsets::{solve_left, solve_right};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use engine::{validate_columns, LayoutEngine, RebuildStats};
pub use measure::{apply_widths, HeaderCell, Measurements};
pub use row_offsets::solve_rows;
pub use styles::{column_fixed_style, row_fixed_style, FixedCellClasses, FixedCellStyle};
