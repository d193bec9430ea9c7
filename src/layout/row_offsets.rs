//! Sticky `top`/`bottom` offsets for fixed body rows.

use std::collections::HashMap;

use serde_json::Value;

use super::diagnostics::{Diagnostic, DiagnosticKind};
use super::measure::Measurements;
use crate::types::{FixedRowSpec, PositionKey, PositionRecord, RowKeyPath};

/// Compute offsets for the leading `spec.top` and trailing `spec.bottom`
/// rows of `data`, keyed by each row's resolved key.
///
/// The first top row sits below the header and the last bottom row sits
/// above the footer. Rows whose key cannot be resolved fall back to their
/// index.
pub fn solve_rows(
    spec: FixedRowSpec,
    data: &[Value],
    row_key: &RowKeyPath,
    measurements: &Measurements,
    diagnostics: &mut Vec<Diagnostic>,
) -> HashMap<PositionKey, PositionRecord> {
    let mut rows: HashMap<PositionKey, PositionRecord> = HashMap::new();
    let len = data.len();

    let mut top = measurements.header_height.unwrap_or(0.0);
    for (i, row) in data.iter().enumerate().take(spec.top.min(len)) {
        let height = measurements.row_height(i);
        let record = rows.entry(resolve_key(row_key, row, i, diagnostics)).or_default();
        record.top = Some(top);
        record.height = Some(height);
        top += height;
    }

    let mut bottom = measurements.footer_height.unwrap_or(0.0);
    for (i, row) in data.iter().enumerate().rev().take(spec.bottom.min(len)) {
        let height = measurements.row_height(i);
        let record = rows.entry(resolve_key(row_key, row, i, diagnostics)).or_default();
        record.bottom = Some(bottom);
        record.height = Some(height);
        bottom += height;
    }

    rows
}

fn resolve_key(
    row_key: &RowKeyPath,
    row: &Value,
    index: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> PositionKey {
    row_key.resolve(row).unwrap_or_else(|| {
        diagnostics.push(Diagnostic::warn(
            DiagnosticKind::MissingRowKey,
            format!(
                "fixed row {index} has no usable \"{}\" field; falling back to its index",
                row_key.as_str()
            ),
        ));
        PositionKey::from(index)
    })
}
