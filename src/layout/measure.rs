//! Measurement snapshot and the fixed-position index builder.
//!
//! A snapshot is harvested from the rendered table in one pass (header cell
//! widths by `data-colkey`, body row heights, thead/tfoot heights) and then
//! fed to the solvers. Absent measurements read as zero.

use std::collections::{HashMap, VecDeque};

use super::column_map::ColumnMap;
use super::diagnostics::{Diagnostic, DiagnosticKind};
use crate::types::PositionKey;

/// One rendered header cell
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    /// Value of the cell's `data-colkey` attribute
    pub col_key: Option<String>,
    pub width: f64,
}

impl HeaderCell {
    pub fn new(col_key: impl Into<String>, width: f64) -> Self {
        Self {
            col_key: Some(col_key.into()),
            width,
        }
    }

    pub fn unkeyed(width: f64) -> Self {
        Self {
            col_key: None,
            width,
        }
    }

    /// True if the cell carries a non-empty `data-colkey`
    pub fn has_key(&self) -> bool {
        self.col_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Key used to match this cell back to its column; cells without a
    /// key fall back to their position in the header row.
    fn key_at(&self, position: usize) -> PositionKey {
        match self.col_key.as_deref() {
            Some(key) if self.has_key() => PositionKey::Name(key.to_string()),
            _ => PositionKey::from(position),
        }
    }
}

/// Rendered sizes of one table instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    /// Header rows (`thead > tr`), each a list of `th` cells
    pub header_rows: Vec<Vec<HeaderCell>>,
    /// Height of each body row (`tbody > tr`), by row index
    pub row_heights: Vec<f64>,
    /// Bounding height of `thead`
    pub header_height: Option<f64>,
    /// Bounding height of `tfoot`
    pub footer_height: Option<f64>,
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header row of keyed cells
    #[must_use]
    pub fn with_header_row(mut self, cells: &[(&str, f64)]) -> Self {
        self.header_rows
            .push(cells.iter().map(|&(key, width)| HeaderCell::new(key, width)).collect());
        self
    }

    /// Append a header row of arbitrary cells
    #[must_use]
    pub fn with_header_cells(mut self, cells: Vec<HeaderCell>) -> Self {
        self.header_rows.push(cells);
        self
    }

    #[must_use]
    pub fn with_row_heights(mut self, heights: Vec<f64>) -> Self {
        self.row_heights = heights;
        self
    }

    #[must_use]
    pub fn with_header_height(mut self, height: f64) -> Self {
        self.header_height = Some(height);
        self
    }

    #[must_use]
    pub fn with_footer_height(mut self, height: f64) -> Self {
        self.footer_height = Some(height);
        self
    }

    /// Height of the body row at `index`, 0 if it was not rendered
    pub fn row_height(&self, index: usize) -> f64 {
        self.row_heights.get(index).copied().unwrap_or(0.0)
    }

    /// Width of every keyed header cell, by `data-colkey`
    pub fn header_widths(&self) -> HashMap<String, f64> {
        self.header_rows
            .iter()
            .flatten()
            .filter(|cell| cell.has_key())
            .filter_map(|cell| cell.col_key.clone().map(|key| (key, cell.width)))
            .collect()
    }
}

/// Refresh `width` on every fixed column from the measured header cells.
///
/// Header row `r` is matched against the columns on tree level `r`. Cells
/// claim columns by key in order, so columns sharing a key each get their
/// own cell. Fixed columns with no matching cell get a zero width; a later
/// rebuild picks up the real value once the cell has rendered.
pub fn apply_widths(
    map: &mut ColumnMap,
    measurements: &Measurements,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for slot in &mut map.slots {
        slot.record.width = slot.fixed.is_fixed().then_some(0.0);
    }

    let mut matched = Vec::new();
    for (level, row) in measurements.header_rows.iter().enumerate() {
        let Some(nodes) = map.levels.get(level) else {
            continue;
        };
        let mut unclaimed: HashMap<&PositionKey, VecDeque<usize>> = HashMap::new();
        for &id in nodes {
            if let Some(slot) = map.slot(id) {
                unclaimed.entry(&slot.key).or_default().push_back(id);
            }
        }
        for (position, cell) in row.iter().enumerate() {
            let key = cell.key_at(position);
            if let Some(id) = unclaimed.get_mut(&key).and_then(VecDeque::pop_front) {
                matched.push((id, position, cell));
            }
        }
    }

    for (id, position, cell) in matched {
        let Some(slot) = map.slot_mut(id) else {
            continue;
        };
        if !slot.fixed.is_fixed() {
            continue;
        }
        if !cell.has_key() {
            diagnostics.push(Diagnostic::warn(
                DiagnosticKind::UnkeyedHeaderCell,
                format!(
                    "header cell {position} has no data-colkey; colKey is required for fixed columns"
                ),
            ));
        }
        slot.record.width = Some(cell.width);
    }
}
