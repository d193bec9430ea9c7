//! The rebuild pipeline: flatten, classify, measure, solve.

use std::collections::HashSet;

use super::boundary::classify_boundaries;
use super::column_map::{flatten, ColumnMap};
use super::column_offsets::{solve_left, solve_right};
use super::diagnostics::Diagnostic;
use super::measure::{apply_widths, Measurements};
use super::row_offsets::solve_rows;
use crate::error::{FixedTableError, Result};
use crate::types::{ColumnNode, PositionIndex, PositionKey, TableProps};

/// Counters for the work done by rebuilds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebuildStats {
    /// Total rebuilds run
    pub rebuilds: u64,
    /// Rebuilds that ran the column offset passes
    pub column_passes: u64,
    /// Rebuilds that ran the row offset pass
    pub row_passes: u64,
}

/// Owner of the position index for one table.
///
/// The index is replaced wholesale on every rebuild and never patched, so
/// offsets from a previous column order cannot leak into the next one.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    index: PositionIndex,
    column_map: ColumnMap,
    diagnostics: Vec<Diagnostic>,
    stats: RebuildStats,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every fixed position from `props` and a fresh measurement
    /// snapshot.
    ///
    /// With no fixed column and no fixed row declared the index ends up
    /// empty and no offset pass runs.
    pub fn rebuild(&mut self, props: &TableProps, measurements: &Measurements) {
        self.diagnostics.clear();
        self.stats.rebuilds += 1;

        let mut map = flatten(&props.columns, &mut self.diagnostics);
        classify_boundaries(&mut map);

        let mut index = PositionIndex::new();
        if map.has_fixed {
            apply_widths(&mut map, measurements, &mut self.diagnostics);
            solve_left(&mut map);
            solve_right(&mut map);
            index.columns = map.records();
            self.stats.column_passes += 1;
        }
        if let Some(spec) = props.fixed_rows() {
            index.rows = solve_rows(
                spec,
                &props.data,
                &props.row_key,
                measurements,
                &mut self.diagnostics,
            );
            self.stats.row_passes += 1;
        }

        log::debug!(
            "fixedtable: rebuilt position index ({} columns, {} rows)",
            index.columns.len(),
            index.rows.len()
        );
        self.index = index;
        self.column_map = map;
    }

    /// Read-only view of the current index
    pub fn positions(&self) -> &PositionIndex {
        &self.index
    }

    /// Column tree from the last rebuild
    pub fn column_map(&self) -> &ColumnMap {
        &self.column_map
    }

    /// True if the last rebuild saw a fixed column
    pub fn has_fixed_columns(&self) -> bool {
        self.column_map.has_fixed
    }

    /// Warnings raised by the last rebuild
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn stats(&self) -> RebuildStats {
        self.stats
    }

    /// Drop all computed positions
    pub fn clear(&mut self) {
        self.index.clear();
        self.column_map = ColumnMap::default();
    }
}

/// Strict key check for fixed columns.
///
/// Every fixed column must carry an explicit `colKey`, and explicit keys
/// must be unique across the whole tree. The rebuild itself tolerates both
/// problems; this check lets callers refuse them up front.
pub fn validate_columns(columns: &[ColumnNode]) -> Result<()> {
    let mut seen = HashSet::new();
    validate_level(columns, &mut seen)
}

fn validate_level(columns: &[ColumnNode], seen: &mut HashSet<PositionKey>) -> Result<()> {
    for (i, column) in columns.iter().enumerate() {
        let key = column.key_at(i);
        let explicit = matches!(key, PositionKey::Name(_));
        if column.fixed.is_fixed() && !explicit {
            return Err(FixedTableError::MissingFixedKey(format!(
                "\"{}\" at position {i}",
                column.label()
            )));
        }
        if explicit && !seen.insert(key.clone()) {
            return Err(FixedTableError::DuplicateKey(key.to_string()));
        }
        validate_level(&column.children, seen)?;
    }
    Ok(())
}
