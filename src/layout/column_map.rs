//! Flattening of the column tree into an arena with per-level groupings.
//!
//! Each column node gets one slot. Slots own their `PositionRecord`; the
//! parent link is the slot index of the enclosing group, so the tree stays
//! acyclic with no shared ownership.

use std::collections::HashMap;

use super::diagnostics::{Diagnostic, DiagnosticKind};
use crate::types::{ColumnNode, FixedSide, PositionKey, PositionRecord};

/// One flattened column node
#[derive(Debug, Clone)]
pub struct ColumnSlot {
    /// Key used for lookups (explicit or positional)
    pub key: PositionKey,
    /// True when the key came from `colKey` rather than the sibling index
    pub explicit_key: bool,
    pub fixed: FixedSide,
    /// Depth in the column tree (0 = top header row)
    pub level: usize,
    /// Index within the sibling list
    pub sibling_index: usize,
    /// Child slots, in declaration order
    pub children: Vec<usize>,
    pub record: PositionRecord,
}

/// Arena of flattened columns.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    pub slots: Vec<ColumnSlot>,
    /// Top-level slots in declaration order
    pub roots: Vec<usize>,
    /// Slots per tree depth, each in declaration order
    pub levels: Vec<Vec<usize>>,
    /// Key lookup; a later column with the same key replaces an earlier one
    pub keys: HashMap<PositionKey, usize>,
    /// True if any column declares a fixed side
    pub has_fixed: bool,
}

impl ColumnMap {
    pub fn slot(&self, id: usize) -> Option<&ColumnSlot> {
        self.slots.get(id)
    }

    pub fn slot_mut(&mut self, id: usize) -> Option<&mut ColumnSlot> {
        self.slots.get_mut(id)
    }

    /// Slot currently registered under `key`
    pub fn lookup(&self, key: &PositionKey) -> Option<&ColumnSlot> {
        self.keys.get(key).and_then(|&id| self.slots.get(id))
    }

    /// Fixed side of a slot, `None` for missing slots
    pub fn fixed_side(&self, id: usize) -> FixedSide {
        self.slots.get(id).map_or(FixedSide::None, |s| s.fixed)
    }

    /// Keyed records, as exposed to renderers
    pub fn records(&self) -> HashMap<PositionKey, PositionRecord> {
        self.keys
            .iter()
            .filter_map(|(key, &id)| {
                self.slots
                    .get(id)
                    .map(|slot| (key.clone(), slot.record.clone()))
            })
            .collect()
    }

    /// Depth-first, declaration-order walk recording levels and parents.
    fn walk(
        &mut self,
        columns: &[ColumnNode],
        level: usize,
        parent: Option<usize>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<usize> {
        let mut siblings = Vec::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            if column.fixed.is_fixed() {
                self.has_fixed = true;
            }
            let key = column.key_at(i);
            let explicit_key = matches!(key, PositionKey::Name(_));
            if column.fixed.is_fixed() && !explicit_key {
                diagnostics.push(Diagnostic::warn(
                    DiagnosticKind::MissingFixedKey,
                    format!(
                        "column \"{}\" is fixed but has no colKey; falling back to positional key {i}",
                        column.label()
                    ),
                ));
            }

            let id = self.slots.len();
            self.slots.push(ColumnSlot {
                key: key.clone(),
                explicit_key,
                fixed: column.fixed,
                level,
                sibling_index: i,
                children: Vec::new(),
                record: PositionRecord {
                    parent,
                    ..PositionRecord::default()
                },
            });
            if let Some(previous) = self.keys.insert(key.clone(), id) {
                let clashes_with_fixed = self.fixed_side(previous).is_fixed() || column.fixed.is_fixed();
                if explicit_key || clashes_with_fixed {
                    diagnostics.push(Diagnostic::warn(
                        DiagnosticKind::DuplicateKey,
                        format!("column key {key} is used more than once; lookups resolve to the last one"),
                    ));
                }
            }

            match self.levels.get_mut(level) {
                Some(nodes) => nodes.push(id),
                None => self.levels.push(vec![id]),
            }

            if column.is_group() {
                let children = self.walk(&column.children, level + 1, Some(id), diagnostics);
                if let Some(slot) = self.slots.get_mut(id) {
                    slot.children = children;
                }
            }
            siblings.push(id);
        }
        siblings
    }
}

/// Flatten a column tree, preserving declaration order.
pub fn flatten(columns: &[ColumnNode], diagnostics: &mut Vec<Diagnostic>) -> ColumnMap {
    let mut map = ColumnMap::default();
    map.roots = map.walk(columns, 0, None, diagnostics);
    map
}

/// True if any column in the tree declares a fixed side
pub fn has_fixed_columns(columns: &[ColumnNode]) -> bool {
    columns
        .iter()
        .any(|c| c.fixed.is_fixed() || has_fixed_columns(&c.children))
}
