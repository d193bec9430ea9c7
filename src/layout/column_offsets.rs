//! Sticky `left`/`right` offsets for fixed columns.
//!
//! Fixed columns stack contiguously from each edge, so a column's offset is
//! the offset of the nearest fixed sibling between it and that edge plus
//! that sibling's width. Chaining through the nearest fixed neighbour keeps
//! each pass linear in the number of columns. Groups seed their children
//! with their own offset.

use super::column_map::ColumnMap;
use crate::types::FixedSide;

/// Left-to-right pass. Stops at the first right-fixed sibling of each
/// sibling list.
pub fn solve_left(map: &mut ColumnMap) {
    let roots = map.roots.clone();
    solve_left_siblings(map, &roots, 0.0);
}

/// Right-to-left pass. Stops at the first left-fixed sibling (walking from
/// the right) of each sibling list.
pub fn solve_right(map: &mut ColumnMap) {
    let roots = map.roots.clone();
    solve_right_siblings(map, &roots, 0.0);
}

fn solve_left_siblings(map: &mut ColumnMap, siblings: &[usize], base: f64) {
    let mut last_fixed: Option<usize> = None;
    for &id in siblings {
        if map.fixed_side(id) == FixedSide::Right {
            return;
        }
        let left = match last_fixed.and_then(|prev| map.slot(prev)) {
            Some(prev) => prev.record.left_or_zero() + prev.record.width_or_zero(),
            None => base,
        };
        let Some(slot) = map.slot_mut(id) else {
            continue;
        };
        slot.record.left = Some(left);
        if slot.fixed == FixedSide::Left {
            last_fixed = Some(id);
        }
        if !slot.children.is_empty() {
            let children = slot.children.clone();
            solve_left_siblings(map, &children, left);
        }
    }
}

fn solve_right_siblings(map: &mut ColumnMap, siblings: &[usize], base: f64) {
    let mut last_fixed: Option<usize> = None;
    for &id in siblings.iter().rev() {
        if map.fixed_side(id) == FixedSide::Left {
            return;
        }
        let right = match last_fixed.and_then(|next| map.slot(next)) {
            Some(next) => next.record.right_or_zero() + next.record.width_or_zero(),
            None => base,
        };
        let Some(slot) = map.slot_mut(id) else {
            continue;
        };
        slot.record.right = Some(right);
        if slot.fixed == FixedSide::Right {
            last_fixed = Some(id);
        }
        if !slot.children.is_empty() {
            let children = slot.children.clone();
            solve_right_siblings(map, &children, right);
        }
    }
}
