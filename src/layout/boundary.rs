//! Boundary classification: which fixed column borders the scrollable area.
//!
//! Multi-level headers need a boundary per level. A column can only be a
//! boundary if its parent group is one too (or it has no parent), so the
//! marker follows the fixed edge down the tree.

use super::column_map::ColumnMap;
use crate::types::FixedSide;

/// Mark `is_last_left_fixed` / `is_first_right_fixed` on each level.
///
/// Levels are processed top-down so parents are classified before their
/// children. At most one column per level gets each marker: when
/// left-fixed columns are not contiguous the rightmost candidate wins,
/// and for right-fixed columns the leftmost one does.
pub fn classify_boundaries(map: &mut ColumnMap) {
    for slot in &mut map.slots {
        slot.record.is_last_left_fixed = false;
        slot.record.is_first_right_fixed = false;
    }

    for level in 0..map.levels.len() {
        let Some(nodes) = map.levels.get(level) else {
            continue;
        };
        let mut last_left = None;
        let mut first_right = None;

        for (pos, &id) in nodes.iter().enumerate() {
            let Some(slot) = map.slot(id) else {
                continue;
            };
            let parent = slot.record.parent.and_then(|p| map.slot(p));
            let next_side = nodes.get(pos + 1).map(|&n| map.fixed_side(n));
            let prev_side = pos
                .checked_sub(1)
                .and_then(|p| nodes.get(p))
                .map(|&n| map.fixed_side(n));

            let on_left_spine = parent.map_or(true, |p| p.record.is_last_left_fixed);
            if on_left_spine
                && slot.fixed == FixedSide::Left
                && next_side != Some(FixedSide::Left)
            {
                last_left = Some(id);
            }

            let on_right_spine = parent.map_or(true, |p| p.record.is_first_right_fixed);
            if first_right.is_none()
                && on_right_spine
                && slot.fixed == FixedSide::Right
                && prev_side != Some(FixedSide::Right)
            {
                first_right = Some(id);
            }
        }

        if let Some(slot) = last_left.and_then(|id| map.slot_mut(id)) {
            slot.record.is_last_left_fixed = true;
        }
        if let Some(slot) = first_right.and_then(|id| map.slot_mut(id)) {
            slot.record.is_first_right_fixed = true;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::layout::column_map::flatten;
    use crate::types::ColumnNode;

    fn classified(columns: &[ColumnNode]) -> ColumnMap {
        let mut diags = Vec::new();
        let mut map = flatten(columns, &mut diags);
        classify_boundaries(&mut map);
        map
    }

    fn flags(map: &ColumnMap, key: &str) -> (bool, bool) {
        let r = &map.lookup(&key.into()).unwrap().record;
        (r.is_last_left_fixed, r.is_first_right_fixed)
    }

    #[test]
    fn test_single_level_edges() {
        let map = classified(&[
            ColumnNode::new("a").fixed_left(),
            ColumnNode::new("b").fixed_left(),
            ColumnNode::new("c"),
            ColumnNode::new("d").fixed_right(),
            ColumnNode::new("e").fixed_right(),
        ]);
        assert_eq!(flags(&map, "a"), (false, false));
        assert_eq!(flags(&map, "b"), (true, false));
        assert_eq!(flags(&map, "c"), (false, false));
        assert_eq!(flags(&map, "d"), (false, true));
        assert_eq!(flags(&map, "e"), (false, false));
    }

    #[test]
    fn test_last_column_can_be_boundary() {
        let map = classified(&[ColumnNode::new("a").fixed_left()]);
        assert_eq!(flags(&map, "a"), (true, false));
    }

    #[test]
    fn test_boundary_follows_parent_spine() {
        let map = classified(&[
            ColumnNode::new("g1")
                .fixed_left()
                .with_children(vec![ColumnNode::new("a").fixed_left()]),
            ColumnNode::new("g2")
                .fixed_left()
                .with_children(vec![
                    ColumnNode::new("b").fixed_left(),
                    ColumnNode::new("c").fixed_left(),
                ]),
            ColumnNode::new("rest").with_children(vec![ColumnNode::new("z")]),
        ]);
        assert_eq!(flags(&map, "g1"), (false, false));
        assert_eq!(flags(&map, "g2"), (true, false));
        assert_eq!(flags(&map, "a"), (false, false));
        assert_eq!(flags(&map, "b"), (false, false));
        assert_eq!(flags(&map, "c"), (true, false));
    }

    #[test]
    fn test_non_contiguous_left_columns_mark_once() {
        let map = classified(&[
            ColumnNode::new("a").fixed_left(),
            ColumnNode::new("b"),
            ColumnNode::new("c").fixed_left(),
            ColumnNode::new("d"),
        ]);
        assert_eq!(flags(&map, "a"), (false, false));
        assert_eq!(flags(&map, "c"), (true, false));
    }
}
