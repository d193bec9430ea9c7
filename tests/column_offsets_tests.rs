//! Fixed column offset tests
//!
//! Tests for left/right offsets across flat and grouped column trees,
//! contiguity of stacked fixed columns, and mirror symmetry.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{column, mirrored, props, rebuilt};
use fixedtable::layout::{HeaderCell, Measurements};
use fixedtable::types::{ColumnNode, PositionKey};
use test_case::test_case;

/// `n` left-fixed columns named c0..cn followed by one scrolling column
fn left_fixed(n: usize) -> Vec<ColumnNode> {
    let mut columns: Vec<ColumnNode> = (0..n)
        .map(|i| ColumnNode::new(format!("c{i}")).fixed_left())
        .collect();
    columns.push(ColumnNode::new("body"));
    columns
}

fn header(widths: &[f64]) -> Measurements {
    let cells = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| HeaderCell::new(format!("c{i}"), w))
        .chain(std::iter::once(HeaderCell::new("body", 500.0)))
        .collect();
    Measurements::new().with_header_cells(cells)
}

#[test_case(&[50.0] ; "single column")]
#[test_case(&[50.0, 80.0, 40.0] ; "three columns")]
#[test_case(&[120.0, 0.0, 33.5, 64.0] ; "zero width in the stack")]
fn test_left_fixed_columns_are_contiguous(widths: &[f64]) {
    let engine = rebuilt(&props(left_fixed(widths.len())), &header(widths));

    let mut expected = 0.0;
    for (i, width) in widths.iter().enumerate() {
        let record = column(&engine, &format!("c{i}"));
        assert_eq!(record.left, Some(expected), "left of c{i}");
        assert_eq!(record.width, Some(*width));
        expected += width;
    }
    assert_eq!(column(&engine, "body").left, Some(expected));
}

#[test]
fn test_right_fixed_columns_stack_from_the_right_edge() {
    let columns = vec![
        ColumnNode::new("a"),
        ColumnNode::new("b").fixed_right(),
        ColumnNode::new("c").fixed_right(),
        ColumnNode::new("d").fixed_right(),
    ];
    let m = Measurements::new().with_header_row(&[
        ("a", 400.0),
        ("b", 30.0),
        ("c", 70.0),
        ("d", 90.0),
    ]);
    let engine = rebuilt(&props(columns), &m);

    assert_eq!(column(&engine, "d").right, Some(0.0));
    assert_eq!(column(&engine, "c").right, Some(90.0));
    assert_eq!(column(&engine, "b").right, Some(160.0));
    assert_eq!(column(&engine, "a").right, Some(190.0));
}

#[test]
fn test_passes_stop_at_the_opposite_side() {
    let columns = vec![
        ColumnNode::new("a").fixed_left(),
        ColumnNode::new("m"),
        ColumnNode::new("b").fixed_right(),
    ];
    let m = Measurements::new().with_header_row(&[("a", 50.0), ("m", 300.0), ("b", 70.0)]);
    let engine = rebuilt(&props(columns), &m);

    assert_eq!(column(&engine, "a").left, Some(0.0));
    assert_eq!(column(&engine, "m").left, Some(50.0));
    assert_eq!(column(&engine, "b").left, None);

    assert_eq!(column(&engine, "b").right, Some(0.0));
    assert_eq!(column(&engine, "m").right, Some(70.0));
    assert_eq!(column(&engine, "a").right, None);
}

#[test]
fn test_scrolling_columns_take_no_width() {
    let columns = vec![
        ColumnNode::new("a").fixed_left(),
        ColumnNode::new("m"),
        ColumnNode::new("n"),
    ];
    let m = Measurements::new().with_header_row(&[("a", 50.0), ("m", 300.0), ("n", 200.0)]);
    let engine = rebuilt(&props(columns), &m);

    assert_eq!(column(&engine, "m").width, None);
    assert_eq!(column(&engine, "m").left, Some(50.0));
    assert_eq!(column(&engine, "n").left, Some(50.0));
}

/// Two-row header: a fixed group over two fixed leaves, then a fixed
/// column and a scrolling one.
fn grouped() -> (Vec<ColumnNode>, Measurements) {
    let columns = vec![
        ColumnNode::new("g").fixed_left().with_children(vec![
            ColumnNode::new("a").fixed_left(),
            ColumnNode::new("b").fixed_left(),
        ]),
        ColumnNode::new("c").fixed_left(),
        ColumnNode::new("d"),
    ];
    let m = Measurements::new()
        .with_header_row(&[("g", 150.0), ("c", 60.0), ("d", 300.0)])
        .with_header_row(&[("a", 50.0), ("b", 100.0)]);
    (columns, m)
}

#[test]
fn test_group_children_inherit_group_offset() {
    let (columns, m) = grouped();
    let engine = rebuilt(&props(columns), &m);

    assert_eq!(column(&engine, "g").left, Some(0.0));
    assert_eq!(column(&engine, "a").left, Some(0.0));
    assert_eq!(column(&engine, "b").left, Some(50.0));
    assert_eq!(column(&engine, "c").left, Some(150.0));
    assert_eq!(column(&engine, "d").left, Some(210.0));
}

#[test]
fn test_group_after_fixed_column_seeds_children() {
    let columns = vec![
        ColumnNode::new("c").fixed_left(),
        ColumnNode::new("g").fixed_left().with_children(vec![
            ColumnNode::new("a").fixed_left(),
            ColumnNode::new("b").fixed_left(),
        ]),
    ];
    let m = Measurements::new()
        .with_header_row(&[("c", 60.0), ("g", 150.0)])
        .with_header_row(&[("a", 50.0), ("b", 100.0)]);
    let engine = rebuilt(&props(columns), &m);

    assert_eq!(column(&engine, "a").left, Some(60.0));
    assert_eq!(column(&engine, "b").left, Some(110.0));
}

#[test]
fn test_mirrored_tree_swaps_left_and_right() {
    let (columns, m) = grouped();
    let base = rebuilt(&props(columns.clone()), &m);
    let mirror = rebuilt(&props(mirrored(&columns)), &m);

    for key in ["g", "a", "b", "c", "d"] {
        let o = column(&base, key);
        let r = column(&mirror, key);
        assert_eq!(o.left, r.right, "left of {key} vs mirrored right");
        assert_eq!(o.right, r.left, "right of {key} vs mirrored left");
        assert_eq!(o.is_last_left_fixed, r.is_first_right_fixed, "boundary of {key}");
    }
}

#[test]
fn test_mirror_symmetry_for_mixed_sides() {
    let columns = vec![
        ColumnNode::new("l1").fixed_left(),
        ColumnNode::new("l2").fixed_left(),
        ColumnNode::new("s1"),
        ColumnNode::new("s2"),
        ColumnNode::new("r1").fixed_right(),
    ];
    let m = Measurements::new().with_header_row(&[
        ("l1", 48.0),
        ("l2", 72.0),
        ("s1", 200.0),
        ("s2", 200.0),
        ("r1", 96.0),
    ]);
    let base = rebuilt(&props(columns.clone()), &m);
    let mirror = rebuilt(&props(mirrored(&columns)), &m);

    for key in ["l1", "l2", "s1", "s2", "r1"] {
        assert_eq!(column(&base, key).left, column(&mirror, key).right);
        assert_eq!(column(&base, key).right, column(&mirror, key).left);
    }
}

#[test]
fn test_unrendered_fixed_column_counts_as_zero_width() {
    let columns = vec![
        ColumnNode::new("a").fixed_left(),
        ColumnNode::new("b").fixed_left(),
    ];
    let m = Measurements::new().with_header_row(&[("b", 80.0)]);
    let engine = rebuilt(&props(columns), &m);

    assert_eq!(column(&engine, "a").width, Some(0.0));
    assert_eq!(column(&engine, "b").left, Some(0.0));
}

#[test]
fn test_unkeyed_fixed_column_uses_sibling_index() {
    let columns = vec![ColumnNode::unkeyed().fixed_left(), ColumnNode::new("b")];
    let m = Measurements::new()
        .with_header_cells(vec![HeaderCell::unkeyed(44.0), HeaderCell::new("b", 200.0)]);
    let engine = rebuilt(&props(columns), &m);

    let record = engine.positions().column(&PositionKey::Index(0)).unwrap();
    assert_eq!(record.width, Some(44.0));
    assert_eq!(column(&engine, "b").left, Some(44.0));
    assert!(!engine.diagnostics().is_empty());
}

#[test]
fn test_repeated_fixed_keys_keep_both_widths() {
    let columns = vec![
        ColumnNode::new("a").fixed_left(),
        ColumnNode::new("a").fixed_left(),
        ColumnNode::new("b"),
    ];
    let m = Measurements::new().with_header_row(&[("a", 50.0), ("a", 60.0), ("b", 300.0)]);
    let engine = rebuilt(&props(columns), &m);

    // the index keeps the later "a"; both widths still count toward "b"
    assert_eq!(column(&engine, "a").left, Some(50.0));
    assert_eq!(column(&engine, "b").left, Some(110.0));
}
