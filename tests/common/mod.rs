//! Common test utilities: an in-memory `TableHost` and column builders.
//!
//! `FakeHost` keeps scheduled turns in a queue instead of an event loop, so
//! tests decide exactly when deferred work runs.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::Cell;
use std::collections::HashSet;

use fixedtable::layout::{LayoutEngine, Measurements};
use fixedtable::sync::{Listener, TableHost, TableLayout, TaskHandle};
use fixedtable::types::{
    ColumnNode, FixedSide, PositionKey, PositionRecord, Rect, ScrollMetrics, TableProps,
};

/// Scripted stand-in for the rendered table
#[derive(Debug, Default)]
pub struct FakeHost {
    pub measurements: Option<Measurements>,
    pub metrics: Option<ScrollMetrics>,
    pub rect: Option<Rect>,
    pub affix_height: Option<f64>,
    pub scrollbar: Option<f64>,
    /// Last `scrollLeft` written to the affixed header
    pub affix_scroll_left: Option<f64>,
    pub affix_writes: usize,
    pub attached: HashSet<Listener>,
    pub attach_calls: usize,
    pub detach_calls: usize,
    pub queue: Vec<TaskHandle>,
    pub cancelled: Vec<TaskHandle>,
    pub scheduled: usize,
    /// Hosts without an event loop refuse to schedule
    pub no_event_loop: bool,
    pub measure_calls: Cell<usize>,
    pub next_handle: i32,
}

impl FakeHost {
    /// A host with an empty table rendered in a 300x200 box
    pub fn rendered() -> Self {
        Self {
            measurements: Some(Measurements::new()),
            metrics: Some(metrics(0.0, 300.0, 300.0)),
            rect: Some(Rect {
                top: 0.0,
                left: 0.0,
                width: 300.0,
                height: 200.0,
            }),
            ..Self::default()
        }
    }

    /// Same, plus an affixed header
    pub fn with_affix_header(mut self, height: f64) -> Self {
        self.affix_height = Some(height);
        self
    }

    pub fn with_measurements(mut self, measurements: Measurements) -> Self {
        self.measurements = Some(measurements);
        self
    }

    /// Simulate a horizontal scroll of the content
    pub fn scroll_to(&mut self, scroll_left: f64) {
        if let Some(m) = self.metrics.as_mut() {
            m.scroll_left = scroll_left;
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Fire every queued turn once, in order. Turns scheduled while
    /// running stay queued. Returns how many turns did work.
    pub fn run_turns(&mut self, layout: &mut TableLayout) -> usize {
        let queued = std::mem::take(&mut self.queue);
        let mut ran = 0;
        for handle in queued {
            if layout.run_turn(handle, self) {
                ran += 1;
            }
        }
        ran
    }

    /// Fire turns until nothing is left queued
    pub fn settle(&mut self, layout: &mut TableLayout) -> usize {
        let mut ran = 0;
        for _ in 0..8 {
            if self.queue.is_empty() {
                break;
            }
            ran += self.run_turns(layout);
        }
        ran
    }
}

impl TableHost for FakeHost {
    fn measure(&self) -> Option<Measurements> {
        self.measure_calls.set(self.measure_calls.get() + 1);
        self.measurements.clone()
    }

    fn scroll_metrics(&self) -> Option<ScrollMetrics> {
        self.metrics
    }

    fn content_rect(&self) -> Option<Rect> {
        self.rect
    }

    fn affix_header_height(&self) -> Option<f64> {
        self.affix_height
    }

    fn set_affix_scroll_left(&mut self, left: f64) -> bool {
        if self.affix_height.is_none() {
            return false;
        }
        self.affix_scroll_left = Some(left);
        self.affix_writes += 1;
        true
    }

    fn scrollbar_width(&self) -> Option<f64> {
        self.scrollbar
    }

    fn attach(&mut self, listener: Listener) {
        self.attach_calls += 1;
        assert!(self.attached.insert(listener), "{listener:?} attached twice");
    }

    fn detach(&mut self, listener: Listener) {
        self.detach_calls += 1;
        assert!(self.attached.remove(&listener), "{listener:?} detached while not attached");
    }

    fn schedule_turn(&mut self) -> Option<TaskHandle> {
        if self.no_event_loop {
            return None;
        }
        self.next_handle += 1;
        self.scheduled += 1;
        let handle = TaskHandle(self.next_handle);
        self.queue.push(handle);
        Some(handle)
    }

    fn cancel_turn(&mut self, handle: TaskHandle) {
        self.cancelled.push(handle);
        self.queue.retain(|&h| h != handle);
    }
}

/// Scroll metrics for a content box `client_width` wide showing
/// `scroll_width` worth of table, 200px tall with no vertical overflow
pub fn metrics(scroll_left: f64, client_width: f64, scroll_width: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_left,
        scroll_top: 0.0,
        client_width,
        client_height: 200.0,
        scroll_width,
        scroll_height: 200.0,
    }
}

/// Props with just columns
pub fn props(columns: Vec<ColumnNode>) -> TableProps {
    TableProps {
        columns,
        ..TableProps::default()
    }
}

/// `n` rows of `{ "id": i }`
pub fn rows(n: u64) -> Vec<serde_json::Value> {
    (0..n).map(|i| serde_json::json!({ "id": i })).collect()
}

/// Rebuild an engine from scratch
pub fn rebuilt(props: &TableProps, measurements: &Measurements) -> LayoutEngine {
    let mut engine = LayoutEngine::new();
    engine.rebuild(props, measurements);
    engine
}

/// Column record by key, panicking if absent
pub fn column<'a>(engine: &'a LayoutEngine, key: &str) -> &'a PositionRecord {
    engine
        .positions()
        .column(&PositionKey::from(key))
        .unwrap_or_else(|| panic!("no record for column {key}"))
}

/// Mirror a column tree: reverse sibling order and swap fixed sides
pub fn mirrored(columns: &[ColumnNode]) -> Vec<ColumnNode> {
    columns
        .iter()
        .rev()
        .map(|c| {
            let mut m = c.clone();
            m.fixed = match c.fixed {
                FixedSide::Left => FixedSide::Right,
                FixedSide::Right => FixedSide::Left,
                FixedSide::None => FixedSide::None,
            };
            m.children = mirrored(&c.children);
            m
        })
        .collect()
}
