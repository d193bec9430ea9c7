//! Per-table layout context: props, position index, derived header state
//! and the recompute schedule.

use std::collections::HashMap;

use serde::Serialize;

use super::host::{Listener, TableHost, TaskHandle};
use super::listeners::ListenerSet;
use super::state::{PendingWork, SyncState};
use crate::error::Result;
use crate::layout::{
    column_fixed_style, has_fixed_columns, row_fixed_style, validate_columns, Diagnostic,
    FixedCellStyle, LayoutEngine, Measurements,
};
use crate::types::{
    ColumnNode, PositionIndex, PositionKey, ScrollShadowState, TableProps,
    DEFAULT_SCROLLBAR_WIDTH,
};

/// Top-left of the scrollable content, used to place a virtual-scroll header
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HeaderPosition {
    pub top: f64,
    pub left: f64,
}

/// Layout engine context for one table instance.
///
/// Owns the position index, the scroll shadow flags and the listener
/// subscriptions. Only the deferred turn replaces the index; scroll
/// handlers read it and touch nothing but the shadow and affix state.
#[derive(Debug)]
pub struct TableLayout {
    pub(crate) props: TableProps,
    pub(crate) engine: LayoutEngine,
    pub(crate) state: SyncState,
    pub(crate) listeners: ListenerSet,
    pub(crate) mounted: bool,
    pub(crate) has_fixed_columns: bool,
    pub(crate) shadow: ScrollShadowState,
    pub(crate) last_affix_scroll_left: Option<f64>,
    pub(crate) show_affix_header: bool,
    scrollbar_width: f64,
    table_width: f64,
    is_fixed_header: bool,
    is_width_overflow: bool,
    th_widths: HashMap<String, f64>,
    virtual_scroll_header_pos: HeaderPosition,
}

impl TableLayout {
    pub fn new(props: TableProps) -> Self {
        Self {
            has_fixed_columns: has_fixed_columns(&props.columns),
            props,
            engine: LayoutEngine::new(),
            state: SyncState::Idle,
            listeners: ListenerSet::new(),
            mounted: false,
            shadow: ScrollShadowState::default(),
            last_affix_scroll_left: None,
            show_affix_header: true,
            scrollbar_width: DEFAULT_SCROLLBAR_WIDTH,
            table_width: 0.0,
            is_fixed_header: false,
            is_width_overflow: false,
            th_widths: HashMap::new(),
            virtual_scroll_header_pos: HeaderPosition::default(),
        }
    }

    /// Refuse props whose fixed columns lack unique explicit keys, when
    /// `strictColumnKeys` is set.
    pub fn check_props(props: &TableProps) -> Result<()> {
        if props.strict_column_keys {
            validate_columns(&props.columns)
        } else {
            Ok(())
        }
    }

    /// Start tracking the rendered table: probe the scrollbar, subscribe to
    /// the events the current props need and schedule a full recompute.
    pub fn mount(&mut self, host: &mut dyn TableHost) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.scrollbar_width = host.scrollbar_width().unwrap_or(DEFAULT_SCROLLBAR_WIDTH);
        self.listeners.attach(Listener::ContentScroll, host);
        self.update_subscriptions(host);
        self.schedule(PendingWork::ALL, host);
    }

    /// Cancel pending work and release every subscription. Safe to call
    /// more than once.
    pub fn unmount(&mut self, host: &mut dyn TableHost) {
        if let SyncState::PendingRecompute { handle, .. } = self.state {
            host.cancel_turn(handle);
        }
        self.state = SyncState::Idle;
        self.listeners.detach_all(host);
        self.mounted = false;
        self.last_affix_scroll_left = None;
    }

    /// Replace the props, scheduling whatever recompute the change needs.
    pub fn set_props(&mut self, props: TableProps, host: &mut dyn TableHost) {
        let mut work = PendingWork {
            rebuild: self.props.layout_changed(&props),
            fixed_header: self.props.overflow_changed(&props),
            shadow: self.props.columns != props.columns,
            ..PendingWork::default()
        };
        if props.needs_header_widths() && self.props.header_widths_changed(&props) {
            work.header_widths = true;
            work.table_width = true;
        }

        self.has_fixed_columns = has_fixed_columns(&props.columns);
        self.props = props;
        if !self.mounted {
            return;
        }
        self.update_subscriptions(host);
        if !work.is_empty() {
            self.schedule(work, host);
        }
    }

    /// Force a full recomputation, e.g. after the viewport was resized or
    /// the DOM was changed from outside.
    pub fn refresh_table(&mut self, host: &mut dyn TableHost) {
        self.update_table_width(host);
        let mut work = PendingWork {
            fixed_header: true,
            header_widths: self.props.needs_header_widths(),
            ..PendingWork::default()
        };
        if self.has_fixed_columns || self.is_fixed_header {
            work.rebuild = true;
            work.shadow = true;
            self.update_shadow(host);
        }
        self.schedule(work, host);
    }

    /// Window resize handler
    pub fn on_resize(&mut self, host: &mut dyn TableHost) {
        self.refresh_table(host);
    }

    /// Queue `work` for the next turn, merging with anything already
    /// pending. The pending turn is cancelled and rescheduled.
    pub fn schedule(&mut self, work: PendingWork, host: &mut dyn TableHost) {
        let merged = match self.state {
            SyncState::PendingRecompute {
                handle,
                work: pending,
            } => {
                host.cancel_turn(handle);
                pending.merge(work)
            }
            SyncState::Idle => work,
        };
        self.state = match host.schedule_turn() {
            Some(handle) => SyncState::PendingRecompute {
                handle,
                work: merged,
            },
            None => {
                log::debug!("fixedtable: host cannot schedule a turn; recompute skipped");
                SyncState::Idle
            }
        };
    }

    /// Run the pending work if `handle` is the current turn. Returns false
    /// for stale or unknown handles.
    pub fn run_turn(&mut self, handle: TaskHandle, host: &mut dyn TableHost) -> bool {
        let SyncState::PendingRecompute {
            handle: current,
            work,
        } = self.state
        else {
            return false;
        };
        if current != handle {
            return false;
        }
        self.state = SyncState::Idle;
        self.perform(work, host);
        true
    }

    fn perform(&mut self, work: PendingWork, host: &mut dyn TableHost) {
        if work.table_width {
            self.update_table_width(host);
        }
        let overflow_changed = work.fixed_header && self.update_fixed_header(host);

        let fixed_rows = self.props.fixed_rows().is_some();
        let rebuild_needs_dom = work.rebuild && (self.has_fixed_columns || fixed_rows);
        let widths_need_dom = work.header_widths && self.props.needs_header_widths();
        let measurements = if rebuild_needs_dom || widths_need_dom {
            host.measure().unwrap_or_default()
        } else {
            Measurements::default()
        };

        if work.rebuild {
            self.engine.rebuild(&self.props, &measurements);
        }
        if widths_need_dom {
            self.th_widths = measurements.header_widths();
            self.update_table_width(host);
            self.update_header_scroll(host);
        }
        if work.shadow {
            self.update_shadow(host);
        }

        self.update_subscriptions(host);
        if overflow_changed {
            self.schedule(
                PendingWork {
                    rebuild: true,
                    header_widths: true,
                    ..PendingWork::default()
                },
                host,
            );
        }
    }

    /// Subscribe to resize only while something fixed depends on it, and to
    /// document scroll only while the header is affixed to the viewport.
    fn update_subscriptions(&mut self, host: &mut dyn TableHost) {
        if !self.mounted {
            return;
        }
        let wants_resize =
            self.has_fixed_columns || self.is_fixed_header || self.props.needs_header_widths();
        self.listeners
            .set(Listener::WindowResize, wants_resize, host);
        self.listeners
            .set(Listener::DocumentScroll, self.props.header_affixed_top, host);
    }

    fn update_table_width(&mut self, host: &dyn TableHost) {
        let Some(rect) = host.content_rect() else {
            return;
        };
        let border = if self.props.bordered { 1.0 } else { 0.0 };
        self.table_width = rect.width - self.scrollbar_width - border;
    }

    /// Returns true if either overflow flag changed
    fn update_fixed_header(&mut self, host: &dyn TableHost) -> bool {
        let Some(metrics) = host.scroll_metrics() else {
            return false;
        };
        if let Some(rect) = host.content_rect() {
            self.virtual_scroll_header_pos = HeaderPosition {
                top: rect.top,
                left: rect.left,
            };
        }
        let is_fixed_header = metrics.overflows_vertically();
        let is_width_overflow = metrics.overflows_horizontally();
        let changed =
            is_fixed_header != self.is_fixed_header || is_width_overflow != self.is_width_overflow;
        self.is_fixed_header = is_fixed_header;
        self.is_width_overflow = is_width_overflow;
        changed
    }

    // Accessors

    pub fn props(&self) -> &TableProps {
        &self.props
    }

    /// Read-only snapshot of the position index
    pub fn positions(&self) -> &PositionIndex {
        self.engine.positions()
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.engine.diagnostics()
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_listening(&self, listener: Listener) -> bool {
        self.listeners.is_attached(listener)
    }

    pub fn has_fixed_columns(&self) -> bool {
        self.has_fixed_columns
    }

    pub fn shadow(&self) -> ScrollShadowState {
        self.shadow
    }

    pub fn scrollbar_width(&self) -> f64 {
        self.scrollbar_width
    }

    /// Content width minus scrollbar and border
    pub fn table_width(&self) -> f64 {
        self.table_width
    }

    /// Content is taller than its box
    pub fn is_fixed_header(&self) -> bool {
        self.is_fixed_header
    }

    /// Content is wider than its box
    pub fn is_width_overflow(&self) -> bool {
        self.is_width_overflow
    }

    /// Header cell widths by column key (affixed header / virtual scroll)
    pub fn th_widths(&self) -> &HashMap<String, f64> {
        &self.th_widths
    }

    pub fn virtual_scroll_header_pos(&self) -> HeaderPosition {
        self.virtual_scroll_header_pos
    }

    pub fn show_affix_header(&self) -> bool {
        self.show_affix_header
    }

    /// Sticky style for a column's cells
    pub fn column_style(&self, column: &ColumnNode, index: usize) -> Option<FixedCellStyle> {
        column_fixed_style(column, index, self.positions())
    }

    /// Sticky style for the body row at `row_index`
    pub fn row_style(&self, row_key: &PositionKey, row_index: usize) -> Option<FixedCellStyle> {
        row_fixed_style(
            row_key,
            row_index,
            self.props.data.len(),
            self.props.fixed_rows(),
            self.positions(),
        )
    }
}
