//! The seam between the layout state machine and the rendered table.

use crate::layout::Measurements;
use crate::types::{Rect, ScrollMetrics};

/// Handle of a scheduled turn, used to cancel it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(pub i32);

/// Event subscriptions a table may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// `resize` on the window
    WindowResize,
    /// `scroll` on the document (affixed header visibility)
    DocumentScroll,
    /// `scroll` on the table's own scrollable content
    ContentScroll,
}

/// Access to the rendered table and the host event loop.
///
/// Every read returns `None` when the element it needs is absent (before
/// mount, after unmount, or not rendered), and callers fall back to a
/// neutral default.
pub trait TableHost {
    /// Harvest header widths, row heights and thead/tfoot heights
    fn measure(&self) -> Option<Measurements>;

    /// Scroll geometry of the scrollable content element
    fn scroll_metrics(&self) -> Option<ScrollMetrics>;

    /// Bounding rect of the scrollable content element
    fn content_rect(&self) -> Option<Rect>;

    /// Rendered height of the affixed header, if one exists
    fn affix_header_height(&self) -> Option<f64>;

    /// Assign `scrollLeft` on the affixed header. Returns false when there
    /// is no affixed header.
    fn set_affix_scroll_left(&mut self, left: f64) -> bool;

    /// Platform scrollbar width, if it can be probed
    fn scrollbar_width(&self) -> Option<f64>;

    /// Subscribe to an event source
    fn attach(&mut self, listener: Listener);

    /// Unsubscribe from an event source
    fn detach(&mut self, listener: Listener);

    /// Schedule a callback at the end of the current turn. `None` when the
    /// host cannot schedule (no event loop).
    fn schedule_turn(&mut self) -> Option<TaskHandle>;

    /// Cancel a previously scheduled turn
    fn cancel_turn(&mut self, handle: TaskHandle);
}
