//! Scroll handling for `TableLayout`.
//!
//! Includes shadow updates, one-way affixed header sync (content drives the
//! affixed header, never the reverse) and affixed header visibility on
//! document scroll.

use serde::Serialize;

use super::host::TableHost;
use super::table::TableLayout;
use crate::types::{ScrollMetrics, ScrollShadowState};

/// Event names forwarded upward for every content scroll
pub const SCROLL_EVENTS: [&str; 3] = ["scroll-x", "scroll-y", "scroll"];

/// A content scroll, forwarded unchanged to the parent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollPassthrough {
    pub metrics: ScrollMetrics,
}

impl TableLayout {
    /// Scroll handler for the table's scrollable content.
    ///
    /// Returns `None` when the content element is gone.
    pub fn on_content_scroll(&mut self, host: &mut dyn TableHost) -> Option<ScrollPassthrough> {
        let metrics = host.scroll_metrics()?;
        if self.has_fixed_columns {
            self.shadow = ScrollShadowState::from_metrics(&metrics);
        }
        if self.props.needs_header_widths() {
            self.sync_affix_header(host, metrics.scroll_left);
        }
        Some(ScrollPassthrough { metrics })
    }

    /// Re-sync the affixed header from the content, even if the last synced
    /// offset is unchanged.
    pub fn update_header_scroll(&mut self, host: &mut dyn TableHost) {
        self.last_affix_scroll_left = None;
        if !self.props.needs_header_widths() {
            return;
        }
        if let Some(metrics) = host.scroll_metrics() {
            self.sync_affix_header(host, metrics.scroll_left);
        }
    }

    fn sync_affix_header(&mut self, host: &mut dyn TableHost, scroll_left: f64) {
        let unchanged = self
            .last_affix_scroll_left
            .is_some_and(|prev| (prev - scroll_left).abs() < f64::EPSILON);
        if unchanged {
            return;
        }
        if host.set_affix_scroll_left(scroll_left) {
            self.last_affix_scroll_left = Some(scroll_left);
        }
    }

    /// Recompute shadows from the current scroll position. Without fixed
    /// columns there is nothing to shadow.
    pub(crate) fn update_shadow(&mut self, host: &dyn TableHost) {
        if !self.has_fixed_columns {
            self.shadow = ScrollShadowState::default();
            return;
        }
        if let Some(metrics) = host.scroll_metrics() {
            self.shadow = ScrollShadowState::from_metrics(&metrics);
        }
    }

    /// Document scroll handler (header affixed to the viewport top).
    ///
    /// The affixed header stays visible while the part of the table below
    /// it is still on screen. Returns the new visibility.
    pub fn on_document_scroll(&mut self, host: &mut dyn TableHost) -> bool {
        if !self.props.header_affixed_top {
            return self.show_affix_header;
        }
        let (Some(rect), Some(affix_height)) = (host.content_rect(), host.affix_header_height())
        else {
            return self.show_affix_header;
        };
        self.show_affix_header = affix_height - rect.top < rect.height;
        self.show_affix_header
    }
}
