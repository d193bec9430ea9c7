use serde::Serialize;

/// Axis-aligned bounding box in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Scroll geometry of the scrollable table content element
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub client_width: f64,
    pub client_height: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
}

impl ScrollMetrics {
    /// Content is taller than its box (header must stay fixed)
    pub fn overflows_vertically(&self) -> bool {
        self.scroll_height > self.client_height
    }

    /// Content is wider than its box
    pub fn overflows_horizontally(&self) -> bool {
        self.scroll_width > self.client_width
    }
}

/// Whether each edge should render a shadow over scrolled-away content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScrollShadowState {
    pub left: bool,
    pub right: bool,
}

impl ScrollShadowState {
    /// Derive shadow visibility from the current horizontal scroll position.
    pub fn from_metrics(metrics: &ScrollMetrics) -> Self {
        Self {
            left: metrics.scroll_left > 0.0,
            right: metrics.client_width + metrics.scroll_left < metrics.scroll_width,
        }
    }
}
