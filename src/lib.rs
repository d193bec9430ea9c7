//! fixedtable - sticky-position geometry for data tables
//!
//! Computes pixel offsets for fixed columns, fixed header/body rows and an
//! affixed header inside a scrollable table:
//! - `left`/`right` offsets for fixed columns, through grouped headers
//! - `top`/`bottom` offsets for fixed body rows
//! - Boundary columns where scroll shadows are drawn
//! - Scroll shadow state and one-way affixed header scroll sync
//! - Deferred, coalesced recompute on structural change and resize
//!
//! # Usage (Rust)
//!
//! ```rust
//! use fixedtable::layout::{LayoutEngine, Measurements};
//! use fixedtable::types::{ColumnNode, TableProps};
//!
//! let props = TableProps {
//!     columns: vec![
//!         ColumnNode::new("id").fixed_left(),
//!         ColumnNode::new("name"),
//!     ],
//!     ..TableProps::default()
//! };
//! let measurements = Measurements::new().with_header_row(&[("id", 60.0), ("name", 300.0)]);
//!
//! let mut engine = LayoutEngine::new();
//! engine.rebuild(&props, &measurements);
//! assert_eq!(engine.positions().column(&"name".into()).and_then(|r| r.left), Some(60.0));
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { FixedTableView } from 'fixedtable';
//! await init();
//! const view = new FixedTableView(contentEl, affixHeaderEl, props);
//! const positions = view.positions();
//! ```

pub mod error;
pub mod layout;
pub mod sync;
pub mod types;

// Browser bindings
#[cfg(target_arch = "wasm32")]
pub mod dom;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use dom::FixedTableView;
pub use error::{FixedTableError, Result};
pub use layout::LayoutEngine;
pub use sync::{TableHost, TableLayout};

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
