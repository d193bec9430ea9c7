//! WASM-exported `FixedTableView`: binds a `TableLayout` to a rendered
//! table.
//!
//! The view listens to content scroll, window resize and (with an affixed
//! header) document scroll on its own, and runs deferred recomputes from a
//! zero-delay timeout. Renderers read positions and styles back through the
//! getters.

mod host;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement};

use crate::error::FixedTableError;
use crate::sync::{TableLayout, SCROLL_EVENTS};
use crate::types::{ColumnNode, PositionKey, TableProps};
use host::DomHost;

/// Shared state reachable from event handlers
pub(crate) struct SharedState {
    pub(crate) layout: TableLayout,
    pub(crate) host: DomHost,
    pub(crate) scroll_callback: Option<Function>,
}

fn decode_props(props: JsValue) -> Result<TableProps, JsValue> {
    let props: TableProps = serde_wasm_bindgen::from_value(props)
        .map_err(|e| FixedTableError::Props(e.to_string()))?;
    TableLayout::check_props(&props)?;
    Ok(props)
}

/// Offsets are read back from layout, so the content must be in a live page
fn check_attached(content: &HtmlElement) -> Result<(), FixedTableError> {
    if web_sys::window().and_then(|w| w.document()).is_none() {
        return Err(FixedTableError::Dom("no window or document".to_string()));
    }
    if !content.is_connected() {
        return Err(FixedTableError::Dom(
            "content element is not attached to the document".to_string(),
        ));
    }
    Ok(())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Fixed-position layout for one rendered table
#[wasm_bindgen]
pub struct FixedTableView {
    state: Rc<RefCell<SharedState>>,
}

#[wasm_bindgen]
impl FixedTableView {
    /// Attach to a table's scrollable content element (and, optionally, its
    /// affixed header) and schedule the first layout pass.
    ///
    /// # Errors
    /// Returns an error if `props` cannot be decoded, if `content` is not
    /// attached to the page, or if `strictColumnKeys` is set and a fixed
    /// column lacks a unique `colKey`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        content: HtmlElement,
        affix_header: Option<HtmlElement>,
        props: JsValue,
    ) -> Result<FixedTableView, JsValue> {
        console_error_panic_hook::set_once();
        let props = decode_props(props)?;
        check_attached(&content)?;
        let state = Rc::new(RefCell::new(SharedState {
            layout: TableLayout::new(props),
            host: DomHost::new(content, affix_header),
            scroll_callback: None,
        }));
        Self::install_callbacks(&state);

        {
            let mut s = state.borrow_mut();
            let SharedState { layout, host, .. } = &mut *s;
            layout.mount(host);
        }
        Ok(Self { state })
    }

    fn install_callbacks(state: &Rc<RefCell<SharedState>>) {
        let weak = Rc::downgrade(state);
        let turn = {
            let weak = Weak::clone(&weak);
            Closure::wrap(Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    Self::handle_turn(&state);
                }
            }) as Box<dyn FnMut()>)
        };
        let resize = {
            let weak = Weak::clone(&weak);
            Closure::wrap(Box::new(move |_event: Event| {
                if let Some(state) = weak.upgrade() {
                    let mut s = state.borrow_mut();
                    let SharedState { layout, host, .. } = &mut *s;
                    layout.on_resize(host);
                }
            }) as Box<dyn FnMut(Event)>)
        };
        let document_scroll = {
            let weak = Weak::clone(&weak);
            Closure::wrap(Box::new(move |_event: Event| {
                if let Some(state) = weak.upgrade() {
                    let mut s = state.borrow_mut();
                    let SharedState { layout, host, .. } = &mut *s;
                    layout.on_document_scroll(host);
                }
            }) as Box<dyn FnMut(Event)>)
        };
        let content_scroll = Closure::wrap(Box::new(move |event: Event| {
            if let Some(state) = weak.upgrade() {
                Self::handle_content_scroll(&state, &event);
            }
        }) as Box<dyn FnMut(Event)>);

        let mut s = state.borrow_mut();
        s.host.callbacks.turn = Some(turn);
        s.host.callbacks.resize = Some(resize);
        s.host.callbacks.document_scroll = Some(document_scroll);
        s.host.callbacks.content_scroll = Some(content_scroll);
    }

    fn handle_turn(state: &Rc<RefCell<SharedState>>) {
        let mut s = state.borrow_mut();
        let SharedState { layout, host, .. } = &mut *s;
        let Some(handle) = host.current_turn.take() else {
            return;
        };
        layout.run_turn(handle, host);
    }

    fn handle_content_scroll(state: &Rc<RefCell<SharedState>>, event: &Event) {
        let (passthrough, callback) = {
            let mut s = state.borrow_mut();
            let SharedState {
                layout,
                host,
                scroll_callback,
            } = &mut *s;
            (layout.on_content_scroll(host), scroll_callback.clone())
        };
        let (Some(_), Some(callback)) = (passthrough, callback) else {
            return;
        };
        for name in SCROLL_EVENTS {
            let _ = callback.call2(&JsValue::NULL, &JsValue::from_str(name), event);
        }
    }

    /// Replace the table props.
    ///
    /// # Errors
    /// Returns an error if `props` cannot be decoded or fail the strict key
    /// check.
    pub fn set_props(&self, props: JsValue) -> Result<(), JsValue> {
        let props = decode_props(props)?;
        let mut s = self.state.borrow_mut();
        let SharedState { layout, host, .. } = &mut *s;
        layout.set_props(props, host);
        Ok(())
    }

    /// Force a full recomputation after an external layout change.
    pub fn refresh_table(&self) {
        let mut s = self.state.borrow_mut();
        let SharedState { layout, host, .. } = &mut *s;
        layout.refresh_table(host);
    }

    /// Register `callback(eventName, event)` for forwarded scroll events.
    pub fn set_scroll_callback(&self, callback: Option<Function>) {
        self.state.borrow_mut().scroll_callback = callback;
    }

    /// Position index as `{ columns: Map, rows: Map }`.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn positions(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.borrow().layout.positions())
    }

    /// Scroll shadow flags as `{ left, right }`.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn shadow(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.borrow().layout.shadow())
    }

    /// Sticky style for a column definition at sibling `index`.
    ///
    /// # Errors
    /// Returns an error if `column` is not a column definition.
    pub fn column_style(&self, column: JsValue, index: usize) -> Result<JsValue, JsValue> {
        let column: ColumnNode = serde_wasm_bindgen::from_value(column)
            .map_err(|e| FixedTableError::Props(e.to_string()))?;
        to_js(&self.state.borrow().layout.column_style(&column, index))
    }

    /// Sticky style for the body row with key `row_key` at `row_index`.
    ///
    /// # Errors
    /// Returns an error if `row_key` is neither a string nor an integer.
    pub fn row_style(&self, row_key: JsValue, row_index: usize) -> Result<JsValue, JsValue> {
        let row_key: PositionKey = serde_wasm_bindgen::from_value(row_key)
            .map_err(|e| FixedTableError::Props(e.to_string()))?;
        to_js(&self.state.borrow().layout.row_style(&row_key, row_index))
    }

    /// Header cell widths by column key.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn th_widths(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.borrow().layout.th_widths())
    }

    /// Integrity warnings from the last rebuild.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn diagnostics(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.borrow().layout.diagnostics())
    }

    pub fn table_width(&self) -> f64 {
        self.state.borrow().layout.table_width()
    }

    pub fn scrollbar_width(&self) -> f64 {
        self.state.borrow().layout.scrollbar_width()
    }

    pub fn is_fixed_header(&self) -> bool {
        self.state.borrow().layout.is_fixed_header()
    }

    pub fn is_width_overflow(&self) -> bool {
        self.state.borrow().layout.is_width_overflow()
    }

    pub fn show_affix_header(&self) -> bool {
        self.state.borrow().layout.show_affix_header()
    }

    /// Content position as `{ top, left }` for a virtual-scroll header.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn virtual_scroll_header_pos(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.borrow().layout.virtual_scroll_header_pos())
    }

    /// Detach all listeners and cancel pending work.
    pub fn destroy(&self) {
        let Ok(mut s) = self.state.try_borrow_mut() else {
            return;
        };
        let SharedState { layout, host, .. } = &mut *s;
        layout.unmount(host);
    }
}

impl Drop for FixedTableView {
    fn drop(&mut self) {
        self.destroy();
    }
}
