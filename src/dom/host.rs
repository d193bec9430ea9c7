//! `TableHost` backed by the browser DOM.

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement};

use crate::layout::{HeaderCell, Measurements};
use crate::sync::{Listener, TableHost, TaskHandle};
use crate::types::{Rect, ScrollMetrics};

/// Callbacks the host hands to the browser
#[derive(Default)]
pub(crate) struct DomCallbacks {
    pub(crate) turn: Option<Closure<dyn FnMut()>>,
    pub(crate) resize: Option<Closure<dyn FnMut(Event)>>,
    pub(crate) document_scroll: Option<Closure<dyn FnMut(Event)>>,
    pub(crate) content_scroll: Option<Closure<dyn FnMut(Event)>>,
}

pub(crate) struct DomHost {
    content: HtmlElement,
    affix_header: Option<HtmlElement>,
    pub(crate) callbacks: DomCallbacks,
    /// Turn scheduled with `setTimeout`, taken when it fires
    pub(crate) current_turn: Option<TaskHandle>,
}

impl DomHost {
    pub(crate) fn new(content: HtmlElement, affix_header: Option<HtmlElement>) -> Self {
        Self {
            content,
            affix_header,
            callbacks: DomCallbacks::default(),
            current_turn: None,
        }
    }

    fn target_and_callback(&self, listener: Listener) -> Option<(EventTarget, &js_sys::Function)> {
        let window = web_sys::window()?;
        let (target, closure): (EventTarget, _) = match listener {
            Listener::WindowResize => (window.into(), self.callbacks.resize.as_ref()?),
            Listener::DocumentScroll => {
                (window.document()?.into(), self.callbacks.document_scroll.as_ref()?)
            }
            Listener::ContentScroll => (
                self.content.clone().into(),
                self.callbacks.content_scroll.as_ref()?,
            ),
        };
        Some((target, closure.as_ref().unchecked_ref()))
    }
}

fn event_name(listener: Listener) -> &'static str {
    match listener {
        Listener::WindowResize => "resize",
        Listener::DocumentScroll | Listener::ContentScroll => "scroll",
    }
}

fn children(element: &Element) -> impl Iterator<Item = Element> {
    let list = element.children();
    (0..list.length()).filter_map(move |i| list.item(i))
}

fn bounding_height(element: Option<Element>) -> Option<f64> {
    element.map(|el| el.get_bounding_client_rect().height())
}

impl TableHost for DomHost {
    fn measure(&self) -> Option<Measurements> {
        if !self.content.is_connected() {
            return None;
        }
        let select = |selector: &str| self.content.query_selector(selector).ok().flatten();
        let thead = select("thead");
        let tbody = select("tbody");

        let header_rows = thead
            .as_ref()
            .map(|thead| {
                children(thead)
                    .map(|tr| {
                        children(&tr)
                            .map(|th| HeaderCell {
                                col_key: th.get_attribute("data-colkey"),
                                width: th.get_bounding_client_rect().width(),
                            })
                            .collect()
                    })
                    .collect()
            })
            .unwrap_or_default();
        let row_heights = tbody
            .as_ref()
            .map(|tbody| {
                children(tbody)
                    .map(|tr| tr.get_bounding_client_rect().height())
                    .collect()
            })
            .unwrap_or_default();

        Some(Measurements {
            header_rows,
            row_heights,
            header_height: bounding_height(thead),
            footer_height: bounding_height(select("tfoot")),
        })
    }

    fn scroll_metrics(&self) -> Option<ScrollMetrics> {
        if !self.content.is_connected() {
            return None;
        }
        let el = &self.content;
        Some(ScrollMetrics {
            scroll_left: scroll_left_f64(el),
            scroll_top: f64::from(el.scroll_top()),
            client_width: f64::from(el.client_width()),
            client_height: f64::from(el.client_height()),
            scroll_width: f64::from(el.scroll_width()),
            scroll_height: f64::from(el.scroll_height()),
        })
    }

    fn content_rect(&self) -> Option<Rect> {
        if !self.content.is_connected() {
            return None;
        }
        let rect = self.content.get_bounding_client_rect();
        Some(Rect {
            top: rect.top(),
            left: rect.left(),
            width: rect.width(),
            height: rect.height(),
        })
    }

    fn affix_header_height(&self) -> Option<f64> {
        self.affix_header
            .as_ref()
            .map(|header| f64::from(header.offset_height()))
    }

    fn set_affix_scroll_left(&mut self, left: f64) -> bool {
        let Some(header) = &self.affix_header else {
            return false;
        };
        Reflect::set(
            header.as_ref(),
            &JsValue::from_str("scrollLeft"),
            &JsValue::from_f64(left),
        )
        .unwrap_or(false)
    }

    fn scrollbar_width(&self) -> Option<f64> {
        let document = web_sys::window()?.document()?;
        let body = document.body()?;
        let probe = document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let style = probe.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("top", "-9999px");
        let _ = style.set_property("width", "100px");
        let _ = style.set_property("height", "100px");
        let _ = style.set_property("overflow", "scroll");
        body.append_child(&probe).ok()?;
        let width = f64::from(probe.offset_width() - probe.client_width());
        let _ = body.remove_child(&probe);
        Some(width)
    }

    fn attach(&mut self, listener: Listener) {
        if let Some((target, callback)) = self.target_and_callback(listener) {
            let _ = target.add_event_listener_with_callback(event_name(listener), callback);
        }
    }

    fn detach(&mut self, listener: Listener) {
        if let Some((target, callback)) = self.target_and_callback(listener) {
            let _ = target.remove_event_listener_with_callback(event_name(listener), callback);
        }
    }

    fn schedule_turn(&mut self) -> Option<TaskHandle> {
        let window = web_sys::window()?;
        let callback = self.callbacks.turn.as_ref()?;
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                0,
            )
            .ok()?;
        let handle = TaskHandle(id);
        self.current_turn = Some(handle);
        Some(handle)
    }

    fn cancel_turn(&mut self, handle: TaskHandle) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle.0);
        }
        if self.current_turn == Some(handle) {
            self.current_turn = None;
        }
    }
}

fn scroll_left_f64(element: &HtmlElement) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str("scrollLeft"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_else(|| f64::from(element.scroll_left()))
}
