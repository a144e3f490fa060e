//! Browser backend over `web_sys`.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use super::{PageHost, PageNode};
use crate::error::{DocPageError, Result};
use crate::types::ScrollOffsets;

impl PageNode for Element {
    fn tag_name(&self) -> String {
        Element::tag_name(self)
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.class_list().toggle(class).unwrap_or(false)
    }

    fn descendants_with_class(&self, class: &str) -> Vec<Self> {
        // The collection is live; snapshot it before anyone mutates classes.
        let collection = self.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn set_display(&self, display: &str) {
        if let Some(element) = self.dyn_ref::<HtmlElement>() {
            let _ = element.style().set_property("display", display);
        }
    }
}

/// The current window and its document.
#[derive(Debug, Clone)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// Acquire the global window and document.
    ///
    /// # Errors
    /// Returns `DocPageError::Dom` outside a browsing context (e.g. a worker).
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| DocPageError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| DocPageError::Dom("no document".into()))?;
        Ok(Self { window, document })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// `scrollTop` as the browser holds it. The `web_sys` binding is `i32` and
/// truncates fractional offsets on zoomed or hi-DPI pages.
pub(crate) fn scroll_top_f64(element: &Element) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str("scrollTop"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_else(|| f64::from(element.scroll_top()))
}

fn to_px(offset: f64) -> i32 {
    #[allow(clippy::cast_possible_truncation)]
    let px = offset.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
    px
}

impl PageHost for WebHost {
    type Node = Element;

    fn node_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_offsets(&self) -> ScrollOffsets {
        let body = self
            .document
            .body()
            .map_or(0.0, |b| scroll_top_f64(b.as_ref()));
        let root = self
            .document
            .document_element()
            .map_or(0.0, |e| scroll_top_f64(&e));
        ScrollOffsets::new(body, root)
    }

    fn set_scroll_offsets(&self, offsets: ScrollOffsets) {
        if let Some(body) = self.document.body() {
            body.set_scroll_top(to_px(offsets.body));
        }
        if let Some(root) = self.document.document_element() {
            root.set_scroll_top(to_px(offsets.root));
        }
    }
}
