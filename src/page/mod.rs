//! Page behaviors and the WASM-exported `DocPage` that wires them to the browser.
//!
//! The behaviors themselves (`scroll`, `toggle`) are generic over the
//! [`crate::dom`] traits and run natively in tests. `DocPage` owns the
//! browser listeners:
//! - window `scroll` runs the scroll watcher
//! - with `delegateClicks`, a click on the scroll button jumps to top and a
//!   click anywhere inside a toggle row expands or collapses its table
//!
//! Without `delegateClicks` the page calls the exported `scrollUp()` and
//! `toggleExt(this)` from inline `onclick` attributes instead. Those free
//! functions read the config of the most recent `install`.

mod scroll;
mod toggle;

pub use scroll::{scroll_to_top, watch_scroll};
pub use toggle::{enclosing_table, extended_row_states, toggle_control_for, toggle_extended};

use crate::config::PageConfig;

thread_local! {
    static ACTIVE_CONFIG: std::cell::RefCell<Option<PageConfig>> =
        const { std::cell::RefCell::new(None) };
}

/// Config of the installed page, or the defaults when nothing is installed.
#[must_use]
pub fn active_config() -> PageConfig {
    ACTIVE_CONFIG.with(|active| active.borrow().clone().unwrap_or_default())
}

pub(crate) fn set_active_config(config: &PageConfig) {
    ACTIVE_CONFIG.with(|active| *active.borrow_mut() = Some(config.clone()));
}

/// Forget the installed config if it is still `config`.
pub(crate) fn clear_active_config(config: &PageConfig) {
    ACTIVE_CONFIG.with(|active| {
        let mut active = active.borrow_mut();
        if active.as_ref() == Some(config) {
            *active = None;
        }
    });
}

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{Element, Event, MouseEvent};

#[cfg(target_arch = "wasm32")]
use crate::dom::web::WebHost;
#[cfg(target_arch = "wasm32")]
use crate::dom::PageHost;
#[cfg(target_arch = "wasm32")]
use crate::error::{DocPageError, Result};
#[cfg(target_arch = "wasm32")]
use crate::types::Visibility;

/// State shared by the event listeners (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub(crate) struct PageState {
    pub(crate) config: PageConfig,
    pub(crate) host: WebHost,
    pub(crate) last_visibility: Option<Visibility>,
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn debug_log(config: &PageConfig, message: &str) {
    if config.debug {
        web_sys::console::debug_1(&JsValue::from_str(&format!("docpage: {message}")));
    }
}

/// Installed page behavior. Dropping it (or calling `detach`) removes every
/// listener it registered.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct DocPage {
    state: Rc<RefCell<PageState>>,
    scroll_closure: Option<Closure<dyn FnMut(Event)>>,
    button_closure: Option<(Element, Closure<dyn FnMut(MouseEvent)>)>,
    toggle_closure: Option<Closure<dyn FnMut(MouseEvent)>>,
}

#[cfg(target_arch = "wasm32")]
impl DocPage {
    pub(crate) fn install(config: PageConfig) -> Result<DocPage> {
        config.validate()?;
        let host = WebHost::current()?;
        let delegate = config.delegate_clicks;
        let state = Rc::new(RefCell::new(PageState {
            config,
            host: host.clone(),
            last_visibility: None,
        }));

        // Window scroll
        let scroll_closure = {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                Self::handle_scroll(&state);
            }) as Box<dyn FnMut(Event)>);
            host.window()
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                .map_err(|_| DocPageError::Dom("cannot listen for scroll".into()))?;
            closure
        };

        let (button_closure, toggle_closure) = if delegate {
            (
                Self::listen_button(&state, &host),
                Self::listen_toggles(&state, &host),
            )
        } else {
            (None, None)
        };

        // A reload can restore a scrolled position before any scroll event.
        Self::handle_scroll(&state);
        set_active_config(&state.borrow().config);

        Ok(DocPage {
            state,
            scroll_closure: Some(scroll_closure),
            button_closure,
            toggle_closure,
        })
    }

    fn listen_button(
        state: &Rc<RefCell<PageState>>,
        host: &WebHost,
    ) -> Option<(Element, Closure<dyn FnMut(MouseEvent)>)> {
        let s = state.borrow();
        let Some(button) = host.node_by_id(&s.config.up_button_id) else {
            debug_log(&s.config, "no scroll button on this page");
            return None;
        };
        let closure = {
            let state = Rc::clone(state);
            Closure::wrap(Box::new(move |_event: MouseEvent| {
                scroll::scroll_to_top(&state.borrow().host);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .ok()?;
        Some((button, closure))
    }

    fn listen_toggles(
        state: &Rc<RefCell<PageState>>,
        host: &WebHost,
    ) -> Option<Closure<dyn FnMut(MouseEvent)>> {
        let closure = {
            let state = Rc::clone(state);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok())
                else {
                    return;
                };
                let s = state.borrow();
                if let Some(control) = toggle::toggle_control_for(&target, &s.config) {
                    let flipped = toggle::toggle_extended(&control, &s.config);
                    debug_log(&s.config, &format!("toggled {flipped} extended rows"));
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        host.document()
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(closure)
    }

    pub(crate) fn handle_scroll(state: &Rc<RefCell<PageState>>) -> Option<Visibility> {
        let mut s = state.borrow_mut();
        let visibility = scroll::watch_scroll(&s.host, &s.config);
        if visibility != s.last_visibility {
            match visibility {
                Some(v) => debug_log(&s.config, &format!("scroll button {v:?}")),
                None => debug_log(&s.config, "no scroll button on this page"),
            }
            s.last_visibility = visibility;
        }
        visibility
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl DocPage {
    /// Jump to the top of the page.
    #[wasm_bindgen(js_name = "scrollUp")]
    pub fn scroll_up(&self) {
        scroll::scroll_to_top(&self.state.borrow().host);
    }

    /// Expand or collapse the extended rows of the table around `reference`.
    /// Returns the number of rows flipped.
    pub fn toggle(&self, reference: &Element) -> usize {
        toggle::toggle_extended(reference, &self.state.borrow().config)
    }

    /// Re-run the scroll watcher now. Returns whether the button is visible.
    pub fn refresh(&self) -> bool {
        Self::handle_scroll(&self.state).is_some_and(Visibility::is_visible)
    }

    /// Remove every listener this page registered.
    pub fn detach(&mut self) {
        let s = self.state.borrow();
        let was_attached = self.scroll_closure.is_some();
        let report = |what: &str, removed: std::result::Result<(), JsValue>| {
            if removed.is_err() {
                debug_log(&s.config, &format!("failed to remove {what} listener"));
            }
        };
        if let Some(closure) = self.scroll_closure.take() {
            report(
                "scroll",
                s.host
                    .window()
                    .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref()),
            );
        }
        if let Some((button, closure)) = self.button_closure.take() {
            report(
                "button click",
                button.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref()),
            );
        }
        if let Some(closure) = self.toggle_closure.take() {
            report(
                "toggle click",
                s.host
                    .document()
                    .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref()),
            );
        }
        if was_attached {
            clear_active_config(&s.config);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for DocPage {
    fn drop(&mut self) {
        self.detach();
    }
}
