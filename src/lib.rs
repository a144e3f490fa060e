//! docpage - page behavior for generated API documentation
//!
//! Runs in the browser via WebAssembly and provides:
//! - A floating "scroll to top" button shown once the page scrolls past 20px
//! - Scroll-to-top on click
//! - "Show all inherited members" rows that expand and collapse the hidden
//!   rows of their own summary table
//!
//! The behaviors are written against the small [`dom`] traits, so they run
//! natively against an in-memory document as well as against the real DOM.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { install, scrollUp, toggleExt } from 'docpage';
//! await init();
//! const page = install({ hiddenClass: 'hide' });
//! Object.assign(window, { scrollUp, toggleExt }); // for inline onclick=""
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod markup;
pub mod page;
pub mod types;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use page::DocPage;

pub use config::PageConfig;
pub use error::{DocPageError, Result};
pub use types::{ScrollOffsets, Visibility};

/// Install the scroll watcher (and, with `delegateClicks`, click listeners).
///
/// `config` is a plain object with any subset of the `PageConfig` fields;
/// `undefined` or `null` uses the defaults. Keep the returned `DocPage`
/// alive for as long as the listeners should stay attached.
///
/// # Errors
/// Returns an error if the config is invalid or there is no document.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn install(config: JsValue) -> std::result::Result<DocPage, JsValue> {
    console_error_panic_hook::set_once();

    let config: PageConfig = if config.is_undefined() || config.is_null() {
        PageConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| DocPageError::Config(e.to_string()))?
    };
    Ok(DocPage::install(config)?)
}

/// Scroll the current page to the top. Bound to the button's inline `onclick`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = "scrollUp")]
pub fn scroll_up() {
    if let Ok(host) = dom::web::WebHost::current() {
        page::scroll_to_top(&host);
    }
}

/// Expand or collapse the extended rows of the table around `reference`,
/// using the class names given to `install` (defaults before any install).
/// Returns the number of rows flipped.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = "toggleExt")]
pub fn toggle_ext(reference: &web_sys::Element) -> usize {
    page::toggle_extended(reference, &page::active_config())
}

/// Run the scroll watcher once with the installed config, for pages that wire
/// `window.onscroll` themselves. Returns whether the button is visible.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = "onScroll")]
pub fn on_scroll() -> bool {
    dom::web::WebHost::current()
        .ok()
        .and_then(|host| page::watch_scroll(&host, &page::active_config()))
        .is_some_and(Visibility::is_visible)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
