//! Scroll-related behavior: showing the floating button and jumping to top.

use crate::config::PageConfig;
use crate::dom::{PageHost, PageNode};
use crate::types::{button_visibility, ScrollOffsets, Visibility};

/// React to a scroll tick: show the button past the threshold, hide it otherwise.
///
/// Returns the visibility written, or `None` when the page has no button.
/// Reads two offsets and writes one style, so it is safe to call on every
/// scroll event.
pub fn watch_scroll<H: PageHost>(host: &H, config: &PageConfig) -> Option<Visibility> {
    let button = host.node_by_id(&config.up_button_id)?;
    let visibility = button_visibility(host.scroll_offsets(), config.scroll_threshold);
    button.set_display(visibility.css_display());
    Some(visibility)
}

/// Reset the vertical offset on both `<body>` and `<html>`.
pub fn scroll_to_top<H: PageHost>(host: &H) {
    host.set_scroll_offsets(ScrollOffsets::TOP);
}
