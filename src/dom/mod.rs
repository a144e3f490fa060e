//! Minimal DOM surface the page behaviors are written against.
//!
//! Two backends implement it:
//! - `web` - `web_sys::Element` / `web_sys::Window` in the browser (wasm32 only)
//! - `tree` - an in-memory document used by native tests, benches and the CLI
//!
//! Both are handle types: cloning a node clones a reference, and mutations go
//! through `&self` the way they do on a live DOM.

pub mod tree;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::types::ScrollOffsets;

/// An element in a page.
pub trait PageNode: Clone {
    /// Tag name as the backend reports it (HTML DOMs report upper case).
    fn tag_name(&self) -> String;

    /// Parent element, `None` at the document root.
    fn parent(&self) -> Option<Self>;

    fn has_class(&self, class: &str) -> bool;

    /// Flip membership of `class`. Returns whether the class is now present.
    fn toggle_class(&self, class: &str) -> bool;

    /// Descendants (excluding `self`) carrying `class`, in document order.
    fn descendants_with_class(&self, class: &str) -> Vec<Self>;

    /// Set the inline `display` style.
    fn set_display(&self, display: &str);
}

/// The document and viewport hosting the page.
pub trait PageHost {
    type Node: PageNode;

    fn node_by_id(&self, id: &str) -> Option<Self::Node>;

    fn scroll_offsets(&self) -> ScrollOffsets;

    /// Write both the `<body>` and `<html>` scroll offsets.
    fn set_scroll_offsets(&self, offsets: ScrollOffsets);
}

/// Nearest strict ancestor of `node` satisfying `predicate`.
///
/// Starts at the parent; returns `None` once the root is passed.
pub fn closest_ancestor<N, F>(node: &N, predicate: F) -> Option<N>
where
    N: PageNode,
    F: Fn(&N) -> bool,
{
    let mut current = node.parent();
    while let Some(candidate) = current {
        if predicate(&candidate) {
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}

/// Like [`closest_ancestor`] but tests `node` itself first.
pub fn closest_inclusive<N, F>(node: &N, predicate: F) -> Option<N>
where
    N: PageNode,
    F: Fn(&N) -> bool,
{
    if predicate(node) {
        return Some(node.clone());
    }
    closest_ancestor(node, predicate)
}

/// ASCII case-insensitive tag comparison.
pub fn is_tag<N: PageNode>(node: &N, tag: &str) -> bool {
    node.tag_name().eq_ignore_ascii_case(tag)
}
