//! In-memory document implementing [`PageNode`] and [`PageHost`].
//!
//! Nodes live in an arena behind `Rc<RefCell<..>>`; a [`TreeNode`] is a
//! cheap handle (tree + index), so it behaves like a live DOM reference.
//! Every mutation made through the trait methods is counted, which lets tests
//! assert that an operation touched nothing.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::{PageHost, PageNode};
use crate::types::ScrollOffsets;

/// Index of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    display: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Default)]
struct TreeData {
    nodes: Vec<NodeData>,
    body_scroll: f64,
    root_scroll: f64,
    mutations: usize,
}

impl TreeData {
    fn push(&mut self, tag: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            tag: tag.to_ascii_uppercase(),
            parent,
            ..NodeData::default()
        });
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(p.0)) {
            parent.children.push(id);
        }
        id
    }
}

/// An in-memory page: `<html>` root with a `<body>` child.
#[derive(Clone)]
pub struct Tree {
    inner: Rc<RefCell<TreeData>>,
}

const ROOT: NodeId = NodeId(0);
const BODY: NodeId = NodeId(1);

impl Tree {
    #[must_use]
    pub fn new() -> Self {
        let mut data = TreeData::default();
        data.push("html", None);
        data.push("body", Some(ROOT));
        Self {
            inner: Rc::new(RefCell::new(data)),
        }
    }

    fn handle(&self, id: NodeId) -> TreeNode {
        TreeNode {
            tree: self.clone(),
            id,
        }
    }

    /// The `<html>` element.
    #[must_use]
    pub fn root(&self) -> TreeNode {
        self.handle(ROOT)
    }

    #[must_use]
    pub fn body(&self) -> TreeNode {
        self.handle(BODY)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of mutations made through [`PageNode`] / [`PageHost`].
    #[must_use]
    pub fn mutations(&self) -> usize {
        self.inner.borrow().mutations
    }

    /// Simulate an engine that reports the page scroll on `<body>`.
    pub fn scroll_body(&self, offset: f64) {
        self.inner.borrow_mut().body_scroll = offset;
    }

    /// Simulate an engine that reports the page scroll on `<html>`.
    pub fn scroll_root(&self, offset: f64) {
        self.inner.borrow_mut().root_scroll = offset;
    }

    /// All elements carrying `class`, anywhere in the document.
    #[must_use]
    pub fn nodes_with_class(&self, class: &str) -> Vec<TreeNode> {
        self.root().descendants_with_class(class)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.len())
            .field("mutations", &self.mutations())
            .finish()
    }
}

impl PageHost for Tree {
    type Node = TreeNode;

    fn node_by_id(&self, id: &str) -> Option<TreeNode> {
        let found = self
            .inner
            .borrow()
            .nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id));
        found.map(|index| self.handle(NodeId(index)))
    }

    fn scroll_offsets(&self) -> ScrollOffsets {
        let data = self.inner.borrow();
        ScrollOffsets::new(data.body_scroll, data.root_scroll)
    }

    fn set_scroll_offsets(&self, offsets: ScrollOffsets) {
        let mut data = self.inner.borrow_mut();
        data.body_scroll = offsets.body;
        data.root_scroll = offsets.root;
        data.mutations += 1;
    }
}

/// Handle to one element of a [`Tree`].
#[derive(Clone)]
pub struct TreeNode {
    tree: Tree,
    id: NodeId,
}

impl TreeNode {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Append a new child element and return it.
    #[must_use]
    pub fn append(&self, tag: &str) -> TreeNode {
        let id = self.tree.inner.borrow_mut().push(tag, Some(self.id));
        self.tree.handle(id)
    }

    /// Builder: add a class without counting it as a mutation.
    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.with_data(|n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        });
        self
    }

    /// Builder: add every whitespace-separated class in `classes`.
    #[must_use]
    pub fn with_classes(self, classes: &str) -> Self {
        classes
            .split_whitespace()
            .fold(self, |node, class| node.with_class(class))
    }

    /// Builder: set the `id` attribute.
    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.with_data(|n| n.id = Some(id.to_string()));
        self
    }

    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.read(|n| n.classes.clone()).unwrap_or_default()
    }

    /// Inline `display` style, if one was set.
    #[must_use]
    pub fn display(&self) -> Option<String> {
        self.read(|n| n.display.clone()).flatten()
    }

    #[must_use]
    pub fn children(&self) -> Vec<TreeNode> {
        self.read(|n| n.children.clone())
            .unwrap_or_default()
            .into_iter()
            .map(|id| self.tree.handle(id))
            .collect()
    }

    fn read<T>(&self, f: impl FnOnce(&NodeData) -> T) -> Option<T> {
        self.tree.inner.borrow().nodes.get(self.id.0).map(f)
    }

    fn with_data(&self, f: impl FnOnce(&mut NodeData)) {
        if let Some(node) = self.tree.inner.borrow_mut().nodes.get_mut(self.id.0) {
            f(node);
        }
    }

    fn mutate(&self, f: impl FnOnce(&mut NodeData)) {
        let mut data = self.tree.inner.borrow_mut();
        if let Some(node) = data.nodes.get_mut(self.id.0) {
            f(node);
            data.mutations += 1;
        }
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree.inner, &other.tree.inner) && self.id == other.id
    }
}

impl Eq for TreeNode {}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("id", &self.id.0)
            .field("tag", &self.tag_name())
            .field("classes", &self.classes())
            .finish()
    }
}

impl PageNode for TreeNode {
    fn tag_name(&self) -> String {
        self.read(|n| n.tag.clone()).unwrap_or_default()
    }

    fn parent(&self) -> Option<Self> {
        self.read(|n| n.parent)
            .flatten()
            .map(|id| self.tree.handle(id))
    }

    fn has_class(&self, class: &str) -> bool {
        self.read(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn toggle_class(&self, class: &str) -> bool {
        let mut present = false;
        self.mutate(|n| {
            if let Some(pos) = n.classes.iter().position(|c| c == class) {
                n.classes.remove(pos);
            } else {
                n.classes.push(class.to_string());
                present = true;
            }
        });
        present
    }

    fn descendants_with_class(&self, class: &str) -> Vec<Self> {
        let data = self.tree.inner.borrow();
        let mut found = Vec::new();
        // Pre-order walk; children pushed in reverse so they pop in order.
        let mut stack: Vec<NodeId> = data
            .nodes
            .get(self.id.0)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            let Some(node) = data.nodes.get(id.0) else {
                continue;
            };
            if node.classes.iter().any(|c| c == class) {
                found.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        drop(data);
        found.into_iter().map(|id| self.tree.handle(id)).collect()
    }

    fn set_display(&self, display: &str) {
        self.mutate(|n| n.display = Some(display.to_string()));
    }
}
