//! Common test fixtures: in-memory documentation pages.
//!
//! Builds the same structure the generator writes: a scroll button under
//! `<body>`, and summary tables with a toggle row followed by hidden
//! extended rows.
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use docpage::dom::tree::{Tree, TreeNode};
use docpage::PageConfig;

/// A summary table and its toggle control.
pub struct SummaryTable {
    pub table: TreeNode,
    pub toggle: TreeNode,
    pub extended: Vec<TreeNode>,
}

/// Builder for in-memory documentation pages.
pub struct PageBuilder {
    tree: Tree,
    config: PageConfig,
    tables: Vec<SummaryTable>,
}

impl PageBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PageConfig::default())
    }

    #[must_use]
    pub fn with_config(config: PageConfig) -> Self {
        Self {
            tree: Tree::new(),
            config,
            tables: Vec::new(),
        }
    }

    /// Add the floating scroll button.
    #[must_use]
    pub fn with_button(self) -> Self {
        let _button = self
            .tree
            .body()
            .append("button")
            .with_id(&self.config.up_button_id);
        self
    }

    /// Add a summary table with `declared` plain rows and `hidden` extended rows.
    #[must_use]
    pub fn add_table(mut self, declared: usize, hidden: usize) -> Self {
        let table = self.tree.body().append("div").append("table");
        let tbody = table.append("tbody");
        for _ in 0..declared {
            let _cell = tbody.append("tr").append("td");
        }
        let toggle = tbody
            .append("tr")
            .with_classes(&format!("inherited {}", self.config.toggle_class));
        let extended = (0..hidden)
            .map(|i| {
                let row = tbody.append("tr").with_class("inherited");
                let row = if i == 0 { row.with_class("sep") } else { row };
                let row = row
                    .with_class(&self.config.extended_class)
                    .with_class(&self.config.hidden_class);
                let _cell = row.append("td");
                row
            })
            .collect();
        self.tables.push(SummaryTable {
            table,
            toggle,
            extended,
        });
        self
    }

    /// Add an element carrying the extended class outside any table.
    #[must_use]
    pub fn add_stray_extended(self) -> Self {
        let _stray = self
            .tree
            .body()
            .append("p")
            .with_class(&self.config.extended_class)
            .with_class(&self.config.hidden_class);
        self
    }

    #[must_use]
    pub fn build(self) -> Page {
        Page {
            tree: self.tree,
            config: self.config,
            tables: self.tables,
        }
    }
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Page {
    pub tree: Tree,
    pub config: PageConfig,
    pub tables: Vec<SummaryTable>,
}

impl Page {
    pub fn table(&self, index: usize) -> &SummaryTable {
        self.tables.get(index).expect("table index out of range")
    }

    /// Hidden-class membership of every element in the document, in order.
    pub fn hidden_snapshot(&self) -> Vec<bool> {
        let mut nodes = vec![self.tree.root()];
        let mut out = Vec::new();
        while let Some(node) = nodes.pop() {
            out.push(node.classes().iter().any(|c| c == &self.config.hidden_class));
            let mut children = node.children();
            children.reverse();
            nodes.extend(children);
        }
        out
    }
}
