//! Expand/collapse of extended rows inside one summary table.

use crate::config::PageConfig;
use crate::dom::{closest_ancestor, closest_inclusive, is_tag, PageNode};
use crate::types::Visibility;

/// Nearest `<table>` strictly above `reference`.
pub fn enclosing_table<N: PageNode>(reference: &N, config: &PageConfig) -> Option<N> {
    closest_ancestor(reference, |node| is_tag(node, &config.table_tag))
}

/// The toggle control that owns `target`, for delegated click handling.
///
/// Clicks land on the innermost element (usually a `<td>`), so this walks up
/// from the target itself.
pub fn toggle_control_for<N: PageNode>(target: &N, config: &PageConfig) -> Option<N> {
    closest_inclusive(target, |node| node.has_class(&config.toggle_class))
}

/// Flip the hidden class on every extended row of the table enclosing
/// `reference`. Returns how many elements were flipped.
///
/// With no enclosing table nothing is touched. Rows of other tables, and
/// extended elements outside any table, are never reached.
pub fn toggle_extended<N: PageNode>(reference: &N, config: &PageConfig) -> usize {
    let Some(table) = enclosing_table(reference, config) else {
        return 0;
    };
    let rows = table.descendants_with_class(&config.extended_class);
    for row in &rows {
        row.toggle_class(&config.hidden_class);
    }
    rows.len()
}

/// Current visibility of each extended row under `table`, in document order.
pub fn extended_row_states<N: PageNode>(table: &N, config: &PageConfig) -> Vec<Visibility> {
    table
        .descendants_with_class(&config.extended_class)
        .iter()
        .map(|row| Visibility::from_hidden_class(row.has_class(&config.hidden_class)))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dom::tree::{Tree, TreeNode};

    fn summary_table(tree: &Tree, hidden_rows: usize) -> (TreeNode, TreeNode) {
        let table = tree.body().append("div").append("table");
        let tbody = table.append("tbody");
        let _plain = tbody.append("tr");
        let toggle = tbody.append("tr").with_classes("inherited toggle");
        for i in 0..hidden_rows {
            let classes = if i == 0 {
                "inherited ext sep hide"
            } else {
                "inherited ext hide"
            };
            let _row = tbody.append("tr").with_classes(classes);
        }
        (table, toggle)
    }

    #[test]
    fn test_enclosing_table_found_through_tbody() {
        let tree = Tree::new();
        let (table, toggle) = summary_table(&tree, 2);
        assert_eq!(enclosing_table(&toggle, &PageConfig::default()), Some(table));
    }

    #[test]
    fn test_toggle_shows_then_hides() {
        let tree = Tree::new();
        let config = PageConfig::default();
        let (table, toggle) = summary_table(&tree, 3);

        assert_eq!(
            extended_row_states(&table, &config),
            vec![Visibility::Hidden; 3]
        );
        assert_eq!(toggle_extended(&toggle, &config), 3);
        assert_eq!(
            extended_row_states(&table, &config),
            vec![Visibility::Visible; 3]
        );
        assert_eq!(toggle_extended(&toggle, &config), 3);
        assert_eq!(
            extended_row_states(&table, &config),
            vec![Visibility::Hidden; 3]
        );
    }

    #[test]
    fn test_no_table_means_no_mutation() {
        let tree = Tree::new();
        let config = PageConfig::default();
        let stray = tree.body().append("div").with_classes("toggle");
        let _ext = tree.body().append("p").with_classes("ext hide");

        assert_eq!(toggle_extended(&stray, &config), 0);
        assert_eq!(tree.mutations(), 0);
    }

    #[test]
    fn test_empty_group_is_noop() {
        let tree = Tree::new();
        let config = PageConfig::default();
        let (_table, toggle) = summary_table(&tree, 0);
        assert_eq!(toggle_extended(&toggle, &config), 0);
        assert_eq!(tree.mutations(), 0);
    }

    #[test]
    fn test_toggle_control_for_click_target() {
        let tree = Tree::new();
        let config = PageConfig::default();
        let (_table, toggle) = summary_table(&tree, 1);
        let cell = toggle.append("td");
        let label = cell.append("span");

        assert_eq!(toggle_control_for(&label, &config), Some(toggle.clone()));
        assert_eq!(toggle_control_for(&toggle, &config), Some(toggle));
        assert_eq!(toggle_control_for(&tree.body(), &config), None);
    }
}
