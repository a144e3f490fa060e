//! HTML fragments the documentation generator embeds in each page.
//!
//! These are the other half of the contract in [`crate::config::PageConfig`]:
//! the ids and classes written here are the ones the behaviors look for.
//! With `delegate_clicks` the inline `onclick` attributes are left out,
//! because listeners registered by `install` handle the clicks.

use std::fmt::Write;

use crate::config::PageConfig;

/// Escape text for use in element content or a double-quoted attribute.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn onclick(config: &PageConfig, call: &str) -> String {
    if config.delegate_clicks {
        String::new()
    } else {
        format!(" onclick=\"{call}\"")
    }
}

/// The floating "scroll to top" button, hidden until the page scrolls.
#[must_use]
pub fn up_button(config: &PageConfig) -> String {
    format!(
        "<button id=\"{}\" title=\"Scroll to top\"{}>&#129093;</button>",
        escape_html(&config.up_button_id),
        onclick(config, "scrollUp()")
    )
}

/// The clickable row that expands the extended rows of its table.
#[must_use]
pub fn toggle_row(config: &PageConfig, label: &str, colspan: u32) -> String {
    format!(
        "<tr class=\"inherited {}\"{}><td colspan=\"{colspan}\">{}</td></tr>",
        escape_html(&config.toggle_class),
        onclick(config, "toggleExt(this)"),
        escape_html(label)
    )
}

/// Opening `<tr>` of an extended row. Rows start hidden; the first row of a
/// group also gets `sep` so the stylesheet can draw a divider above it.
#[must_use]
pub fn extended_row_open(config: &PageConfig, first: bool) -> String {
    let sep = if first { " sep" } else { "" };
    format!(
        "<tr class=\"inherited {}{sep} {}\">",
        escape_html(&config.extended_class),
        escape_html(&config.hidden_class)
    )
}

/// Module loader that initializes the WASM build and installs the behaviors.
///
/// `install` runs before `scrollUp`/`toggleExt` are exposed to inline
/// handlers, so they act with this page's class names.
///
/// `root_link` is the relative path from the page to the docs root
/// (e.g. `"../../"`), as used for stylesheets.
#[must_use]
pub fn script_tag(config: &PageConfig, root_link: &str) -> String {
    let root = escape_html(root_link);
    let config_json = serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string());
    format!(
        "<script type=\"module\">\n\
         import init, {{ install, scrollUp, toggleExt }} from \"{root}docpage.js\";\n\
         await init();\n\
         window.docPage = install({config_json});\n\
         Object.assign(window, {{ scrollUp, toggleExt }});\n\
         </script>"
    )
}

/// A summary table: declared members first, then a toggle row and the
/// inherited members as hidden extended rows.
///
/// Each member is one row of pre-rendered cells (`<td>..</td>` markup).
#[must_use]
pub fn summary_table(
    config: &PageConfig,
    title: &str,
    declared: &[String],
    inherited: &[String],
    colspan: u32,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<div class=\"summary-item\">");
    let _ = writeln!(out, "<h5>{}</h5>", escape_html(title));
    let _ = writeln!(out, "<table>");
    for cells in declared {
        let _ = writeln!(out, "<tr>{cells}</tr>");
    }
    if !inherited.is_empty() {
        let label = format!("Show all inherited members ({} more)", inherited.len());
        let _ = writeln!(out, "{}", toggle_row(config, &label, colspan));
        for (i, cells) in inherited.iter().enumerate() {
            let _ = writeln!(out, "{}{cells}</tr>", extended_row_open(config, i == 0));
        }
    }
    let _ = writeln!(out, "</table>");
    let _ = write!(out, "</div>");
    out
}

/// A complete page: head with stylesheet and loader, the scroll button, and
/// `body_html` inside the page container.
#[must_use]
pub fn page(config: &PageConfig, title: &str, root_link: &str, body_html: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>\n<html>\n<head>");
    let _ = writeln!(out, "<title>{}</title>", escape_html(title));
    let _ = writeln!(out, "<meta charset=\"UTF-8\" />");
    let _ = writeln!(
        out,
        "<link rel=\"stylesheet\" href=\"{}doc.css\" />",
        escape_html(root_link)
    );
    let _ = writeln!(out, "{}", script_tag(config, root_link));
    let _ = writeln!(out, "</head>\n<body class=\"bg\">");
    let _ = writeln!(out, "{}", up_button(config));
    let _ = writeln!(out, "<div class=\"body\"><div class=\"page\">");
    let _ = writeln!(out, "{body_html}");
    let _ = writeln!(out, "</div></div>\n</body>\n</html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_up_button_default() {
        assert_eq!(
            up_button(&PageConfig::default()),
            "<button id=\"upBtn\" title=\"Scroll to top\" onclick=\"scrollUp()\">&#129093;</button>"
        );
    }

    #[test]
    fn test_delegated_markup_has_no_inline_handlers() {
        let config = PageConfig {
            delegate_clicks: true,
            ..PageConfig::default()
        };
        assert!(!up_button(&config).contains("onclick"));
        assert!(!toggle_row(&config, "more", 2).contains("onclick"));
    }

    #[test]
    fn test_toggle_row() {
        let row = toggle_row(&PageConfig::default(), "Show all inherited fields (3 more)", 2);
        assert_eq!(
            row,
            "<tr class=\"inherited toggle\" onclick=\"toggleExt(this)\">\
             <td colspan=\"2\">Show all inherited fields (3 more)</td></tr>"
        );
    }

    #[test]
    fn test_extended_row_open() {
        let config = PageConfig::default();
        assert_eq!(
            extended_row_open(&config, true),
            "<tr class=\"inherited ext sep hide\">"
        );
        assert_eq!(
            extended_row_open(&config, false),
            "<tr class=\"inherited ext hide\">"
        );
    }

    #[test]
    fn test_summary_table_without_inherited_has_no_toggle() {
        let html = summary_table(
            &PageConfig::default(),
            "Fields",
            &["<td>int</td><td>x</td>".to_string()],
            &[],
            2,
        );
        assert!(html.contains("<h5>Fields</h5>"));
        assert!(!html.contains("toggle"));
        assert!(!html.contains("ext"));
    }

    #[test]
    fn test_summary_table_counts_inherited() {
        let inherited = vec!["<td>a</td>".to_string(), "<td>b</td>".to_string()];
        let html = summary_table(&PageConfig::default(), "Methods", &[], &inherited, 1);
        assert!(html.contains("Show all inherited members (2 more)"));
        assert_eq!(html.matches("ext hide").count(), 1);
        assert_eq!(html.matches("ext sep hide").count(), 1);
    }

    #[test]
    fn test_script_tag_passes_config() {
        let tag = script_tag(&PageConfig::default(), "../");
        assert!(tag.contains("from \"../docpage.js\""));
        assert!(tag.contains("\"upButtonId\":\"upBtn\""));
        assert!(tag.starts_with("<script type=\"module\">"));
    }

    #[test]
    fn test_script_tag_installs_before_exposing_handlers() {
        let config = PageConfig {
            extended_class: "more".to_string(),
            hidden_class: "collapsed".to_string(),
            ..PageConfig::default()
        };
        let tag = script_tag(&config, "");
        let install_at = tag.find("install({").unwrap_or(usize::MAX);
        let expose_at = tag.find("Object.assign(window").unwrap_or(0);
        assert!(install_at < expose_at, "{tag}");
        assert!(tag.contains("\"extendedClass\":\"more\""));
        assert!(tag.contains("\"hiddenClass\":\"collapsed\""));
    }

    #[test]
    fn test_page_includes_button_and_loader() {
        let html = page(&PageConfig::default(), "A < B", "", "<p>hi</p>");
        assert!(html.contains("<title>A &lt; B</title>"));
        assert!(html.contains("id=\"upBtn\""));
        assert!(html.contains("docpage.js"));
        assert!(html.contains("<p>hi</p>"));
    }
}
