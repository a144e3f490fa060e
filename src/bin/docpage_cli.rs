//! CLI tool for docpage - writes a preview page and replays the behaviors
//!
//! Usage:
//!   docpage_cli                         # Preview HTML to stdout
//!   docpage_cli -o preview.html         # Preview HTML to file
//!   docpage_cli --rows 5 --delegate     # 5 inherited rows, no inline onclick

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};

use docpage::dom::tree::{Tree, TreeNode};
use docpage::dom::PageHost;
use docpage::markup;
use docpage::page::{extended_row_states, scroll_to_top, toggle_extended, watch_scroll};
use docpage::{DocPageError, PageConfig, Visibility};

struct Options {
    output: Option<String>,
    rows: usize,
    delegate: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        output: None,
        rows: 3,
        delegate: false,
    };
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" => {
                let path = iter.next().ok_or("-o needs a path")?;
                options.output = Some(path.clone());
            }
            "--rows" => {
                let value = iter.next().ok_or("--rows needs a number")?;
                options.rows = value
                    .parse()
                    .map_err(|e| format!("invalid --rows {value}: {e}"))?;
            }
            "--delegate" => options.delegate = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(options)
}

fn preview_html(config: &PageConfig, rows: usize) -> String {
    let declared = vec![
        "<td class=\"mods\"><code>int</code></td><td><code>width</code></td>".to_string(),
        "<td class=\"mods\"><code>int</code></td><td><code>height</code></td>".to_string(),
    ];
    let inherited: Vec<String> = (0..rows)
        .map(|i| {
            format!(
                "<td class=\"mods\"><code>Object</code></td>\
                 <td><code><span class=\"name\"><a class=\"extern\">field{i}</a></span></code></td>"
            )
        })
        .collect();
    let fields = markup::summary_table(config, "Fields", &declared, &inherited, 2);
    let methods = markup::summary_table(config, "Methods", &declared, &inherited, 2);
    let body = format!("{fields}\n{methods}");
    markup::page(config, "docpage preview", "", &body)
}

/// Mirror of the preview page's structure, for replaying the behaviors.
fn preview_tree(config: &PageConfig, rows: usize) -> (Tree, Vec<(TreeNode, TreeNode)>) {
    let tree = Tree::new();
    let _button = tree.body().append("button").with_id(&config.up_button_id);
    let page = tree.body().append("div").append("div");
    let tables = (0..2)
        .map(|_| {
            let table = page.append("div").append("table");
            let _declared = table.append("tr");
            let toggle = table
                .append("tr")
                .with_classes(&format!("inherited {}", config.toggle_class));
            for i in 0..rows {
                let sep = if i == 0 { " sep" } else { "" };
                let _row = table.append("tr").with_classes(&format!(
                    "inherited {}{sep} {}",
                    config.extended_class, config.hidden_class
                ));
            }
            (table, toggle)
        })
        .collect();
    (tree, tables)
}

fn describe(states: &[Visibility]) -> String {
    let shown = states.iter().filter(|v| v.is_visible()).count();
    format!("{shown}/{} shown", states.len())
}

fn replay(config: &PageConfig, rows: usize) {
    let (tree, tables) = preview_tree(config, rows);

    for offset in [0.0, 50.0, 10.0] {
        tree.scroll_root(offset);
        let visibility = watch_scroll(&tree, config);
        eprintln!("scroll {offset:>5}px -> button {visibility:?}");
    }
    tree.scroll_root(50.0);
    scroll_to_top(&tree);
    eprintln!("scroll to top -> offset {}", tree.scroll_offsets().effective());

    for (index, (table, toggle)) in tables.iter().enumerate() {
        let flipped = toggle_extended(toggle, config);
        eprintln!(
            "toggle table {index}: flipped {flipped}, now {}",
            describe(&extended_row_states(table, config))
        );
    }
    eprintln!("{} DOM mutations", tree.mutations());
}

/// Write the page to `path`, or to stdout when no path is given.
fn write_output(path: Option<&str>, html: &str) -> Result<(), DocPageError> {
    match path {
        Some(path) => fs::write(path, html)?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(html.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let options = match parse_args(&args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: docpage_cli [-o output.html] [--rows N] [--delegate]");
            std::process::exit(1);
        }
    };

    let config = PageConfig {
        delegate_clicks: options.delegate,
        ..PageConfig::default()
    };
    let html = preview_html(&config, options.rows);

    // Output
    let target = options.output.as_deref();
    if let Err(e) = write_output(target, &html) {
        eprintln!("Error writing {}: {e}", target.unwrap_or("stdout"));
        std::process::exit(1);
    }
    if let Some(path) = target {
        eprintln!("Wrote {path}");
    }

    replay(&config, options.rows);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failure_is_io_error() {
        let missing = env::temp_dir()
            .join("docpage-no-such-dir")
            .join("nested")
            .join("preview.html");
        let err = write_output(missing.to_str(), "<p></p>").unwrap_err();
        assert!(matches!(err, DocPageError::Io(_)), "{err}");
    }

    #[test]
    fn test_write_to_file() {
        let path = env::temp_dir().join(format!("docpage-preview-{}.html", std::process::id()));
        write_output(path.to_str(), "<p>ok</p>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>ok</p>");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_args() {
        let args: Vec<String> = ["docpage_cli", "-o", "out.html", "--rows", "5", "--delegate"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let options = parse_args(&args).unwrap();
        assert_eq!(options.output.as_deref(), Some("out.html"));
        assert_eq!(options.rows, 5);
        assert!(options.delegate);

        let bad: Vec<String> = ["docpage_cli", "--bogus"].iter().map(ToString::to_string).collect();
        assert!(parse_args(&bad).is_err());
    }
}
