//! CLI output formatting.
//!
//! Two families of output, both built from pure `format_*` functions that
//! return lines (testable, no I/O) with thin `print_*` wrappers:
//!
//! - **Summaries** on stdout: an information-first inventory of the generated
//!   structures. Each entry leads with its positional index and display
//!   text, with links shown after `→`.
//! - **Debug dumps** on stderr (the `debug_print` config options): a
//!   field-by-field rendition of the exact data handed to the renderer.
//!   Absent `link`/`activeMatch` values are printed literally as `undefined`
//!   so a dump line exists for every field the renderer might read.

use crate::types::{CatalogMap, NavItem, SidebarItem, SidebarMap};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn opt_field(value: Option<&str>) -> &str {
    value.unwrap_or("undefined")
}

// ============================================================================
// Summaries
// ============================================================================

/// Format the sidebar summary: one block per top-level key.
pub fn format_sidebar_output(sidebar: &SidebarMap) -> Vec<String> {
    let mut lines = vec!["Sidebar".to_string()];
    for (key, items) in sidebar {
        lines.push(format!("{} ({} items)", key, count_sidebar_items(items)));
        sidebar_item_lines(items, 1, &mut lines);
    }
    lines
}

fn count_sidebar_items(items: &[SidebarItem]) -> usize {
    items
        .iter()
        .map(|item| 1 + count_sidebar_items(&item.items))
        .sum()
}

fn sidebar_item_lines(items: &[SidebarItem], depth: usize, lines: &mut Vec<String>) {
    for (i, item) in items.iter().enumerate() {
        let header = format!("{}{} {}", indent(depth), format_index(i + 1), item.text);
        match &item.link {
            Some(link) => lines.push(format!("{header} \u{2192} {link}")),
            None => lines.push(header),
        }
        sidebar_item_lines(&item.items, depth + 1, lines);
    }
}

/// Format the nav summary. Section entries get a `Match:` context line.
pub fn format_nav_output(nav: &[NavItem]) -> Vec<String> {
    let mut lines = vec!["Nav".to_string()];
    nav_item_lines(nav, 1, &mut lines);
    lines
}

fn nav_item_lines(items: &[NavItem], depth: usize, lines: &mut Vec<String>) {
    for (i, item) in items.iter().enumerate() {
        let header = format!("{}{} {}", indent(depth), format_index(i + 1), item.text);
        match &item.link {
            Some(link) => lines.push(format!("{header} \u{2192} {link}")),
            None => lines.push(header),
        }
        if let Some(active_match) = &item.active_match {
            lines.push(format!("{}Match: {}", indent(depth + 1), active_match));
        }
        nav_item_lines(&item.items, depth + 1, lines);
    }
}

/// Format the catalog summary: one block per index page.
pub fn format_catalog_output(catalog: &CatalogMap) -> Vec<String> {
    let mut lines = vec!["Catalog".to_string()];
    for (key, items) in catalog {
        lines.push(format!("{} ({} pages)", key, items.len()));
        for (i, item) in items.iter().enumerate() {
            lines.push(format!(
                "    {} {} \u{2192} {}",
                format_index(i + 1),
                item.title,
                item.path
            ));
        }
    }
    lines
}

/// Print a summary to stdout.
pub fn print_summary(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

// ============================================================================
// Debug dumps
// ============================================================================

/// Format the sidebar debug dump: every node, field by field.
pub fn format_sidebar_dump(sidebar: &SidebarMap) -> Vec<String> {
    let mut lines = Vec::new();
    for (key, items) in sidebar {
        lines.push(format!("{key}:"));
        sidebar_dump_lines(items, 1, &mut lines);
    }
    lines
}

fn sidebar_dump_lines(items: &[SidebarItem], depth: usize, lines: &mut Vec<String>) {
    let pad = indent(depth);
    for item in items {
        lines.push(format!("{pad}text: {}", item.text));
        lines.push(format!("{pad}link: {}", opt_field(item.link.as_deref())));
        if let Some(collapsible) = item.collapsible {
            lines.push(format!("{pad}collapsible: {collapsible}"));
        }
        if let Some(collapsed) = item.collapsed {
            lines.push(format!("{pad}collapsed: {collapsed}"));
        }
        if !item.items.is_empty() {
            lines.push(format!("{pad}items:"));
            sidebar_dump_lines(&item.items, depth + 1, lines);
        }
    }
}

/// Format the nav debug dump: every node, field by field.
pub fn format_nav_dump(nav: &[NavItem]) -> Vec<String> {
    let mut lines = Vec::new();
    nav_dump_lines(nav, 0, &mut lines);
    lines
}

fn nav_dump_lines(items: &[NavItem], depth: usize, lines: &mut Vec<String>) {
    let pad = indent(depth);
    for item in items {
        lines.push(format!("{pad}text: {}", item.text));
        lines.push(format!("{pad}link: {}", opt_field(item.link.as_deref())));
        lines.push(format!(
            "{pad}activeMatch: {}",
            opt_field(item.active_match.as_deref())
        ));
        if !item.items.is_empty() {
            lines.push(format!("{pad}items:"));
            nav_dump_lines(&item.items, depth + 1, lines);
        }
    }
}

/// Print a debug dump to stderr, the diagnostic stream.
pub fn print_dump(lines: &[String]) {
    for line in lines {
        eprintln!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SidebarItem;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn sample_sidebar() -> SidebarMap {
        BTreeMap::from([(
            "/guide/".to_string(),
            vec![
                SidebarItem::page("one", "/guide/one"),
                SidebarItem::section(
                    "advanced",
                    vec![SidebarItem::page("tuning", "/guide/advanced/tuning")],
                ),
            ],
        )])
    }

    #[test]
    fn sidebar_summary_counts_nested_items() {
        let lines = format_sidebar_output(&sample_sidebar());
        assert_eq!(
            lines,
            vec![
                "Sidebar",
                "/guide/ (3 items)",
                "    001 one \u{2192} /guide/one",
                "    002 advanced",
                "        001 tuning \u{2192} /guide/advanced/tuning",
            ]
        );
    }

    #[test]
    fn nav_summary_shows_match_context() {
        let nav = vec![NavItem {
            text: "guide".to_string(),
            link: Some("/guide/".to_string()),
            active_match: Some("/guide/".to_string()),
            items: vec![],
        }];
        let lines = format_nav_output(&nav);
        assert_eq!(
            lines,
            vec![
                "Nav",
                "    001 guide \u{2192} /guide/",
                "        Match: /guide/",
            ]
        );
    }

    #[test]
    fn catalog_summary_lists_pages() {
        let catalog: CatalogMap = BTreeMap::from([(
            "guide/index".to_string(),
            vec![crate::types::CatalogItem {
                path: "/guide/setup".to_string(),
                title: "setup".to_string(),
            }],
        )]);
        let lines = format_catalog_output(&catalog);
        assert_eq!(
            lines,
            vec![
                "Catalog",
                "guide/index (1 pages)",
                "    001 setup \u{2192} /guide/setup",
            ]
        );
    }

    #[test]
    fn sidebar_dump_prints_absent_link_as_undefined() {
        let sidebar: SidebarMap = BTreeMap::from([(
            "/guide/".to_string(),
            vec![SidebarItem::section(
                "advanced",
                vec![SidebarItem::page("tuning", "/guide/advanced/tuning")],
            )],
        )]);
        let lines = format_sidebar_dump(&sidebar);
        assert_eq!(
            lines,
            vec![
                "/guide/:",
                "    text: advanced",
                "    link: undefined",
                "    collapsible: true",
                "    items:",
                "        text: tuning",
                "        link: /guide/advanced/tuning",
            ]
        );
    }

    #[test]
    fn nav_dump_prints_absent_fields_as_undefined() {
        let nav = vec![NavItem::leaf("about", "/40-about")];
        let lines = format_nav_dump(&nav);
        assert_eq!(
            lines,
            vec![
                "text: about",
                "link: /40-about",
                "activeMatch: undefined",
            ]
        );
    }

    #[test]
    fn empty_structures_format_headers_only() {
        assert_eq!(format_sidebar_output(&SidebarMap::new()), vec!["Sidebar"]);
        assert_eq!(format_nav_output(&[]), vec!["Nav"]);
        assert!(format_sidebar_dump(&SidebarMap::new()).is_empty());
    }
}
