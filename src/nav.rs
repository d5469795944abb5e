//! Top-navigation construction.
//!
//! Produces the ordered [`NavItem`] list for the renderer's navigation bar.
//! Directories become entries linking to their section (`/guide/`, trailing
//! slash) with an `activeMatch` route prefix; when recursion collects
//! children, the entry turns into a dropdown: `items` replace the entry's
//! own `link`, never both.
//!
//! Markdown files directly in the scan root are listed only when
//! `include_root_files` is set; deeper levels always list them. When the scan
//! yields nothing at all, the configured fallback entries are returned, or a
//! single derived entry for the scan directory when no fallback is
//! configured.

use crate::config::NavConfig;
use crate::naming;
use crate::scan::{self, DirEntryInfo};
use crate::types::NavItem;
use std::path::Path;

/// Build the navigation list for the tree rooted at `root`.
pub fn build_nav(root: &Path, config: &NavConfig) -> Vec<NavItem> {
    let items = nav_items(root, root, 1, config);
    if !items.is_empty() {
        return items;
    }
    if !config.fallback.is_empty() {
        return config.fallback.clone();
    }
    vec![NavItem::leaf(
        config.dir_name.clone(),
        format!("/{}/", config.dir_name),
    )]
}

/// Nav items for the children of `dir`, in directory-listing order.
fn nav_items(root: &Path, dir: &Path, level: usize, config: &NavConfig) -> Vec<NavItem> {
    let entries = scan::list_entries(dir);
    let file_names: Vec<&str> = entries
        .iter()
        .filter(|e| !e.is_dir)
        .map(|e| e.name.as_str())
        .collect();

    let mut items = Vec::new();
    for entry in &entries {
        if entry.is_dir {
            if is_excluded_dir(entry, &file_names, config) {
                continue;
            }
            items.push(directory_item(root, entry, level, config));
        } else if level > 1 || config.include_root_files {
            if let Some(item) = file_item(root, entry, config) {
                items.push(item);
            }
        }
    }
    items
}

fn is_excluded_dir(entry: &DirEntryInfo, sibling_files: &[&str], config: &NavConfig) -> bool {
    config.ignore_dir_names.contains(&entry.name)
        || sibling_files
            .iter()
            .any(|file| naming::is_markdown_twin(&entry.name, file))
}

/// Entry for a directory: a section link, or a dropdown when recursion
/// collected children. `activeMatch` is always the trailing-slash link so the
/// renderer highlights the section for every descendant page.
fn directory_item(root: &Path, entry: &DirEntryInfo, level: usize, config: &NavConfig) -> NavItem {
    let link = format!("{}/", scan::link_path(root, &entry.path));

    let children = if level < config.max_level {
        nav_items(root, &entry.path, level + 1, config)
    } else {
        vec![]
    };
    let children: Vec<NavItem> = children
        .into_iter()
        .filter(|item| !item.text.is_empty() && item.text != "index.md")
        .collect();

    NavItem {
        text: naming::strip_order_prefix(&entry.name).to_string(),
        link: children.is_empty().then(|| link.clone()),
        active_match: Some(link),
        items: children,
    }
}

fn file_item(root: &Path, entry: &DirEntryInfo, config: &NavConfig) -> Option<NavItem> {
    if config.ignore_file_names.contains(&entry.name) {
        return None;
    }
    let stem = naming::md_stem(&entry.name)?;
    let raw = scan::link_path(root, &entry.path);
    let link = raw.strip_suffix(".md").unwrap_or(&raw).to_string();
    Some(NavItem::leaf(naming::strip_order_prefix(stem), link))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{md, mkdir, nav_texts};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn config() -> NavConfig {
        NavConfig::default()
    }

    #[test]
    fn missing_root_returns_configured_fallback() {
        let tmp = TempDir::new().unwrap();
        let with_fallback = NavConfig {
            fallback: vec![
                NavItem::leaf("Home", "/"),
                NavItem::leaf("Examples", "/examples/"),
            ],
            ..NavConfig::default()
        };
        let nav = build_nav(&tmp.path().join("articles"), &with_fallback);
        assert_eq!(nav_texts(&nav), vec!["Home", "Examples"]);
    }

    #[test]
    fn missing_root_without_fallback_derives_single_entry() {
        let tmp = TempDir::new().unwrap();
        let nav = build_nav(&tmp.path().join("articles"), &config());
        assert_eq!(nav, vec![NavItem::leaf("articles", "/articles/")]);
    }

    #[test]
    fn empty_root_behaves_like_missing_root() {
        let tmp = TempDir::new().unwrap();
        let nav = build_nav(tmp.path(), &config());
        assert_eq!(nav, vec![NavItem::leaf("articles", "/articles/")]);
    }

    #[test]
    fn directory_entry_links_with_trailing_slash_and_active_match() {
        let tmp = TempDir::new().unwrap();
        mkdir(tmp.path(), "01-guide");

        let nav = build_nav(tmp.path(), &config());
        assert_eq!(
            nav,
            vec![NavItem {
                text: "guide".to_string(),
                link: Some("/01-guide/".to_string()),
                active_match: Some("/01-guide/".to_string()),
                items: vec![],
            }]
        );
    }

    #[test]
    fn root_files_excluded_by_default() {
        let tmp = TempDir::new().unwrap();
        mkdir(tmp.path(), "guide");
        md(tmp.path(), "stray.md");

        let nav = build_nav(tmp.path(), &config());
        assert_eq!(nav_texts(&nav), vec!["guide"]);
    }

    #[test]
    fn root_files_included_when_configured() {
        let tmp = TempDir::new().unwrap();
        mkdir(tmp.path(), "guide");
        md(tmp.path(), "40-about.md");
        md(tmp.path(), "index.md");

        let with_files = NavConfig {
            include_root_files: true,
            ..NavConfig::default()
        };
        let nav = build_nav(tmp.path(), &with_files);
        let mut texts = nav_texts(&nav);
        texts.sort_unstable();
        assert_eq!(texts, vec!["about", "guide"]);

        let about = nav.iter().find(|i| i.text == "about").unwrap();
        assert_eq!(about.link.as_deref(), Some("/40-about"));
        assert_eq!(about.active_match, None);
    }

    #[test]
    fn default_depth_produces_no_dropdowns() {
        let tmp = TempDir::new().unwrap();
        let guide = mkdir(tmp.path(), "guide");
        let nested = mkdir(&guide, "nested");
        md(&nested, "deep.md");

        let nav = build_nav(tmp.path(), &config());
        assert_eq!(nav.len(), 1);
        assert!(nav[0].items.is_empty());
        assert_eq!(nav[0].link.as_deref(), Some("/guide/"));
    }

    #[test]
    fn deeper_depth_turns_entry_into_dropdown() {
        let tmp = TempDir::new().unwrap();
        let guide = mkdir(tmp.path(), "guide");
        md(&guide, "one.md");
        md(&guide, "index.md");
        mkdir(&guide, "advanced");

        let two_levels = NavConfig {
            max_level: 2,
            ..NavConfig::default()
        };
        let nav = build_nav(tmp.path(), &two_levels);
        assert_eq!(nav.len(), 1);
        let guide_item = &nav[0];
        // Dropdowns drop their own link but keep the route match.
        assert_eq!(guide_item.link, None);
        assert_eq!(guide_item.active_match.as_deref(), Some("/guide/"));

        let mut texts = nav_texts(&guide_item.items);
        texts.sort_unstable();
        assert_eq!(texts, vec!["advanced", "one"]);

        let one = guide_item.items.iter().find(|i| i.text == "one").unwrap();
        assert_eq!(one.link.as_deref(), Some("/guide/one"));
        let advanced = guide_item
            .items
            .iter()
            .find(|i| i.text == "advanced")
            .unwrap();
        assert_eq!(advanced.link.as_deref(), Some("/guide/advanced/"));
    }

    #[test]
    fn dropdown_children_with_empty_text_are_filtered() {
        let tmp = TempDir::new().unwrap();
        let guide = mkdir(tmp.path(), "guide");
        md(&guide, "01-.md");
        md(&guide, "one.md");

        let two_levels = NavConfig {
            max_level: 2,
            ..NavConfig::default()
        };
        let nav = build_nav(tmp.path(), &two_levels);
        assert_eq!(nav_texts(&nav[0].items), vec!["one"]);
    }

    #[test]
    fn twin_directory_is_skipped() {
        let tmp = TempDir::new().unwrap();
        mkdir(tmp.path(), "foo");
        md(tmp.path(), "foo.md");
        mkdir(tmp.path(), "bar");

        let nav = build_nav(tmp.path(), &config());
        assert_eq!(nav_texts(&nav), vec!["bar"]);
    }

    #[test]
    fn ignored_directories_are_skipped() {
        let tmp = TempDir::new().unwrap();
        mkdir(tmp.path(), ".git");
        mkdir(tmp.path(), "demo");
        mkdir(tmp.path(), "guide");

        let nav = build_nav(tmp.path(), &config());
        assert_eq!(nav_texts(&nav), vec!["guide"]);
    }

    #[test]
    fn rebuild_of_unchanged_tree_is_identical() {
        let tmp = TempDir::new().unwrap();
        let guide = mkdir(tmp.path(), "guide");
        md(&guide, "one.md");
        mkdir(tmp.path(), "reference");

        let two_levels = NavConfig {
            max_level: 2,
            ..NavConfig::default()
        };
        assert_eq!(
            build_nav(tmp.path(), &two_levels),
            build_nav(tmp.path(), &two_levels)
        );
    }
}
