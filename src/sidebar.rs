//! Sidebar tree construction.
//!
//! Walks the scan directory and produces a [`SidebarMap`]: one entry per
//! top-level child, keyed by its normalized root-relative path (`/guide/` for
//! directories, `/readme.md` for stray files), each value an ordered tree of
//! [`SidebarItem`]s.
//!
//! Directory entries become sections, markdown files become page leaves, and
//! everything else is classified out. A directory shadowed by a markdown twin
//! (`foo/` next to `foo.md`) is dropped entirely; the file's leaf already
//! represents it. Recursion is bounded by `max_level`, counted from 1 at the
//! scan root's children; a directory at the limit still gets a node, just a
//! childless one.

use crate::config::SidebarConfig;
use crate::naming;
use crate::scan::{self, DirEntryInfo};
use crate::types::{SidebarItem, SidebarMap};
use std::path::Path;

/// Build the sidebar mapping for the tree rooted at `root`.
///
/// A missing root is "no content yet", not an error: the result is an empty
/// map. Entries whose key collides (after normalization) are appended to the
/// existing sequence rather than replaced.
pub fn build_sidebar(root: &Path, config: &SidebarConfig) -> SidebarMap {
    let mut sidebar = SidebarMap::new();
    let entries = scan::list_entries(root);
    let file_names: Vec<&str> = entries
        .iter()
        .filter(|e| !e.is_dir)
        .map(|e| e.name.as_str())
        .collect();

    for entry in &entries {
        if entry.is_dir && is_excluded_dir(entry, &file_names, config) {
            continue;
        }

        let mut key = scan::link_path(root, &entry.path);
        if entry.is_dir {
            key.push('/');
        }

        let items = if entry.is_dir {
            directory_items(root, &entry.path, 1, config)
        } else {
            file_item(root, entry, config).into_iter().collect()
        };

        sidebar.entry(key).or_default().extend(items);
    }

    sidebar
}

/// Whether a directory entry is skipped outright: named in the ignore list,
/// or shadowed by a markdown twin among its siblings.
fn is_excluded_dir(entry: &DirEntryInfo, sibling_files: &[&str], config: &SidebarConfig) -> bool {
    config.ignore_dir_names.contains(&entry.name)
        || sibling_files
            .iter()
            .any(|file| naming::is_markdown_twin(&entry.name, file))
}

/// Sidebar items for the children of `dir`, in directory-listing order.
///
/// `level` is the depth of `dir`'s children: 1 for the scan root's immediate
/// children, incremented per directory. Recursion stops strictly at
/// `max_level`.
fn directory_items(
    root: &Path,
    dir: &Path,
    level: usize,
    config: &SidebarConfig,
) -> Vec<SidebarItem> {
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
            let children = if level < config.max_level {
                directory_items(root, &entry.path, level + 1, config)
            } else {
                vec![]
            };
            items.push(SidebarItem::section(
                naming::strip_order_prefix(&entry.name),
                children,
            ));
        } else if let Some(item) = file_item(root, entry, config) {
            items.push(item);
        }
    }
    items
}

/// Leaf item for a markdown file, or `None` for ignored and non-markdown
/// files.
///
/// The link keeps the on-disk name (order prefix included) minus the `.md`
/// suffix; only the display text has the prefix stripped.
fn file_item(root: &Path, entry: &DirEntryInfo, config: &SidebarConfig) -> Option<SidebarItem> {
    if config.ignore_file_names.contains(&entry.name) {
        return None;
    }
    let stem = naming::md_stem(&entry.name)?;
    let raw = scan::link_path(root, &entry.path);
    let link = raw.strip_suffix(".md").unwrap_or(&raw).to_string();
    Some(SidebarItem::page(naming::strip_order_prefix(stem), link))
}
