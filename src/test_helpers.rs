//! Shared test utilities for the docnav test suite.
//!
//! Builders create content trees in temp directories; extractors pull the
//! fields assertions usually compare. Markdown bodies are minimal; the
//! builders never read file contents, only names.

use crate::types::{NavItem, SidebarItem};
use std::fs;
use std::path::{Path, PathBuf};

/// Create a subdirectory and return its path.
pub fn mkdir(parent: &Path, name: &str) -> PathBuf {
    let dir = parent.join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Create a markdown file with a heading derived from its name.
pub fn md(dir: &Path, name: &str) {
    let stem = name.strip_suffix(".md").unwrap_or(name);
    fs::write(dir.join(name), format!("# {stem}\n")).unwrap();
}

/// Display texts of sidebar items, in order.
pub fn section_texts(items: &[SidebarItem]) -> Vec<&str> {
    items.iter().map(|item| item.text.as_str()).collect()
}

/// Display texts of nav items, in order.
pub fn nav_texts(items: &[NavItem]) -> Vec<&str> {
    items.iter().map(|item| item.text.as_str()).collect()
}
