//! Per-section catalog listings.
//!
//! Index pages often want a "what's in this section" listing without the
//! author maintaining one by hand. For every directory in the content tree
//! that carries an `index.md` (the root included) this builder emits the
//! markdown siblings of that index as an ordered listing, keyed by the index
//! page's path (`index` at the root, `guide/index` below).
//!
//! `index.md` itself and `README.md` never appear in a listing, and
//! directories named in `exclude_dirs` are not descended into. Titles are the
//! file stem verbatim; no prefix convention applies here.

use crate::config::CatalogConfig;
use crate::naming;
use crate::scan;
use crate::types::{CatalogItem, CatalogMap};
use std::io;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File names that never show up in a catalog listing.
const SKIP_FILE_NAMES: &[&str] = &["index.md", "README.md"];

/// Build the catalog mapping for the tree rooted at `root`.
///
/// A missing root yields an empty map.
pub fn build_catalog(root: &Path, config: &CatalogConfig) -> CatalogMap {
    let mut catalog = CatalogMap::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !(entry.file_type().is_dir()
                    && config
                        .exclude_dirs
                        .iter()
                        .any(|name| entry.file_name().to_string_lossy() == *name))
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(root).display().to_string();
                if err.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound) {
                    debug!(path = %path, "path vanished during catalog scan");
                } else {
                    warn!(path = %path, error = %err, "skipping unreadable path");
                }
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        if !dir.join("index.md").is_file() {
            continue;
        }
        catalog.insert(page_key(root, dir), listing(root, dir));
    }

    catalog
}

/// Catalog key for a directory's index page: `index` at the root,
/// `<rel>/index` below, forward slashes throughout.
fn page_key(root: &Path, dir: &Path) -> String {
    let rel = scan::link_path(root, dir);
    if rel == "/" {
        "index".to_string()
    } else {
        format!("{}/index", rel.trim_start_matches('/'))
    }
}

/// Markdown siblings of a directory's index page, in directory-listing order.
fn listing(root: &Path, dir: &Path) -> Vec<CatalogItem> {
    scan::list_entries(dir)
        .iter()
        .filter(|entry| !entry.is_dir && !SKIP_FILE_NAMES.contains(&entry.name.as_str()))
        .filter_map(|entry| {
            let title = naming::md_stem(&entry.name)?;
            let raw = scan::link_path(root, &entry.path);
            let path = raw.strip_suffix(".md").unwrap_or(&raw).to_string();
            Some(CatalogItem {
                path,
                title: title.to_string(),
            })
        })
        .collect()
}
