//! Filesystem scanning primitives shared by the sidebar, nav, and catalog
//! builders.
//!
//! The walkers read the content tree exactly once per invocation and never
//! write. Entries come back in directory-listing order, deliberately not
//! sorted, so generated output mirrors what the filesystem reports and two
//! runs over an unchanged tree produce identical data.
//!
//! ## Failure policy
//!
//! A path that is missing or becomes unreadable mid-scan yields an empty
//! listing at that point instead of aborting the build. `NotFound` is the
//! ordinary "no content yet" case and logs at debug; every other error is
//! surfaced with a warning. The policy is uniform across the top level and
//! recursive descent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One classified directory entry. Read fresh on every build; never cached.
#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    /// File name, lossily decoded.
    pub name: String,
    /// Full path to the entry.
    pub path: PathBuf,
    /// Directory vs file classification.
    pub is_dir: bool,
}

/// List the immediate children of `dir` in directory-listing order.
pub fn list_entries(dir: &Path) -> Vec<DirEntryInfo> {
    let reader = match fs::read_dir(dir) {
        Ok(reader) => reader,
        Err(err) => {
            if err.kind() == io::ErrorKind::NotFound {
                debug!(path = %dir.display(), "directory does not exist, treating as empty");
            } else {
                warn!(path = %dir.display(), error = %err, "unreadable directory, treating as empty");
            }
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for entry in reader {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let is_dir = match entry.file_type() {
            Ok(file_type) => file_type.is_dir(),
            Err(err) => {
                warn!(path = %entry.path().display(), error = %err, "skipping entry with unknown type");
                continue;
            }
        };
        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            is_dir,
        });
    }
    entries
}

/// Root-relative link path with a leading slash and forward-slash separators,
/// independent of the platform path separator.
///
/// `link_path("/docs", "/docs/a/one.md")` → `"/a/one.md"`.
pub fn link_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut link = String::new();
    for component in rel.components() {
        link.push('/');
        link.push_str(&component.as_os_str().to_string_lossy());
    }
    if link.is_empty() {
        link.push('/');
    }
    link
}
