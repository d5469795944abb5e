//! Filename conventions for documentation content.
//!
//! Two authoring rules shape the generated trees, both kept as pure string
//! transforms so the filesystem walkers stay free of convention knowledge:
//!
//! - **Order prefixes**: a name may start with exactly two ASCII digits and a
//!   hyphen (`01-intro.md`, `02-setup/`). The prefix fixes ordering in the
//!   directory listing and is stripped from display text, while the on-disk
//!   name, prefix included, is what links are built from.
//! - **Markdown twins**: a directory already represented by a sibling `.md`
//!   file of the same base name (prefix-insensitive on both sides) is dropped
//!   from the tree so the renderer never shows duplicate entries.

/// Strip a leading `NN-` order prefix, if present.
///
/// Only the exact two-digit form counts; anything else is returned unchanged:
/// - `"01-intro"` → `"intro"`
/// - `"intro"` → `"intro"`
/// - `"1-intro"` → `"1-intro"` (one digit)
/// - `"123-intro"` → `"123-intro"` (three digits)
/// - `"01intro"` → `"01intro"` (no hyphen)
/// - `"01-"` → `""`
pub fn strip_order_prefix(name: &str) -> &str {
    let bytes = name.as_bytes();
    if bytes.len() >= 3
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'-'
    {
        &name[3..]
    } else {
        name
    }
}

/// The stem of a markdown filename, or `None` for any other file.
///
/// Suffix matching is exact and case-sensitive: `notes.md` matches,
/// `NOTES.MD` and `notes.markdown` do not.
pub fn md_stem(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(".md")
}

/// Whether `file_name` is a markdown twin of the directory `dir_name`.
///
/// Both sides are compared with their order prefixes stripped, so `guide.md`
/// and `01-guide.md` each shadow a directory named `01-guide`.
pub fn is_markdown_twin(dir_name: &str, file_name: &str) -> bool {
    md_stem(file_name)
        .is_some_and(|stem| strip_order_prefix(stem) == strip_order_prefix(dir_name))
}
