//! # docnav
//!
//! Navigation, sidebar, and catalog data generator for markdown documentation
//! sites. Your filesystem is the data source: directories become sections,
//! markdown files become pages, and a two-digit numeric prefix (`01-intro.md`)
//! fixes ordering without leaking into display text.
//!
//! The generated structures are handed to a documentation renderer at startup
//! as plain JSON: `text`/`link`/`items` trees for the sidebar and top
//! navigation, plus per-section catalog listings for index pages. Everything
//! is built in one read-only pass over the content tree, held in memory, and
//! discarded when the process exits. No cache, no incremental state.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Filesystem primitives: directory listing, classification, link normalization |
//! | [`naming`] | `NN-` prefix and markdown-twin filename conventions, as pure string transforms |
//! | [`sidebar`] | Path-keyed sidebar trees with bounded recursion depth |
//! | [`nav`] | Top navigation list with dropdown promotion and configurable fallback |
//! | [`catalog`] | Per-section page listings for directories carrying an `index.md` |
//! | [`config`] | `docnav.toml` loading, defaults, validation |
//! | [`types`] | Wire shapes the renderer consumes (`SidebarItem`, `NavItem`, `CatalogItem`) |
//! | [`output`] | CLI summaries and the `debug_print` field dumps |
//!
//! # Design Decisions
//!
//! ## Directory-listing order, not sorted
//!
//! Child sequences keep the order the filesystem reports. Authors who care
//! about ordering use the `NN-` prefix convention, which most filesystems
//! list in the intended order anyway; imposing a sort here would second-guess
//! the one authoring convention the tool promises to respect. Two runs over
//! an unchanged tree always produce identical output.
//!
//! ## Scans never fail the build
//!
//! A documentation tree that is missing, or loses a directory mid-scan, is a
//! site with less content, not a broken build. Every unreadable path yields
//! an empty structure at that point, uniformly at the top level and during
//! descent. Plain "does not exist" logs at debug; anything else logs a
//! warning through [`tracing`]. Only config parsing and CLI file writes
//! return errors.
//!
//! ## No per-call state beyond the root path
//!
//! Link normalization is a function of `(root, path)` and nothing else. The
//! scan root is threaded explicitly through every call so concurrent builds
//! against different roots can never observe each other.

pub mod catalog;
pub mod config;
pub mod naming;
pub mod nav;
pub mod output;
pub mod scan;
pub mod sidebar;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
