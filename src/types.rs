//! Wire types handed to the site renderer.
//!
//! These shapes are consumed verbatim by the renderer's startup configuration,
//! so the serialized field names (`text`, `link`, `items`, `collapsible`,
//! `collapsed`, `activeMatch`) are part of the external contract and must not
//! change. Absent fields are omitted from the JSON output entirely; the
//! renderer distinguishes "no link" from "empty link".
//!
//! A node is never both a leaf and a container: a leaf carries `link` and no
//! `items`, a container carries `items` and no `link`. A directory node cut
//! off by the depth limit carries neither.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sidebar data keyed by normalized top-level path (e.g. `/guide/`).
///
/// One entry per top-level directory or file under the scanned root. Keys are
/// stored in a `BTreeMap` so serialized output is deterministic; the item
/// sequences inside each entry keep directory-listing order.
pub type SidebarMap = BTreeMap<String, Vec<SidebarItem>>;

/// Catalog data keyed by index-page path (`index`, `guide/index`, ...).
pub type CatalogMap = BTreeMap<String, Vec<CatalogItem>>;

/// A single sidebar entry: either a page leaf or a collapsible section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// Display text, numeric order prefix stripped.
    pub text: String,
    /// Page link for leaves, root-relative with the `.md` suffix removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Set to `true` on sections that ended up with children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,
    /// Initial collapse state. Never set during construction; carried because
    /// the renderer accepts it and hand-written sidebar fragments may use it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Child entries in directory-listing order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,
}

impl SidebarItem {
    /// A page leaf: `link` set, no children.
    pub fn page(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            collapsible: None,
            collapsed: None,
            items: vec![],
        }
    }

    /// A directory section. Marked collapsible only when it has children; a
    /// depth-capped directory yields a bare text node.
    pub fn section(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        let collapsible = (!items.is_empty()).then_some(true);
        Self {
            text: text.into(),
            link: None,
            collapsible,
            collapsed: None,
            items,
        }
    }
}

/// A top-navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display text, numeric order prefix stripped.
    pub text: String,
    /// Link target. Directories keep a trailing slash; removed when the node
    /// becomes a container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Route prefix the renderer uses to highlight the active section no
    /// matter which descendant page is open.
    #[serde(
        default,
        rename = "activeMatch",
        skip_serializing_if = "Option::is_none"
    )]
    pub active_match: Option<String>,
    /// Dropdown children in directory-listing order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

impl NavItem {
    /// A plain link entry with no `activeMatch` and no children.
    pub fn leaf(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            active_match: None,
            items: vec![],
        }
    }
}

/// One page reference inside a catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Root-relative page path with the `.md` suffix removed.
    pub path: String,
    /// Display title: the file stem, kept verbatim.
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_leaf_has_link_and_no_items() {
        let item = SidebarItem::page("one", "/a/one");
        assert_eq!(item.link.as_deref(), Some("/a/one"));
        assert!(item.items.is_empty());
        assert_eq!(item.collapsible, None);
    }

    #[test]
    fn section_with_children_is_collapsible() {
        let item = SidebarItem::section("guide", vec![SidebarItem::page("one", "/guide/one")]);
        assert_eq!(item.collapsible, Some(true));
        assert_eq!(item.link, None);
    }

    #[test]
    fn empty_section_is_not_collapsible() {
        let item = SidebarItem::section("guide", vec![]);
        assert_eq!(item.collapsible, None);
        assert!(item.items.is_empty());
    }

    #[test]
    fn sidebar_leaf_serializes_without_absent_fields() {
        let json = serde_json::to_value(SidebarItem::page("one", "/a/one")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "text": "one", "link": "/a/one" })
        );
    }

    #[test]
    fn nav_item_serializes_active_match_in_camel_case() {
        let item = NavItem {
            text: "guide".to_string(),
            link: Some("/guide/".to_string()),
            active_match: Some("/guide/".to_string()),
            items: vec![],
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "guide",
                "link": "/guide/",
                "activeMatch": "/guide/"
            })
        );
    }

    #[test]
    fn nav_item_deserializes_sparse_toml() {
        let item: NavItem = toml::from_str("text = \"Home\"\nlink = \"/\"").unwrap();
        assert_eq!(item, NavItem::leaf("Home", "/"));
    }
}
