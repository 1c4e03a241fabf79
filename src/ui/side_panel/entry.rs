// SPDX-License-Identifier: MPL-2.0
//! Navigation entries shown by the side panel.
//!
//! Entries form a tree: an entry without children is a leaf and selects a
//! destination, an entry with children is a branch that expands in place.
//! The tree can be built in code or loaded from TOML:
//!
//! ```
//! use iced_parts::ui::side_panel::entry;
//!
//! let entries = entry::from_toml(r#"
//!     [[entries]]
//!     id = "home"
//!     label = "Home"
//!     href = "/"
//!
//!     [[entries]]
//!     id = "settings"
//!     label = "Settings"
//!
//!     [[entries.children]]
//!     id = "profile"
//!     label = "Profile"
//! "#).unwrap();
//!
//! assert!(entries[0].is_leaf());
//! assert_eq!(entry::find(&entries, "profile").map(|e| e.label.as_str()), Some("Profile"));
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub label: String,
    /// Glyph rendered before the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Destination reported when the entry is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Entry>,
}

impl Entry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            href: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: Entry) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first search for `id` in this entry and its descendants.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Entry> {
        if self.id == id {
            return Some(self);
        }
        find(&self.children, id)
    }
}

/// Depth-first search for `id` across a list of entries.
#[must_use]
pub fn find<'a>(entries: &'a [Entry], id: &str) -> Option<&'a Entry> {
    entries.iter().find_map(|entry| entry.find(id))
}

#[derive(Debug, Deserialize, Serialize)]
struct Document {
    #[serde(default)]
    entries: Vec<Entry>,
}

/// Parses an `[[entries]]` TOML document.
pub fn from_toml(source: &str) -> Result<Vec<Entry>> {
    let document: Document = toml::from_str(source)?;
    Ok(document.entries)
}

/// Serializes entries as an `[[entries]]` TOML document.
pub fn to_toml(entries: &[Entry]) -> Result<String> {
    let document = Document {
        entries: entries.to_vec(),
    };
    Ok(toml::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn tree() -> Vec<Entry> {
        vec![
            Entry::new("home", "Home").icon("⌂").href("/"),
            Entry::new("settings", "Settings")
                .child(Entry::new("profile", "Profile").href("/settings/profile"))
                .child(
                    Entry::new("advanced", "Advanced")
                        .child(Entry::new("danger", "Danger zone").href("/settings/danger")),
                ),
        ]
    }

    #[test]
    fn leaf_and_branch_detection() {
        let entries = tree();
        assert!(entries[0].is_leaf());
        assert!(!entries[1].is_leaf());
    }

    #[test]
    fn find_walks_nested_children() {
        let entries = tree();
        let danger = find(&entries, "danger").expect("nested entry");
        assert_eq!(danger.href.as_deref(), Some("/settings/danger"));
        assert!(find(&entries, "missing").is_none());
    }

    #[test]
    fn toml_round_trip_keeps_tree() {
        let entries = tree();
        let source = to_toml(&entries).expect("serialize");
        assert_eq!(from_toml(&source).expect("parse"), entries);
    }

    #[test]
    fn empty_document_has_no_entries() {
        assert!(from_toml("").expect("parse").is_empty());
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let result = from_toml("[[entries]]\nid = 3");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
