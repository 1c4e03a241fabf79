// SPDX-License-Identifier: MPL-2.0
//! Side panel entries shown by the gallery.

use crate::error::Result;
use crate::ui::side_panel::{entry, Entry};
use std::fs;
use std::path::Path;

/// Built-in navigation tree used when no menu file is given.
pub fn default_entries() -> Vec<Entry> {
    vec![
        Entry::new("home", "Home").icon("⌂").href("/"),
        Entry::new("inbox", "Inbox").icon("✉").href("/inbox"),
        Entry::new("settings", "Settings")
            .icon("⚙")
            .child(Entry::new("profile", "Profile").href("/settings/profile"))
            .child(Entry::new("notifications", "Notifications").href("/settings/notifications"))
            .child(
                Entry::new("advanced", "Advanced")
                    .child(Entry::new("export", "Export data").href("/settings/export"))
                    .child(Entry::new("danger", "Danger zone").href("/settings/danger")),
            ),
        Entry::new("help", "Help").icon("?").href("/help"),
    ]
}

/// Reads `[[entries]]` from a TOML file.
pub fn load_from_path(path: &Path) -> Result<Vec<Entry>> {
    let source = fs::read_to_string(path)?;
    entry::from_toml(&source)
}

/// Entries from `path` when given and readable, the built-in tree otherwise.
pub fn resolve(path: Option<&Path>) -> Vec<Entry> {
    let Some(path) = path else {
        return default_entries();
    };
    match load_from_path(path) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to built-in menu");
            default_entries()
        }
    }
}
