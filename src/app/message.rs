// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the gallery.

use crate::ui::field;
use crate::ui::notifications::{self, Kind};
use crate::ui::side_panel;

/// Which gallery field a field message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSlot {
    Email,
    Password,
    Amount,
    Search,
    Disabled,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::NotificationMessage),
    Panel(side_panel::Message),
    Field(FieldSlot, field::Message),
    ShowToast(Kind),
    ShowSticky,
    ClearToasts,
    OpenMenu,
    NextLanguage,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional `settings.toml` to load instead of the user config.
    pub config_path: Option<String>,
    /// Optional TOML file with `[[entries]]` for the side panel.
    pub menu_path: Option<String>,
}
