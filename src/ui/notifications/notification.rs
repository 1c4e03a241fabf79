// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` builder, the `Kind` enum and the
//! `ToastId` assigned by the coordinator when a notification is shown.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Unique identifier for a shown notification.
///
/// Ids come from a process-wide counter, so they are unique among active
/// toasts but carry no meaning across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Kind of notification, drives the accent color and the log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Operation completed successfully (green).
    Success,
    /// Operation failed (red).
    Error,
    /// Something needs attention but nothing failed (orange).
    Warning,
    /// Neutral information (blue).
    #[default]
    Info,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
        }
    }

    /// Short glyph shown in front of the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Kind::Success => "✔",
            Kind::Error => "✖",
            Kind::Warning => "⚠",
            Kind::Info => "ℹ",
        }
    }
}

/// A notification to be shown through the coordinator.
///
/// This is the record without its id: the coordinator assigns one in `show`.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    kind: Kind,
    message: String,
    description: Option<String>,
    /// Explicit auto-dismiss duration; `None` uses the coordinator default.
    duration: Option<Duration>,
    dismissible: bool,
}

impl Notification {
    /// Creates a dismissible notification using the default duration.
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            description: None,
            duration: None,
            dismissible: true,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    /// Adds a secondary line under the message.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the auto-dismiss duration. `Duration::ZERO` disables auto-dismiss.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Disables auto-dismiss; the toast stays until dismissed or hidden.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    /// Sets whether the user can close the toast.
    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    /// Returns the explicit duration, if one was set.
    #[must_use]
    pub fn custom_duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns the duration to apply, using `default` when none was set.
    #[must_use]
    pub fn resolved_duration(&self, default: Duration) -> Duration {
        self.duration.unwrap_or(default)
    }
}
