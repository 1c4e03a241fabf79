// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` builder, `Kind` and `ToastId`
//! - [`toast`] - `Toast` display unit with its visibility state machine
//! - [`coordinator`] - `Coordinator` owning the ordered set of active toasts
//! - [`handle`] - `Handle` for showing and hiding toasts without owning the coordinator
//!
//! # Usage
//!
//! ```ignore
//! use iced_parts::ui::notifications::{Coordinator, Event, Notification};
//!
//! // Create a coordinator
//! let mut toasts = Coordinator::new();
//!
//! // Show a notification
//! let id = toasts.show(Notification::success("Saved").description("All changes stored"));
//!
//! // In update, forward messages and react to events
//! for event in toasts.update(message) {
//!     match event {
//!         Event::Closed(id) => { /* ... */ }
//!     }
//! }
//!
//! // In your view function, stack the toasts above the content
//! let overlay = toasts.view(&i18n).map(Message::Toast);
//! ```
//!
//! # Design Considerations
//!
//! - Default duration: 3s, `Duration::ZERO` for manual dismiss only
//! - Enter delay: 10ms, exit animation: 300ms
//! - Position: bottom-right corner, oldest on top

pub mod coordinator;
pub mod handle;
pub mod notification;
pub mod toast;

pub use coordinator::{Coordinator, Event, Message as NotificationMessage};
pub use handle::Handle;
pub use notification::{Kind, Notification, ToastId};
pub use toast::{Phase, Timing, Toast, Transition};
