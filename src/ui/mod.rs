// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: the
//! host owns each component's state, forwards its messages to `update`, and
//! reacts to the events `update` returns.
//!
//! # Components
//!
//! - [`field`] - Labeled text input with clear and reveal actions
//! - [`side_panel`] - Slide-in navigation panel with expandable entries
//! - [`notifications`] - Toast notifications and their coordinator
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Deadline timers and animation delays
//! - [`widgets`] - Custom Iced widgets (scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod field;
pub mod notifications;
pub mod side_panel;
pub mod state;
pub mod styles;
pub mod widgets;
