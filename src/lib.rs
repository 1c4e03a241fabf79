// SPDX-License-Identifier: MPL-2.0
//! `iced_parts` is a small kit of Iced components: a text field, a slide-in
//! navigation panel and toast notifications with a coordinator.
//!
//! It also ships a gallery application that exercises every component,
//! localized with Fluent and configured through a `settings.toml` file.

#![doc(html_root_url = "https://docs.rs/iced_parts/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
