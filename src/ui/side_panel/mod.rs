// SPDX-License-Identifier: MPL-2.0
//! Slide-in navigation panel with a tree of entries.
//!
//! The panel covers the page with a dimmed backdrop and slides in from the
//! right edge. Pressing a branch expands it in place; pressing a leaf reports
//! [`Event::Selected`] and closes the panel. The backdrop, the close button
//! and the Escape key close it as well.
//!
//! While mounted the panel asks the host to lock background scrolling (see
//! [`SidePanel::locks_scroll`] and [`crate::ui::widgets::scroll_lock`]).

pub mod entry;
pub mod presence;

pub use entry::Entry;
pub use presence::{Presence, Stage, Timing};

use crate::config::{PanelConfig, ANIMATION_TICK_MS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, mouse_area, opaque, scrollable, text, tooltip, Column, Container, Row, Stack, Text,
};
use iced::{alignment, event, keyboard, time, window, Element, Length, Subscription};
use std::collections::HashSet;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum Message {
    EntryPressed(String),
    BackdropPressed,
    ClosePressed,
    EscapePressed,
    Tick(Instant),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A leaf entry was chosen. The panel is already closing.
    Selected { id: String, href: Option<String> },
    /// The user dismissed the panel without choosing anything.
    Closed,
}

#[derive(Debug, Clone, Default)]
pub struct SidePanel {
    entries: Vec<Entry>,
    title: Option<String>,
    expanded: HashSet<String>,
    presence: Presence,
    last_tick: Option<Instant>,
}

impl SidePanel {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Applies the `[panel]` config section: title and delays.
    #[must_use]
    pub fn with_config(mut self, config: &PanelConfig) -> Self {
        self.title.clone_from(&config.title);
        self.presence.set_timing(Timing::from_config(config));
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.expanded.retain(|id| entry::find(&entries, id).is_some());
        self.entries = entries;
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.presence.stage()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.presence.is_open()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.presence.is_mounted()
    }

    /// Whether the host should stop background scrolling.
    #[must_use]
    pub fn locks_scroll(&self) -> bool {
        self.presence.is_mounted()
    }

    pub fn open(&mut self) {
        self.open_at(Instant::now());
    }

    pub fn open_at(&mut self, now: Instant) {
        if self.presence.open_at(now) {
            tracing::debug!("side panel opening");
        }
    }

    pub fn close(&mut self) {
        self.close_at(Instant::now());
    }

    pub fn close_at(&mut self, now: Instant) {
        if self.presence.close_at(now) {
            tracing::debug!("side panel closing");
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_owned());
        }
    }

    pub fn expand(&mut self, id: &str) {
        if !self.expanded.contains(id) {
            self.expanded.insert(id.to_owned());
        }
    }

    pub fn collapse(&mut self, id: &str) {
        self.expanded.remove(id);
    }

    /// Process a panel message and return the corresponding event.
    pub fn update(&mut self, message: Message) -> Event {
        let now = match &message {
            Message::Tick(now) => *now,
            _ => Instant::now(),
        };
        self.update_at(message, now)
    }

    pub fn update_at(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::EntryPressed(id) => {
                let Some(entry) = entry::find(&self.entries, &id) else {
                    return Event::None;
                };
                if entry.is_leaf() {
                    let href = entry.href.clone();
                    tracing::debug!(entry = %id, "side panel entry selected");
                    self.close_at(now);
                    Event::Selected { id, href }
                } else {
                    self.toggle(&id);
                    Event::None
                }
            }
            Message::BackdropPressed | Message::ClosePressed | Message::EscapePressed => {
                if self.presence.close_at(now) {
                    tracing::debug!("side panel dismissed");
                    Event::Closed
                } else {
                    Event::None
                }
            }
            Message::Tick(tick) => {
                self.last_tick = Some(tick);
                self.presence.tick(tick);
                Event::None
            }
        }
    }

    /// Listens for Escape while open and ticks while a transition is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        let escape = if self.is_open() {
            event::listen_with(escape_pressed)
        } else {
            Subscription::none()
        };

        let ticks = if self.presence.is_animating() {
            time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([escape, ticks])
    }

    /// Renders the backdrop and the panel, or nothing while unmounted.
    pub fn view<'a>(&'a self, i18n: &I18n) -> Option<Element<'a, Message>> {
        if !self.is_mounted() {
            return None;
        }

        let now = self.last_tick.unwrap_or_else(Instant::now);
        let visibility = self.presence.visibility(now);

        let backdrop = mouse_area(
            Container::new(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop(visibility)),
        )
        .on_press(Message::BackdropPressed);

        let title = self
            .title
            .clone()
            .unwrap_or_else(|| i18n.tr("panel-title"));

        let close_button = tooltip(
            button(Text::new("✕").size(sizing::ICON_SM))
                .on_press(Message::ClosePressed)
                .padding(spacing::XXS)
                .style(styles::button::ghost),
            Text::new(i18n.tr("panel-close")).size(typography::CAPTION),
            tooltip::Position::Bottom,
        );

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .padding(spacing::MD)
            .push(
                Text::new(title)
                    .size(typography::TITLE_MD)
                    .width(Length::Fill),
            )
            .push(close_button);

        let separator = Container::new(text(""))
            .width(Length::Fill)
            .height(Length::Fixed(1.0))
            .style(styles::container::separator);

        let mut rows = Vec::new();
        for entry in &self.entries {
            self.push_entry(entry, 0, &mut rows);
        }
        let list = scrollable(Column::with_children(rows).padding([spacing::XS, 0.0]))
            .height(Length::Fill);

        let panel = Container::new(
            Column::new()
                .push(header)
                .push(separator)
                .push(list)
                .width(Length::Fixed(sizing::PANEL_WIDTH)),
        )
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel);

        // The slot grows with visibility and clips the panel, which reads as
        // a slide in from the right edge.
        let slot = Container::new(opaque(panel))
            .width(Length::Fixed(sizing::PANEL_WIDTH * visibility))
            .height(Length::Fill)
            .clip(true);

        let layer = Container::new(slot)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right);

        Some(Stack::new().push(backdrop).push(layer).into())
    }

    fn push_entry<'a>(
        &'a self,
        entry: &'a Entry,
        depth: u16,
        rows: &mut Vec<Element<'a, Message>>,
    ) {
        let expanded = self.is_expanded(&entry.id);
        let indent = spacing::MD + f32::from(depth) * sizing::PANEL_INDENT;

        let mut row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);
        if let Some(icon) = &entry.icon {
            row = row.push(Text::new(icon.as_str()).size(sizing::ICON_SM));
        }
        row = row.push(
            Text::new(entry.label.as_str())
                .size(typography::BODY)
                .width(Length::Fill),
        );
        if !entry.is_leaf() {
            row = row.push(Text::new(if expanded { "▾" } else { "▸" }).size(typography::BODY));
        }

        rows.push(
            button(row)
                .on_press(Message::EntryPressed(entry.id.clone()))
                .width(Length::Fill)
                .padding(iced::Padding {
                    top: spacing::XS,
                    right: spacing::MD,
                    bottom: spacing::XS,
                    left: indent,
                })
                .style(styles::button::menu_entry)
                .into(),
        );

        if expanded {
            for child in &entry.children {
                self.push_entry(child, depth + 1, rows);
            }
        }
    }
}

fn escape_pressed(
    event: iced::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    }
}
