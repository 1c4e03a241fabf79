// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle coordination.
//!
//! The `Coordinator` owns the ordered set of active toasts. It is the only
//! place that adds or removes them: `show` appends, `hide` removes, and a
//! toast that finishes its exit animation is hidden on the next tick.
//! Entries are never reordered.

use super::handle::Handle;
use super::notification::{Kind, Notification, ToastId};
use super::toast::{Phase, Timing, Toast, Transition};
use crate::config::{ANIMATION_TICK_MS, IDLE_TICK_MS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use iced::widget::{text, Column, Container};
use iced::{alignment, time, Element, Length, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user closed a toast.
    Dismiss(ToastId),
    /// Timer tick carrying the current time.
    Tick(Instant),
}

/// Events reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A toast finished its exit animation and left the active set.
    Closed(ToastId),
}

/// Shared state behind the coordinator and its handles.
#[derive(Debug, Default)]
pub(super) struct Registry {
    toasts: Vec<Toast>,
    timing: Timing,
    /// Time of the last tick, used for rendering.
    last_tick: Option<Instant>,
}

impl Registry {
    pub(super) fn show(&mut self, notification: Notification, now: Instant) -> ToastId {
        let id = ToastId::next();
        match notification.kind() {
            Kind::Error => tracing::warn!(%id, message = notification.message(), "error toast shown"),
            Kind::Warning => {
                tracing::warn!(%id, message = notification.message(), "warning toast shown");
            }
            Kind::Success | Kind::Info => {
                tracing::debug!(%id, kind = ?notification.kind(), "toast shown");
            }
        }
        self.toasts
            .push(Toast::new(id, notification, &self.timing, now));
        id
    }

    pub(super) fn hide(&mut self, id: ToastId) -> bool {
        let Some(pos) = self.toasts.iter().position(|t| t.id() == id) else {
            return false;
        };
        // `Vec::remove` shifts the tail, keeping insertion order
        let mut toast = self.toasts.remove(pos);
        toast.dispose();
        tracing::debug!(%id, "toast hidden");
        true
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id() == id)
    }

    fn tick(&mut self, now: Instant) -> Vec<Event> {
        self.last_tick = Some(now);

        let finished: Vec<ToastId> = self
            .toasts
            .iter_mut()
            .filter_map(|toast| match toast.tick(now) {
                Some(Transition::Removed) => Some(toast.id()),
                _ => None,
            })
            .collect();

        for id in &finished {
            self.hide(*id);
        }

        finished.into_iter().map(Event::Closed).collect()
    }
}

/// Owner of the active notification set.
///
/// The host keeps one coordinator in its state, forwards [`Message`]s to
/// [`Coordinator::update`] and renders [`Coordinator::view`] on top of its
/// content. Code that only needs to show or hide toasts can hold a
/// [`Handle`] instead.
#[derive(Debug, Default)]
pub struct Coordinator {
    registry: Rc<RefCell<Registry>>,
}

impl Coordinator {
    /// Creates an empty coordinator with default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty coordinator with the given timings.
    #[must_use]
    pub fn with_timing(timing: Timing) -> Self {
        let coordinator = Self::new();
        coordinator.set_timing(timing);
        coordinator
    }

    /// Replaces the timings applied to toasts shown from now on.
    pub fn set_timing(&self, timing: Timing) {
        self.registry.borrow_mut().timing = timing;
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.registry.borrow().timing
    }

    /// Returns a handle that can show and hide toasts while this coordinator lives.
    #[must_use]
    pub fn handle(&self) -> Handle {
        Handle::new(Rc::downgrade(&self.registry))
    }

    /// Shows a notification and returns its freshly assigned id.
    pub fn show(&mut self, notification: Notification) -> ToastId {
        self.show_at(notification, Instant::now())
    }

    /// Same as [`show`](Self::show) with an explicit creation time.
    pub fn show_at(&mut self, notification: Notification, now: Instant) -> ToastId {
        self.registry.borrow_mut().show(notification, now)
    }

    /// Removes a toast immediately. Unknown ids are ignored.
    ///
    /// Returns `true` if a toast was removed.
    pub fn hide(&mut self, id: ToastId) -> bool {
        self.registry.borrow_mut().hide(id)
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: Message) -> Vec<Event> {
        self.update_at(message, Instant::now())
    }

    /// Same as [`update`](Self::update); `now` is used for user actions.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Vec<Event> {
        let mut registry = self.registry.borrow_mut();
        match message {
            Message::Dismiss(id) => {
                if let Some(toast) = registry.get_mut(id) {
                    if toast.dismiss_at(now) {
                        tracing::debug!(%id, "toast dismissed");
                    }
                }
                Vec::new()
            }
            Message::Tick(tick) => registry.tick(tick),
        }
    }

    /// Removes every toast.
    pub fn clear(&mut self) {
        let mut registry = self.registry.borrow_mut();
        for toast in &mut registry.toasts {
            toast.dispose();
        }
        registry.toasts.clear();
    }

    /// Ids of the active toasts, in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.registry.borrow().toasts.iter().map(Toast::id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.borrow().toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.borrow().toasts.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.phase(id).is_some()
    }

    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<Phase> {
        self.registry
            .borrow()
            .toasts
            .iter()
            .find(|t| t.id() == id)
            .map(Toast::phase)
    }

    #[must_use]
    pub fn notification(&self, id: ToastId) -> Option<Notification> {
        self.registry
            .borrow()
            .toasts
            .iter()
            .find(|t| t.id() == id)
            .map(|t| t.notification().clone())
    }

    /// Ticks quickly while a toast animates, slowly while only auto-dismiss
    /// timers are pending, and not at all otherwise.
    pub fn subscription(&self) -> Subscription<Message> {
        let registry = self.registry.borrow();
        if registry.toasts.iter().any(Toast::is_animating) {
            time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
        } else if registry.toasts.iter().any(Toast::has_pending_timer) {
            time::every(Duration::from_millis(IDLE_TICK_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Renders the active toasts stacked in the bottom-right corner.
    pub fn view<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let registry = self.registry.borrow();
        let now = registry.last_tick.unwrap_or_else(Instant::now);

        let toasts: Vec<Element<'a, Message>> = registry
            .toasts
            .iter()
            .filter(|t| t.phase() != Phase::Removed)
            .map(|t| t.view(i18n, now))
            .collect();

        if toasts.is_empty() {
            // Empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}
