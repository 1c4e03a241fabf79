// SPDX-License-Identifier: MPL-2.0
//! Toast display unit: one rendered notification and its visibility lifecycle.
//!
//! Each toast walks `Entering -> Visible -> Exiting -> Removed`. The enter
//! step only gives the renderer a stable first frame; the exit step keeps the
//! toast on screen while it fades out. Every timer is owned by the toast, so
//! dropping or disposing it cancels whatever was pending.

use super::coordinator::Message;
use super::notification::{Notification, ToastId};
use crate::config::{
    NotificationsConfig, DEFAULT_TOAST_DURATION_MS, DEFAULT_TOAST_ENTER_DELAY_MS,
    DEFAULT_TOAST_EXIT_DELAY_MS, MAX_TOAST_DURATION_MS,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{AnimationDelay, Timer};
use crate::ui::styles;
use iced::widget::{button, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Visibility phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted but not yet shown; the enter timer is pending.
    Entering,
    /// Fully shown.
    Visible,
    /// Fading out; the exit timer is pending.
    Exiting,
    /// Done. The coordinator drops the toast.
    Removed,
}

/// Phase change reported by [`Toast::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Shown,
    Exiting,
    Removed,
}

/// Delays applied to every toast of a coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Auto-dismiss duration for notifications without an explicit one.
    pub default_duration: Duration,
    pub enter: Duration,
    pub exit: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            default_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            enter: Duration::from_millis(DEFAULT_TOAST_ENTER_DELAY_MS),
            exit: Duration::from_millis(DEFAULT_TOAST_EXIT_DELAY_MS),
        }
    }
}

impl Timing {
    /// Builds timings from the `[notifications]` config section.
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        let duration_ms = config
            .default_duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .min(MAX_TOAST_DURATION_MS);
        Self {
            default_duration: Duration::from_millis(duration_ms),
            enter: AnimationDelay::from_config(config.enter_delay_ms, DEFAULT_TOAST_ENTER_DELAY_MS)
                .into(),
            exit: AnimationDelay::from_config(config.exit_delay_ms, DEFAULT_TOAST_EXIT_DELAY_MS)
                .into(),
        }
    }
}

/// A mounted notification with its own timers.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    notification: Notification,
    phase: Phase,
    duration: Duration,
    exit_delay: Duration,
    created_at: Instant,
    enter: Timer,
    expiry: Timer,
    exit: Timer,
}

impl Toast {
    /// Mounts a toast in `Entering` and arms its enter and auto-dismiss timers.
    pub fn new(id: ToastId, notification: Notification, timing: &Timing, now: Instant) -> Self {
        let duration = notification.resolved_duration(timing.default_duration);
        let expiry = if duration.is_zero() {
            Timer::idle()
        } else {
            Timer::armed(now, duration)
        };

        Self {
            id,
            notification,
            phase: Phase::Entering,
            duration,
            exit_delay: timing.exit,
            created_at: now,
            enter: Timer::armed(now, timing.enter),
            expiry,
            exit: Timer::idle(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Effective auto-dismiss duration; zero means none.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Handles the user's close action.
    ///
    /// Ignored for non-dismissible toasts and for toasts already leaving.
    /// Returns `true` if the toast started exiting.
    pub fn dismiss_at(&mut self, now: Instant) -> bool {
        if !self.notification.is_dismissible() {
            return false;
        }
        self.begin_exit(now)
    }

    /// Starts the exit animation regardless of `dismissible`.
    pub fn begin_exit(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Entering | Phase::Visible => {
                self.enter.cancel();
                self.expiry.cancel();
                self.exit.arm(now, self.exit_delay);
                self.phase = Phase::Exiting;
                true
            }
            Phase::Exiting | Phase::Removed => false,
        }
    }

    /// Advances the timers to `now` and returns the last transition taken.
    pub fn tick(&mut self, now: Instant) -> Option<Transition> {
        let mut transition = None;

        if self.enter.fire(now) && self.phase == Phase::Entering {
            self.phase = Phase::Visible;
            transition = Some(Transition::Shown);
        }

        if self.expiry.fire(now) && self.begin_exit(now) {
            transition = Some(Transition::Exiting);
        }

        if self.exit.fire(now) && self.phase == Phase::Exiting {
            self.phase = Phase::Removed;
            transition = Some(Transition::Removed);
        }

        transition
    }

    /// Cancels every pending timer and marks the toast removed, silently.
    pub fn dispose(&mut self) {
        self.enter.cancel();
        self.expiry.cancel();
        self.exit.cancel();
        self.phase = Phase::Removed;
    }

    /// Whether an enter or exit animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.enter.is_armed() || self.exit.is_armed()
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.is_animating() || self.expiry.is_armed()
    }

    /// Render opacity for the current phase.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Entering | Phase::Removed => 0.0,
            Phase::Visible => 1.0,
            Phase::Exiting => 1.0 - self.exit.progress(now).unwrap_or(1.0),
        }
    }

    /// Renders the toast card: `[glyph] [message / description] [close]`.
    pub fn view<'a>(&self, i18n: &I18n, now: Instant) -> Element<'a, Message> {
        let kind = self.notification.kind();
        let accent = kind.color();
        let alpha = self.opacity(now);

        let glyph = Text::new(kind.glyph())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color { a: alpha, ..accent }),
            });

        let mut body = Column::new().spacing(spacing::XXS).push(
            Text::new(self.notification.message().to_string())
                .size(typography::BODY)
                .style(move |theme: &Theme| faded_text(theme, alpha)),
        );
        if let Some(description) = self.notification.description_text() {
            body = body.push(
                Text::new(description.to_string())
                    .size(typography::BODY_SM)
                    .style(move |theme: &Theme| faded_text(theme, alpha * 0.8)),
            );
        }

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(Container::new(body).width(Length::Fill));

        if self.notification.is_dismissible() {
            let close = button(Text::new("✕").size(sizing::ICON_SM))
                .on_press(Message::Dismiss(self.id))
                .padding(spacing::XXS)
                .style(styles::button::ghost);
            content = content.push(tooltip(
                close,
                Text::new(i18n.tr("toast-close")).size(typography::CAPTION),
                tooltip::Position::Left,
            ));
        }

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| styles::container::toast(theme, accent, alpha))
            .into()
    }
}

fn faded_text(theme: &Theme, alpha: f32) -> text::Style {
    let color = theme.palette().text;
    text::Style {
        color: Some(Color {
            a: color.a * alpha,
            ..color
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn mount(notification: Notification, now: Instant) -> Toast {
        Toast::new(ToastId::next(), notification, &Timing::default(), now)
    }

    #[test]
    fn starts_entering_then_becomes_visible() {
        let start = Instant::now();
        let mut toast = mount(Notification::info("hi"), start);
        assert_eq!(toast.phase(), Phase::Entering);
        assert!(toast.is_animating());

        assert_eq!(toast.tick(start + 10 * MS), Some(Transition::Shown));
        assert_eq!(toast.phase(), Phase::Visible);
        assert!(!toast.is_animating());
    }

    #[test]
    fn auto_dismiss_starts_exit_at_duration() {
        let start = Instant::now();
        let mut toast = mount(Notification::info("hi").duration(1000 * MS), start);
        toast.tick(start + 10 * MS);

        assert_eq!(toast.tick(start + 999 * MS), None);
        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.tick(start + 1000 * MS), Some(Transition::Exiting));
        assert_eq!(toast.phase(), Phase::Exiting);
    }

    #[test]
    fn exit_completes_after_exit_delay() {
        let start = Instant::now();
        let mut toast = mount(Notification::info("hi").persistent(), start);
        toast.tick(start + 10 * MS);

        assert!(toast.dismiss_at(start + 100 * MS));
        assert_eq!(toast.tick(start + 399 * MS), None);
        assert_eq!(toast.tick(start + 400 * MS), Some(Transition::Removed));
        assert_eq!(toast.phase(), Phase::Removed);
        assert!(!toast.has_pending_timer());
    }

    #[test]
    fn zero_duration_stays_visible() {
        let start = Instant::now();
        let mut toast = mount(Notification::success("Saved").persistent(), start);
        toast.tick(start + 10 * MS);

        assert_eq!(toast.tick(start + Duration::from_secs(3600)), None);
        assert_eq!(toast.phase(), Phase::Visible);
        assert!(!toast.has_pending_timer());
    }

    #[test]
    fn dismiss_while_exiting_is_ignored() {
        let start = Instant::now();
        let mut toast = mount(Notification::info("hi"), start);
        assert!(toast.dismiss_at(start));
        assert!(!toast.dismiss_at(start + 200 * MS));

        // The first dismissal's window still applies
        assert_eq!(toast.tick(start + 300 * MS), Some(Transition::Removed));
    }

    #[test]
    fn dismiss_during_entering_goes_straight_to_exiting() {
        let start = Instant::now();
        let mut toast = mount(Notification::info("hi"), start);
        assert!(toast.dismiss_at(start + 1 * MS));
        assert_eq!(toast.phase(), Phase::Exiting);

        // The cancelled enter timer must not resurrect the toast
        assert_eq!(toast.tick(start + 10 * MS), None);
        assert_eq!(toast.phase(), Phase::Exiting);
    }

    #[test]
    fn non_dismissible_ignores_user_close() {
        let start = Instant::now();
        let mut toast = mount(Notification::info("hi").dismissible(false), start);
        assert!(!toast.dismiss_at(start));
        assert_eq!(toast.phase(), Phase::Entering);
        assert!(toast.begin_exit(start));
    }

    #[test]
    fn dismissal_before_expiry_cancels_expiry() {
        let start = Instant::now();
        let mut toast = mount(Notification::info("hi").duration(500 * MS), start);
        toast.tick(start + 10 * MS);
        toast.dismiss_at(start + 100 * MS);

        assert_eq!(toast.tick(start + 400 * MS), Some(Transition::Removed));
        assert_eq!(toast.tick(start + 500 * MS), None);
    }

    #[test]
    fn dispose_cancels_everything() {
        let start = Instant::now();
        let mut toast = mount(Notification::info("hi"), start);
        toast.dismiss_at(start);
        toast.dispose();

        assert_eq!(toast.phase(), Phase::Removed);
        assert!(!toast.has_pending_timer());
        assert_eq!(toast.tick(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn short_duration_collapses_into_one_tick() {
        let start = Instant::now();
        let timing = Timing {
            exit: Duration::ZERO,
            ..Timing::default()
        };
        let mut toast = Toast::new(
            ToastId::next(),
            Notification::info("blink").duration(5 * MS),
            &timing,
            start,
        );
        assert_eq!(toast.tick(start + 20 * MS), Some(Transition::Removed));
    }

    #[test]
    fn opacity_follows_phase() {
        let start = Instant::now();
        let mut toast = mount(Notification::info("hi").persistent(), start);
        assert_eq!(toast.opacity(start), 0.0);
        toast.tick(start + 10 * MS);
        assert_eq!(toast.opacity(start + 10 * MS), 1.0);
        toast.dismiss_at(start + 100 * MS);
        let mid = toast.opacity(start + 250 * MS);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn timing_from_config_clamps_values() {
        let config = NotificationsConfig {
            default_duration_ms: Some(u64::MAX),
            enter_delay_ms: None,
            exit_delay_ms: Some(60_000),
        };
        let timing = Timing::from_config(&config);
        assert_eq!(
            timing.default_duration,
            Duration::from_millis(MAX_TOAST_DURATION_MS)
        );
        assert_eq!(
            timing.enter,
            Duration::from_millis(DEFAULT_TOAST_ENTER_DELAY_MS)
        );
        assert_eq!(timing.exit, Duration::from_millis(5000));
    }

    #[test]
    fn view_renders_for_every_kind() {
        let i18n = I18n::default();
        let now = Instant::now();
        for notification in [
            Notification::success("a").description("details"),
            Notification::error("b"),
            Notification::warning("c").dismissible(false),
            Notification::info("d"),
        ] {
            let toast = mount(notification, now);
            let _element = toast.view(&i18n, now);
        }
    }
}
