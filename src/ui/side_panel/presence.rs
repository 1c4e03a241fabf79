// SPDX-License-Identifier: MPL-2.0
//! Mount/unmount lifecycle of the side panel.
//!
//! The panel stays mounted while it slides out so the close animation can
//! play; it is only unmounted once the unmount timer fires. Opening again
//! before that cancels the pending unmount.

use crate::config::{PanelConfig, DEFAULT_PANEL_ENTER_DELAY_MS, DEFAULT_PANEL_UNMOUNT_DELAY_MS};
use crate::ui::state::{AnimationDelay, Timer};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Unmounted,
    /// Mounted, waiting one enter delay before sliding in.
    Mounting,
    Shown,
    /// Sliding out; unmounts when the timer fires.
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub enter: Duration,
    pub unmount: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(DEFAULT_PANEL_ENTER_DELAY_MS),
            unmount: Duration::from_millis(DEFAULT_PANEL_UNMOUNT_DELAY_MS),
        }
    }
}

impl Timing {
    /// Builds timings from the `[panel]` config section.
    #[must_use]
    pub fn from_config(config: &PanelConfig) -> Self {
        Self {
            enter: AnimationDelay::from_config(config.enter_delay_ms, DEFAULT_PANEL_ENTER_DELAY_MS)
                .into(),
            unmount: AnimationDelay::from_config(
                config.unmount_delay_ms,
                DEFAULT_PANEL_UNMOUNT_DELAY_MS,
            )
            .into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Presence {
    stage: Stage,
    timing: Timing,
    enter: Timer,
    unmount: Timer,
}

impl Presence {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    /// Open from the caller's point of view: mounting or shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.stage, Stage::Mounting | Stage::Shown)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.stage != Stage::Unmounted
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.enter.is_armed() || self.unmount.is_armed()
    }

    /// Returns `true` if this call changed the panel from closed to open.
    pub fn open_at(&mut self, now: Instant) -> bool {
        match self.stage {
            Stage::Mounting | Stage::Shown => false,
            Stage::Unmounted | Stage::Closing => {
                self.unmount.cancel();
                self.enter.arm(now, self.timing.enter);
                self.stage = Stage::Mounting;
                true
            }
        }
    }

    /// Returns `true` if this call started closing the panel.
    pub fn close_at(&mut self, now: Instant) -> bool {
        match self.stage {
            Stage::Unmounted | Stage::Closing => false,
            Stage::Mounting | Stage::Shown => {
                self.enter.cancel();
                self.unmount.arm(now, self.timing.unmount);
                self.stage = Stage::Closing;
                true
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.enter.fire(now) && self.stage == Stage::Mounting {
            self.stage = Stage::Shown;
        }
        if self.unmount.fire(now) && self.stage == Stage::Closing {
            self.stage = Stage::Unmounted;
        }
    }

    /// How far the panel is slid in, from `0.0` (hidden) to `1.0` (shown).
    #[must_use]
    pub fn visibility(&self, now: Instant) -> f32 {
        match self.stage {
            Stage::Unmounted | Stage::Mounting => 0.0,
            Stage::Shown => 1.0,
            Stage::Closing => 1.0 - self.unmount.progress(now).unwrap_or(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn opens_after_enter_delay() {
        let start = Instant::now();
        let mut presence = Presence::default();
        assert!(presence.open_at(start));
        assert_eq!(presence.stage(), Stage::Mounting);
        assert!(presence.is_open());

        presence.tick(start + 9 * MS);
        assert_eq!(presence.stage(), Stage::Mounting);
        presence.tick(start + 10 * MS);
        assert_eq!(presence.stage(), Stage::Shown);
        assert!(!presence.is_animating());
    }

    #[test]
    fn unmounts_after_unmount_delay() {
        let start = Instant::now();
        let mut presence = Presence::default();
        presence.open_at(start);
        presence.tick(start + 10 * MS);

        assert!(presence.close_at(start + 20 * MS));
        assert!(presence.is_mounted());
        assert!(!presence.is_open());

        presence.tick(start + 319 * MS);
        assert_eq!(presence.stage(), Stage::Closing);
        presence.tick(start + 320 * MS);
        assert_eq!(presence.stage(), Stage::Unmounted);
    }

    #[test]
    fn reopening_while_closing_cancels_unmount() {
        let start = Instant::now();
        let mut presence = Presence::default();
        presence.open_at(start);
        presence.tick(start + 10 * MS);
        presence.close_at(start + 100 * MS);

        assert!(presence.open_at(start + 200 * MS));
        presence.tick(start + 210 * MS);
        presence.tick(start + 1000 * MS);
        assert_eq!(presence.stage(), Stage::Shown);
    }

    #[test]
    fn closing_during_mount_skips_shown() {
        let start = Instant::now();
        let mut presence = Presence::default();
        presence.open_at(start);
        presence.close_at(start + 5 * MS);
        presence.tick(start + 10 * MS);
        assert_eq!(presence.stage(), Stage::Closing);
    }

    #[test]
    fn repeated_open_and_close_are_no_ops() {
        let start = Instant::now();
        let mut presence = Presence::default();
        assert!(!presence.close_at(start));
        presence.open_at(start);
        assert!(!presence.open_at(start + MS));
        presence.close_at(start + 2 * MS);
        assert!(!presence.close_at(start + 3 * MS));
    }

    #[test]
    fn visibility_fades_while_closing() {
        let start = Instant::now();
        let mut presence = Presence::default();
        assert_eq!(presence.visibility(start), 0.0);
        presence.open_at(start);
        presence.tick(start + 10 * MS);
        assert_eq!(presence.visibility(start + 10 * MS), 1.0);

        presence.close_at(start + 100 * MS);
        let halfway = presence.visibility(start + 250 * MS);
        assert!((halfway - 0.5).abs() < 0.01);
    }

    #[test]
    fn timing_from_config_clamps_delays() {
        let config = PanelConfig {
            title: None,
            enter_delay_ms: None,
            unmount_delay_ms: Some(60_000),
        };
        let timing = Timing::from_config(&config);
        assert_eq!(timing.enter, Duration::from_millis(DEFAULT_PANEL_ENTER_DELAY_MS));
        assert_eq!(timing.unmount, Duration::from_millis(5000));
    }
}
