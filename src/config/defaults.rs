// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast auto-dismiss duration and animation delays
//! - **Panel**: Side panel animation delays
//! - **Animation**: Bounds shared by every animation delay

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss duration for a toast (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Longest auto-dismiss duration accepted from the config file (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 600_000;

/// Delay between mounting a toast and showing it (in milliseconds).
///
/// Gives the renderer one stable frame to animate from.
pub const DEFAULT_TOAST_ENTER_DELAY_MS: u64 = 10;

/// Time a dismissed toast keeps playing its exit animation (in milliseconds).
pub const DEFAULT_TOAST_EXIT_DELAY_MS: u64 = 300;

// ==========================================================================
// Panel Defaults
// ==========================================================================

/// Delay between mounting the side panel and sliding it in (in milliseconds).
pub const DEFAULT_PANEL_ENTER_DELAY_MS: u64 = 10;

/// Time the side panel stays mounted after closing (in milliseconds).
pub const DEFAULT_PANEL_UNMOUNT_DELAY_MS: u64 = 300;

// ==========================================================================
// Animation Bounds
// ==========================================================================

/// Minimum animation delay (in milliseconds).
pub const MIN_ANIMATION_DELAY_MS: u64 = 0;

/// Maximum animation delay (in milliseconds).
pub const MAX_ANIMATION_DELAY_MS: u64 = 5000;

// ==========================================================================
// Polling
// ==========================================================================

/// Tick interval while something is animating (~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

/// Tick interval while only auto-dismiss timers are pending.
pub const IDLE_TICK_MS: u64 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_defaults_are_within_bounds() {
        for value in [
            DEFAULT_TOAST_ENTER_DELAY_MS,
            DEFAULT_TOAST_EXIT_DELAY_MS,
            DEFAULT_PANEL_ENTER_DELAY_MS,
            DEFAULT_PANEL_UNMOUNT_DELAY_MS,
        ] {
            assert!((MIN_ANIMATION_DELAY_MS..=MAX_ANIMATION_DELAY_MS).contains(&value));
        }
    }

    #[test]
    fn default_toast_duration_is_accepted() {
        assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    }

    #[test]
    fn animation_tick_is_faster_than_idle_tick() {
        assert!(ANIMATION_TICK_MS < IDLE_TICK_MS);
    }
}
