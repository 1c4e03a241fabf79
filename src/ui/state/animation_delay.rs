// SPDX-License-Identifier: MPL-2.0
//! Animation delay domain type.
//!
//! This module provides a type-safe wrapper for the enter, exit and unmount
//! delays used by animated components, in milliseconds.

use crate::config::{MAX_ANIMATION_DELAY_MS, MIN_ANIMATION_DELAY_MS};
use std::time::Duration;

/// Animation delay in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0–5000 ms).
///
/// # Example
///
/// ```
/// use iced_parts::ui::state::AnimationDelay;
///
/// let delay = AnimationDelay::new(300);
/// assert_eq!(delay.millis(), 300);
///
/// // Values outside range are clamped
/// let too_long = AnimationDelay::new(60_000);
/// assert_eq!(too_long.millis(), 5000); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnimationDelay(u64);

impl AnimationDelay {
    /// Creates a new delay value, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_ANIMATION_DELAY_MS, MAX_ANIMATION_DELAY_MS))
    }

    /// Resolves an optional config value, using `default` when unset.
    #[must_use]
    pub fn from_config(value: Option<u64>, default: u64) -> Self {
        Self::new(value.unwrap_or(default))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl From<AnimationDelay> for Duration {
    fn from(delay: AnimationDelay) -> Self {
        delay.as_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(AnimationDelay::new(10_000).millis(), MAX_ANIMATION_DELAY_MS);
        assert_eq!(AnimationDelay::new(0).millis(), MIN_ANIMATION_DELAY_MS);
    }

    #[test]
    fn from_config_falls_back_to_default() {
        assert_eq!(AnimationDelay::from_config(None, 300).millis(), 300);
        assert_eq!(AnimationDelay::from_config(Some(120), 300).millis(), 120);
    }

    #[test]
    fn as_duration_converts_correctly() {
        let delay = AnimationDelay::new(250);
        assert_eq!(delay.as_duration(), Duration::from_millis(250));
        assert_eq!(Duration::from(delay), Duration::from_millis(250));
    }
}
