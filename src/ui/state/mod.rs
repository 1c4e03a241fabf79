// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Small state primitives shared by the animated components, kept apart from
//! the widgets that render them.

pub mod animation_delay;
pub mod timer;

// Re-export commonly used types for convenience
pub use animation_delay::AnimationDelay;
pub use timer::Timer;
