// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the components.

pub mod button;
pub mod container;
