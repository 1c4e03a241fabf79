// SPDX-License-Identifier: MPL-2.0
//! Lightweight access to a coordinator from anywhere in the host.
//!
//! A `Handle` lets code that does not own the [`Coordinator`] show and hide
//! toasts without threading the coordinator through every call. The handle
//! does not keep the coordinator alive: once the coordinator is dropped, the
//! handle is outside of any active scope and using it is a programming error.
//!
//! [`Coordinator`]: super::Coordinator

use super::coordinator::Registry;
use super::notification::{Notification, ToastId};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

/// Clonable show/hide access to a live coordinator.
#[derive(Debug, Clone)]
pub struct Handle {
    registry: Weak<RefCell<Registry>>,
}

impl Handle {
    pub(super) fn new(registry: Weak<RefCell<Registry>>) -> Self {
        Self { registry }
    }

    /// Whether the coordinator behind this handle is still alive.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry.strong_count() > 0
    }

    /// Shows a notification through the coordinator.
    ///
    /// # Panics
    ///
    /// Panics if the coordinator has been dropped. Use [`try_show`](Self::try_show)
    /// to handle that case.
    pub fn show(&self, notification: Notification) -> ToastId {
        self.show_at(notification, Instant::now())
    }

    /// Like [`show`](Self::show), with its timers started at `now`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinator has been dropped.
    pub fn show_at(&self, notification: Notification, now: Instant) -> ToastId {
        self.try_show_at(notification, now)
            .unwrap_or_else(|err| panic!("cannot show notification: {err}"))
    }

    /// Hides a toast through the coordinator. Unknown ids are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the coordinator has been dropped. Use [`try_hide`](Self::try_hide)
    /// to handle that case.
    pub fn hide(&self, id: ToastId) {
        self.try_hide(id)
            .unwrap_or_else(|err| panic!("cannot hide notification: {err}"));
    }

    /// Shows a notification, or fails with [`Error::NoCoordinator`].
    pub fn try_show(&self, notification: Notification) -> Result<ToastId> {
        self.try_show_at(notification, Instant::now())
    }

    /// Like [`try_show`](Self::try_show), with its timers started at `now`.
    pub fn try_show_at(&self, notification: Notification, now: Instant) -> Result<ToastId> {
        let registry = self.registry()?;
        let id = registry.borrow_mut().show(notification, now);
        Ok(id)
    }

    /// Hides a toast, or fails with [`Error::NoCoordinator`].
    pub fn try_hide(&self, id: ToastId) -> Result<()> {
        let registry = self.registry()?;
        registry.borrow_mut().hide(id);
        Ok(())
    }

    fn registry(&self) -> Result<Rc<RefCell<Registry>>> {
        self.registry.upgrade().ok_or(Error::NoCoordinator)
    }
}
