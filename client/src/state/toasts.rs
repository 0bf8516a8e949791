//! Toast queue backing the notification layer.
//!
//! DESIGN
//! ======
//! `ToastState` is a plain ordered queue kept in an `RwSignal`. The
//! [`ToastNotifier`] pushes notices into it and arms a timer that removes each
//! toast once its duration elapses; [`TimeoutScheduler`] defers a notice by a
//! fixed delay. Timers only exist in the browser: during SSR nothing is ever
//! notified, and the timer calls compile away.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use std::time::Duration;

use leads::{Notice, Notifier, Scheduler};
use leptos::prelude::*;

/// Display duration for notices that do not carry their own.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(4);

/// Number of toasts rendered at once; older ones wait underneath.
pub const MAX_VISIBLE: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a notice and return its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, notice });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Newest toasts, oldest first, capped at [`MAX_VISIBLE`].
    #[must_use]
    pub fn visible(&self) -> Vec<Toast> {
        let skip = self.toasts.len().saturating_sub(MAX_VISIBLE);
        self.toasts[skip..].to_vec()
    }
}

/// How long a notice stays on screen.
#[must_use]
pub fn display_duration(notice: &Notice) -> Duration {
    notice.options.duration.unwrap_or(DEFAULT_DURATION)
}

/// [`Notifier`] that shows notices as toasts.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    #[must_use]
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let duration = display_duration(&notice);
        log::debug!("toast [{}] {}", notice.level.as_str(), notice.text());
        let Some(id) = self.toasts.try_update(|t| t.push(notice)) else {
            return;
        };
        let toasts = self.toasts;
        after(duration, move || {
            toasts.try_update(|t| t.dismiss(id));
        });
    }
}

/// [`Scheduler`] that shows a notice through the toaster after a delay.
#[derive(Clone, Copy)]
pub struct TimeoutScheduler {
    notifier: ToastNotifier,
}

impl TimeoutScheduler {
    #[must_use]
    pub fn new(notifier: ToastNotifier) -> Self {
        Self { notifier }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, notice: Notice) {
        let notifier = self.notifier;
        after(delay, move || notifier.notify(notice));
    }
}

/// Run `f` once after `delay` on the browser event loop.
fn after(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, f).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, f);
    }
}
