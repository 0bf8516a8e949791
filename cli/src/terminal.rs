//! Terminal rendition of the notification layer.
//!
//! Notices become `[ok]` / `[error]` / `[info]` lines. Delayed notices run on
//! spawned tokio tasks that the caller drains before the process exits, so a
//! follow-up such as the payment calculation is never lost.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::RefCell;
use std::time::Duration;

use leads::{Notice, NoticeLevel, Notifier, Scheduler};
use tokio::task::JoinHandle;

/// One printable line for `notice`.
pub fn render(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Success => "[ok]",
        NoticeLevel::Error => "[error]",
        NoticeLevel::Info => "[info]",
    };
    match &notice.options.description {
        Some(description) => format!("{tag} {}\n       {description}", notice.message),
        None => format!("{tag} {}", notice.message),
    }
}

/// Prints errors to stderr and everything else to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => eprintln!("{}", render(&notice)),
            NoticeLevel::Success | NoticeLevel::Info => println!("{}", render(&notice)),
        }
    }
}

/// [`Scheduler`] backed by `tokio::spawn` + `sleep`.
pub struct TokioScheduler<N> {
    notifier: N,
    pending: RefCell<Vec<JoinHandle<()>>>,
}

impl<N> TokioScheduler<N>
where
    N: Notifier + Clone + Send + 'static,
{
    pub fn new(notifier: N) -> Self {
        Self { notifier, pending: RefCell::new(Vec::new()) }
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Wait for every scheduled notice to fire.
    pub async fn drain(&self) {
        let handles = std::mem::take(&mut *self.pending.borrow_mut());
        for handle in handles {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "scheduled notice task failed");
            }
        }
    }
}

impl<N> Scheduler for TokioScheduler<N>
where
    N: Notifier + Clone + Send + 'static,
{
    fn schedule(&self, delay: Duration, notice: Notice) {
        let notifier = self.notifier.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            notifier.notify(notice);
        });
        self.pending.borrow_mut().push(handle);
    }
}
