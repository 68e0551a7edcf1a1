//! Toast notifications anchored to the OS notification area.

use notify_rust::{Notification, Timeout};
use std::time::Duration;

/// Fire-and-forget toast presenter.
///
/// Every [`notify`](Notifier::notify) call is an independent popup with its
/// own timeout; overlapping calls never queue or coalesce, they simply show
/// side by side and expire on their own.
#[derive(Clone)]
pub struct Notifier {
    timeout: Duration,
}

impl Notifier {
    /// Creates a presenter whose toasts live for `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Shows one transient toast with the given title and body.
    ///
    /// A failure to show is logged and swallowed; feedback must never take
    /// the application down.
    pub fn notify(&self, title: &str, body: &str) {
        let result = Notification::new()
            .appname("SnipClip")
            .summary(title)
            .body(body)
            .timeout(Timeout::Milliseconds(self.timeout.as_millis() as u32))
            .show();

        if let Err(e) = result {
            log::warn!("failed to show notification '{}': {}", title, e);
        }
    }
}
