//! User-facing failure notifications
//!
//! The interceptor reports every failed call through a [`Notifier`]. What a
//! report turns into (a toast, a log line, a status bar) is up to the host.

use std::sync::Mutex;

/// Fire-and-forget sink for failure messages
pub trait Notifier: Send + Sync {
    fn report(&self, text: &str);
}

impl<F> Notifier for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, text: &str) {
        self(text)
    }
}

/// Writes each report to the log at `error` level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn report(&self, text: &str) {
        tracing::error!(target: "notify", "{}", text);
    }
}

/// Keeps every report in memory, in order
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    messages: Mutex<Vec<String>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all reports so far
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Notifier for CollectingNotifier {
    fn report(&self, text: &str) {
        self.lock().push(text.to_string());
    }
}
