//! # Notices and Notifiers
//!
//! A [`Notice`] is one deprecation report: which API was called, what to
//! call instead, and where the call came from. A [`DeprecationNotifier`]
//! receives notices. It is called exactly once per deprecated invocation;
//! anything beyond that (deduplication, formatting, log level) is the
//! notifier's business.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// A single deprecation report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Notice {
    /// The deprecated call site, as `path::Type::method`.
    pub name: String,
    /// The replacement the caller should migrate to.
    pub alternative: String,
    /// Caller location, `file:line:column`.
    pub origin: String,
}

impl Notice {
    /// Build a notice from its three parts.
    pub fn new(
        name: impl Into<String>,
        alternative: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            alternative: alternative.into(),
            origin: origin.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is deprecated; use {} instead (called from {})",
            self.name, self.alternative, self.origin
        )
    }
}

/// Receiver of deprecation notices.
///
/// Implementations must not panic: a notice is informational and the
/// deprecated call proceeds regardless of what the notifier does with it.
pub trait DeprecationNotifier: fmt::Debug {
    /// Report one deprecated invocation.
    fn notify(&self, notice: &Notice);
}

/// Shared, thread-safe handle to a notifier.
pub type SharedNotifier = Arc<dyn DeprecationNotifier + Send + Sync>;

impl<N: DeprecationNotifier + ?Sized> DeprecationNotifier for Arc<N> {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice)
    }
}

// ─── Capturing Notifier ──────────────────────────────────────────────

/// Notifier that records every notice it receives.
///
/// Intended for tests: attach it to an outcome, run the dispatch chain,
/// then inspect [`CapturingNotifier::notices`].
#[derive(Debug, Default)]
pub struct CapturingNotifier {
    captured: Mutex<Vec<Notice>>,
}

impl CapturingNotifier {
    /// Create an empty capturing notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a capturing notifier already wrapped for sharing.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Snapshot of the notices received so far, in arrival order.
    pub fn notices(&self) -> Vec<Notice> {
        self.captured.lock().clone()
    }

    /// Number of notices received so far.
    pub fn count(&self) -> usize {
        self.captured.lock().len()
    }

    /// Drop every captured notice.
    pub fn clear(&self) {
        self.captured.lock().clear();
    }
}

impl DeprecationNotifier for CapturingNotifier {
    fn notify(&self, notice: &Notice) {
        self.captured.lock().push(notice.clone());
    }
}
