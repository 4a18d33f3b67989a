//! # Tracing Notifier
//!
//! The default [`DeprecationNotifier`]. Each notice becomes one structured
//! `tracing` event under the `verdict::deprecation` target, carrying the
//! `name`, `alternative` and `origin` fields.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::config::{NoticeConfig, NoticeMode};
use crate::notice::{DeprecationNotifier, Notice, SharedNotifier};

/// Notifier that logs through `tracing`.
#[derive(Debug, Default)]
pub struct TracingNotifier {
    config: NoticeConfig,
    /// Origins already logged; only consulted when `once_per_origin` is set.
    seen: Mutex<HashSet<String>>,
}

impl TracingNotifier {
    /// Create a notifier with the given configuration.
    pub fn new(config: NoticeConfig) -> Self {
        Self {
            config,
            seen: Mutex::new(HashSet::new()),
        }
    }

    /// Create a notifier configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(NoticeConfig::from_env())
    }

    /// The configuration this notifier was built with.
    pub fn config(&self) -> NoticeConfig {
        self.config
    }

    /// Whether this notice should produce a log line.
    ///
    /// Records the origin as seen when deduplication is enabled.
    fn should_emit(&self, notice: &Notice) -> bool {
        if self.config.mode == NoticeMode::Silent {
            return false;
        }
        if !self.config.once_per_origin {
            return true;
        }
        self.seen.lock().insert(notice.origin.clone())
    }
}

impl DeprecationNotifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        if !self.should_emit(notice) {
            return;
        }
        match self.config.mode {
            NoticeMode::Warn => tracing::warn!(
                target: "verdict::deprecation",
                name = %notice.name,
                alternative = %notice.alternative,
                origin = %notice.origin,
                "deprecated API called"
            ),
            NoticeMode::Debug => tracing::debug!(
                target: "verdict::deprecation",
                name = %notice.name,
                alternative = %notice.alternative,
                origin = %notice.origin,
                "deprecated API called"
            ),
            NoticeMode::Silent => {}
        }
    }
}

/// The process-wide default notifier.
///
/// Built from [`NoticeConfig::from_env()`] on first use; later changes to
/// the environment are not picked up.
pub fn default_notifier() -> SharedNotifier {
    static DEFAULT: OnceLock<SharedNotifier> = OnceLock::new();
    DEFAULT
        .get_or_init(|| Arc::new(TracingNotifier::from_env()))
        .clone()
}
