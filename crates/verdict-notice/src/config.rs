//! # Notice Configuration
//!
//! Controls how the default [`TracingNotifier`](crate::TracingNotifier)
//! reports deprecations. Configuration comes from the environment:
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `VERDICT_DEPRECATIONS` | `warn`, `debug`, `silent` | `warn` |
//! | `VERDICT_DEPRECATIONS_ONCE` | `true`, `false` | `false` |
//!
//! An invalid value never aborts the caller: it is logged and the default
//! is kept.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoticeError;

/// Environment variable selecting the [`NoticeMode`].
pub const ENV_DEPRECATIONS: &str = "VERDICT_DEPRECATIONS";

/// Environment variable enabling per-origin deduplication.
pub const ENV_DEPRECATIONS_ONCE: &str = "VERDICT_DEPRECATIONS_ONCE";

/// How deprecation notices are surfaced in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeMode {
    /// Log at `WARN`.
    #[default]
    Warn,
    /// Log at `DEBUG`.
    Debug,
    /// Drop notices without logging.
    Silent,
}

impl NoticeMode {
    /// The lowercase identifier, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Debug => "debug",
            Self::Silent => "silent",
        }
    }
}

impl fmt::Display for NoticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoticeMode {
    type Err = NoticeError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" => Ok(Self::Warn),
            "debug" => Ok(Self::Debug),
            "silent" => Ok(Self::Silent),
            other => Err(NoticeError::UnknownMode(other.to_string())),
        }
    }
}

/// Settings for the default notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Log level (or suppression) for notices.
    pub mode: NoticeMode,
    /// Log each origin at most once per notifier.
    pub once_per_origin: bool,
}

impl NoticeConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults. Invalid values keep their defaults
    /// and are reported with `tracing::warn!`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DEPRECATIONS) {
            match raw.parse::<NoticeMode>() {
                Ok(mode) => config.mode = mode,
                Err(e) => {
                    tracing::warn!(
                        key = ENV_DEPRECATIONS,
                        error = %e,
                        "ignoring invalid notice mode"
                    );
                }
            }
        }

        if let Some(raw) = lookup(ENV_DEPRECATIONS_ONCE) {
            match parse_flag(ENV_DEPRECATIONS_ONCE, &raw) {
                Ok(flag) => config.once_per_origin = flag,
                Err(e) => {
                    tracing::warn!(
                        key = ENV_DEPRECATIONS_ONCE,
                        error = %e,
                        "ignoring invalid flag"
                    );
                }
            }
        }

        config
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, NoticeError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(NoticeError::InvalidFlag {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
