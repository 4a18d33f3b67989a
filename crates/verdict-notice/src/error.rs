//! # Error Types
//!
//! Errors raised while reading notice configuration. Notifying itself never
//! fails: a notifier that cannot deliver a notice drops it.

use thiserror::Error;

/// Error while parsing notice configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoticeError {
    /// The notice mode string is not one of `warn`, `debug`, `silent`.
    #[error("unknown deprecation notice mode '{0}'; expected one of: warn, debug, silent")]
    UnknownMode(String),

    /// A boolean setting was not `true` or `false`.
    #[error("invalid boolean for {key}: '{value}'")]
    InvalidFlag {
        /// The environment variable being read.
        key: String,
        /// The rejected value.
        value: String,
    },
}
