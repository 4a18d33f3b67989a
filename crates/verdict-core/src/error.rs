//! # Error Types
//!
//! The only fallible operations on an [`Outcome`](crate::Outcome) are the
//! strict accessors: asking a Failure for its value, or a Success for its
//! error. Everything else is total. Calling a dispatch method on the
//! "wrong" variant or on an already handled outcome is a silent no-op, not
//! an error.

use thiserror::Error;

/// Strict payload access on the wrong variant.
///
/// Each variant carries the `Debug` rendering of the payload that *was*
/// present, so the caller can see what they unwrapped by mistake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnwrapError {
    /// A value was requested from a Failure.
    #[error("called value on Failure({error})")]
    ValueOfFailure {
        /// The failure's error, rendered with `Debug`.
        error: String,
    },

    /// An error was requested from a Success.
    #[error("called error on Success({value})")]
    ErrorOfSuccess {
        /// The success's value, rendered with `Debug`.
        value: String,
    },
}
