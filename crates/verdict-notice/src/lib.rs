//! # verdict-notice — Deprecation Notices
//!
//! The deprecation-notification collaborator used by `verdict-core`. The
//! core never decides how a notice is displayed, logged or rate-limited. It
//! only builds a [`Notice`] and hands it to whatever [`DeprecationNotifier`]
//! the outcome was given.
//!
//! ## Notifiers
//!
//! - [`TracingNotifier`]: the process default. Emits a structured `tracing`
//!   event under the `verdict::deprecation` target at the level chosen by
//!   [`NoticeConfig`].
//! - [`CapturingNotifier`]: records every notice in memory. Tests substitute
//!   it for the default to assert exactly how many notices were raised.
//!
//! ## Configuration
//!
//! [`NoticeConfig::from_env()`] reads `VERDICT_DEPRECATIONS`
//! (`warn` | `debug` | `silent`) and `VERDICT_DEPRECATIONS_ONCE`
//! (`true` | `false`). [`default_notifier()`] builds the process-wide
//! tracing notifier from that configuration once.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `verdict-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod notice;
pub mod tracing_notifier;

pub use config::{NoticeConfig, NoticeMode, ENV_DEPRECATIONS, ENV_DEPRECATIONS_ONCE};
pub use error::NoticeError;
pub use notice::{CapturingNotifier, DeprecationNotifier, Notice, SharedNotifier};
pub use tracing_notifier::{default_notifier, TracingNotifier};
