//! # verdict-core — Result Algebra
//!
//! The outcome type of the verdict workspace and everything that operates
//! on it. An operation reports what happened by returning an
//! [`Outcome<V, E>`]: a Success carrying a value or a Failure carrying an
//! error, optionally labelled with a [`TypeTag`]. Callers then either chain
//! it or dispatch on it.
//!
//! ## Key Design Principles
//!
//! 1. **Two variants, one payload.** An outcome holds exactly one of value
//!    and error. The strict accessors ([`Outcome::try_value`],
//!    [`Outcome::try_error`]) return [`UnwrapError`] on the wrong variant;
//!    the lenient ones return `Option`.
//!
//! 2. **Bind short-circuits.** [`Outcome::then`] runs only on Success and
//!    [`Outcome::or_else`] only on Failure. The skipped side passes through
//!    unchanged, tag and dispatch state included.
//!
//! 3. **Tags are orthogonal to variants.** A tag is a label for dispatch
//!    matching and nothing else. It is fixed at construction.
//!
//! 4. **Dispatch runs at most one arm.** `on_success`/`on_failure` chains
//!    are ordered arms with first-match-wins semantics. The first match
//!    moves the outcome's [`DispatchState`] to `Handled`, after which every
//!    later arm is a no-op.
//!
//! 5. **Handlers choose their arity.** Each continuation exists in a
//!    payload-only form and a `_with_tag` form that also receives the tag.
//!
//! ## Crate Policy
//!
//! - Depends only on `verdict-notice` among workspace crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Dispatch on the wrong variant or on a handled outcome never errors.

pub mod chain;
pub mod dispatch;
pub mod error;
pub mod outcome;
pub mod tag;

// Re-export primary types for ergonomic imports.
pub use dispatch::{DispatchState, Selector};
pub use error::UnwrapError;
pub use outcome::{failure, success, Outcome, Variant};
pub use tag::TypeTag;

// The notifier seam, so callers injecting a notifier need only this crate.
pub use verdict_notice::{CapturingNotifier, DeprecationNotifier, Notice, SharedNotifier};
