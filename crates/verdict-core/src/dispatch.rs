//! # Type Dispatch — First Match, Freeze Once
//!
//! Routes side effects on an [`Outcome`] by its variant and [`TypeTag`].
//!
//! ## `on`
//!
//! [`Outcome::on`] is a total, one-shot pattern match: it calls exactly one
//! of two closures and returns that closure's result. It never touches the
//! dispatch state.
//!
//! ## `on_success` / `on_failure`
//!
//! A chain of these calls behaves like a `match` with ordered arms, of
//! which at most one runs:
//!
//! ```text
//! Unhandled ── wrong variant ──────────────────▶ Unhandled  (no-op)
//! Unhandled ── arm misses ─────────────────────▶ Unhandled  (next arm is evaluated)
//! Unhandled ── arm matches ──▶ run handler ────▶ Handled
//! Handled   ── any arm ────────────────────────▶ Handled    (no-op)
//! ```
//!
//! An arm is described by a [`Selector`]:
//!
//! | Selector | Matches when |
//! |----------|--------------|
//! | `Selector::tags([..])` | the outcome's tag is one of the listed tags |
//! | `Selector::unhandled()` | no earlier arm matched (the fallback) |
//! | `Selector::legacy()` | always; also reports a deprecation notice |
//!
//! The legacy selector is the historical "no types given" form. It keeps
//! working, but every use is reported to the outcome's
//! [`DeprecationNotifier`](verdict_notice::DeprecationNotifier) with the
//! caller's source location.
//!
//! ```
//! use verdict_core::{Outcome, Selector};
//!
//! let mut log = Vec::new();
//! let out: Outcome<u32, String> = Outcome::success_tagged(3, "created");
//! let out = out
//!     .on_success("updated", |_| log.push("updated"))
//!     .on_success(["created", "restored"], |_| log.push("created"))
//!     .on_success(Selector::unhandled(), |_| log.push("fallback"))
//!     .on_failure(Selector::unhandled(), |_| log.push("failed"));
//!
//! assert_eq!(log, ["created"]);
//! assert!(out.is_handled());
//! ```

use std::fmt;
use std::panic::Location;

use serde::{Deserialize, Serialize};
use verdict_notice::{DeprecationNotifier, Notice};

use crate::outcome::{Outcome, Payload, Variant};
use crate::tag::TypeTag;

// ─── Dispatch State ──────────────────────────────────────────────────

/// Whether a dispatch chain has already run a handler for an outcome.
///
/// Monotonic: `Unhandled → Handled`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchState {
    /// No arm has matched yet.
    #[default]
    Unhandled,
    /// An arm matched; further `on_success`/`on_failure` calls are no-ops.
    Handled,
}

impl DispatchState {
    /// True once an arm has matched.
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }
}

impl fmt::Display for DispatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unhandled => f.write_str("unhandled"),
            Self::Handled => f.write_str("handled"),
        }
    }
}

// ─── Selector ────────────────────────────────────────────────────────

/// Which outcomes a dispatch arm accepts.
///
/// Explicit tags form a set union; listing tags that can never occur
/// together is allowed and simply widens the arm. Nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selector {
    tags: Vec<TypeTag>,
    unhandled: bool,
}

impl Selector {
    /// Accept outcomes whose tag is any of `tags`.
    ///
    /// An empty list is the legacy form; prefer [`Selector::unhandled`].
    pub fn tags<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeTag>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            unhandled: false,
        }
    }

    /// Accept outcomes tagged `tag`.
    pub fn tag(tag: impl Into<TypeTag>) -> Self {
        Self {
            tags: vec![tag.into()],
            unhandled: false,
        }
    }

    /// Fallback arm: accept any outcome no earlier arm matched.
    pub fn unhandled() -> Self {
        Self {
            tags: Vec::new(),
            unhandled: true,
        }
    }

    /// The deprecated "match anything" form.
    pub fn legacy() -> Self {
        Self::default()
    }

    /// Also act as the fallback arm.
    pub fn or_unhandled(mut self) -> Self {
        self.unhandled = true;
        self
    }

    /// The explicit tags, in the order given.
    pub fn tag_list(&self) -> &[TypeTag] {
        &self.tags
    }

    /// Whether this is a fallback arm.
    pub fn is_unhandled(&self) -> bool {
        self.unhandled
    }

    /// Whether this is the deprecated "no tags, not fallback" form.
    pub fn is_legacy(&self) -> bool {
        self.tags.is_empty() && !self.unhandled
    }

    /// Whether an Unhandled outcome carrying `tag` is accepted.
    ///
    /// Fallback and legacy arms accept everything; the dispatch state check
    /// happens before this is consulted.
    pub fn accepts(&self, tag: Option<&TypeTag>) -> bool {
        if self.unhandled || self.tags.is_empty() {
            return true;
        }
        tag.is_some_and(|t| self.tags.contains(t))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_legacy() {
            return f.write_str("legacy");
        }
        let mut first = true;
        for tag in &self.tags {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{tag}")?;
            first = false;
        }
        if self.unhandled {
            if !first {
                f.write_str(" | ")?;
            }
            f.write_str("unhandled")?;
        }
        Ok(())
    }
}

impl From<&'static str> for Selector {
    fn from(tag: &'static str) -> Self {
        Self::tag(tag)
    }
}

impl From<String> for Selector {
    fn from(tag: String) -> Self {
        Self::tag(tag)
    }
}

impl From<TypeTag> for Selector {
    fn from(tag: TypeTag) -> Self {
        Self::tag(tag)
    }
}

impl From<&TypeTag> for Selector {
    fn from(tag: &TypeTag) -> Self {
        Self::tag(tag.clone())
    }
}

impl<T: Into<TypeTag>, const N: usize> From<[T; N]> for Selector {
    fn from(tags: [T; N]) -> Self {
        Self::tags(tags)
    }
}

impl<T: Into<TypeTag>> From<Vec<T>> for Selector {
    fn from(tags: Vec<T>) -> Self {
        Self::tags(tags)
    }
}

// ─── Dispatch ────────────────────────────────────────────────────────

const ALTERNATIVE_SUFFIX: &str = "(Selector::unhandled(), ..)";

impl<V, E> Outcome<V, E> {
    /// Current dispatch state.
    pub fn dispatch_state(&self) -> DispatchState {
        self.state
    }

    /// True once an `on_success`/`on_failure` arm has matched.
    pub fn is_handled(&self) -> bool {
        self.state.is_handled()
    }

    /// Call `success` with the value or `failure` with the error and return
    /// its result. Does not read or change the dispatch state.
    pub fn on<T, S, F>(&self, success: S, failure: F) -> T
    where
        S: FnOnce(&V) -> T,
        F: FnOnce(&E) -> T,
    {
        match &self.payload {
            Payload::Success(value) => success(value),
            Payload::Failure(error) => failure(error),
        }
    }

    /// Run `handler` with the value if this Success is Unhandled and
    /// `selector` accepts it; the outcome is then Handled.
    ///
    /// Always returns the outcome. Never runs on a Failure.
    #[track_caller]
    pub fn on_success<S, F>(self, selector: S, handler: F) -> Self
    where
        S: Into<Selector>,
        F: FnOnce(&V),
    {
        self.on_success_with_tag(selector, |value, _| handler(value))
    }

    /// [`on_success`](Self::on_success), also passing the tag.
    #[track_caller]
    pub fn on_success_with_tag<S, F>(mut self, selector: S, handler: F) -> Self
    where
        S: Into<Selector>,
        F: FnOnce(&V, Option<&TypeTag>),
    {
        let selector = selector.into();
        if self.arm_matches(Variant::Success, &selector, "on_success") {
            if let Payload::Success(value) = &self.payload {
                handler(value, self.tag.as_ref());
            }
            self.state = DispatchState::Handled;
        }
        self
    }

    /// Run `handler` with the error if this Failure is Unhandled and
    /// `selector` accepts it; the outcome is then Handled.
    ///
    /// Always returns the outcome. Never runs on a Success.
    #[track_caller]
    pub fn on_failure<S, F>(self, selector: S, handler: F) -> Self
    where
        S: Into<Selector>,
        F: FnOnce(&E),
    {
        self.on_failure_with_tag(selector, |error, _| handler(error))
    }

    /// [`on_failure`](Self::on_failure), also passing the tag.
    #[track_caller]
    pub fn on_failure_with_tag<S, F>(mut self, selector: S, handler: F) -> Self
    where
        S: Into<Selector>,
        F: FnOnce(&E, Option<&TypeTag>),
    {
        let selector = selector.into();
        if self.arm_matches(Variant::Failure, &selector, "on_failure") {
            if let Payload::Failure(error) = &self.payload {
                handler(error, self.tag.as_ref());
            }
            self.state = DispatchState::Handled;
        }
        self
    }

    /// Decide whether an arm for `side` runs on this outcome.
    ///
    /// A legacy selector that reaches this point is reported once.
    #[track_caller]
    fn arm_matches(&self, side: Variant, selector: &Selector, method: &'static str) -> bool {
        let variant = self.variant();
        if variant != side {
            tracing::trace!(
                target: "verdict::dispatch",
                method,
                %variant,
                %selector,
                "skipped: wrong variant"
            );
            return false;
        }
        if self.state.is_handled() {
            tracing::trace!(
                target: "verdict::dispatch",
                method,
                %variant,
                %selector,
                "skipped: already handled"
            );
            return false;
        }
        if selector.is_legacy() {
            self.report_legacy(method, Location::caller());
        }
        let matched = selector.accepts(self.tag.as_ref());
        tracing::trace!(
            target: "verdict::dispatch",
            method,
            %variant,
            tag = ?self.tag.as_ref().map(TypeTag::as_str),
            %selector,
            matched,
            "arm evaluated"
        );
        matched
    }

    fn report_legacy(&self, method: &'static str, caller: &Location<'_>) {
        let notice = Notice::new(
            format!("verdict::Outcome::{method}"),
            format!("{method}{ALTERNATIVE_SUFFIX}"),
            caller.to_string(),
        );
        self.resolved_notifier().notify(&notice);
    }
}
