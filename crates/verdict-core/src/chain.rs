//! # Chaining Combinators
//!
//! Bind-style combinators over [`Outcome`]. Each runs its continuation only
//! on the active variant and passes the outcome through untouched
//! otherwise, so a Failure short-circuits a `then` chain and a Success
//! skips every `or_else`.
//!
//! ```
//! use verdict_core::{success, Outcome};
//!
//! fn parse(raw: &str) -> Outcome<u32, String> {
//!     raw.parse::<u32>().map_err(|_| format!("not a number: {raw}")).into()
//! }
//!
//! let doubled = parse("21").then(|n| success(n * 2));
//! assert_eq!(doubled, success(42));
//!
//! let recovered = parse("x")
//!     .then(|n| success(n * 2))
//!     .or_else(|_| Outcome::<u32, String>::success(0));
//! assert_eq!(recovered, success(0));
//! ```
//!
//! ## Overloads
//!
//! Every continuation comes in two shapes. The plain form receives only the
//! payload. The `_with_tag` form also receives the outcome's tag, for
//! callers that want to branch on it without a dispatch chain.
//!
//! ## Passthrough
//!
//! A skipped combinator returns the *same* outcome: payload, tag, dispatch
//! state and notifier are all carried over. Only the type parameter of the
//! inactive side changes, so chains keep type-checking.

use crate::outcome::{Outcome, Payload};
use crate::tag::TypeTag;

impl<V, E> Outcome<V, E> {
    /// Rebuild a skipped Failure under a new success type.
    fn pass_failure<W>(error: E, rest: Passthrough) -> Outcome<W, E> {
        Outcome {
            payload: Payload::Failure(error),
            tag: rest.tag,
            state: rest.state,
            notifier: rest.notifier,
        }
    }

    /// Rebuild a skipped Success under a new error type.
    fn pass_success<X>(value: V, rest: Passthrough) -> Outcome<V, X> {
        Outcome {
            payload: Payload::Success(value),
            tag: rest.tag,
            state: rest.state,
            notifier: rest.notifier,
        }
    }

    fn split(self) -> (Payload<V, E>, Passthrough) {
        (
            self.payload,
            Passthrough {
                tag: self.tag,
                state: self.state,
                notifier: self.notifier,
            },
        )
    }

    // ── Bind ─────────────────────────────────────────────────────────

    /// Run `f` on a Success value and return its outcome.
    ///
    /// A Failure is returned unchanged and `f` is not called.
    pub fn then<W, F>(self, f: F) -> Outcome<W, E>
    where
        F: FnOnce(V) -> Outcome<W, E>,
    {
        match self.split() {
            (Payload::Success(value), _) => f(value),
            (Payload::Failure(error), rest) => Self::pass_failure(error, rest),
        }
    }

    /// [`then`](Self::then), also passing the tag.
    pub fn then_with_tag<W, F>(self, f: F) -> Outcome<W, E>
    where
        F: FnOnce(V, Option<&TypeTag>) -> Outcome<W, E>,
    {
        match self.split() {
            (Payload::Success(value), rest) => f(value, rest.tag.as_ref()),
            (Payload::Failure(error), rest) => Self::pass_failure(error, rest),
        }
    }

    /// Alias of [`then`](Self::then), conventionally used for the last
    /// step of a chain.
    pub fn and_then<W, F>(self, f: F) -> Outcome<W, E>
    where
        F: FnOnce(V) -> Outcome<W, E>,
    {
        self.then(f)
    }

    /// Alias of [`then_with_tag`](Self::then_with_tag).
    pub fn and_then_with_tag<W, F>(self, f: F) -> Outcome<W, E>
    where
        F: FnOnce(V, Option<&TypeTag>) -> Outcome<W, E>,
    {
        self.then_with_tag(f)
    }

    // ── Recovery ─────────────────────────────────────────────────────

    /// Run `f` on a Failure error and return its outcome.
    ///
    /// A Success is returned unchanged and `f` is not called.
    pub fn or_else<X, F>(self, f: F) -> Outcome<V, X>
    where
        F: FnOnce(E) -> Outcome<V, X>,
    {
        match self.split() {
            (Payload::Success(value), rest) => Self::pass_success(value, rest),
            (Payload::Failure(error), _) => f(error),
        }
    }

    /// [`or_else`](Self::or_else), also passing the tag.
    pub fn or_else_with_tag<X, F>(self, f: F) -> Outcome<V, X>
    where
        F: FnOnce(E, Option<&TypeTag>) -> Outcome<V, X>,
    {
        match self.split() {
            (Payload::Success(value), rest) => Self::pass_success(value, rest),
            (Payload::Failure(error), rest) => f(error, rest.tag.as_ref()),
        }
    }

    /// Alias of [`or_else`](Self::or_else).
    pub fn catch<X, F>(self, f: F) -> Outcome<V, X>
    where
        F: FnOnce(E) -> Outcome<V, X>,
    {
        self.or_else(f)
    }

    /// Alias of [`or_else_with_tag`](Self::or_else_with_tag).
    pub fn catch_with_tag<X, F>(self, f: F) -> Outcome<V, X>
    where
        F: FnOnce(E, Option<&TypeTag>) -> Outcome<V, X>,
    {
        self.or_else_with_tag(f)
    }

    // ── Transform ────────────────────────────────────────────────────

    /// Transform a Success value, keeping tag and dispatch state.
    pub fn map<W, F>(self, f: F) -> Outcome<W, E>
    where
        F: FnOnce(V) -> W,
    {
        match self.split() {
            (Payload::Success(value), rest) => Outcome {
                payload: Payload::Success(f(value)),
                tag: rest.tag,
                state: rest.state,
                notifier: rest.notifier,
            },
            (Payload::Failure(error), rest) => Self::pass_failure(error, rest),
        }
    }

    /// Transform a Failure error, keeping tag and dispatch state.
    pub fn map_error<X, F>(self, f: F) -> Outcome<V, X>
    where
        F: FnOnce(E) -> X,
    {
        match self.split() {
            (Payload::Success(value), rest) => Self::pass_success(value, rest),
            (Payload::Failure(error), rest) => Outcome {
                payload: Payload::Failure(f(error)),
                tag: rest.tag,
                state: rest.state,
                notifier: rest.notifier,
            },
        }
    }

    // ── Terminal extraction ──────────────────────────────────────────

    /// The Success value, or `default` on a Failure.
    pub fn value_or(self, default: V) -> V {
        match self.payload {
            Payload::Success(value) => value,
            Payload::Failure(_) => default,
        }
    }

    /// The Success value, or `f(error)` on a Failure.
    pub fn value_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self.payload {
            Payload::Success(value) => value,
            Payload::Failure(error) => f(error),
        }
    }

    /// Collapse both variants into one value.
    pub fn fold<T, S, F>(self, on_success: S, on_failure: F) -> T
    where
        S: FnOnce(V) -> T,
        F: FnOnce(E) -> T,
    {
        match self.payload {
            Payload::Success(value) => on_success(value),
            Payload::Failure(error) => on_failure(error),
        }
    }
}

/// The parts of an outcome that survive a skipped combinator.
struct Passthrough {
    tag: Option<TypeTag>,
    state: crate::dispatch::DispatchState,
    notifier: Option<verdict_notice::SharedNotifier>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{DispatchState, Selector};
    use crate::outcome::{failure, success};
    use std::cell::Cell;

    #[test]
    fn test_then_binds_success() {
        let out: Outcome<i32, String> = success(2);
        assert_eq!(out.then(|v| success(v + 1)), success(3));
    }

    #[test]
    fn test_then_can_turn_success_into_failure() {
        let out: Outcome<i32, &str> = success(2);
        assert_eq!(out.then(|_| Outcome::<i32, _>::failure("nope")), failure("nope"));
    }

    #[test]
    fn test_then_skips_failure() {
        let called = Cell::new(false);
        let out: Outcome<i32, &str> = Outcome::failure_tagged("bad", "io");
        let chained: Outcome<String, &str> = out.then(|v| {
            called.set(true);
            success(v.to_string())
        });
        assert!(!called.get());
        assert_eq!(chained, Outcome::failure_tagged("bad", "io"));
    }

    #[test]
    fn test_skipped_then_keeps_dispatch_state() {
        let out: Outcome<i32, &str> =
            Outcome::failure_tagged("bad", "io").on_failure("io", |_| {});
        assert!(out.is_handled());
        let chained = out.then(|v| success(v * 2));
        assert_eq!(chained.dispatch_state(), DispatchState::Handled);
    }

    #[test]
    fn test_then_with_tag_sees_tag() {
        let out: Outcome<i32, ()> = Outcome::success_tagged(1, "cached");
        let seen =
            out.then_with_tag(|v, tag| success::<String, ()>(format!("{v}{}", tag.unwrap())));
        assert_eq!(seen.value().map(String::as_str), Some("1:cached"));
    }

    #[test]
    fn test_and_then_matches_then() {
        let a: Outcome<i32, ()> = success(4);
        let b: Outcome<i32, ()> = success(4);
        assert_eq!(a.then(|v| success(v * v)), b.and_then(|v| success(v * v)));

        let c: Outcome<i32, u8> = failure(1);
        assert_eq!(c.and_then(|v| success::<i32, u8>(v)), failure(1));
    }

    #[test]
    fn test_or_else_recovers_failure() {
        let out: Outcome<i32, &str> = failure("missing");
        assert_eq!(out.or_else(|_| success::<i32, ()>(0)), success(0));
    }

    #[test]
    fn test_catch_skips_success() {
        let called = Cell::new(false);
        let out: Outcome<i32, &str> = Outcome::success_tagged(7, "t");
        let caught: Outcome<i32, u8> = out.catch(|_| {
            called.set(true);
            failure(0)
        });
        assert!(!called.get());
        assert_eq!(caught, Outcome::success_tagged(7, "t"));
    }

    #[test]
    fn test_catch_with_tag_sees_tag() {
        let out: Outcome<i32, &str> = Outcome::failure_tagged("gone", "not_found");
        let recovered = out.catch_with_tag(|_, tag| {
            if tag.is_some_and(|t| t == "not_found") {
                success::<i32, &str>(-1)
            } else {
                failure("other")
            }
        });
        assert_eq!(recovered, success(-1));
    }

    #[test]
    fn test_or_else_with_tag_on_untagged_failure() {
        let out: Outcome<i32, &str> = failure("e");
        let recovered = out.or_else_with_tag(|e, tag| {
            assert!(tag.is_none());
            failure::<i32, String>(e.to_uppercase())
        });
        assert_eq!(recovered, failure("E".to_string()));
    }

    #[test]
    fn test_map_and_map_error_keep_tag() {
        let ok: Outcome<i32, ()> = Outcome::success_tagged(2, "t");
        assert_eq!(ok.map(|v| v * 10), Outcome::success_tagged(20, "t"));

        let err: Outcome<(), i32> = Outcome::failure_tagged(2, "t");
        assert_eq!(err.map_error(|e| e + 1), Outcome::failure_tagged(3, "t"));
    }

    #[test]
    fn test_map_keeps_handled_state() {
        let ok: Outcome<i32, ()> = success(1).on_success(Selector::unhandled(), |_| {});
        assert!(ok.map(|v| v + 1).is_handled());
    }

    #[test]
    fn test_terminal_extraction() {
        let ok: Outcome<i32, &str> = success(1);
        let err: Outcome<i32, &str> = failure("x");
        assert_eq!(ok.clone().value_or(0), 1);
        assert_eq!(err.clone().value_or(0), 0);
        assert_eq!(err.clone().value_or_else(|e| e.len() as i32), 1);
        assert_eq!(ok.fold(|v| v.to_string(), |e| e.to_string()), "1");
        assert_eq!(err.fold(|v| v.to_string(), |e| e.to_string()), "x");
    }
}
