//! # Outcome Behavioural Properties
//!
//! The observable contract of `Outcome`: predicates, strict accessors,
//! bind and recovery short-circuiting, total `on` dispatch, first-match
//! dispatch chains, and the legacy form's deprecation notice.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use proptest::prelude::*;
use verdict_core::{
    failure, success, CapturingNotifier, DispatchState, Outcome, Selector, SharedNotifier,
    UnwrapError,
};

fn capturing() -> (Arc<CapturingNotifier>, SharedNotifier) {
    let capture = CapturingNotifier::shared();
    let shared: SharedNotifier = capture.clone();
    (capture, shared)
}

// =========================================================================
// Predicates and strict access
// =========================================================================

proptest! {
    #[test]
    fn success_is_successful_and_not_failed(v in any::<i64>()) {
        let out: Outcome<i64, String> = success(v);
        prop_assert!(out.is_success());
        prop_assert!(!out.is_failure());
        prop_assert_eq!(out.try_value(), Ok(&v));
        prop_assert!(out.try_error().is_err());
    }

    #[test]
    fn failure_is_failed_and_not_successful(e in ".{0,32}") {
        let out: Outcome<i64, String> = failure(e.clone());
        prop_assert!(out.is_failure());
        prop_assert!(!out.is_success());
        prop_assert_eq!(out.try_error(), Ok(&e));
        prop_assert!(out.try_value().is_err());
    }
}

#[test]
fn strict_access_on_wrong_variant_is_unwrap_error() {
    let ok: Outcome<&str, &str> = success("v");
    assert_eq!(
        ok.try_error(),
        Err(UnwrapError::ErrorOfSuccess {
            value: r#""v""#.to_string()
        })
    );

    let err: Outcome<&str, &str> = failure("e");
    assert_eq!(
        err.into_value(),
        Err(UnwrapError::ValueOfFailure {
            error: r#""e""#.to_string()
        })
    );
}

#[test]
fn lenient_access_never_fails() {
    let ok: Outcome<u8, u8> = success(1);
    assert_eq!((ok.value(), ok.error()), (Some(&1), None));
    let err: Outcome<u8, u8> = failure(2);
    assert_eq!((err.value(), err.error()), (None, Some(&2)));
}

// =========================================================================
// Bind and recovery
// =========================================================================

#[test]
fn then_on_success_yields_continuation_result() {
    let out: Outcome<i32, String> = success(1);
    assert_eq!(out.then(|v| success(v + 41)), success(42));
}

#[test]
fn then_on_failure_returns_original_without_calling() {
    let called = Cell::new(false);
    let out: Outcome<i32, String> = Outcome::failure_tagged("e".to_string(), "t");
    let chained = out.then(|v| {
        called.set(true);
        success::<i32, String>(v)
    });
    assert!(!called.get());
    assert_eq!(chained, Outcome::failure_tagged("e".to_string(), "t"));
}

#[test]
fn catch_on_failure_yields_recovery_result() {
    let out: Outcome<i32, String> = failure("e".to_string());
    assert_eq!(out.catch(|_| success::<i32, String>(7)), success(7));
}

#[test]
fn catch_on_success_returns_original_without_calling() {
    let called = Cell::new(false);
    let out: Outcome<i32, String> = success(3);
    let caught = out.catch(|e| {
        called.set(true);
        failure::<i32, String>(e)
    });
    assert!(!called.get());
    assert_eq!(caught, success(3));
}

// =========================================================================
// on
// =========================================================================

#[test]
fn on_invokes_only_the_success_branch() {
    let failure_called = Cell::new(false);
    let out: Outcome<&str, &str> = Outcome::success_tagged("v", "ok");
    let returned = out.on(
        |v| format!("saw {v}"),
        |_| {
            failure_called.set(true);
            String::new()
        },
    );
    assert_eq!(returned, "saw v");
    assert!(!failure_called.get());
    assert_eq!(out.dispatch_state(), DispatchState::Unhandled);
}

// =========================================================================
// Dispatch chains
// =========================================================================

fn abc_chain(out: Outcome<i32, ()>, ran: &RefCell<Vec<&'static str>>) -> Outcome<i32, ()> {
    out.on_success("a", |_| ran.borrow_mut().push("a"))
        .on_success("b", |_| ran.borrow_mut().push("b"))
        .on_success(Selector::unhandled(), |_| ran.borrow_mut().push("fallback"))
}

#[test]
fn explicit_tag_match_runs_only_its_arm() {
    let ran = RefCell::new(Vec::new());
    let out = abc_chain(Outcome::success_tagged(0, "a"), &ran);
    assert_eq!(*ran.borrow(), ["a"]);
    assert!(out.is_handled());
}

#[test]
fn unmatched_tag_runs_only_the_fallback() {
    let ran = RefCell::new(Vec::new());
    let out = abc_chain(Outcome::success_tagged(0, "zzz"), &ran);
    assert_eq!(*ran.borrow(), ["fallback"]);
    assert!(out.is_handled());
}

#[test]
fn on_failure_never_touches_a_success() {
    let ran = Cell::new(0);
    let mut out: Outcome<i32, ()> = Outcome::success_tagged(0, "a");
    for selector in [Selector::tag("a"), Selector::unhandled(), Selector::tags(["a", "b"])] {
        out = out.on_failure(selector, |_| ran.set(ran.get() + 1));
    }
    assert_eq!(ran.get(), 0);
    assert!(!out.is_handled());
}

#[test]
fn legacy_form_runs_unconditionally_and_notifies_once() {
    let (capture, shared) = capturing();
    let out: Outcome<RefCell<Vec<&str>>, ()> =
        Outcome::success_tagged(RefCell::new(Vec::new()), "error")
            .with_notifier(shared)
            .on_success(Selector::legacy(), |arr| arr.borrow_mut().push("It works!"));

    assert_eq!(*out.value().unwrap().borrow(), ["It works!"]);
    assert_eq!(capture.count(), 1);
    let notices = capture.notices();
    let notice = &notices[0];
    assert_eq!(notice.name, "verdict::Outcome::on_success");
    assert!(notice.alternative.contains("Selector::unhandled()"));
    assert!(notice.origin.contains("testable_properties.rs"), "origin: {}", notice.origin);
}

#[test]
fn display_inspects_the_payload() {
    let out: Outcome<&str, ()> = success("Yay!");
    assert_eq!(out.to_string(), r#"Success("Yay!")"#);
    let out: Outcome<(), &str> = failure("Nay");
    assert_eq!(out.to_string(), r#"Failure("Nay")"#);
}
