//! # Outcome — the Success/Failure Result Type
//!
//! [`Outcome<V, E>`] holds either a value (Success) or an error (Failure),
//! plus an optional [`TypeTag`] used for dispatch matching. Exactly one of
//! value and error is present; the private [`Payload`] enum makes any other
//! shape unrepresentable.
//!
//! ## Immutability
//!
//! Nothing exposes `&mut` access to the payload or the tag. The only state
//! that ever changes after construction is the [`DispatchState`], and it
//! only moves from `Unhandled` to `Handled` (see [`crate::dispatch`]).
//!
//! ## Serialized Form
//!
//! ```text
//! {"success": <value>, "tag": "ok"}
//! {"failure": <error>}
//! ```
//!
//! The tag is omitted when absent. Dispatch state and notifier are runtime
//! concerns and are not serialized; a deserialized outcome starts Unhandled.

use std::fmt;

use serde::{Deserialize, Serialize};
use verdict_notice::{default_notifier, SharedNotifier};

use crate::dispatch::DispatchState;
use crate::error::UnwrapError;
use crate::tag::TypeTag;

// ─── Variant ─────────────────────────────────────────────────────────

/// Which of the two cases an outcome is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Value-bearing case.
    Success,
    /// Error-bearing case.
    Failure,
}

impl Variant {
    /// The variant name as used by `Display` on outcomes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Payload ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Payload<V, E> {
    Success(V),
    Failure(E),
}

// ─── Outcome ─────────────────────────────────────────────────────────

/// The outcome of an operation: Success carrying `V`, or Failure carrying `E`.
///
/// ```
/// use verdict_core::Outcome;
///
/// let found: Outcome<u32, String> = Outcome::success_tagged(7, "cached");
/// assert!(found.is_success());
/// assert_eq!(found.value(), Some(&7));
/// assert_eq!(found.tag().map(|t| t.as_str()), Some("cached"));
/// assert_eq!(found.to_string(), "Success(7)");
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct Outcome<V, E> {
    #[serde(flatten)]
    pub(crate) payload: Payload<V, E>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) tag: Option<TypeTag>,
    #[serde(skip)]
    pub(crate) state: DispatchState,
    #[serde(skip)]
    pub(crate) notifier: Option<SharedNotifier>,
}

/// Untagged Success.
pub fn success<V, E>(value: V) -> Outcome<V, E> {
    Outcome::success(value)
}

/// Untagged Failure.
pub fn failure<V, E>(error: E) -> Outcome<V, E> {
    Outcome::failure(error)
}

impl<V, E> Outcome<V, E> {
    fn from_parts(payload: Payload<V, E>, tag: Option<TypeTag>) -> Self {
        Self {
            payload,
            tag,
            state: DispatchState::Unhandled,
            notifier: None,
        }
    }

    /// Untagged Success.
    pub fn success(value: V) -> Self {
        Self::from_parts(Payload::Success(value), None)
    }

    /// Untagged Failure.
    pub fn failure(error: E) -> Self {
        Self::from_parts(Payload::Failure(error), None)
    }

    /// Success carrying a type tag.
    pub fn success_tagged(value: V, tag: impl Into<TypeTag>) -> Self {
        Self::from_parts(Payload::Success(value), Some(tag.into()))
    }

    /// Failure carrying a type tag.
    pub fn failure_tagged(error: E, tag: impl Into<TypeTag>) -> Self {
        Self::from_parts(Payload::Failure(error), Some(tag.into()))
    }

    /// Attach the notifier that legacy dispatch calls report to.
    ///
    /// Without one, the process default from
    /// [`verdict_notice::default_notifier`] is used.
    pub fn with_notifier(mut self, notifier: SharedNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub(crate) fn resolved_notifier(&self) -> SharedNotifier {
        self.notifier.clone().unwrap_or_else(default_notifier)
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// Which case this outcome is.
    pub fn variant(&self) -> Variant {
        match self.payload {
            Payload::Success(_) => Variant::Success,
            Payload::Failure(_) => Variant::Failure,
        }
    }

    /// True iff this is a Success.
    pub fn is_success(&self) -> bool {
        matches!(self.payload, Payload::Success(_))
    }

    /// True iff this is a Failure.
    pub fn is_failure(&self) -> bool {
        matches!(self.payload, Payload::Failure(_))
    }

    /// The value of a Success; `None` on a Failure.
    pub fn value(&self) -> Option<&V> {
        match &self.payload {
            Payload::Success(value) => Some(value),
            Payload::Failure(_) => None,
        }
    }

    /// The error of a Failure; `None` on a Success.
    pub fn error(&self) -> Option<&E> {
        match &self.payload {
            Payload::Success(_) => None,
            Payload::Failure(error) => Some(error),
        }
    }

    /// The type tag, if the producer set one.
    pub fn tag(&self) -> Option<&TypeTag> {
        self.tag.as_ref()
    }

    /// Borrow both payloads, keeping the tag and dispatch state.
    ///
    /// A view of a Handled outcome is itself Handled, so no arm can run
    /// through it.
    pub fn as_ref(&self) -> Outcome<&V, &E> {
        let payload = match &self.payload {
            Payload::Success(value) => Payload::Success(value),
            Payload::Failure(error) => Payload::Failure(error),
        };
        Outcome {
            payload,
            tag: self.tag.clone(),
            state: self.state,
            notifier: self.notifier.clone(),
        }
    }

    /// Convert into a standard `Result`, dropping the tag.
    pub fn into_result(self) -> Result<V, E> {
        match self.payload {
            Payload::Success(value) => Ok(value),
            Payload::Failure(error) => Err(error),
        }
    }
}

// ── Strict access ────────────────────────────────────────────────────

impl<V, E: fmt::Debug> Outcome<V, E> {
    /// The value of a Success.
    ///
    /// # Errors
    ///
    /// [`UnwrapError::ValueOfFailure`] when called on a Failure.
    pub fn try_value(&self) -> Result<&V, UnwrapError> {
        match &self.payload {
            Payload::Success(value) => Ok(value),
            Payload::Failure(error) => Err(UnwrapError::ValueOfFailure {
                error: format!("{error:?}"),
            }),
        }
    }

    /// Consume a Success and return its value.
    ///
    /// # Errors
    ///
    /// [`UnwrapError::ValueOfFailure`] when called on a Failure.
    pub fn into_value(self) -> Result<V, UnwrapError> {
        match self.payload {
            Payload::Success(value) => Ok(value),
            Payload::Failure(error) => Err(UnwrapError::ValueOfFailure {
                error: format!("{error:?}"),
            }),
        }
    }
}

impl<V: fmt::Debug, E> Outcome<V, E> {
    /// The error of a Failure.
    ///
    /// # Errors
    ///
    /// [`UnwrapError::ErrorOfSuccess`] when called on a Success.
    pub fn try_error(&self) -> Result<&E, UnwrapError> {
        match &self.payload {
            Payload::Success(value) => Err(UnwrapError::ErrorOfSuccess {
                value: format!("{value:?}"),
            }),
            Payload::Failure(error) => Ok(error),
        }
    }

    /// Consume a Failure and return its error.
    ///
    /// # Errors
    ///
    /// [`UnwrapError::ErrorOfSuccess`] when called on a Success.
    pub fn into_error(self) -> Result<E, UnwrapError> {
        match self.payload {
            Payload::Success(value) => Err(UnwrapError::ErrorOfSuccess {
                value: format!("{value:?}"),
            }),
            Payload::Failure(error) => Ok(error),
        }
    }
}

// ── Trait impls ──────────────────────────────────────────────────────

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

/// Equality compares variant, payload and tag. Dispatch state and the
/// attached notifier are not part of an outcome's identity.
impl<V: PartialEq, E: PartialEq> PartialEq for Outcome<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload && self.tag == other.tag
    }
}

impl<V: Eq, E: Eq> Eq for Outcome<V, E> {}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outcome")
            .field("payload", &self.payload)
            .field("tag", &self.tag)
            .field("state", &self.state)
            .finish()
    }
}

/// `Success(<value:?>)` or `Failure(<error:?>)`.
impl<V: fmt::Debug, E: fmt::Debug> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Success(value) => write!(f, "Success({value:?})"),
            Payload::Failure(error) => write!(f, "Failure({error:?})"),
        }
    }
}
