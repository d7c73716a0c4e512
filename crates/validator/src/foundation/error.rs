//! Error types for validation failures.
//!
//! A failed rule produces a [`ValidationError`]: the caller-selected
//! [`ErrorKind`], a structured [`Violation`] describing what went wrong and
//! which keys were involved, and a rendered snapshot of the map under
//! validation that is appended to the display output for debugging.
//!
//! Offending keys are available programmatically via [`Violation::keys`],
//! so callers never have to parse the formatted message.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;
use thiserror::Error;

/// Offending-key list carried inside a [`Violation`].
///
/// Rule argument lists are short, so the first few keys live inline.
pub type KeyList = SmallVec<[String; 4]>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Caller-selected classification attached to every violation.
///
/// The kind does not influence which checks run; it exists so that the code
/// catching a [`ValidationError`] at the boundary can dispatch without
/// inspecting the message (for example, translating `bad_argument` into a
/// 400 response and a custom kind into something else).
///
/// # Examples
///
/// ```
/// use mapcheck_validator::foundation::ErrorKind;
///
/// let kind = ErrorKind::new("query_rejected");
/// assert_eq!(kind.as_str(), "query_rejected");
/// assert_eq!(ErrorKind::default(), ErrorKind::BAD_ARGUMENT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorKind(Cow<'static, str>);

impl ErrorKind {
    /// The default kind: a generic bad-argument classification.
    pub const BAD_ARGUMENT: Self = Self(Cow::Borrowed("bad_argument"));

    /// Creates a kind from an identifier.
    ///
    /// Static strings do not allocate.
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ErrorKind {
    fn default() -> Self {
        Self::BAD_ARGUMENT
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ErrorKind {
    fn from(id: &'static str) -> Self {
        Self::new(id)
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// Structured description of a single failed rule.
///
/// One variant per logical failure mode. The `term`/`terms` fields carry the
/// policy noun ("param"/"params" by default) already resolved, so `Display`
/// needs no further context.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    /// One or more declared-required keys are absent.
    #[error("required {terms} {keys:?} missing")]
    MissingRequiredKeys {
        /// Pluralized policy noun.
        terms: String,
        /// The missing keys, in declaration order.
        keys: KeyList,
    },

    /// Fewer than the allowed number of an alternative-key group are present.
    #[error("{required} or more {terms} in {keys:?} must be given")]
    InsufficientAlternatives {
        /// Maximum number of keys from the group that may be absent.
        required: usize,
        /// Pluralized policy noun.
        terms: String,
        /// The absent keys from the group, in declaration order.
        keys: KeyList,
    },

    /// Keys are present that were never declared required or permitted.
    #[error("extra {terms} {keys:?}")]
    UnexpectedKeys {
        /// Pluralized policy noun.
        terms: String,
        /// The undeclared keys, in map order.
        keys: KeyList,
    },

    /// A key's value fails an integer constraint.
    #[error("{term} {key:?} must be integer but was {value}")]
    TypeMismatch {
        /// Singular policy noun.
        term: String,
        /// The offending key.
        key: String,
        /// The actual value, rendered as compact JSON in the message.
        value: Value,
    },

    /// A key's value is null (or the key is absent) under a not-nil constraint.
    #[error("{term} {key:?} is nil")]
    NullValue {
        /// Singular policy noun.
        term: String,
        /// The offending key.
        key: String,
    },
}

impl Violation {
    /// Returns the offending key(s) for this violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapcheck_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let map = json!({"body": "x"}).as_object().unwrap().clone();
    /// let err = Validator::new(map).require(["id"]).unwrap_err();
    /// assert_eq!(err.keys(), ["id"]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> &[String] {
        match self {
            Self::MissingRequiredKeys { keys, .. }
            | Self::InsufficientAlternatives { keys, .. }
            | Self::UnexpectedKeys { keys, .. } => keys,
            Self::TypeMismatch { key, .. } | Self::NullValue { key, .. } => {
                std::slice::from_ref(key)
            }
        }
    }

    /// Stable snake_case code identifying the failure mode.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredKeys { .. } => "missing_required_keys",
            Self::InsufficientAlternatives { .. } => "insufficient_alternatives",
            Self::UnexpectedKeys { .. } => "unexpected_keys",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::NullValue { .. } => "null_value",
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The error surfaced by a failed validation chain.
///
/// Display output is the primary violation message followed by a diagnostic
/// suffix rendering the full map, separated by a newline and a tab:
///
/// ```text
/// required params ["id"] missing
///     in {"body":"x"}
/// ```
///
/// Exactly one `ValidationError` is produced per failed chain; the first
/// failing rule aborts evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{violation}\n\tin {data}")]
pub struct ValidationError {
    kind: ErrorKind,
    violation: Violation,
    data: String,
}

impl ValidationError {
    pub(crate) fn new(kind: ErrorKind, violation: Violation, data: String) -> Self {
        Self {
            kind,
            violation,
            data,
        }
    }

    /// The caller-selected classification this error was raised under.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The structured violation behind this error.
    #[must_use]
    pub fn violation(&self) -> &Violation {
        &self.violation
    }

    /// The offending key(s), in message order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        self.violation.keys()
    }

    /// Stable snake_case code identifying the failure mode.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.violation.code()
    }

    /// Compact-JSON rendering of the map that was under validation.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Consumes the error, returning the structured violation.
    #[must_use]
    pub fn into_violation(self) -> Violation {
        self.violation
    }
}

// ============================================================================
// TESTS
// ============================================================================
