//! The per-chain validation context: map data, permitted keys, error policy.
//!
//! A [`ValidationContext`] is created fresh for each validation attempt and
//! discarded when the chain completes or errors. Rules read the map, extend
//! the permitted-key set, and mint errors through the context so that every
//! error carries the policy kind, the policy noun, and the map snapshot.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{ErrorKind, KeyList, ValidationError, Violation};

// ============================================================================
// KEY MODE
// ============================================================================

/// How keys are compared, fixed once at construction.
///
/// Under [`KeyMode::Normalized`] (the default) a leading `:` sigil is
/// stripped from every key before comparison, so `":author"` and `"author"`
/// name the same key, whether they appear in the map or in a rule argument.
/// Under [`KeyMode::Raw`] keys are compared as literal strings.
///
/// # Examples
///
/// ```
/// use mapcheck_validator::prelude::*;
/// use serde_json::json;
///
/// let map = json!({":author": "me"}).as_object().unwrap().clone();
/// assert!(Validator::new(map).require(["author"]).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMode {
    /// Strip a leading `:` sigil before comparing.
    #[default]
    Normalized,
    /// Compare literal strings.
    Raw,
}

impl KeyMode {
    /// Canonical form of `key` under this mode.
    pub(crate) fn canonical(self, key: &str) -> &str {
        match self {
            Self::Normalized => key.strip_prefix(':').unwrap_or(key),
            Self::Raw => key,
        }
    }
}

// ============================================================================
// PERMITTED KEYS
// ============================================================================

/// The accumulated set of keys declared acceptable so far in a chain.
///
/// `Enumerated` grows as `require`/`permit`-family rules run; it never
/// shrinks. `All` is the open mode: every present key counts as permitted
/// and [`crate::rules::Only`] can no longer find extras.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermittedKeys {
    /// An explicit, growing set of canonical key names.
    Enumerated(BTreeSet<String>),
    /// Every key is permitted.
    All,
}

impl Default for PermittedKeys {
    fn default() -> Self {
        Self::Enumerated(BTreeSet::new())
    }
}

impl PermittedKeys {
    /// Membership test against a canonical key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        match self {
            Self::Enumerated(set) => set.contains(key),
            Self::All => true,
        }
    }

    /// Whether the open "permit all" mode is active.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn extend(&mut self, keys: impl IntoIterator<Item = String>) {
        if let Self::Enumerated(set) = self {
            set.extend(keys);
        }
    }
}

// ============================================================================
// OPTIONS AND POLICY
// ============================================================================

/// Construction options for a validator.
///
/// # Examples
///
/// ```
/// use mapcheck_validator::prelude::*;
///
/// let options = ValidatorOptions::new()
///     .with_kind(ErrorKind::new("body_rejected"))
///     .with_term("field")
///     .with_key_mode(KeyMode::Raw);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorOptions {
    #[serde(default)]
    kind: ErrorKind,
    #[serde(default)]
    term: Option<String>,
    #[serde(default)]
    terms: Option<String>,
    #[serde(default)]
    key_mode: KeyMode,
}

impl ValidatorOptions {
    /// Creates the default options: kind `bad_argument`, term `param`,
    /// normalized key comparison.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the error classification raised on any violation.
    #[must_use]
    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the singular noun used in messages (default `"param"`).
    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Overrides the plural noun; otherwise it is derived from the term.
    #[must_use]
    pub fn with_terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = Some(terms.into());
        self
    }

    /// Sets the key comparison mode.
    #[must_use]
    pub fn with_key_mode(mut self, key_mode: KeyMode) -> Self {
        self.key_mode = key_mode;
        self
    }
}

/// Resolved error policy: classification plus singular/plural nouns.
#[derive(Debug, Clone)]
pub(crate) struct ErrorPolicy {
    pub(crate) kind: ErrorKind,
    pub(crate) term: String,
    pub(crate) terms: String,
}

impl ErrorPolicy {
    fn resolve(options: &ValidatorOptions) -> Self {
        let term = options.term.clone().unwrap_or_else(|| "param".to_owned());
        let terms = options
            .terms
            .clone()
            .unwrap_or_else(|| pluralize(&term));
        Self {
            kind: options.kind.clone(),
            term,
            terms,
        }
    }
}

/// Naive English plural, enough for nouns like "param", "field", "entry".
/// Irregular nouns go through [`ValidatorOptions::with_terms`].
fn pluralize(term: &str) -> String {
    if term.ends_with('s')
        || term.ends_with('x')
        || term.ends_with('z')
        || term.ends_with("ch")
        || term.ends_with("sh")
    {
        format!("{term}es")
    } else if let Some(stem) = term.strip_suffix('y') {
        if stem.ends_with(|c: char| "aeiou".contains(c)) {
            format!("{term}s")
        } else {
            format!("{stem}ies")
        }
    } else {
        format!("{term}s")
    }
}

// ============================================================================
// VALIDATION CONTEXT
// ============================================================================

/// Shared state of one rule chain.
///
/// Owns a working copy of the map under validation (values are never
/// mutated), the accumulated [`PermittedKeys`], and the error policy. One
/// context per validation attempt; it is not meant to be reused across
/// independent maps or shared between threads.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    data: Map<String, Value>,
    permitted: PermittedKeys,
    key_mode: KeyMode,
    policy: ErrorPolicy,
}

impl ValidationContext {
    /// Creates a context with default options.
    #[must_use]
    pub fn new(data: Map<String, Value>) -> Self {
        Self::with_options(data, ValidatorOptions::default())
    }

    /// Creates a context with explicit options.
    #[must_use]
    pub fn with_options(data: Map<String, Value>, options: ValidatorOptions) -> Self {
        let policy = ErrorPolicy::resolve(&options);
        Self {
            data,
            permitted: PermittedKeys::default(),
            key_mode: options.key_mode,
            policy,
        }
    }

    /// The map under validation.
    #[must_use]
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// The permitted-key set accumulated so far.
    #[must_use]
    pub fn permitted(&self) -> &PermittedKeys {
        &self.permitted
    }

    /// The key comparison mode fixed at construction.
    #[must_use]
    pub fn key_mode(&self) -> KeyMode {
        self.key_mode
    }

    /// Canonical form of `key` under the context's mode.
    #[must_use]
    pub fn canonical<'a>(&self, key: &'a str) -> &'a str {
        self.key_mode.canonical(key)
    }

    /// Looks up a value under canonical key comparison.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        let want = self.key_mode.canonical(key);
        self.data
            .iter()
            .find(|(k, _)| self.key_mode.canonical(k) == want)
            .map(|(_, v)| v)
    }

    /// Whether the map contains `key` under canonical comparison.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Canonical forms of the map's keys, in map order, deduplicated.
    #[must_use]
    pub fn present_keys(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.data
            .keys()
            .map(|k| self.key_mode.canonical(k))
            .filter(|k| seen.insert(*k))
            .collect()
    }

    /// Adds `keys` (canonicalized) to the permitted set.
    ///
    /// No-op under [`PermittedKeys::All`]. The set only grows; no rule
    /// removes keys from it.
    pub fn permit<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mode = self.key_mode;
        self.permitted
            .extend(keys.into_iter().map(|k| mode.canonical(k).to_owned()));
    }

    /// Switches the permitted set to the open "permit all" mode.
    pub fn permit_all(&mut self) {
        self.permitted = PermittedKeys::All;
    }

    /// Whether `key` (canonicalized) is permitted so far.
    #[must_use]
    pub fn is_permitted(&self, key: &str) -> bool {
        self.permitted.contains(self.key_mode.canonical(key))
    }

    // ------------------------------------------------------------------------
    // Violation constructors
    //
    // Rules detect their own violations and mint the error here, so the
    // policy kind, the resolved noun, and the map snapshot are applied in
    // exactly one place.
    // ------------------------------------------------------------------------

    /// Mints a missing-required-keys error.
    #[must_use]
    pub fn missing_required(&self, keys: KeyList) -> ValidationError {
        self.violation(Violation::MissingRequiredKeys {
            terms: self.policy.terms.clone(),
            keys,
        })
    }

    /// Mints an insufficient-alternatives error.
    #[must_use]
    pub fn insufficient_alternatives(&self, required: usize, keys: KeyList) -> ValidationError {
        self.violation(Violation::InsufficientAlternatives {
            required,
            terms: self.policy.terms.clone(),
            keys,
        })
    }

    /// Mints an unexpected-keys error.
    #[must_use]
    pub fn unexpected(&self, keys: KeyList) -> ValidationError {
        self.violation(Violation::UnexpectedKeys {
            terms: self.policy.terms.clone(),
            keys,
        })
    }

    /// Mints a type-mismatch error for a non-integer value.
    #[must_use]
    pub fn not_integer(&self, key: &str, value: &Value) -> ValidationError {
        self.violation(Violation::TypeMismatch {
            term: self.policy.term.clone(),
            key: key.to_owned(),
            value: value.clone(),
        })
    }

    /// Mints a null-value error.
    #[must_use]
    pub fn nil_value(&self, key: &str) -> ValidationError {
        self.violation(Violation::NullValue {
            term: self.policy.term.clone(),
            key: key.to_owned(),
        })
    }

    fn violation(&self, violation: Violation) -> ValidationError {
        let snapshot = Value::Object(self.data.clone()).to_string();
        ValidationError::new(self.policy.kind.clone(), violation, snapshot)
    }
}

// ============================================================================
// TESTS
// ============================================================================
