//! The fluent validation facade.
//!
//! [`Validator`] wraps a [`ValidationContext`] and exposes the built-in
//! rules as consuming, chainable methods. Methods that can detect a
//! violation return `Result<Validator, ValidationError>`, so a chain reads
//! naturally with `?` and the first violation aborts it:
//!
//! ```
//! use mapcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let map = json!({"author": "me", "body": "x", "date": "2026-08-06"})
//!     .as_object().unwrap().clone();
//!
//! Validator::new(map)
//!     .require(["author", "body", "date"])?
//!     .only()?;
//! # Ok::<(), mapcheck_validator::ValidationError>(())
//! ```
//!
//! A validator is built fresh per validation attempt and discarded
//! afterwards; it is not meant to be reused across independent maps.

use serde_json::{Map, Value};

use crate::foundation::{
    PermittedKeys, Rule, ValidationContext, ValidationError, ValidatorOptions,
};
use crate::rules;

/// A rule chain over one map.
///
/// Each rule method consumes the validator and returns it (or the first
/// violation). Reusable recipes composed with
/// [`RuleExt::then`](crate::foundation::RuleExt::then) run through
/// [`apply`](Validator::apply).
#[derive(Debug, Clone)]
pub struct Validator {
    ctx: ValidationContext,
}

impl Validator {
    /// Creates a validator with default options: kind `bad_argument`, term
    /// `"param"`, normalized key comparison.
    #[must_use]
    pub fn new(data: Map<String, Value>) -> Self {
        Self {
            ctx: ValidationContext::new(data),
        }
    }

    /// Creates a validator with explicit options.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapcheck_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let map = json!({}).as_object().unwrap().clone();
    /// let options = ValidatorOptions::new()
    ///     .with_kind(ErrorKind::new("body_rejected"))
    ///     .with_term("field");
    /// let err = Validator::with_options(map, options)
    ///     .require(["id"])
    ///     .unwrap_err();
    /// assert_eq!(err.kind().as_str(), "body_rejected");
    /// assert!(err.to_string().starts_with("required fields"));
    /// ```
    #[must_use]
    pub fn with_options(data: Map<String, Value>, options: ValidatorOptions) -> Self {
        Self {
            ctx: ValidationContext::with_options(data, options),
        }
    }

    /// Runs an arbitrary rule (typically a composed recipe) against this
    /// chain.
    ///
    /// # Errors
    ///
    /// Propagates the rule's violation.
    pub fn apply<R: Rule>(mut self, rule: R) -> Result<Self, ValidationError> {
        rule.check(&mut self.ctx)?;
        Ok(self)
    }

    /// Requires every listed key to be present.
    ///
    /// # Errors
    ///
    /// `missing_required_keys` when any listed key is absent.
    pub fn require<I, K>(self, keys: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.apply(rules::require(keys))
    }

    /// Requires that at most `allowed_missing` keys of the group are absent.
    ///
    /// # Errors
    ///
    /// `insufficient_alternatives` when more than `allowed_missing` keys of
    /// the group are absent.
    pub fn require_n_of<I, K>(self, allowed_missing: usize, keys: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.apply(rules::require_n_of(allowed_missing, keys))
    }

    /// Requires at least one key of a two-key group, see
    /// [`rules::require_one_of`].
    ///
    /// # Errors
    ///
    /// `insufficient_alternatives` when too few of the group are present.
    pub fn require_one_of<I, K>(self, keys: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.apply(rules::require_one_of(keys))
    }

    /// Declares keys that may exist. Never fails.
    #[must_use]
    pub fn permit<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        self.ctx.permit(keys.iter().map(String::as_str));
        self
    }

    /// Switches to the open "permit all keys" mode. Never fails.
    #[must_use]
    pub fn permit_all(mut self) -> Self {
        self.ctx.permit_all();
        self
    }

    /// Checks that only previously declared keys exist.
    ///
    /// # Errors
    ///
    /// `unexpected_keys` listing every present key not declared by an
    /// earlier rule in this chain.
    pub fn only(self) -> Result<Self, ValidationError> {
        self.apply(rules::only())
    }

    /// Convenience for `permit(keys)` followed by `only()`.
    ///
    /// # Errors
    ///
    /// Same as [`only`](Validator::only).
    pub fn permit_only<I, K>(self, keys: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.permit(keys).only()
    }

    /// Requires each listed key's value, when present, to be an integer.
    ///
    /// # Errors
    ///
    /// `type_mismatch` on the first present non-integer value.
    pub fn int<I, K>(self, keys: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.apply(rules::int(keys))
    }

    /// Like [`int`](Validator::int), but `null` is also acceptable.
    ///
    /// # Errors
    ///
    /// `type_mismatch` on the first present, non-null, non-integer value.
    pub fn int_or_nil<I, K>(self, keys: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.apply(rules::int_or_nil(keys))
    }

    /// Requires each listed key's value to be non-null.
    ///
    /// # Errors
    ///
    /// `null_value` on the first absent or null value.
    pub fn not_nil<I, K>(self, keys: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.apply(rules::not_nil(keys))
    }

    /// The map under validation.
    #[must_use]
    pub fn data(&self) -> &Map<String, Value> {
        self.ctx.data()
    }

    /// The permitted-key set accumulated so far.
    #[must_use]
    pub fn permitted(&self) -> &PermittedKeys {
        self.ctx.permitted()
    }

    /// Consumes the validator, returning the underlying context.
    #[must_use]
    pub fn into_context(self) -> ValidationContext {
        self.ctx
    }
}
