//! Permission rules: declaring acceptable keys and rejecting the rest.

use crate::combinators::Then;
use crate::foundation::{KeyList, Rule, RuleExt, ValidationContext, ValidationError};

// ============================================================================
// PERMIT
// ============================================================================

/// Declares keys that may exist, with no further restrictions.
///
/// Pure bookkeeping for a later [`Only`] checkpoint; never raises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permit {
    keys: Vec<String>,
}

impl Rule for Permit {
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
        ctx.permit(self.keys.iter().map(String::as_str));
        Ok(())
    }
}

/// Creates a [`Permit`] rule.
#[must_use]
pub fn permit<I, K>(keys: I) -> Permit
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    Permit {
        keys: keys.into_iter().map(Into::into).collect(),
    }
}

// ============================================================================
// ONLY
// ============================================================================

/// Checks that only previously declared keys exist.
///
/// Positional: the permitted set consulted is whatever earlier rules in the
/// same chain accumulated. Run first, it flags every present key as extra.
/// Under the open permit-all mode it never raises.
///
/// # Examples
///
/// ```
/// use mapcheck_validator::prelude::*;
/// use serde_json::json;
///
/// let map = json!({"author": "me", "extra": "y"}).as_object().unwrap().clone();
/// let err = Validator::new(map)
///     .require(["author"])
///     .and_then(Validator::only)
///     .unwrap_err();
/// assert_eq!(err.keys(), ["extra"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Only;

impl Rule for Only {
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
        let extra: KeyList = ctx
            .present_keys()
            .into_iter()
            .filter(|k| !ctx.is_permitted(k))
            .map(str::to_owned)
            .collect();
        if !extra.is_empty() {
            return Err(ctx.unexpected(extra));
        }
        Ok(())
    }
}

/// Creates an [`Only`] rule.
#[must_use]
pub fn only() -> Only {
    Only
}

/// Convenience for `permit(keys)` followed by `only()`.
///
/// The separate [`Only`] rule exists so the checkpoint can sit anywhere in
/// the chain, not just at a permit call.
#[must_use]
pub fn permit_only<I, K>(keys: I) -> Then<Permit, Only>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    permit(keys).then(only())
}

// ============================================================================
// PERMIT ALL
// ============================================================================

/// Switches the chain to the open "permit all keys" mode.
///
/// After this rule runs, [`Only`] can no longer find extras. There is no way
/// back to an enumerated set within the same chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermitAll;

impl Rule for PermitAll {
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
        ctx.permit_all();
        Ok(())
    }
}

/// Creates a [`PermitAll`] rule.
#[must_use]
pub fn permit_all() -> PermitAll {
    PermitAll
}
