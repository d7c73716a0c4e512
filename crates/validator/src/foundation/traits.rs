//! Core traits for the rule engine.
//!
//! This module defines [`Rule`], the trait every validation rule implements,
//! and [`RuleExt`], the extension trait that provides combinator methods.

use super::context::ValidationContext;
use super::error::ValidationError;
use crate::combinators::Then;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A single validation step in a rule chain.
///
/// A rule runs against the chain's shared [`ValidationContext`]: it may
/// extend the permitted-key set, and it either returns `Ok(())` to let the
/// chain continue or surfaces the first violation as an error, which aborts
/// the chain. Rules never mutate the map's values.
///
/// The trait is object safe, so heterogeneous rule lists can be stored as
/// `Vec<Box<dyn Rule>>`.
///
/// # Examples
///
/// ```
/// use mapcheck_validator::prelude::*;
/// use serde_json::json;
///
/// struct NonEmpty;
///
/// impl Rule for NonEmpty {
///     fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
///         if ctx.data().is_empty() {
///             return Err(ctx.missing_required(
///                 std::iter::once("any".to_owned()).collect(),
///             ));
///         }
///         Ok(())
///     }
/// }
///
/// let map = json!({"a": 1}).as_object().unwrap().clone();
/// let mut ctx = ValidationContext::new(map);
/// assert!(NonEmpty.check(&mut ctx).is_ok());
/// ```
pub trait Rule {
    /// Runs this rule against the chain state.
    ///
    /// # Errors
    ///
    /// Returns the violation this rule detected; the caller must stop
    /// evaluating the chain.
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError>;
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
        (**self).check(ctx)
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
        (**self).check(ctx)
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Rule`]. Sequential composition with
/// [`then`](RuleExt::then) is how reusable validation recipes are built: a
/// named recipe is just a function returning the composed rule.
///
/// # Examples
///
/// ```
/// use mapcheck_validator::prelude::*;
/// use serde_json::json;
///
/// fn post_body() -> impl Rule {
///     require(["author", "body"]).then(permit(["tags"])).then(only())
/// }
///
/// let map = json!({"author": "me", "body": "x"}).as_object().unwrap().clone();
/// assert!(Validator::new(map).apply(post_body()).is_ok());
/// ```
pub trait RuleExt: Rule + Sized {
    /// Runs this rule, then `next`, short-circuiting on the first error.
    fn then<R: Rule>(self, next: R) -> Then<Self, R> {
        Then::new(self, next)
    }
}

impl<T: Rule> RuleExt for T {}

// ============================================================================
// TESTS
// ============================================================================
