//! THEN combinator - sequential composition of rules.
//!
//! This module provides the [`Then`] combinator which runs two rules in
//! order against the same chain state. The left rule's additions to the
//! permitted-key set are visible to the right rule, which is what makes
//! positional checks like `only()` meaningful inside composed recipes.

use crate::foundation::{Rule, ValidationContext, ValidationError};

/// Runs two rules in sequence, short-circuiting on the first error.
///
/// # Type Parameters
///
/// * `L` - The first rule
/// * `R` - The second rule
///
/// # Examples
///
/// ```
/// use mapcheck_validator::combinators::Then;
/// use mapcheck_validator::prelude::*;
/// use serde_json::json;
///
/// let recipe = Then::new(require(["author"]), only());
/// let map = json!({"author": "me"}).as_object().unwrap().clone();
/// assert!(Validator::new(map).apply(recipe).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Then<L, R> {
    pub(crate) first: L,
    pub(crate) second: R,
}

impl<L, R> Then<L, R> {
    /// Creates a new `Then` combinator.
    pub fn new(first: L, second: R) -> Self {
        Self { first, second }
    }

    /// Returns a reference to the first rule.
    pub fn first(&self) -> &L {
        &self.first
    }

    /// Returns a reference to the second rule.
    pub fn second(&self) -> &R {
        &self.second
    }

    /// Extracts both rules.
    pub fn into_parts(self) -> (L, R) {
        (self.first, self.second)
    }
}

impl<L, R> Rule for Then<L, R>
where
    L: Rule,
    R: Rule,
{
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
        self.first.check(ctx)?;
        self.second.check(ctx)?;
        Ok(())
    }
}

/// Creates a `Then` combinator from two rules.
///
/// Equivalent to `first.then(second)`.
pub fn then<L, R>(first: L, second: R) -> Then<L, R>
where
    L: Rule,
    R: Rule,
{
    Then::new(first, second)
}

/// Creates a `ThenAll` combinator from a vector of rules.
///
/// Useful when the number of rules is only known at runtime, for example a
/// recipe assembled from configuration.
///
/// # Examples
///
/// ```
/// use mapcheck_validator::combinators::then_all;
/// use mapcheck_validator::prelude::*;
/// use serde_json::json;
///
/// let rules: Vec<Box<dyn Rule>> = vec![
///     Box::new(require(["author"])),
///     Box::new(permit(["tags"])),
///     Box::new(only()),
/// ];
/// let map = json!({"author": "me", "tags": []}).as_object().unwrap().clone();
/// assert!(Validator::new(map).apply(then_all(rules)).is_ok());
/// ```
#[must_use]
pub fn then_all<V>(rules: Vec<V>) -> ThenAll<V>
where
    V: Rule,
{
    ThenAll { rules }
}

/// Runs every rule in a collection in order, short-circuiting on the first
/// error.
#[derive(Debug, Clone)]
pub struct ThenAll<V> {
    rules: Vec<V>,
}

impl<V> Rule for ThenAll<V>
where
    V: Rule,
{
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
        for rule in &self.rules {
            rule.check(ctx)?;
        }
        Ok(())
    }
}
