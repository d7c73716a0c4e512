//! Presence rules: keys that must exist, alternative groups, non-null values.

use crate::foundation::{KeyList, Rule, ValidationContext, ValidationError};

/// Missing keys from `keys`, canonicalized, in argument order, deduplicated.
fn missing_keys(ctx: &ValidationContext, keys: &[String]) -> KeyList {
    let mut missing = KeyList::new();
    for key in keys {
        let canon = ctx.canonical(key);
        if !ctx.contains(canon) && !missing.iter().any(|m| m == canon) {
            missing.push(canon.to_owned());
        }
    }
    missing
}

// ============================================================================
// REQUIRE
// ============================================================================

/// Requires every listed key to be present.
///
/// The keys are also added to the permitted set, so a later `only()` accepts
/// them.
///
/// # Examples
///
/// ```
/// use mapcheck_validator::prelude::*;
/// use serde_json::json;
///
/// let map = json!({"author": "me"}).as_object().unwrap().clone();
/// assert!(Validator::new(map.clone()).require(["author"]).is_ok());
/// assert!(Validator::new(map).require(["id"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Require {
    keys: Vec<String>,
}

impl Rule for Require {
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
        ctx.permit(self.keys.iter().map(String::as_str));
        let missing = missing_keys(ctx, &self.keys);
        if !missing.is_empty() {
            return Err(ctx.missing_required(missing));
        }
        Ok(())
    }
}

/// Creates a [`Require`] rule.
#[must_use]
pub fn require<I, K>(keys: I) -> Require
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    Require {
        keys: keys.into_iter().map(Into::into).collect(),
    }
}

// ============================================================================
// REQUIRE N OF
// ============================================================================

/// Requires that at most `allowed_missing` keys of an alternative group are
/// absent.
///
/// With a group of three keys and `allowed_missing = 2`, at least one key
/// must be present. The whole group is added to the permitted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireNOf {
    allowed_missing: usize,
    keys: Vec<String>,
}

impl Rule for RequireNOf {
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
        ctx.permit(self.keys.iter().map(String::as_str));
        let missing = missing_keys(ctx, &self.keys);
        if missing.len() > self.allowed_missing {
            return Err(ctx.insufficient_alternatives(self.allowed_missing, missing));
        }
        Ok(())
    }
}

/// Creates a [`RequireNOf`] rule.
#[must_use]
pub fn require_n_of<I, K>(allowed_missing: usize, keys: I) -> RequireNOf
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    RequireNOf {
        allowed_missing,
        keys: keys.into_iter().map(Into::into).collect(),
    }
}

/// Creates a [`RequireNOf`] rule that tolerates one absent key, which for a
/// two-key group means "at least one of the two must be given".
///
/// # Examples
///
/// ```
/// use mapcheck_validator::prelude::*;
/// use serde_json::json;
///
/// let map = json!({"get": "/a"}).as_object().unwrap().clone();
/// assert!(Validator::new(map).require_one_of(["get", "post"]).is_ok());
///
/// let empty = json!({}).as_object().unwrap().clone();
/// assert!(Validator::new(empty).require_one_of(["get", "post"]).is_err());
/// ```
#[must_use]
pub fn require_one_of<I, K>(keys: I) -> RequireNOf
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    require_n_of(1, keys)
}

// ============================================================================
// NOT NIL
// ============================================================================

/// Requires each listed key's value to be non-null.
///
/// An absent key and a present-but-null value are treated the same. The keys
/// are added to the permitted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotNil {
    keys: Vec<String>,
}

impl Rule for NotNil {
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
        ctx.permit(self.keys.iter().map(String::as_str));
        for key in &self.keys {
            match ctx.get(key) {
                None | Some(serde_json::Value::Null) => {
                    return Err(ctx.nil_value(ctx.canonical(key)));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Creates a [`NotNil`] rule.
#[must_use]
pub fn not_nil<I, K>(keys: I) -> NotNil
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    NotNil {
        keys: keys.into_iter().map(Into::into).collect(),
    }
}
