//! Type rules: integer constraints on individual values.

use serde_json::Value;

use crate::foundation::{Rule, ValidationContext, ValidationError};

/// A JSON number that fits an i64 or u64. Floats and numeric strings do not
/// qualify.
fn is_integer(value: &Value) -> bool {
    value.as_i64().is_some() || value.as_u64().is_some()
}

// ============================================================================
// INT
// ============================================================================

/// Requires each listed key's value, when present, to be an integer.
///
/// An absent key passes silently: this rule does not imply presence.
/// Compose with `require` when the key must also exist. A present `null`
/// is not an integer and fails; use [`IntOrNil`] to accept it.
///
/// # Examples
///
/// ```
/// use mapcheck_validator::prelude::*;
/// use serde_json::json;
///
/// let map = json!({"age": 30}).as_object().unwrap().clone();
/// assert!(Validator::new(map).int(["age", "height"]).is_ok());
///
/// let bad = json!({"age": "thirty"}).as_object().unwrap().clone();
/// assert!(Validator::new(bad).int(["age"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Int {
    keys: Vec<String>,
}

impl Rule for Int {
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
        ctx.permit(self.keys.iter().map(String::as_str));
        for key in &self.keys {
            match ctx.get(key) {
                None => {}
                Some(value) if is_integer(value) => {}
                Some(value) => return Err(ctx.not_integer(ctx.canonical(key), value)),
            }
        }
        Ok(())
    }
}

/// Creates an [`Int`] rule.
#[must_use]
pub fn int<I, K>(keys: I) -> Int
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    Int {
        keys: keys.into_iter().map(Into::into).collect(),
    }
}

// ============================================================================
// INT OR NIL
// ============================================================================

/// Like [`Int`], but an explicit `null` is also acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntOrNil {
    keys: Vec<String>,
}

impl Rule for IntOrNil {
    fn check(&self, ctx: &mut ValidationContext) -> Result<(), ValidationError> {
        ctx.permit(self.keys.iter().map(String::as_str));
        for key in &self.keys {
            match ctx.get(key) {
                None | Some(Value::Null) => {}
                Some(value) if is_integer(value) => {}
                Some(value) => return Err(ctx.not_integer(ctx.canonical(key), value)),
            }
        }
        Ok(())
    }
}

/// Creates an [`IntOrNil`] rule.
#[must_use]
pub fn int_or_nil<I, K>(keys: I) -> IntOrNil
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    IntOrNil {
        keys: keys.into_iter().map(Into::into).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx(value: serde_json::Value) -> ValidationContext {
        ValidationContext::new(value.as_object().expect("object literal").clone())
    }

    #[test]
    fn integer_values_pass() {
        let mut c = ctx(json!({"a": 1, "b": -2, "c": 9_223_372_036_854_775_807i64}));
        assert!(int(["a", "b", "c"]).check(&mut c).is_ok());
    }

    #[test]
    fn absent_key_passes() {
        let mut c = ctx(json!({}));
        assert!(int(["age"]).check(&mut c).is_ok());
        // But the key still counts as declared for a later only().
        assert!(c.is_permitted("age"));
    }

    #[test]
    fn float_is_not_an_integer() {
        let mut c = ctx(json!({"age": 30.5}));
        let err = int(["age"]).check(&mut c).unwrap_err();
        assert_eq!(err.code(), "type_mismatch");
    }

    #[test]
    fn numeric_string_is_not_an_integer() {
        let mut c = ctx(json!({"age": "30"}));
        let err = int(["age"]).check(&mut c).unwrap_err();
        assert_eq!(
            err.to_string(),
            "param \"age\" must be integer but was \"30\"\n\tin {\"age\":\"30\"}"
        );
    }

    #[test]
    fn null_fails_int_but_passes_int_or_nil() {
        let mut strict = ctx(json!({"age": null}));
        assert!(int(["age"]).check(&mut strict).is_err());

        let mut lenient = ctx(json!({"age": null}));
        assert!(int_or_nil(["age"]).check(&mut lenient).is_ok());
    }

    #[test]
    fn int_or_nil_still_rejects_wrong_types() {
        let mut c = ctx(json!({"age": []}));
        let err = int_or_nil(["age"]).check(&mut c).unwrap_err();
        assert_eq!(err.code(), "type_mismatch");
    }
}
