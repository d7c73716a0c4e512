//! End-to-end rule chain tests: the canonical scenarios, message formats,
//! key normalization, and recipe composition.

use mapcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn map(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    value.as_object().expect("object literal").clone()
}

// ============================================================================
// CANONICAL SCENARIOS
// ============================================================================

#[test]
fn conforming_post_passes() {
    let data = map(json!({"author": "me", "body": "x", "date": "2026-08-06"}));
    let result = Validator::new(data)
        .require(["author", "body", "date"])
        .and_then(Validator::only);
    assert!(result.is_ok());
}

#[test]
fn undeclared_key_is_rejected_at_only() {
    let data = map(json!({"author": "me", "body": "x", "date": "t", "extra": "y"}));
    let err = Validator::new(data)
        .require(["author", "body", "date"])
        .and_then(Validator::only)
        .unwrap_err();
    assert_eq!(err.code(), "unexpected_keys");
    assert_eq!(err.keys(), ["extra"]);
}

#[test]
fn missing_required_key_is_rejected() {
    let err = Validator::new(map(json!({"body": "x"})))
        .require(["id"])
        .unwrap_err();
    assert_eq!(err.code(), "missing_required_keys");
    assert_eq!(err.keys(), ["id"]);
}

#[test]
fn one_of_group_accepts_either_alternative() {
    let result = Validator::new(map(json!({"get": "/a"})))
        .require_one_of(["get", "post"])
        .and_then(Validator::only);
    assert!(result.is_ok());

    let err = Validator::new(map(json!({})))
        .require_one_of(["get", "post"])
        .unwrap_err();
    assert_eq!(err.code(), "insufficient_alternatives");
}

#[test]
fn one_of_group_with_extra_body_needs_permit() {
    let data = map(json!({"post": "/a", "body": {"k": "v"}}));

    let permitted = Validator::new(data.clone())
        .require_one_of(["get", "post"])
        .map(|v| v.permit(["body"]))
        .and_then(Validator::only);
    assert!(permitted.is_ok());

    let err = Validator::new(data)
        .require_one_of(["get", "post"])
        .and_then(Validator::only)
        .unwrap_err();
    assert_eq!(err.keys(), ["body"]);
}

// ============================================================================
// MESSAGE FORMATS
// ============================================================================

#[rstest]
#[case::missing(
    json!({"b": 1}),
    &["a", "b", "c"],
    "required params [\"a\", \"c\"] missing\n\tin {\"b\":1}"
)]
#[case::missing_preserves_argument_order(
    json!({}),
    &["z", "a"],
    "required params [\"z\", \"a\"] missing\n\tin {}"
)]
fn require_message_format(
    #[case] data: serde_json::Value,
    #[case] keys: &[&str],
    #[case] expected: &str,
) {
    let err = Validator::new(map(data))
        .require(keys.iter().copied())
        .unwrap_err();
    assert_eq!(err.to_string(), expected);
}

#[test]
fn extra_keys_message_format() {
    let err = Validator::new(map(json!({"a": 1, "b": 2})))
        .permit_only(["a"])
        .unwrap_err();
    assert_eq!(err.to_string(), "extra params [\"b\"]\n\tin {\"a\":1,\"b\":2}");
}

#[test]
fn insufficient_alternatives_message_format() {
    let err = Validator::new(map(json!({})))
        .require_n_of(2, ["a", "b", "c"])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "2 or more params in [\"a\", \"b\", \"c\"] must be given\n\tin {}"
    );
}

#[test]
fn integer_mismatch_message_format() {
    let err = Validator::new(map(json!({"age": "ten"})))
        .int(["age"])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "param \"age\" must be integer but was \"ten\"\n\tin {\"age\":\"ten\"}"
    );
}

#[test]
fn nil_message_format() {
    let err = Validator::new(map(json!({"body": null})))
        .not_nil(["body"])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "param \"body\" is nil\n\tin {\"body\":null}"
    );
}

// ============================================================================
// KEY NORMALIZATION
// ============================================================================

#[rstest]
#[case::sigil_in_map(json!({":author": "me"}), "author")]
#[case::sigil_in_rule(json!({"author": "me"}), ":author")]
#[case::sigil_in_both(json!({":author": "me"}), ":author")]
#[case::sigil_in_neither(json!({"author": "me"}), "author")]
fn normalized_mode_matches_across_representations(
    #[case] data: serde_json::Value,
    #[case] rule_key: &str,
) {
    let result = Validator::new(map(data))
        .require([rule_key])
        .and_then(Validator::only);
    assert!(result.is_ok());
}

#[test]
fn raw_mode_keeps_representations_distinct() {
    let options = ValidatorOptions::new().with_key_mode(KeyMode::Raw);
    let err = Validator::with_options(map(json!({":author": "me"})), options)
        .require(["author"])
        .unwrap_err();
    assert_eq!(err.keys(), ["author"]);
}

#[test]
fn messages_show_normalized_keys() {
    let err = Validator::new(map(json!({})))
        .require([":author"])
        .unwrap_err();
    assert_eq!(err.keys(), ["author"]);
}

// ============================================================================
// CHAIN SEMANTICS
// ============================================================================

#[test]
fn only_is_positional_in_the_chain() {
    // only() first: nothing declared yet, so every present key is extra.
    let err = Validator::new(map(json!({"a": 1})))
        .only()
        .unwrap_err();
    assert_eq!(err.keys(), ["a"]);

    // The same map passes once the declaration comes first.
    assert!(
        Validator::new(map(json!({"a": 1})))
            .permit(["a"])
            .only()
            .is_ok()
    );
}

#[test]
fn first_violation_wins() {
    // Both the required key is missing and the present value is non-integer;
    // the earlier rule in the chain reports.
    let err = Validator::new(map(json!({"age": "ten"})))
        .require(["id"])
        .and_then(|v| v.int(["age"]))
        .unwrap_err();
    assert_eq!(err.code(), "missing_required_keys");
}

#[test]
fn constraint_rules_declare_their_keys_for_only() {
    let result = Validator::new(map(json!({"age": 30, "note": null})))
        .int(["age"])
        .and_then(|v| v.int_or_nil(["note"]))
        .and_then(Validator::only);
    assert!(result.is_ok());
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn custom_kind_and_term_flow_into_errors() {
    let options = ValidatorOptions::new()
        .with_kind(ErrorKind::new("query_rejected"))
        .with_term("argument");
    let err = Validator::with_options(map(json!({})), options)
        .require(["q"])
        .unwrap_err();
    assert_eq!(err.kind().as_str(), "query_rejected");
    assert_eq!(
        err.to_string(),
        "required arguments [\"q\"] missing\n\tin {}"
    );
}

#[test]
fn irregular_plural_can_be_overridden() {
    let options = ValidatorOptions::new().with_term("entry").with_terms("entries");
    let err = Validator::with_options(map(json!({})), options)
        .require(["a"])
        .unwrap_err();
    assert!(err.to_string().starts_with("required entries"));
}

// ============================================================================
// RECIPES
// ============================================================================

/// A named validation policy, the combinator replacement for a subclassed
/// validator.
fn comment_body() -> impl Rule {
    require(["author", "body"])
        .then(permit(["tags"]))
        .then(int_or_nil(["score"]))
        .then(only())
}

#[test]
fn named_recipe_accepts_conforming_maps() {
    let data = map(json!({"author": "me", "body": "x", "tags": [], "score": null}));
    assert!(Validator::new(data).apply(comment_body()).is_ok());
}

#[test]
fn named_recipe_rejects_in_declaration_order() {
    let err = Validator::new(map(json!({"author": "me", "body": "x", "score": 0.5})))
        .apply(comment_body())
        .unwrap_err();
    assert_eq!(err.code(), "type_mismatch");

    let err = Validator::new(map(json!({"body": "x"})))
        .apply(comment_body())
        .unwrap_err();
    assert_eq!(err.keys(), ["author"]);
}

#[test]
fn dynamic_recipe_via_then_all() {
    let rules: Vec<Box<dyn Rule>> = vec![
        Box::new(require(["id"])),
        Box::new(not_nil(["id"])),
        Box::new(only()),
    ];
    let recipe = then_all(rules);
    assert!(
        Validator::new(map(json!({"id": 7})))
            .apply(recipe)
            .is_ok()
    );
}
