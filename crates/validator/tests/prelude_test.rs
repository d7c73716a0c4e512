//! Integration tests for the prelude module.
//!
//! Verifies that `use mapcheck_validator::prelude::*` brings in everything a
//! consumer needs for common validation scenarios.

use mapcheck_validator::prelude::*;
use serde_json::json;

fn map(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    value.as_object().expect("object literal").clone()
}

#[test]
fn fluent_chain_from_prelude_alone() {
    let result = Validator::new(map(json!({"author": "me", "age": 30})))
        .require(["author"])
        .and_then(|v| v.int(["age"]))
        .and_then(Validator::only);
    assert!(result.is_ok());
}

#[test]
fn combinator_recipe_from_prelude_alone() {
    let recipe = require_one_of(["get", "post"]).then(permit(["body"])).then(only());
    assert!(
        Validator::new(map(json!({"post": "/a", "body": {}})))
            .apply(recipe)
            .is_ok()
    );
}

#[test]
fn schema_and_options_from_prelude_alone() {
    let schema = Schema::builder()
        .require("id")
        .options(
            ValidatorOptions::new()
                .with_kind(ErrorKind::new("lookup_rejected"))
                .with_key_mode(KeyMode::Normalized),
        )
        .build();
    let err = schema.validate(&map(json!({}))).unwrap_err();
    assert_eq!(err.kind().as_str(), "lookup_rejected");
    assert!(matches!(
        err.violation(),
        Violation::MissingRequiredKeys { .. }
    ));
}
