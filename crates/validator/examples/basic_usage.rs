//! Basic usage example for mapcheck-validator

use mapcheck_validator::prelude::*;
use serde_json::json;

fn main() {
    let body = json!({"author": "me", "body": "hello", "age": 30})
        .as_object()
        .expect("object literal")
        .clone();

    // A conforming map: every required key present, nothing undeclared.
    let result = Validator::new(body.clone())
        .require(["author", "body"])
        .and_then(|v| v.int(["age"]))
        .and_then(Validator::only);
    match result {
        Ok(_) => println!("✓ body conforms"),
        Err(e) => println!("✗ Error: {e}"),
    }

    // The same map against a stricter declaration: "age" was never declared,
    // so the only() checkpoint rejects it.
    let result = Validator::new(body)
        .require(["author", "body"])
        .and_then(Validator::only);
    match result {
        Ok(_) => println!("✓ body conforms"),
        Err(e) => println!("✗ rejected: {e}"),
    }

    println!("\nmapcheck-validator is working correctly!");
}
