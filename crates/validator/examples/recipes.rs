//! Reusable recipes: combinator composition and declarative schemas.

use mapcheck_validator::prelude::*;
use serde_json::json;

/// A named validation policy for a request line: exactly the keys of one of
/// the two allowed methods, nothing else.
fn request_line() -> impl Rule {
    require_one_of(["get", "post"]).then(permit(["body"])).then(only())
}

fn main() {
    let get = json!({"get": "/index"}).as_object().expect("object").clone();
    let post = json!({"post": "/submit", "body": {"k": "v"}})
        .as_object()
        .expect("object")
        .clone();
    let junk = json!({"put": "/nope"}).as_object().expect("object").clone();

    for (label, map) in [("get", get), ("post", post), ("junk", junk)] {
        match Validator::new(map).apply(request_line()) {
            Ok(_) => println!("✓ {label} accepted"),
            Err(e) => println!("✗ {label} rejected: {e}"),
        }
    }

    // The same policy as a declarative schema, compiled once and reused.
    let comment = Schema::builder()
        .require("author")
        .require("body")
        .permit("tags")
        .options(ValidatorOptions::new().with_kind(ErrorKind::new("comment_rejected")))
        .build();

    let ok = json!({"author": "me", "body": "x"}).as_object().expect("object").clone();
    let spam = json!({"author": "me", "body": "x", "spam": 1})
        .as_object()
        .expect("object")
        .clone();

    for (label, map) in [("ok", ok), ("spam", spam)] {
        match comment.validate(&map) {
            Ok(()) => println!("✓ comment {label} accepted"),
            Err(e) => println!("✗ comment {label} rejected ({}): {e}", e.kind()),
        }
    }
}
