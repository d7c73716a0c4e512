//! # mapcheck-validator
//!
//! Key-set validation for flat key/value maps.
//!
//! A caller declares which keys a map must contain, which it may
//! additionally contain, and simple per-key constraints; the engine checks
//! an incoming map against that declaration and surfaces a descriptive
//! error on the first violation.
//!
//! ## Quick Start
//!
//! ```
//! use mapcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let map = json!({"author": "me", "body": "hi", "age": 30})
//!     .as_object().unwrap().clone();
//!
//! Validator::new(map)
//!     .require(["author", "body"])?
//!     .int(["age"])?
//!     .only()?;
//! # Ok::<(), mapcheck_validator::ValidationError>(())
//! ```
//!
//! ## Reusable recipes
//!
//! Compose rules with [`RuleExt::then`](foundation::RuleExt::then) and run
//! them through [`Validator::apply`], or declare a [`Schema`] once and
//! validate many maps against it:
//!
//! ```
//! use mapcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! fn request_line() -> impl Rule {
//!     require_one_of(["get", "post"]).then(only())
//! }
//!
//! let map = json!({"get": "/a"}).as_object().unwrap().clone();
//! assert!(Validator::new(map).apply(request_line()).is_ok());
//! ```
//!
//! ## Errors
//!
//! Every violation carries a structured [`Violation`] (failure mode plus
//! offending keys) and renders with a diagnostic suffix showing the full
//! map. The first failing rule aborts the chain; there is no accumulation.

// ValidationError carries the violation plus a rendered map snapshot.
// Boxing it would add indirection to every rule call for no practical
// benefit, same trade-off the chain API makes throughout.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod rules;
pub mod schema;
pub mod validator;

pub use foundation::{
    ErrorKind, KeyList, KeyMode, PermittedKeys, Rule, RuleExt, ValidationContext, ValidationError,
    ValidatorOptions, Violation,
};
pub use schema::{Schema, SchemaBuilder};
pub use validator::Validator;
