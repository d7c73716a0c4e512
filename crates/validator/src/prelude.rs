//! Prelude module for convenient imports.
//!
//! Provides a single `use mapcheck_validator::prelude::*;` import that
//! brings in the core traits, the built-in rules, the combinators, and the
//! fluent facade.
//!
//! # Examples
//!
//! ```
//! use mapcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let map = json!({"author": "me"}).as_object().unwrap().clone();
//! Validator::new(map).require(["author"])?.only()?;
//! # Ok::<(), mapcheck_validator::ValidationError>(())
//! ```

// ============================================================================
// FOUNDATION: Core traits, state, errors
// ============================================================================

pub use crate::foundation::{
    ErrorKind, KeyList, KeyMode, PermittedKeys, Rule, RuleExt, ValidationContext, ValidationError,
    ValidatorOptions, Violation,
};

// ============================================================================
// RULES: All built-in rules and factories
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{Then, ThenAll, then, then_all};

// ============================================================================
// FACADES
// ============================================================================

pub use crate::schema::{Schema, SchemaBuilder};
pub use crate::validator::Validator;
