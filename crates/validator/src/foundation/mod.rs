//! Core validation types and traits.
//!
//! The fundamental building blocks of the rule engine:
//!
//! - **Traits**: [`Rule`], [`RuleExt`]
//! - **State**: [`ValidationContext`], [`PermittedKeys`], [`KeyMode`]
//! - **Errors**: [`ValidationError`], [`Violation`], [`ErrorKind`]
//!
//! # Architecture
//!
//! A validation chain is a sequence of rules evaluated against one shared
//! [`ValidationContext`]. Each rule extends the context's permitted-key set
//! and/or checks a condition against the map; the first violation aborts the
//! chain with a single [`ValidationError`]. There is no error accumulation:
//! callers wanting multiple independent checks run multiple chains.
//!
//! Key comparison is fixed once per context by [`KeyMode`] and applied
//! uniformly to map keys and rule arguments, so a map key `":author"` and a
//! rule argument `"author"` match under the default normalized mode.

pub mod context;
pub mod error;
pub mod traits;

pub use context::{KeyMode, PermittedKeys, ValidationContext, ValidatorOptions};
pub use error::{ErrorKind, KeyList, ValidationError, Violation};
pub use traits::{Rule, RuleExt};
