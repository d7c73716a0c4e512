//! Built-in rules.
//!
//! Every rule adds its argument keys to the chain's permitted set before
//! performing its own check, so declaring a constraint on a key also
//! declares the key acceptable to a later [`only`] checkpoint.
//!
//! # Categories
//!
//! - **Presence**: [`require`], [`require_n_of`], [`require_one_of`],
//!   [`not_nil`]
//! - **Permission**: [`permit`], [`only`], [`permit_only`], [`permit_all`]
//! - **Types**: [`int`], [`int_or_nil`]
//!
//! # Examples
//!
//! ```
//! use mapcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let map = json!({"author": "me", "age": 30}).as_object().unwrap().clone();
//! Validator::new(map)
//!     .require(["author"])?
//!     .int(["age"])?
//!     .only()?;
//! # Ok::<(), mapcheck_validator::ValidationError>(())
//! ```

pub mod permission;
pub mod presence;
pub mod typed;

pub use permission::{Only, Permit, PermitAll, only, permit, permit_all, permit_only};
pub use presence::{NotNil, Require, RequireNOf, not_nil, require, require_n_of, require_one_of};
pub use typed::{Int, IntOrNil, int, int_or_nil};
