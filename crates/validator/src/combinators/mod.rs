//! Rule composition.
//!
//! Rules compose sequentially: the permitted-key set accumulated by earlier
//! rules is visible to later ones. [`Then`] is the building block; named
//! recipes are functions returning a composed rule.
//!
//! # Examples
//!
//! ```
//! use mapcheck_validator::prelude::*;
//!
//! fn get_or_post() -> impl Rule {
//!     require_one_of(["get", "post"]).then(only())
//! }
//! ```

pub mod then;

pub use then::{Then, ThenAll, then, then_all};
