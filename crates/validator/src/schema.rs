//! Reusable require/permit declarations.
//!
//! A [`Schema`] is the declarative counterpart of a hand-written chain:
//! required keys, additionally permitted keys (or the open permit-all
//! mode), and the error options, compiled once and applied to any number of
//! maps. Each [`validate`](Schema::validate) call builds a fresh chain, so
//! a schema is immutable and safe to share.
//!
//! # Examples
//!
//! ```
//! use mapcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let comment = Schema::builder()
//!     .require("author")
//!     .require("body")
//!     .permit("tags")
//!     .build();
//!
//! let ok = json!({"author": "me", "body": "x"}).as_object().unwrap().clone();
//! assert!(comment.validate(&ok).is_ok());
//!
//! let extra = json!({"author": "me", "body": "x", "spam": 1})
//!     .as_object().unwrap().clone();
//! assert_eq!(comment.validate(&extra).unwrap_err().keys(), ["spam"]);
//! ```

use serde_json::{Map, Value};

use crate::foundation::{ValidationError, ValidatorOptions};
use crate::validator::Validator;

#[derive(Debug, Clone)]
enum Permits {
    Enumerated(Vec<String>),
    All,
}

/// A compiled require/permit declaration.
///
/// Validation runs `require(required)` and then, unless permit-all was
/// declared, `permit(permitted)` followed by `only()`.
#[derive(Debug, Clone)]
pub struct Schema {
    required: Vec<String>,
    permitted: Permits,
    options: ValidatorOptions,
}

impl Schema {
    /// Starts building a schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Validates `data` against this schema.
    ///
    /// The map is copied into a fresh chain; the caller's map is never
    /// mutated.
    ///
    /// # Errors
    ///
    /// The first violation found: `missing_required_keys`, then
    /// `unexpected_keys` from the closing `only()` checkpoint.
    pub fn validate(&self, data: &Map<String, Value>) -> Result<(), ValidationError> {
        let validator = Validator::with_options(data.clone(), self.options.clone())
            .require(self.required.iter().cloned())?;
        match &self.permitted {
            Permits::All => {}
            Permits::Enumerated(keys) => {
                validator.permit(keys.iter().cloned()).only()?;
            }
        }
        Ok(())
    }

    /// The declared required keys, in declaration order.
    #[must_use]
    pub fn required_keys(&self) -> &[String] {
        &self.required
    }

    /// Whether the open permit-all mode was declared.
    #[must_use]
    pub fn permits_all(&self) -> bool {
        matches!(self.permitted, Permits::All)
    }
}

/// Builder for [`Schema`].
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    required: Vec<String>,
    permitted: Vec<String>,
    permit_all: bool,
    options: ValidatorOptions,
}

impl SchemaBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a required key.
    #[must_use]
    pub fn require(mut self, key: impl Into<String>) -> Self {
        self.required.push(key.into());
        self
    }

    /// Declares an additionally permitted key.
    #[must_use]
    pub fn permit(mut self, key: impl Into<String>) -> Self {
        self.permitted.push(key.into());
        self
    }

    /// Declares the open permit-all mode; any enumerated permits become
    /// irrelevant and the closing `only()` checkpoint is skipped.
    #[must_use]
    pub fn permit_all(mut self) -> Self {
        self.permit_all = true;
        self
    }

    /// Sets the error options used by every validation run.
    #[must_use]
    pub fn options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Finishes the schema.
    #[must_use]
    pub fn build(self) -> Schema {
        let permitted = if self.permit_all {
            Permits::All
        } else {
            Permits::Enumerated(self.permitted)
        };
        Schema {
            required: self.required,
            permitted,
            options: self.options,
        }
    }
}
