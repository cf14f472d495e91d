//! Field validators and the contract they share with the hosting framework.

mod float;
mod integer;
mod string;


pub use float::Ratio;
pub use integer::{IntegerInRange, NonNegativeInteger};
pub use string::{MatchesPattern, NonNegativeDuration};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Result of checking a single field value: an ordered list of non-blocking
/// warnings and an ordered list of blocking errors.
///
/// Errors are collected, not fail-fast, so a caller can report every
/// violation in a configuration in one pass. None of the bundled validators
/// emits warnings; the field exists because the host contract carries it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub warnings: Vec<String>,
    pub errors: Vec<ValidationError>,
}

impl Outcome {
    /// An outcome with no warnings and no errors.
    pub fn ok() -> Self {
        Self::default()
    }

    /// An outcome carrying a single error.
    pub fn error(error: ValidationError) -> Self {
        Self {
            warnings: Vec::new(),
            errors: vec![error],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validator for integer-typed fields.
///
/// The three capability traits form a closed set; the host picks the one
/// matching a field's declared type when it registers the schema, so a type
/// mismatch is a compile error rather than a runtime check. Implementations
/// hold no state beyond constructor-baked parameters and are safe to invoke
/// concurrently.
pub trait IntValidator: Send + Sync {
    fn validate(&self, value: i64, field: &str) -> Outcome;
}

/// Validator for float-typed fields.
pub trait FloatValidator: Send + Sync {
    fn validate(&self, value: f64, field: &str) -> Outcome;
}

/// Validator for string-typed fields.
pub trait StringValidator: Send + Sync {
    fn validate(&self, value: &str, field: &str) -> Outcome;
}
