//! Validation error taxonomy shared by all field validators.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single blocking violation reported for a configuration field.
///
/// The rendered message is part of the crate's contract: the hosting
/// framework surfaces it to the end user verbatim, so the wording stays
/// stable across releases.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Integer below the configured minimum.
    #[error("\"{field}\" cannot be lower than {min}: {value}")]
    #[diagnostic(code(fieldcheck::below_minimum))]
    BelowMinimum { field: String, min: i64, value: i64 },

    /// Integer above the configured maximum.
    #[error("\"{field}\" cannot be higher than {max}: {value}")]
    #[diagnostic(code(fieldcheck::above_maximum))]
    AboveMaximum { field: String, max: i64, value: i64 },

    /// Integer below zero where only non-negative values make sense.
    #[error("\"{field}\" cannot be lower than 0")]
    #[diagnostic(code(fieldcheck::negative_value))]
    NegativeValue { field: String },

    /// Float outside the inclusive `[0.0, 1.0]` ratio bounds.
    #[error("\"{field}\" has to be between 0.0 and 1.0")]
    #[diagnostic(code(fieldcheck::ratio_out_of_bounds))]
    RatioOutOfBounds { field: String },

    /// String that does not parse as a duration.
    #[error("\"{field}\" is not a valid duration")]
    #[diagnostic(code(fieldcheck::invalid_duration))]
    InvalidDuration { field: String },

    /// Duration parsed to a negative value.
    #[error("duration must not be negative")]
    #[diagnostic(code(fieldcheck::negative_duration))]
    NegativeDuration,

    /// Validator pattern that is not a valid regex. This quotes the pattern
    /// rather than the field: the pattern is schema-authoring input, not
    /// user data.
    #[error("\"{pattern}\" regex does not compile")]
    #[diagnostic(code(fieldcheck::pattern_invalid))]
    PatternInvalid { pattern: String },

    /// String that does not match the validator pattern.
    #[error("\"{field}\" doesn't match the pattern (\"{pattern}\"): \"{value}\"")]
    #[diagnostic(code(fieldcheck::pattern_mismatch))]
    PatternMismatch {
        field: String,
        pattern: String,
        value: String,
    },
}
