use chrono::Duration;
use regex::Regex;
use tracing::debug;

use super::{Outcome, StringValidator};
use crate::duration;
use crate::error::ValidationError;

/// Checks that a string field parses as a duration and is not negative.
#[derive(Debug, Clone, Copy)]
pub struct NonNegativeDuration;

impl StringValidator for NonNegativeDuration {
    fn validate(&self, value: &str, field: &str) -> Outcome {
        let mut outcome = Outcome::ok();
        // A failed parse falls back to the zero duration; the negativity
        // check below still runs against it.
        let parsed = match duration::parse(value) {
            Ok(parsed) => parsed,
            Err(_) => {
                outcome.errors.push(ValidationError::InvalidDuration {
                    field: field.to_string(),
                });
                Duration::zero()
            }
        };
        if parsed < Duration::zero() {
            outcome.errors.push(ValidationError::NegativeDuration);
        }
        outcome
    }
}

/// Checks that a string field matches a regex pattern.
///
/// The pattern is compiled on every invocation. A pattern that does not
/// compile is reported against the pattern itself and the match is skipped.
#[derive(Debug, Clone)]
pub struct MatchesPattern {
    pattern: String,
}

impl MatchesPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl StringValidator for MatchesPattern {
    fn validate(&self, value: &str, field: &str) -> Outcome {
        let compiled = match Regex::new(&self.pattern) {
            Ok(compiled) => compiled,
            Err(err) => {
                debug!(pattern = %self.pattern, %err, "pattern failed to compile");
                return Outcome::error(ValidationError::PatternInvalid {
                    pattern: self.pattern.clone(),
                });
            }
        };

        if !compiled.is_match(value) {
            return Outcome::error(ValidationError::PatternMismatch {
                field: field.to_string(),
                pattern: self.pattern.clone(),
                value: value.to_string(),
            });
        }

        Outcome::ok()
    }
}
