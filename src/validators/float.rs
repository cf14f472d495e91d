use super::{FloatValidator, Outcome};
use crate::error::ValidationError;

/// Checks that a float field is a ratio within `[0.0, 1.0]`, bounds
/// included.
#[derive(Debug, Clone, Copy)]
pub struct Ratio;

impl FloatValidator for Ratio {
    fn validate(&self, value: f64, field: &str) -> Outcome {
        // NaN fails neither comparison and passes through.
        if value < 0.0 || value > 1.0 {
            return Outcome::error(ValidationError::RatioOutOfBounds {
                field: field.to_string(),
            });
        }
        Outcome::ok()
    }
}
