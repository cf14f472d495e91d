//! Field-level validators for infrastructure provider plugin schemas.
//!
//! Each validator checks one scalar configuration value (integer range,
//! non-negativity, ratio bound, duration non-negativity, regex match) and
//! reports human-readable errors as data, collected rather than fail-fast.

pub mod duration;
pub mod error;
pub mod validators;

// Re-export the contract types
pub use error::ValidationError;
pub use validators::{FloatValidator, IntValidator, Outcome, StringValidator};
