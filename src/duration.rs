//! Duration parsing for string-typed schema fields.
//!
//! Follows the host ecosystem's duration grammar: an optional sign, then one
//! or more `<digits>[.<digits>]<unit>` terms (`"1h30m"`, `"2m3.5s"`), with
//! the bare literal `"0"` meaning zero. A term needs digits on at least one
//! side of the dot. Units are `ns`, `us` (also `µs`/`μs`), `ms`, `s`, `m`,
//! and `h`.

use chrono::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDurationError {
    #[error("empty duration string")]
    Empty,

    #[error("missing number before unit")]
    MissingNumber,

    #[error("missing unit in duration")]
    MissingUnit,

    #[error("unknown unit {unit:?} in duration")]
    UnknownUnit { unit: String },

    #[error("duration out of range")]
    OutOfRange,
}

/// Parse a duration string into a signed [`Duration`].
///
/// Fractions are truncated at nanosecond resolution. Totals outside the
/// signed 64-bit nanosecond range are rejected as [`ParseDurationError::OutOfRange`].
pub fn parse(input: &str) -> Result<Duration, ParseDurationError> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(ParseDurationError::Empty);
    }

    let mut total: i128 = 0;
    while !rest.is_empty() {
        let (nanos, remainder) = parse_term(rest)?;
        total += nanos;
        rest = remainder;
    }

    if negative {
        total = -total;
    }
    let nanos = i64::try_from(total).map_err(|_| ParseDurationError::OutOfRange)?;
    Ok(Duration::nanoseconds(nanos))
}

/// Parse one `<digits>[.<digits>]<unit>` term, returning its nanoseconds and
/// the unconsumed remainder.
fn parse_term(s: &str) -> Result<(i128, &str), ParseDurationError> {
    let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (whole, mut rest) = s.split_at(digits_end);

    let mut fraction = "";
    if let Some(after_dot) = rest.strip_prefix('.') {
        let frac_end = after_dot
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after_dot.len());
        (fraction, rest) = after_dot.split_at(frac_end);
    }
    if whole.is_empty() && fraction.is_empty() {
        return Err(ParseDurationError::MissingNumber);
    }

    let unit_end = rest
        .find(|c: char| c.is_ascii_digit() || c == '.')
        .unwrap_or(rest.len());
    let (unit, rest) = rest.split_at(unit_end);
    if unit.is_empty() {
        return Err(ParseDurationError::MissingUnit);
    }
    let scale = unit_scale(unit).ok_or_else(|| ParseDurationError::UnknownUnit {
        unit: unit.to_string(),
    })?;

    let mut nanos: i128 = 0;
    if !whole.is_empty() {
        let whole: i128 = whole.parse().map_err(|_| ParseDurationError::OutOfRange)?;
        nanos = whole
            .checked_mul(scale)
            .ok_or(ParseDurationError::OutOfRange)?;
    }
    if !fraction.is_empty() {
        // Digits past nanosecond resolution cannot contribute.
        let precision = fraction.len().min(9);
        let mut digits: i128 = 0;
        for b in fraction.bytes().take(precision) {
            digits = digits * 10 + i128::from(b - b'0');
        }
        nanos += digits * scale / 10_i128.pow(precision as u32);
    }
    Ok((nanos, rest))
}

fn unit_scale(unit: &str) -> Option<i128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60_000_000_000),
        "h" => Some(3_600_000_000_000),
        _ => None,
    }
}
