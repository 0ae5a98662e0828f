//! Minute conversion, one converter per grammar shape.
//!
//! Each converter takes the digit groups captured by [`Grammar`] (or, for
//! decimal tokens, the raw token text) and produces a [`MinuteCount`].
//! For tokens that classified cleanly, the only possible failure is a
//! clock-time field exceeding its bound: the grammars guarantee the
//! converters never see anything but ASCII digit runs.

use crate::error::{EvalError, Result, TimeField};
use crate::grammar::Grammar;
use crate::MinuteCount;

/// Parse a captured digit run.
///
/// Cannot fail on malformed input — the grammar only hands over ASCII
/// digits. A run too long for the integer width collapses to zero instead
/// of aborting; the overflow posture here is "whatever the native width
/// gives", not an error class.
fn digits_value(text: &str) -> u64 {
    text.parse().unwrap_or(0)
}

fn pow10(exp: u32) -> u64 {
    10u64.saturating_pow(exp)
}

/// Parse an hour field and scale it to minutes. Hours above 23 are rejected.
fn hour_field_minutes(text: &str) -> Result<MinuteCount> {
    let hours = digits_value(text);
    if hours > TimeField::Hour.bound() {
        return Err(EvalError::OutOfRange {
            field: TimeField::Hour,
            text: text.to_string(),
        });
    }
    Ok(hours * 60)
}

/// Parse a minute field. Minutes above 59 are rejected.
fn minute_field(text: &str) -> Result<MinuteCount> {
    let minutes = digits_value(text);
    if minutes > TimeField::Minute.bound() {
        return Err(EvalError::OutOfRange {
            field: TimeField::Minute,
            text: text.to_string(),
        });
    }
    Ok(minutes)
}

/// Absolute minutes since midnight for one hour/minute field pair.
fn clock_minutes(hour: &str, minute: &str) -> Result<MinuteCount> {
    Ok(hour_field_minutes(hour)? + minute_field(minute)?)
}

/// Convert a range token such as `07:45-11:19`.
///
/// Both halves become absolute minutes since midnight; the result is the
/// absolute difference between them, so swapping the two clock times never
/// changes the outcome. Any field validation failure aborts the whole
/// conversion.
pub fn range_minutes(grammar: &Grammar, token: &str) -> Result<MinuteCount> {
    let [start_hour, start_min, end_hour, end_min] = grammar
        .range_fields(token)
        .ok_or_else(|| EvalError::UnrecognizedFormat {
            token: token.to_string(),
        })?;
    let start = clock_minutes(start_hour, start_min)?;
    let end = clock_minutes(end_hour, end_min)?;
    Ok(start.abs_diff(end))
}

/// Convert an absolute token such as `14:30` into minutes since midnight.
pub fn absolute_minutes(grammar: &Grammar, token: &str) -> Result<MinuteCount> {
    let [hour, minute] = grammar
        .clock_fields(token)
        .ok_or_else(|| EvalError::UnrecognizedFormat {
            token: token.to_string(),
        })?;
    clock_minutes(hour, minute)
}

/// Convert a decimal token such as `2.25` (135 minutes) or bare `3`.
///
/// The integer part counts as whole hours and is deliberately *not*
/// bounded at 23 — `99.5` is accepted where `99:30` is not. A fractional
/// part contributes `frac * 6 / 10^(digits - 1)` minutes using truncating
/// integer arithmetic: `.25` → 25 × 6 / 10 = 15, `.249` → 14.
pub fn decimal_minutes(token: &str) -> Result<MinuteCount> {
    // Decimal hours are unbounded, so the scaling can overflow where the
    // clock-time converters cannot; saturate to keep absurd inputs benign.
    match token.split_once('.') {
        None => Ok(digits_value(token).saturating_mul(60)),
        Some((hours, fraction)) => {
            let whole = digits_value(hours).saturating_mul(60);
            if fraction.is_empty() {
                return Ok(whole);
            }
            let scale = pow10(fraction.len() as u32 - 1);
            Ok(whole.saturating_add(digits_value(fraction).saturating_mul(6) / scale))
        }
    }
}
